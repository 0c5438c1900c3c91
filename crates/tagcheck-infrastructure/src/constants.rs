//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `tagcheck_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tagcheck.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tagcheck";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TAGCHECK";

/// Separator for nested keys in environment variables (`TAGCHECK_HARNESS__RULES_DIR`)
pub const CONFIG_ENV_NESTING: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level; the report itself is not logging
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "TAGCHECK_LOG";

// ============================================================================
// OUTPUT CONSTANTS
// ============================================================================

/// Presence of this variable disables coloured output
pub const NO_COLOR_ENV: &str = "NO_COLOR";

// ============================================================================
// ENGINE CONSTANTS
// ============================================================================

/// Name reported by the yara-x adapter
pub const YARA_ENGINE_NAME: &str = "yara-x";
