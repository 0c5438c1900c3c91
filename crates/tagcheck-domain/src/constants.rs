//! Domain layer constants
//!
//! Contains the external-variable dictionary and the on-disk conventions
//! shared by every layer. Infrastructure-specific constants remain in
//! `tagcheck_infrastructure::constants`.

// ============================================================================
// RULE TREE CONSTANTS
// ============================================================================

/// Default root directory searched for rule files
pub const DEFAULT_RULES_DIR: &str = "tagcheck";

/// Default glob used to discover rule files below the root
pub const DEFAULT_RULE_PATTERN: &str = "**/*.rules";

/// Directory, next to a rule file, holding its fixture
pub const DEFAULT_TESTS_DIR: &str = "tests";

/// Extension of fixture documents
pub const DEFAULT_FIXTURE_EXTENSION: &str = "json";

/// Token used to collapse list-valued fixture data into one string
pub const DEFAULT_LIST_SEPARATOR: &str = " | ";

// ============================================================================
// EXTERNAL VARIABLE CONSTANTS
// ============================================================================

/// Prefix prepended to every external variable identifier
pub const DEFAULT_EXTERNAL_PREFIX: &str = "al";

/// Fields exposed as integers; everything else is a string
pub const DEFAULT_INTEGER_FIELDS: &[&str] = &["file_size"];

/// Submission-level fields declared next to the tagging dictionary
pub const SUBMISSION_FIELDS: &[&str] = &[
    "submitter",
    "mime",
    "file_type",
    "tag",
    "file_name",
    "file_size",
];

/// Flattened tagging dictionary, one dotted path per taggable field
pub const TAGGING_FIELDS: &[&str] = &[
    "attribution.actor",
    "attribution.campaign",
    "attribution.category",
    "attribution.exploit",
    "attribution.implant",
    "attribution.family",
    "attribution.network",
    "av.heuristic",
    "av.virus_name",
    "cert.extended_key_usage",
    "cert.issuer",
    "cert.key_usage",
    "cert.owner",
    "cert.serial_no",
    "cert.signature_algo",
    "cert.subject",
    "cert.subject_alt_name",
    "cert.thumbprint",
    "cert.valid.start",
    "cert.valid.end",
    "cert.version",
    "code.sha256",
    "dynamic.autorun_location",
    "dynamic.dos_device",
    "dynamic.mutex",
    "dynamic.registry_key",
    "dynamic.process.command_line",
    "dynamic.process.file_name",
    "dynamic.process.shortcut",
    "dynamic.signature.category",
    "dynamic.signature.family",
    "dynamic.signature.name",
    "dynamic.ssdeep.cls_ids",
    "dynamic.ssdeep.dynamic_classes",
    "dynamic.ssdeep.regkeys",
    "dynamic.window.cls_ids",
    "dynamic.window.dynamic_classes",
    "dynamic.window.regkeys",
    "dynamic.operating_system.platform",
    "dynamic.operating_system.version",
    "dynamic.operating_system.processor",
    "dynamic.processtree_id",
    "info.phone_number",
    "info.password",
    "file.ancestry",
    "file.behavior",
    "file.compiler",
    "file.config",
    "file.date.creation",
    "file.date.last_modified",
    "file.elf.libraries",
    "file.elf.interpreter",
    "file.elf.sections.name",
    "file.elf.segments.type",
    "file.elf.notes.name",
    "file.elf.notes.type",
    "file.elf.notes.type_core",
    "file.lib",
    "file.lsh",
    "file.name.anomaly",
    "file.name.extracted",
    "file.path",
    "file.rule.yara",
    "file.string.api",
    "file.string.blacklisted",
    "file.string.decoded",
    "file.string.extracted",
    "file.apk.activity",
    "file.apk.app.label",
    "file.apk.app.version",
    "file.apk.feature",
    "file.apk.locale",
    "file.apk.permission",
    "file.apk.pkg_name",
    "file.apk.provides_component",
    "file.apk.sdk.min",
    "file.apk.sdk.target",
    "file.apk.used_library",
    "file.jar.main_class",
    "file.jar.main_package",
    "file.jar.imported_package",
    "file.img.exif_tool.creator_tool",
    "file.img.exif_tool.derived_document_id",
    "file.img.exif_tool.document_id",
    "file.img.exif_tool.instance_id",
    "file.img.exif_tool.toolkit",
    "file.img.mega_pixels",
    "file.img.mode",
    "file.img.size",
    "file.img.sorted_metadata_hash",
    "file.ole.macro.sha256",
    "file.ole.macro.suspicious_string",
    "file.ole.summary.author",
    "file.ole.summary.codepage",
    "file.ole.summary.comment",
    "file.ole.summary.company",
    "file.ole.summary.create_time",
    "file.ole.summary.last_printed",
    "file.ole.summary.last_saved_by",
    "file.ole.summary.last_saved_time",
    "file.ole.summary.manager",
    "file.ole.summary.subject",
    "file.ole.summary.title",
    "file.ole.clsid",
    "file.ole.dde_link",
    "file.ole.fib_timestamp",
    "file.pe.api_vector",
    "file.pe.debug.guid",
    "file.pe.exports.function_name",
    "file.pe.exports.module_name",
    "file.pe.imports.fuzzy",
    "file.pe.imports.md5",
    "file.pe.imports.imphash",
    "file.pe.imports.sorted_fuzzy",
    "file.pe.imports.sorted_sha1",
    "file.pe.imports.gimphash",
    "file.pe.imports.suspicious",
    "file.pe.linker.timestamp",
    "file.pe.oep.bytes",
    "file.pe.oep.hexdump",
    "file.pe.pdb_filename",
    "file.pe.resources.language",
    "file.pe.resources.name",
    "file.pe.rich_header.hash",
    "file.pe.rich_header.info",
    "file.pe.sections.hash",
    "file.pe.sections.name",
    "file.pe.versions.description",
    "file.pe.versions.filename",
    "file.pe.unexpected_sections",
    "file.pdf.date.modified",
    "file.pdf.date.pdfx",
    "file.pdf.date.source_modified",
    "file.pdf.javascript.sha1",
    "file.pdf.stats.sha1",
    "file.plist.installer_url",
    "file.plist.min_os_version",
    "file.plist.requests_open_access",
    "file.plist.build.machine_os",
    "file.plist.cf_bundle.development_region",
    "file.plist.cf_bundle.display_name",
    "file.plist.cf_bundle.executable",
    "file.plist.cf_bundle.identifier",
    "file.plist.cf_bundle.name",
    "file.plist.cf_bundle.pkg_type",
    "file.plist.cf_bundle.signature",
    "file.plist.cf_bundle.url_scheme",
    "file.plist.cf_bundle.version.long",
    "file.plist.cf_bundle.version.short",
    "file.plist.dt.compiler",
    "file.plist.dt.platform.build",
    "file.plist.dt.platform.name",
    "file.plist.dt.platform.version",
    "file.plist.ls.background_only",
    "file.plist.ls.min_system_version",
    "file.plist.ns.apple_script_enabled",
    "file.plist.ns.principal_class",
    "file.plist.ui.background_modes",
    "file.plist.ui.requires_persistent_wifi",
    "file.plist.wk.app_bundle_identifier",
    "file.powershell.cmdlet",
    "file.shortcut.command_line",
    "file.shortcut.icon_location",
    "file.shortcut.machine_id",
    "file.shortcut.tracker_mac",
    "file.swf.header.frame.count",
    "file.swf.header.frame.rate",
    "file.swf.header.frame.size",
    "file.swf.header.version",
    "file.swf.tags_ssdeep",
    "network.attack",
    "network.dynamic.domain",
    "network.dynamic.ip",
    "network.dynamic.unc_path",
    "network.dynamic.uri",
    "network.dynamic.uri_path",
    "network.email.address",
    "network.email.date",
    "network.email.subject",
    "network.email.msg_id",
    "network.mac_address",
    "network.port",
    "network.protocol",
    "network.signature.signature_id",
    "network.signature.message",
    "network.static.domain",
    "network.static.ip",
    "network.static.unc_path",
    "network.static.uri",
    "network.static.uri_path",
    "network.tls.ja3_hash",
    "network.tls.ja3_string",
    "network.tls.ja3s_hash",
    "network.tls.ja3s_string",
    "network.tls.sni",
    "network.user_agent",
    "source",
    "technique.comms_routine",
    "technique.config",
    "technique.crypto",
    "technique.debug",
    "technique.keylogger",
    "technique.macro",
    "technique.masking_algo",
    "technique.obfuscation",
    "technique.packer",
    "technique.persistence",
    "technique.shellcode",
    "technique.string",
    "vector",
];
