pub const APP_NAME: &str = "plugin-l10n";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG_FILE_NAME: &str = "plugin-l10n.toml";
pub const CONFIG_DIR_NAME: &str = ".plugin-l10n";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Hex length of a derived namespace id (SHA-256).
pub const NAMESPACE_ID_LEN: usize = 64;
