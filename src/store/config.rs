use std::path::PathBuf;

pub(super) const APP_DIR: &str = "url2kindle";
pub(super) const CONFIG_FILE: &str = "config";

/// Delivery settings persisted between runs. Both addresses are validated
/// before a `Config` is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kindle_email: String,
    pub send_from: String,
}

/// `$XDG_CONFIG_HOME/url2kindle/config` on Linux, the platform equivalent
/// elsewhere.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
