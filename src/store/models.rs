use super::Config;

pub(super) const SECTION: &str = "url2kindle";

#[derive(serde::Deserialize)]
pub(super) struct ConfigFile {
    #[serde(default)]
    pub url2kindle: Section,
}

#[derive(Default, serde::Deserialize)]
pub(super) struct Section {
    #[serde(alias = "email")]
    pub kindle_email: Option<String>,
    #[serde(alias = "from")]
    pub send_from: Option<String>,
}

impl Config {
    pub(super) fn to_ini(&self) -> String {
        format!(
            "[{SECTION}]\nkindle_email = {}\nsend_from = {}\n",
            self.kindle_email, self.send_from
        )
    }
}
