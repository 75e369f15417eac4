pub const SERVICE_URL: &str = "https://pushtokindle.fivefilters.org/send.php";

#[derive(Clone)]
pub struct Config {
    pub service_url: url::Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: url::Url::parse(SERVICE_URL).expect("SERVICE_URL should be a valid URL"),
        }
    }
}
