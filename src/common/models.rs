use super::{Result, UsageSnafu};

/// A single article delivery: where to fetch it from and where to mail it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub url: url::Url,
    pub kindle_email: String,
    pub send_from: String,
    pub title: Option<String>,
}

/// Only absolute http(s) URLs are forwarded to the service.
pub fn parse_article_url(article: &str) -> Result<url::Url> {
    match url::Url::parse(article.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        Ok(url) => UsageSnafu {
            message: format!("Unsupported URL scheme '{}': {article}", url.scheme()),
        }
        .fail(),
        Err(err) => UsageSnafu {
            message: format!("Invalid URL {article}: {err}"),
        }
        .fail(),
    }
}

impl SendRequest {
    pub fn new(url: url::Url, kindle_email: &str, send_from: &str) -> Self {
        Self {
            url,
            kindle_email: kindle_email.to_string(),
            send_from: send_from.to_string(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.trim().is_empty());
        self
    }
}

pub trait Sender {
    fn send(&self, request: &SendRequest) -> Result<()>;
}
