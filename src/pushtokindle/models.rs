pub(super) const FAILED_HEADER: &str = "X-PushToKindle-Failed";
pub(super) const INVALID_URL_BODY: &str = "Invalid URL supplied";

/// Reason codes reported through the `X-PushToKindle-Failed` header.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Failure {
    InvalidEmail,
    NotFound,
    Other(String),
}

impl Failure {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Failure::InvalidEmail,
            "2" => Failure::NotFound,
            other => Failure::Other(other.to_string()),
        }
    }

    pub fn message(&self, body: &str) -> String {
        match self {
            Failure::InvalidEmail => "Invalid email address".to_string(),
            Failure::NotFound => "URL not found".to_string(),
            Failure::Other(code) => format!("{FAILED_HEADER}: {code}\n{}", body.trim()),
        }
    }
}
