use snafu::ResultExt;

use crate::common::{RequestSnafu, ResponseSnafu, Result, SendRequest, SendSnafu, Sender};

use super::models::{Failure, FAILED_HEADER, INVALID_URL_BODY};

pub const SERVICE_NAME: &str = "PushToKindle";

// The service refuses requests that don't look like they came from its own
// web form.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Fedora; Linux x86_64; rv:85.0) Gecko/20100101 Firefox/85.0";
const ORIGIN: &str = "https://pushtokindle.fivefilters.org";
const REFERER: &str = "https://www.fivefilters.org/push-to-kindle/";

pub struct PushToKindle {
    agent: ureq::Agent,
    service_url: url::Url,
}

impl PushToKindle {
    fn with_headers(&self, req: ureq::Request) -> ureq::Request {
        req.set("Origin", ORIGIN).set("Referer", REFERER)
    }

    /// A 2xx response can still carry a failure marker, so every response
    /// goes through here.
    fn check_response(&self, response: ureq::Response) -> Result<u16> {
        let status = response.status();
        let code = response.header(FAILED_HEADER).map(str::to_owned);
        let body = response.into_string().context(ResponseSnafu {
            url: self.service_url.as_str(),
        })?;

        let message = match code {
            Some(code) => Failure::from_code(&code).message(&body),
            None if body.trim() == INVALID_URL_BODY => INVALID_URL_BODY.to_string(),
            None if (200..300).contains(&status) => return Ok(status),
            None if body.trim().is_empty() => format!("HTTP status {status}"),
            None => body.trim().to_string(),
        };

        SendSnafu { status, message }.fail()
    }
}

impl Sender for PushToKindle {
    fn send(&self, request: &SendRequest) -> Result<()> {
        let endpoint = self.service_url.as_str();
        tracing::info!(
            service = SERVICE_NAME,
            url = request.url.as_str(),
            kindle_email = request.kindle_email,
            send_from = request.send_from,
            title = request.title.as_deref().unwrap_or_default(),
            "Sending article",
        );

        let result = self
            .with_headers(self.agent.post(endpoint))
            .query("context", "send")
            .query("url", request.url.as_str())
            .send_form(&[
                ("email", request.kindle_email.as_str()),
                ("from", request.send_from.as_str()),
                ("title", request.title.as_deref().unwrap_or_default()),
            ]);

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => {
                return Err(err).context(RequestSnafu {
                    url: endpoint,
                    method: "POST",
                })
            }
        };

        let status = self.check_response(response)?;

        tracing::info!(
            service = SERVICE_NAME,
            url = request.url.as_str(),
            status = status,
            "Article accepted",
        );
        Ok(())
    }
}

impl From<super::Config> for PushToKindle {
    fn from(value: super::Config) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
            service_url: value.service_url,
        }
    }
}
