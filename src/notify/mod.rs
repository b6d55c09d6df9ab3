use reqwest::{blocking::Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SENDER: &str = "remainders@carlinux.me";
pub const SUBJECT: &str = "Daily reminder :)";

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not reach the email provider")]
    Transport(#[from] reqwest::Error),
    #[error("email provider rejected the message ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Identifier the provider assigns to an accepted message.
pub type MessageId = String;

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl Email {
    pub fn reminder(recipient: &str, html: String) -> Self {
        Self {
            from: SENDER.to_string(),
            to: vec![recipient.to_string()],
            subject: SUBJECT.to_string(),
            html,
        }
    }
}

pub trait Notifier {
    fn send(&self, email: &Email) -> Result<MessageId>;
}

#[derive(Deserialize)]
struct Sent {
    id: MessageId,
}

#[derive(Deserialize)]
struct Rejection {
    message: String,
}

/// Sends through the Resend HTTP API. One request per message, no retries.
pub struct ResendClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            http: Client::builder().build()?,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl Notifier for ResendClient {
    fn send(&self, email: &Email) -> Result<MessageId> {
        let response = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(email)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<Rejection>(&body)
                .map(|rejection| rejection.message)
                .unwrap_or(body);
            return Err(Error::Rejected { status, message });
        }

        let sent: Sent = response.json()?;
        tracing::info!("email {} accepted for {}", sent.id, email.to.join(", "));
        Ok(sent.id)
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;

    #[test]
    fn reminder_email_fields() {
        let email = Email::reminder("me@example.com", "<p>hi</p>".to_string());

        assert_eq!(email.from, "remainders@carlinux.me");
        assert_eq!(email.to, vec!["me@example.com".to_string()]);
        assert_eq!(email.subject, "Daily reminder :)");
        assert_eq!(email.html, "<p>hi</p>");
    }

    #[test]
    fn sends_and_returns_message_id() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "from": "remainders@carlinux.me",
                "to": ["me@example.com"],
                "subject": "Daily reminder :)",
                "html": "<p>hi</p>",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#)
            .create();

        let client = ResendClient::new(&server.url(), "re_test").unwrap();
        let id = client
            .send(&Email::reminder("me@example.com", "<p>hi</p>".to_string()))
            .unwrap();

        assert_eq!(id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
        mock.assert();
    }

    #[test]
    fn trailing_slash_in_api_url() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/emails")
            .with_status(200)
            .with_body(r#"{"id":"abc"}"#)
            .create();

        let client = ResendClient::new(&format!("{}/", server.url()), "re_test").unwrap();
        let id = client
            .send(&Email::reminder("me@example.com", String::new()))
            .unwrap();

        assert_eq!(id, "abc");
        mock.assert();
    }

    #[test]
    fn invalid_credential_is_rejected() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/emails")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"statusCode":401,"message":"API key is invalid","name":"validation_error"}"#)
            .expect(1)
            .create();

        let client = ResendClient::new(&server.url(), "re_wrong").unwrap();
        let err = client
            .send(&Email::reminder("me@example.com", String::new()))
            .unwrap_err();

        match err {
            Error::Rejected { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message, "API key is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        mock.assert();
    }

    #[test]
    fn non_json_rejection_keeps_body() {
        let mut server = Server::new();
        server
            .mock("POST", "/emails")
            .with_status(502)
            .with_body("bad gateway")
            .create();

        let client = ResendClient::new(&server.url(), "re_test").unwrap();
        let err = client
            .send(&Email::reminder("me@example.com", String::new()))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "email provider rejected the message (502 Bad Gateway): bad gateway"
        );
    }

    #[test]
    fn unreachable_provider() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ResendClient::new(&format!("http://127.0.0.1:{port}"), "re_test").unwrap();

        let err = client
            .send(&Email::reminder("me@example.com", String::new()))
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }
}
