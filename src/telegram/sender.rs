use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::SendError;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// JSON body of a `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Status line and raw body of an HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct ApiReply {
    #[serde(default)]
    ok: bool,
}

/// One blocking POST with a JSON body.
pub trait PostJson {
    fn post_json(
        &self,
        url: &str,
        body: &SendMessageRequest<'_>,
    ) -> Result<RawResponse, SendError>;
}

#[cfg(feature = "with-telegram")]
impl PostJson for reqwest::blocking::Client {
    fn post_json(
        &self,
        url: &str,
        body: &SendMessageRequest<'_>,
    ) -> Result<RawResponse, SendError> {
        let response = self
            .post(url)
            .json(body)
            .send()
            .map_err(|err| SendError::transport(err.without_url()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|err| SendError::transport(err.without_url()))?;
        Ok(RawResponse { status, body })
    }
}

pub fn send_message_url(token: &str) -> String {
    format!("{TELEGRAM_API_BASE}/bot{token}/sendMessage")
}

/// Send `text` to `chat_id` with a fresh blocking HTTP client.
#[cfg(feature = "with-telegram")]
pub fn send_message(token: &str, chat_id: &str, text: &str) -> Result<(), SendError> {
    let client = reqwest::blocking::Client::new();
    send_message_with(&client, token, chat_id, text)
}

pub fn send_message_with<T>(
    transport: &T,
    token: &str,
    chat_id: &str,
    text: &str,
) -> Result<(), SendError>
where
    T: PostJson + ?Sized,
{
    let request = SendMessageRequest { chat_id, text };
    debug!(chat_id, chars = text.chars().count(), "posting sendMessage");
    let response = transport.post_json(&send_message_url(token), &request)?;
    evaluate_reply(&response)?;
    info!(chat_id, "message delivered");
    Ok(())
}

/// Accepted only on HTTP 200 with `"ok": true` in the body.
pub fn evaluate_reply(response: &RawResponse) -> Result<(), SendError> {
    let accepted = response.status == 200
        && serde_json::from_str::<ApiReply>(&response.body)
            .map(|reply| reply.ok)
            .unwrap_or(false);
    if accepted {
        Ok(())
    } else {
        Err(SendError::rejected(response.status, response.body.clone()))
    }
}
