//! Forward the content of a text file to a Telegram chat through the Bot API.

mod error;
mod sender;
mod text;

pub use error::SendError;
#[cfg(feature = "with-telegram")]
pub use sender::send_message;
pub use sender::{
    PostJson, RawResponse, SendMessageRequest, TELEGRAM_API_BASE, evaluate_reply,
    send_message_url, send_message_with,
};
pub use text::{TELEGRAM_MAX_LENGTH, read_text, truncate_text};
