//! Typed Rust client for the Viber public account / bot REST API.
//!
//! The crate has three layers: a domain layer of strong types (messages, keyboards,
//! responses), a transport layer for the JSON wire format, and a small client layer
//! that stamps, posts and decodes every request through one pipeline.
//!
//! ```rust,no_run
//! use viberpa::{AuthToken, Sender, UserId, ViberClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), viberpa::ViberError> {
//!     let client = ViberClient::new(AuthToken::new("...")?, Sender::new("My Bot")?);
//!     let receiver = UserId::new("01234567890A=")?;
//!     let token = client.send_text_message(&receiver, "hello").await?;
//!     println!("accepted as {}", token.value());
//!     Ok(())
//! }
//! ```
//!
//! Platform rejections carry the Viber status code:
//!
//! ```rust,no_run
//! # async fn demo(client: viberpa::ViberClient, receiver: viberpa::UserId) {
//! match client.send_text_message(&receiver, "hi").await {
//!     Ok(_) => {}
//!     Err(err) if viberpa::error_status(&err) == 6 => { /* receiver unsubscribed */ }
//!     Err(err) => eprintln!("send failed: {err}"),
//! }
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiError, ViberClient, ViberClientBuilder, ViberError, error_status, parse_message_response,
};
pub use domain::{
    ActionType, AuthToken, Button, Color, Contact, EventType, InputFieldState, Keyboard,
    KnownStatusCode, Location, MediaProbe, Message, MessageBody, MessageType, MessageToken,
    PhoneNumber, RichMedia, Sender, StatusCode, TextHAlign, TextSize, TextVAlign, UserId,
    ValidationError, WebhookUrl,
};
