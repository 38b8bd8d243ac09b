//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod keyboard;
mod message;
mod users;
mod webhook;

pub use message::{decode_message_json_response, encode_message};
pub use users::{
    decode_user_details_json_response, decode_user_online_json_response,
    encode_user_details_request, encode_user_online_request,
};
pub use webhook::{decode_webhook_json_response, encode_set_webhook_request};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
