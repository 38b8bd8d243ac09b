use crate::domain::request::EventType;
use crate::domain::value::{MessageToken, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to `send_message` and `post`.
pub struct MessageResponse {
    pub status: StatusCode,
    pub status_message: String,
    pub message_token: Option<MessageToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Viber user profile returned by `get_user_details`.
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub primary_device_os: Option<String>,
    pub api_version: Option<u32>,
    pub viber_version: Option<String>,
    pub mcc: Option<u32>,
    pub mnc: Option<u32>,
    pub device_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailsResponse {
    pub status: StatusCode,
    pub status_message: String,
    pub message_token: Option<MessageToken>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnlineStatus {
    Online,
    Offline,
    Undisclosed,
    /// Viber could not determine the status (internal error or unavailable).
    Unavailable,
    Other(i32),
}

impl OnlineStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Online,
            1 => Self::Offline,
            2 => Self::Undisclosed,
            3 => Self::Unavailable,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a `get_online` response.
pub struct UserOnline {
    pub id: String,
    pub online_status: OnlineStatus,
    pub online_status_message: String,
    /// Unix time in milliseconds, only present for offline users.
    pub last_online: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineStatusResponse {
    pub status: StatusCode,
    pub status_message: String,
    pub users: Vec<UserOnline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response to `set_webhook`.
pub struct WebhookResponse {
    pub status: StatusCode,
    pub status_message: String,
    /// Event types Viber will deliver; absent when the webhook was removed.
    pub event_types: Option<Vec<EventType>>,
}
