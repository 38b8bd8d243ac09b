use crate::domain::validation::ValidationError;
use crate::domain::value::{UserId, WebhookUrl};

/// Maximum number of ids a single `get_online` call accepts.
pub const USER_ONLINE_MAX_IDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Callback kinds a webhook can subscribe to.
pub enum EventType {
    Message,
    Subscribed,
    Unsubscribed,
    Delivered,
    Seen,
    Failed,
    ConversationStarted,
}

impl EventType {
    pub const ALL: [Self; 7] = [
        Self::Message,
        Self::Subscribed,
        Self::Unsubscribed,
        Self::Delivered,
        Self::Seen,
        Self::Failed,
        Self::ConversationStarted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Subscribed => "subscribed",
            Self::Unsubscribed => "unsubscribed",
            Self::Delivered => "delivered",
            Self::Seen => "seen",
            Self::Failed => "failed",
            Self::ConversationStarted => "conversation_started",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `set_webhook` request.
///
/// `event_types: None` lets Viber deliver every callback; an empty list subscribes to
/// the mandatory ones only (`message`, `subscribed`, `unsubscribed`).
pub struct SetWebhook {
    url: Option<WebhookUrl>,
    event_types: Option<Vec<EventType>>,
}

impl SetWebhook {
    pub fn new(url: WebhookUrl, event_types: Option<Vec<EventType>>) -> Self {
        Self {
            url: Some(url),
            event_types,
        }
    }

    /// Request that deregisters the current webhook (empty `url`).
    pub fn remove() -> Self {
        Self {
            url: None,
            event_types: None,
        }
    }

    /// URL to register; `None` encodes as an empty string.
    pub fn url(&self) -> Option<&WebhookUrl> {
        self.url.as_ref()
    }

    pub fn event_types(&self) -> Option<&[EventType]> {
        self.event_types.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `get_online` request.
pub struct UserOnlineQuery {
    ids: Vec<UserId>,
}

impl UserOnlineQuery {
    pub fn new(ids: Vec<UserId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty { field: "ids" });
        }
        if ids.len() > USER_ONLINE_MAX_IDS {
            return Err(ValidationError::TooLong {
                field: "ids",
                max: USER_ONLINE_MAX_IDS,
                actual: ids.len(),
            });
        }
        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[UserId] {
        &self.ids
    }
}
