//! Domain layer: strong types with validation and invariants (no I/O).

mod keyboard;
mod media;
mod message;
mod request;
mod response;
mod validation;
mod value;

pub use keyboard::{
    ActionType, Button, InputFieldState, Keyboard, RichMedia, TextHAlign, TextSize, TextVAlign,
};
pub use media::{MediaProbe, classify_media, file_name_from_url};
pub use message::{Envelope, Message, MessageBody, MessageType};
pub use request::{EventType, SetWebhook, USER_ONLINE_MAX_IDS, UserOnlineQuery};
pub use response::{
    MessageResponse, OnlineStatus, OnlineStatusResponse, User, UserDetailsResponse, UserOnline,
    WebhookResponse,
};
pub use validation::ValidationError;
pub use value::{
    AuthToken, Color, Contact, KnownStatusCode, Location, MessageToken, PhoneNumber, Sender,
    StatusCode, UserId, WebhookUrl,
};
