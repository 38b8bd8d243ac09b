use crate::domain::keyboard::{Keyboard, RichMedia};
use crate::domain::value::{Contact, Location, Sender, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message kind as sent in the `type` field.
pub enum MessageType {
    Text,
    Url,
    Picture,
    Video,
    File,
    RichMedia,
    Contact,
    Location,
    Sticker,
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Picture => "picture",
            Self::Video => "video",
            Self::File => "file",
            Self::RichMedia => "rich_media",
            Self::Contact => "contact",
            Self::Location => "location",
            Self::Sticker => "sticker",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Fields shared by every outgoing message.
///
/// At most one of `receiver` / `from` is set: the send call stamps the one it needs
/// and clears the other.
pub struct Envelope {
    receiver: Option<UserId>,
    from: Option<UserId>,
    min_api_version: Option<u32>,
    sender: Sender,
    tracking_data: Option<String>,
    keyboard: Option<Keyboard>,
}

impl Envelope {
    pub fn new(sender: Sender) -> Self {
        Self {
            receiver: None,
            from: None,
            min_api_version: None,
            sender,
            tracking_data: None,
            keyboard: None,
        }
    }

    pub fn receiver(&self) -> Option<&UserId> {
        self.receiver.as_ref()
    }

    pub fn from(&self) -> Option<&UserId> {
        self.from.as_ref()
    }

    pub fn min_api_version(&self) -> Option<u32> {
        self.min_api_version
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn tracking_data(&self) -> Option<&str> {
        self.tracking_data.as_deref()
    }

    pub fn keyboard(&self) -> Option<&Keyboard> {
        self.keyboard.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Kind-specific payload of a [`Message`]; the variant decides the `type` field.
pub enum MessageBody {
    Text {
        text: String,
    },
    Url {
        text: String,
        media: String,
    },
    Picture {
        text: String,
        media: String,
        thumbnail: Option<String>,
    },
    Video {
        text: String,
        media: String,
        thumbnail: Option<String>,
        size: u64,
        duration: Option<u32>,
    },
    File {
        media: String,
        size: u64,
        file_name: String,
    },
    RichMedia {
        rich_media: RichMedia,
        alt_text: Option<String>,
    },
    Contact {
        contact: Contact,
    },
    Location {
        location: Location,
    },
    Sticker {
        sticker_id: u64,
    },
}

impl MessageBody {
    pub fn kind(&self) -> MessageType {
        match self {
            Self::Text { .. } => MessageType::Text,
            Self::Url { .. } => MessageType::Url,
            Self::Picture { .. } => MessageType::Picture,
            Self::Video { .. } => MessageType::Video,
            Self::File { .. } => MessageType::File,
            Self::RichMedia { .. } => MessageType::RichMedia,
            Self::Contact { .. } => MessageType::Contact,
            Self::Location { .. } => MessageType::Location,
            Self::Sticker { .. } => MessageType::Sticker,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// An outgoing message: shared envelope plus one kind-specific body.
///
/// The body is fixed at construction. After that only the receiver/from stamp and the
/// keyboard can change.
pub struct Message {
    envelope: Envelope,
    body: MessageBody,
}

impl Message {
    pub fn new(sender: Sender, body: MessageBody) -> Self {
        let mut envelope = Envelope::new(sender);
        // Carousels are rejected by the platform below API level 2.
        if matches!(body, MessageBody::RichMedia { .. }) {
            envelope.min_api_version = Some(2);
        }
        Self { envelope, body }
    }

    pub fn kind(&self) -> MessageType {
        self.body.kind()
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn with_tracking_data(mut self, tracking_data: impl Into<String>) -> Self {
        self.envelope.tracking_data = Some(tracking_data.into());
        self
    }

    pub fn with_min_api_version(mut self, version: u32) -> Self {
        self.envelope.min_api_version = Some(version);
        self
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.set_keyboard(keyboard);
        self
    }

    /// Address the message to a single user (`receiver`), clearing any `from`.
    pub fn set_receiver(&mut self, receiver: UserId) {
        self.envelope.receiver = Some(receiver);
        self.envelope.from = None;
    }

    /// Mark the message as a public account post authored by `from`, clearing any `receiver`.
    pub fn set_from(&mut self, from: UserId) {
        self.envelope.from = Some(from);
        self.envelope.receiver = None;
    }

    pub fn set_keyboard(&mut self, keyboard: Keyboard) {
        self.envelope.keyboard = Some(keyboard);
    }

    pub(crate) fn apply_default_min_api_version(&mut self, version: Option<u32>) {
        if self.envelope.min_api_version.is_none() {
            self.envelope.min_api_version = version;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Sender {
        Sender::new("Bot").unwrap()
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn kind_follows_body_variant() {
        let cases = [
            (MessageBody::Text { text: "hi".into() }, "text"),
            (
                MessageBody::Url {
                    text: "hi".into(),
                    media: "https://example.com".into(),
                },
                "url",
            ),
            (
                MessageBody::File {
                    media: "https://example.com/a.pdf".into(),
                    size: 1,
                    file_name: "a.pdf".into(),
                },
                "file",
            ),
            (
                MessageBody::RichMedia {
                    rich_media: RichMedia::new(6, 7),
                    alt_text: None,
                },
                "rich_media",
            ),
            (MessageBody::Sticker { sticker_id: 46105 }, "sticker"),
        ];
        for (body, expected) in cases {
            let message = Message::new(sender(), body);
            assert_eq!(message.kind().as_str(), expected);
        }
    }

    #[test]
    fn receiver_and_from_are_mutually_exclusive() {
        let mut message = Message::new(sender(), MessageBody::Text { text: "hi".into() });

        message.set_from(user("pa-admin"));
        message.set_receiver(user("user-1"));
        assert_eq!(message.envelope().receiver(), Some(&user("user-1")));
        assert_eq!(message.envelope().from(), None);

        message.set_from(user("pa-admin"));
        assert_eq!(message.envelope().from(), Some(&user("pa-admin")));
        assert_eq!(message.envelope().receiver(), None);
    }

    #[test]
    fn rich_media_defaults_to_api_level_two() {
        let message = Message::new(
            sender(),
            MessageBody::RichMedia {
                rich_media: RichMedia::new(6, 7),
                alt_text: None,
            },
        );
        assert_eq!(message.envelope().min_api_version(), Some(2));

        let mut text = Message::new(sender(), MessageBody::Text { text: "hi".into() });
        text.apply_default_min_api_version(Some(3));
        assert_eq!(text.envelope().min_api_version(), Some(3));

        let mut pinned = text.with_min_api_version(7);
        pinned.apply_default_min_api_version(Some(3));
        assert_eq!(pinned.envelope().min_api_version(), Some(7));
    }

    #[test]
    fn keyboard_and_tracking_data_attach_to_envelope() {
        let message = Message::new(sender(), MessageBody::Text { text: "hi".into() })
            .with_tracking_data("t-1")
            .with_keyboard(Keyboard::new(None, true));
        assert_eq!(message.envelope().tracking_data(), Some("t-1"));
        assert!(message.envelope().keyboard().is_some());
    }
}
