use serde::{Deserialize, Serialize};

use crate::domain::{Message, MessageBody, MessageResponse, MessageToken, Sender, StatusCode};
use crate::transport::TransportError;
use crate::transport::keyboard::{KeyboardWire, RichMediaWire};

#[derive(Debug, Serialize)]
struct MessageWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    receiver: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_api_version: Option<u32>,
    sender: SenderWire<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracking_data: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyboard: Option<KeyboardWire<'a>>,
    #[serde(flatten)]
    body: BodyWire<'a>,
}

#[derive(Debug, Serialize)]
struct SenderWire<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<&'a str>,
}

impl<'a> From<&'a Sender> for SenderWire<'a> {
    fn from(sender: &'a Sender) -> Self {
        Self {
            name: sender.name(),
            avatar: sender.avatar(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum BodyWire<'a> {
    Text {
        text: &'a str,
    },
    Url {
        text: &'a str,
        media: &'a str,
    },
    Picture {
        text: &'a str,
        media: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail: Option<&'a str>,
    },
    Video {
        text: &'a str,
        media: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail: Option<&'a str>,
        size: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<u32>,
    },
    File {
        media: &'a str,
        size: u64,
        file_name: &'a str,
    },
    RichMedia {
        rich_media: RichMediaWire<'a>,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt_text: Option<&'a str>,
    },
    Contact {
        contact: ContactWire<'a>,
    },
    Location {
        location: LocationWire,
    },
    Sticker {
        sticker_id: u64,
    },
}

#[derive(Debug, Serialize)]
struct ContactWire<'a> {
    name: &'a str,
    phone_number: &'a str,
}

#[derive(Debug, Serialize)]
struct LocationWire {
    lat: f64,
    lon: f64,
}

impl<'a> From<&'a MessageBody> for BodyWire<'a> {
    fn from(body: &'a MessageBody) -> Self {
        match body {
            MessageBody::Text { text } => Self::Text { text },
            MessageBody::Url { text, media } => Self::Url { text, media },
            MessageBody::Picture {
                text,
                media,
                thumbnail,
            } => Self::Picture {
                text,
                media,
                thumbnail: thumbnail.as_deref(),
            },
            MessageBody::Video {
                text,
                media,
                thumbnail,
                size,
                duration,
            } => Self::Video {
                text,
                media,
                thumbnail: thumbnail.as_deref(),
                size: *size,
                duration: *duration,
            },
            MessageBody::File {
                media,
                size,
                file_name,
            } => Self::File {
                media,
                size: *size,
                file_name,
            },
            MessageBody::RichMedia {
                rich_media,
                alt_text,
            } => Self::RichMedia {
                rich_media: rich_media.into(),
                alt_text: alt_text.as_deref(),
            },
            MessageBody::Contact { contact } => Self::Contact {
                contact: ContactWire {
                    name: contact.name(),
                    phone_number: contact.phone_number().e164(),
                },
            },
            MessageBody::Location { location } => Self::Location {
                location: LocationWire {
                    lat: location.lat(),
                    lon: location.lon(),
                },
            },
            MessageBody::Sticker { sticker_id } => Self::Sticker {
                sticker_id: *sticker_id,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    status: i32,
    #[serde(default)]
    status_message: String,
    #[serde(default)]
    message_token: Option<u64>,
}

pub fn encode_message(message: &Message) -> Result<String, serde_json::Error> {
    let envelope = message.envelope();
    let wire = MessageWire {
        receiver: envelope.receiver().map(|id| id.as_str()),
        from: envelope.from().map(|id| id.as_str()),
        min_api_version: envelope.min_api_version(),
        sender: envelope.sender().into(),
        tracking_data: envelope.tracking_data(),
        keyboard: envelope.keyboard().map(KeyboardWire::from),
        body: message.body().into(),
    };
    serde_json::to_string(&wire)
}

pub fn decode_message_json_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;
    Ok(MessageResponse {
        status: StatusCode::new(parsed.status),
        status_message: parsed.status_message,
        message_token: parsed.message_token.map(MessageToken::new),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::{
        ActionType, Button, Contact, Keyboard, Location, PhoneNumber, RichMedia, UserId,
    };

    use super::*;

    fn sender() -> Sender {
        Sender::new("John McClane")
            .unwrap()
            .with_avatar("http://avatar.example.com")
    }

    fn encode(message: &Message) -> Value {
        serde_json::from_str(&encode_message(message).unwrap()).unwrap()
    }

    #[test]
    fn text_message_matches_documented_payload() {
        let mut message = Message::new(
            sender(),
            MessageBody::Text {
                text: "a message from pa".into(),
            },
        )
        .with_min_api_version(1)
        .with_tracking_data("tracking data");
        message.set_receiver(UserId::new("01234567890A=").unwrap());

        assert_eq!(
            encode(&message),
            json!({
                "receiver": "01234567890A=",
                "min_api_version": 1,
                "sender": {
                    "name": "John McClane",
                    "avatar": "http://avatar.example.com"
                },
                "tracking_data": "tracking data",
                "type": "text",
                "text": "a message from pa"
            })
        );
    }

    #[test]
    fn type_field_matches_kind_for_every_variant() {
        let phone = PhoneNumber::parse(None, "+972511123123").unwrap();
        let bodies = vec![
            MessageBody::Text { text: "t".into() },
            MessageBody::Url {
                text: "t".into(),
                media: "https://example.com".into(),
            },
            MessageBody::Picture {
                text: "t".into(),
                media: "https://example.com/a.jpg".into(),
                thumbnail: None,
            },
            MessageBody::Video {
                text: "".into(),
                media: "https://example.com/a.mp4".into(),
                thumbnail: None,
                size: 10,
                duration: Some(5),
            },
            MessageBody::File {
                media: "https://example.com/a.pdf".into(),
                size: 10,
                file_name: "a.pdf".into(),
            },
            MessageBody::RichMedia {
                rich_media: RichMedia::new(6, 7),
                alt_text: Some("carousel".into()),
            },
            MessageBody::Contact {
                contact: Contact::new("Itsik", phone).unwrap(),
            },
            MessageBody::Location {
                location: Location::new(37.5, -122.25).unwrap(),
            },
            MessageBody::Sticker { sticker_id: 46105 },
        ];

        for body in bodies {
            let message = Message::new(sender(), body);
            let value = encode(&message);
            assert_eq!(value["type"], json!(message.kind().as_str()));
        }
    }

    #[test]
    fn media_variants_carry_their_fields() {
        let video = Message::new(
            sender(),
            MessageBody::Video {
                text: "clip".into(),
                media: "https://example.com/a.mp4".into(),
                thumbnail: Some("https://example.com/t.jpg".into()),
                size: 20000,
                duration: None,
            },
        );
        let value = encode(&video);
        assert_eq!(value["media"], json!("https://example.com/a.mp4"));
        assert_eq!(value["thumbnail"], json!("https://example.com/t.jpg"));
        assert_eq!(value["size"], json!(20000));
        assert!(value.get("duration").is_none());

        let file = Message::new(
            sender(),
            MessageBody::File {
                media: "https://example.com/a.pdf".into(),
                size: 4096,
                file_name: "a.pdf".into(),
            },
        );
        let value = encode(&file);
        assert_eq!(value["file_name"], json!("a.pdf"));
        assert!(value.get("text").is_none());
    }

    #[test]
    fn contact_location_and_rich_media_payloads() {
        let phone = PhoneNumber::parse(None, "+972 511 123 123").unwrap();
        let contact = Message::new(
            sender(),
            MessageBody::Contact {
                contact: Contact::new("Itsik", phone).unwrap(),
            },
        );
        assert_eq!(
            encode(&contact)["contact"],
            json!({"name": "Itsik", "phone_number": "+972511123123"})
        );

        let location = Message::new(
            sender(),
            MessageBody::Location {
                location: Location::new(37.5, -122.25).unwrap(),
            },
        );
        assert_eq!(
            encode(&location)["location"],
            json!({"lat": 37.5, "lon": -122.25})
        );

        let rich = Message::new(
            sender(),
            MessageBody::RichMedia {
                rich_media: RichMedia::new(6, 7),
                alt_text: None,
            },
        );
        let value = encode(&rich);
        assert_eq!(value["min_api_version"], json!(2));
        assert_eq!(value["rich_media"]["Type"], json!("rich_media"));
    }

    #[test]
    fn public_post_uses_from_and_keyboard() {
        let mut keyboard = Keyboard::new(None, false);
        keyboard.add_buttons([Button::new(6, 1, ActionType::Reply, "ok")]);
        let mut message =
            Message::new(sender(), MessageBody::Text { text: "hi".into() }).with_keyboard(keyboard);
        message.set_from(UserId::new("admin-id").unwrap());

        let value = encode(&message);
        assert_eq!(value["from"], json!("admin-id"));
        assert!(value.get("receiver").is_none());
        assert_eq!(value["keyboard"]["Type"], json!("keyboard"));
        assert_eq!(value["keyboard"]["Buttons"][0]["ActionBody"], json!("ok"));
    }

    #[test]
    fn decode_success_and_error_responses() {
        let ok = decode_message_json_response(
            r#"{"status":0,"status_message":"ok","message_token":5098034272017990000}"#,
        )
        .unwrap();
        assert!(ok.status.is_ok());
        assert_eq!(ok.message_token, Some(MessageToken::new(5098034272017990000)));

        let err =
            decode_message_json_response(r#"{"status":5,"status_message":"Invalid receiver"}"#)
                .unwrap();
        assert_eq!(err.status, StatusCode::new(5));
        assert_eq!(err.status_message, "Invalid receiver");
        assert_eq!(err.message_token, None);

        assert!(decode_message_json_response("{ not json }").is_err());
    }
}
