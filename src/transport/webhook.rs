use serde::{Deserialize, Serialize};

use crate::domain::{EventType, SetWebhook, StatusCode, WebhookResponse};
use crate::transport::TransportError;

#[derive(Debug, Serialize)]
struct SetWebhookRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_types: Option<Vec<&'static str>>,
}

#[derive(Debug, Clone, Deserialize)]
struct WebhookJsonResponse {
    status: i32,
    #[serde(default)]
    status_message: String,
    #[serde(default)]
    event_types: Option<Vec<String>>,
}

pub fn encode_set_webhook_request(request: &SetWebhook) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SetWebhookRequest {
        url: request.url().map(|url| url.as_str()).unwrap_or(""),
        event_types: request
            .event_types()
            .map(|events| events.iter().map(|event| event.as_str()).collect()),
    })
}

/// Unknown event names are skipped so newer platform callbacks do not break decoding.
pub fn decode_webhook_json_response(json: &str) -> Result<WebhookResponse, TransportError> {
    let parsed: WebhookJsonResponse = serde_json::from_str(json)?;
    let event_types = parsed.event_types.map(|names| {
        names
            .iter()
            .filter_map(|name| {
                let event = EventType::parse(name);
                if event.is_none() {
                    tracing::debug!(event = %name, "skipping unknown webhook event type");
                }
                event
            })
            .collect()
    });

    Ok(WebhookResponse {
        status: StatusCode::new(parsed.status),
        status_message: parsed.status_message,
        event_types,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::WebhookUrl;

    use super::*;

    fn encode(request: &SetWebhook) -> Value {
        serde_json::from_str(&encode_set_webhook_request(request).unwrap()).unwrap()
    }

    #[test]
    fn encode_set_webhook_with_event_types() {
        let request = SetWebhook::new(
            WebhookUrl::new("https://my.host.com").unwrap(),
            Some(vec![EventType::Delivered, EventType::Seen]),
        );
        assert_eq!(
            encode(&request),
            json!({"url": "https://my.host.com/", "event_types": ["delivered", "seen"]})
        );
    }

    #[test]
    fn empty_event_types_are_sent_and_none_is_omitted() {
        let url = WebhookUrl::new("https://my.host.com/hook").unwrap();
        let mandatory = SetWebhook::new(url.clone(), Some(Vec::new()));
        assert_eq!(encode(&mandatory)["event_types"], json!([]));

        let all = SetWebhook::new(url, None);
        assert!(encode(&all).get("event_types").is_none());
    }

    #[test]
    fn remove_webhook_sends_empty_url_in_same_shape() {
        let remove = encode(&SetWebhook::remove());
        let set = encode(&SetWebhook::new(
            WebhookUrl::new("https://my.host.com/hook").unwrap(),
            None,
        ));

        assert_eq!(remove, json!({"url": ""}));
        let keys = |v: &Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys(&remove), keys(&set));
    }

    #[test]
    fn decode_webhook_response_skips_unknown_events() {
        let json = r#"
        {
          "status": 0,
          "status_message": "ok",
          "event_types": ["delivered", "seen", "client_status", "conversation_started"]
        }
        "#;
        let resp = decode_webhook_json_response(json).unwrap();
        assert!(resp.status.is_ok());
        assert_eq!(
            resp.event_types,
            Some(vec![
                EventType::Delivered,
                EventType::Seen,
                EventType::ConversationStarted
            ])
        );

        let resp = decode_webhook_json_response(r#"{"status":0,"status_message":"ok"}"#).unwrap();
        assert_eq!(resp.event_types, None);
    }
}
