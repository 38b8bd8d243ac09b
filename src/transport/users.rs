use serde::{Deserialize, Serialize};

use crate::domain::{
    MessageToken, OnlineStatus, OnlineStatusResponse, StatusCode, User, UserDetailsResponse,
    UserId, UserOnline, UserOnlineQuery,
};
use crate::transport::TransportError;

#[derive(Debug, Serialize)]
struct UserDetailsRequest<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct UserOnlineRequest<'a> {
    ids: Vec<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserDetailsJsonResponse {
    status: i32,
    #[serde(default)]
    status_message: String,
    #[serde(default)]
    message_token: Option<u64>,
    #[serde(default)]
    user: Option<UserJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserJson {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    primary_device_os: Option<String>,
    #[serde(default)]
    api_version: Option<u32>,
    #[serde(default)]
    viber_version: Option<String>,
    #[serde(default)]
    mcc: Option<u32>,
    #[serde(default)]
    mnc: Option<u32>,
    #[serde(default)]
    device_type: Option<String>,
}

impl From<UserJson> for User {
    fn from(value: UserJson) -> Self {
        Self {
            id: value.id,
            name: value.name,
            avatar: value.avatar,
            country: value.country,
            language: value.language,
            primary_device_os: value.primary_device_os,
            api_version: value.api_version,
            viber_version: value.viber_version,
            mcc: value.mcc,
            mnc: value.mnc,
            device_type: value.device_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct OnlineJsonResponse {
    status: i32,
    #[serde(default)]
    status_message: String,
    #[serde(default)]
    users: Vec<UserOnlineJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct UserOnlineJson {
    id: String,
    online_status: i32,
    #[serde(default)]
    online_status_message: String,
    #[serde(default)]
    last_online: Option<i64>,
}

pub fn encode_user_details_request(id: &UserId) -> Result<String, serde_json::Error> {
    serde_json::to_string(&UserDetailsRequest { id: id.as_str() })
}

pub fn encode_user_online_request(query: &UserOnlineQuery) -> Result<String, serde_json::Error> {
    serde_json::to_string(&UserOnlineRequest {
        ids: query.ids().iter().map(UserId::as_str).collect(),
    })
}

pub fn decode_user_details_json_response(
    json: &str,
) -> Result<UserDetailsResponse, TransportError> {
    let parsed: UserDetailsJsonResponse = serde_json::from_str(json)?;
    Ok(UserDetailsResponse {
        status: StatusCode::new(parsed.status),
        status_message: parsed.status_message,
        message_token: parsed.message_token.map(MessageToken::new),
        user: parsed.user.map(User::from),
    })
}

pub fn decode_user_online_json_response(
    json: &str,
) -> Result<OnlineStatusResponse, TransportError> {
    let parsed: OnlineJsonResponse = serde_json::from_str(json)?;
    Ok(OnlineStatusResponse {
        status: StatusCode::new(parsed.status),
        status_message: parsed.status_message,
        users: parsed
            .users
            .into_iter()
            .map(|user| UserOnline {
                id: user.id,
                online_status: OnlineStatus::from_code(user.online_status),
                online_status_message: user.online_status_message,
                last_online: user.last_online,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_requests_use_id_and_ids_keys() {
        let id = UserId::new("01234567890A=").unwrap();
        let body = encode_user_details_request(&id).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&body).unwrap(),
            json!({"id": "01234567890A="})
        );

        let query = UserOnlineQuery::new(vec![
            UserId::new("a").unwrap(),
            UserId::new("b").unwrap(),
        ])
        .unwrap();
        let body = encode_user_online_request(&query).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&body).unwrap(),
            json!({"ids": ["a", "b"]})
        );
    }

    #[test]
    fn decode_user_details_maps_profile() {
        let json = r#"
        {
          "status": 0,
          "status_message": "ok",
          "message_token": 4912661846655238145,
          "user": {
            "id": "01234567890A=",
            "name": "John McClane",
            "avatar": "http://avatar.example.com",
            "country": "UK",
            "language": "en",
            "primary_device_os": "android 7.1",
            "api_version": 1,
            "viber_version": "6.5.0",
            "mcc": 1,
            "mnc": 1,
            "device_type": "iPhone9,4"
          }
        }
        "#;
        let resp = decode_user_details_json_response(json).unwrap();
        assert!(resp.status.is_ok());
        assert_eq!(resp.message_token, Some(MessageToken::new(4912661846655238145)));

        let user = resp.user.unwrap();
        assert_eq!(user.id, "01234567890A=");
        assert_eq!(user.country.as_deref(), Some("UK"));
        assert_eq!(user.api_version, Some(1));
        assert_eq!(user.mcc, Some(1));
        assert_eq!(user.device_type.as_deref(), Some("iPhone9,4"));
    }

    #[test]
    fn decode_user_online_maps_statuses() {
        let json = r#"
        {
          "status": 0,
          "status_message": "ok",
          "users": [
            {
              "id": "01234567890=",
              "online_status": 0,
              "online_status_message": "online"
            },
            {
              "id": "01234567891=",
              "online_status": 1,
              "online_status_message": "offline",
              "last_online": 1457764197627
            },
            {
              "id": "01234567893=",
              "online_status": 9,
              "online_status_message": "unknown"
            }
          ]
        }
        "#;
        let resp = decode_user_online_json_response(json).unwrap();
        assert_eq!(resp.users.len(), 3);
        assert_eq!(resp.users[0].online_status, OnlineStatus::Online);
        assert_eq!(resp.users[0].last_online, None);
        assert_eq!(resp.users[1].online_status, OnlineStatus::Offline);
        assert_eq!(resp.users[1].last_online, Some(1457764197627));
        assert_eq!(resp.users[2].online_status, OnlineStatus::Other(9));
    }

    #[test]
    fn decode_error_response_without_payload() {
        let resp =
            decode_user_online_json_response(r#"{"status":2,"status_message":"invalidAuthToken"}"#)
                .unwrap();
        assert_eq!(resp.status, StatusCode::new(2));
        assert!(resp.users.is_empty());
    }
}
