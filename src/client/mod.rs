//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AuthToken, Contact, EventType, Location, MediaProbe, Message, MessageBody, MessageResponse,
    MessageToken, OnlineStatusResponse, RichMedia, Sender, SetWebhook, StatusCode,
    UserDetailsResponse, UserId, UserOnline, UserOnlineQuery, ValidationError, WebhookResponse,
    WebhookUrl, classify_media,
};
use crate::transport::TransportError;

const DEFAULT_API_BASE: &str = "https://chatapi.viber.com/pa";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug, Clone)]
struct HeadResponse {
    status: u16,
    content_type: Option<String>,
    content_length: Option<String>,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth_token: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn head<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HeadResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth_token: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(AuthToken::HEADER, auth_token)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn head<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HeadResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.head(url).send().await?;
            let header = |name: reqwest::header::HeaderName| {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            };
            Ok(HeadResponse {
                status: response.status().as_u16(),
                content_type: header(reqwest::header::CONTENT_TYPE),
                content_length: header(reqwest::header::CONTENT_LENGTH),
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status_message}")]
/// A response Viber decoded fine but rejected with a nonzero `status`.
pub struct ApiError {
    pub status: StatusCode,
    pub status_message: String,
    /// Token returned alongside the failure, if any.
    pub message_token: Option<MessageToken>,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ViberClient`].
///
/// Only [`ViberError::Api`] carries a platform status; every other variant is a
/// transport-level failure (see [`ViberError::is_transport`]).
pub enum ViberError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// Request payload could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Viber returned a nonzero `status`.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ViberError {
    /// Viber status code for [`ViberError::Api`], `-1` otherwise.
    pub fn status(&self) -> i32 {
        match self {
            Self::Api(err) => err.status.as_i32(),
            _ => -1,
        }
    }

    /// `true` for failures that happened before a status could be read.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Parse(_) | Self::Encode(_)
        )
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Viber status code carried by `err`, or `-1` when it is not an API error.
pub fn error_status(err: &(dyn StdError + 'static)) -> i32 {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return api.status.as_i32();
    }
    if let Some(viber) = err.downcast_ref::<ViberError>() {
        return viber.status();
    }
    -1
}

/// Decode a `send_message` / `post` response body into its message token.
///
/// A nonzero status becomes [`ViberError::Api`] with whatever token the body carried.
pub fn parse_message_response(body: &str) -> Result<MessageToken, ViberError> {
    let parsed = crate::transport::decode_message_json_response(body).map_err(parse_error)?;
    let parsed = check_status(parsed)?;
    Ok(parsed.message_token.unwrap_or_default())
}

/// Responses that follow Viber's `status` / `status_message` convention.
trait StatusEnvelope {
    fn status(&self) -> StatusCode;
    fn status_message(&self) -> &str;
    fn message_token(&self) -> Option<MessageToken> {
        None
    }
}

impl StatusEnvelope for MessageResponse {
    fn status(&self) -> StatusCode {
        self.status
    }
    fn status_message(&self) -> &str {
        &self.status_message
    }
    fn message_token(&self) -> Option<MessageToken> {
        self.message_token
    }
}

impl StatusEnvelope for UserDetailsResponse {
    fn status(&self) -> StatusCode {
        self.status
    }
    fn status_message(&self) -> &str {
        &self.status_message
    }
    fn message_token(&self) -> Option<MessageToken> {
        self.message_token
    }
}

impl StatusEnvelope for OnlineStatusResponse {
    fn status(&self) -> StatusCode {
        self.status
    }
    fn status_message(&self) -> &str {
        &self.status_message
    }
}

impl StatusEnvelope for WebhookResponse {
    fn status(&self) -> StatusCode {
        self.status
    }
    fn status_message(&self) -> &str {
        &self.status_message
    }
}

fn check_status<T: StatusEnvelope>(parsed: T) -> Result<T, ApiError> {
    let status = parsed.status();
    tracing::debug!(status = status.as_i32(), "decoded Viber response status");
    if status.is_ok() {
        return Ok(parsed);
    }
    Err(ApiError {
        status,
        status_message: parsed.status_message().to_owned(),
        message_token: parsed.message_token(),
    })
}

fn parse_error(err: TransportError) -> ViberError {
    ViberError::Parse(Box::new(err))
}

#[derive(Debug, Clone)]
/// Builder for [`ViberClient`].
///
/// Use this when you need to customize the API base, timeout, user-agent, or a default
/// `min_api_version`.
pub struct ViberClientBuilder {
    auth: AuthToken,
    sender: Sender,
    api_base: String,
    min_api_version: Option<u32>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ViberClientBuilder {
    /// Create a builder with the default API base and no timeout/user-agent override.
    pub fn new(auth: AuthToken, sender: Sender) -> Self {
        Self {
            auth,
            sender,
            api_base: DEFAULT_API_BASE.to_owned(),
            min_api_version: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://chatapi.viber.com/pa`).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_owned();
        self
    }

    /// Stamp `min_api_version` on every message that does not set its own.
    pub fn min_api_version(mut self, version: u32) -> Self {
        self.min_api_version = Some(version);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ViberClient`].
    pub fn build(self) -> Result<ViberClient, ViberError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ViberError::Transport(Box::new(err)))?;

        Ok(ViberClient {
            auth: self.auth,
            sender: self.sender,
            api_base: self.api_base,
            min_api_version: self.min_api_version,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Viber client.
///
/// Configuration is fixed at construction, so clones can send concurrently. Every
/// call is one `POST` to `https://chatapi.viber.com/pa/<endpoint>` with the auth token
/// in the `X-Viber-Auth-Token` header, and every response goes through the same
/// status check: `0` is success, anything else is [`ViberError::Api`].
pub struct ViberClient {
    auth: AuthToken,
    sender: Sender,
    api_base: String,
    min_api_version: Option<u32>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ViberClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViberClient")
            .field("auth", &self.auth)
            .field("sender", &self.sender)
            .field("api_base", &self.api_base)
            .field("min_api_version", &self.min_api_version)
            .finish_non_exhaustive()
    }
}

impl ViberClient {
    /// Create a client using the default API base.
    ///
    /// For more customization, use [`ViberClient::builder`].
    pub fn new(auth: AuthToken, sender: Sender) -> Self {
        Self {
            auth,
            sender,
            api_base: DEFAULT_API_BASE.to_owned(),
            min_api_version: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: AuthToken, sender: Sender) -> ViberClientBuilder {
        ViberClientBuilder::new(auth, sender)
    }

    /// Sender identity stamped on every message this client builds.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    fn message(&self, body: MessageBody) -> Message {
        Message::new(self.sender.clone(), body)
    }

    pub fn new_text_message(&self, text: impl Into<String>) -> Message {
        self.message(MessageBody::Text { text: text.into() })
    }

    pub fn new_url_message(&self, text: impl Into<String>, url: impl Into<String>) -> Message {
        self.message(MessageBody::Url {
            text: text.into(),
            media: url.into(),
        })
    }

    /// An empty `thumbnail` is left out of the payload.
    pub fn new_picture_message(
        &self,
        text: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Message {
        self.message(MessageBody::Picture {
            text: text.into(),
            media: url.into(),
            thumbnail: non_empty(thumbnail.into()),
        })
    }

    pub fn new_video_message(
        &self,
        text: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
        size: u64,
        duration: Option<u32>,
    ) -> Message {
        self.message(MessageBody::Video {
            text: text.into(),
            media: url.into(),
            thumbnail: non_empty(thumbnail.into()),
            size,
            duration,
        })
    }

    /// Build a file message without touching the network.
    ///
    /// The caption is dropped, the size is `0` and the file name is the URL's last path
    /// segment. Use [`ViberClient::classify_file_message`] or
    /// [`ViberClient::new_probed_file_message`] to pick the right kind from the served
    /// content type.
    pub fn new_file_message(
        &self,
        text: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Message {
        self.classify_file_message(text, url, thumbnail, None)
    }

    /// Build a picture, video or file message from a probe result (see [`classify_media`]).
    pub fn classify_file_message(
        &self,
        text: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
        probe: Option<&MediaProbe>,
    ) -> Message {
        self.message(classify_media(
            text,
            url,
            non_empty(thumbnail.into()),
            probe,
        ))
    }

    /// Probe `url` and classify the message accordingly.
    ///
    /// The probe is best effort: any failure falls back to a zero-sized file message.
    pub async fn new_probed_file_message(
        &self,
        text: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Message {
        let url = url.into();
        let probe = match self.probe_media(&url).await {
            Ok(probe) => Some(probe),
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "media probe failed");
                None
            }
        };
        self.classify_file_message(text, url, thumbnail, probe.as_ref())
    }

    pub fn new_rich_media_message(
        &self,
        rich_media: RichMedia,
        alt_text: impl Into<String>,
    ) -> Message {
        self.message(MessageBody::RichMedia {
            rich_media,
            alt_text: non_empty(alt_text.into()),
        })
    }

    pub fn new_contact_message(&self, contact: Contact) -> Message {
        self.message(MessageBody::Contact { contact })
    }

    pub fn new_location_message(&self, location: Location) -> Message {
        self.message(MessageBody::Location { location })
    }

    pub fn new_sticker_message(&self, sticker_id: u64) -> Message {
        self.message(MessageBody::Sticker { sticker_id })
    }

    /// Read `Content-Type` and `Content-Length` of `url` with a `HEAD` request.
    ///
    /// A non-2xx status or a non-numeric length fails the probe.
    pub async fn probe_media(&self, url: &str) -> Result<MediaProbe, ViberError> {
        let response = self.http.head(url).await.map_err(ViberError::Transport)?;
        if !(200..=299).contains(&response.status) {
            return Err(ViberError::HttpStatus {
                status: response.status,
                body: None,
            });
        }
        MediaProbe::from_headers(
            response.content_type.as_deref(),
            response.content_length.as_deref(),
        )
        .map_err(|err| ViberError::Parse(Box::new(err)))
    }

    /// Send `message` to a single user.
    ///
    /// Sets `receiver` to `to` (clearing any `from`) and posts to `send_message`.
    ///
    /// Errors:
    /// - [`ViberError::Api`] when Viber returns a nonzero status (the token, if any, is kept),
    /// - [`ViberError::HttpStatus`], [`ViberError::Transport`] or [`ViberError::Parse`]
    ///   when no status could be read.
    pub async fn send_message(
        &self,
        to: &UserId,
        mut message: Message,
    ) -> Result<MessageToken, ViberError> {
        message.set_receiver(to.clone());
        self.dispatch("send_message", message).await
    }

    /// Post `message` to the public account's chat, authored by `from`.
    ///
    /// Sets `from` (clearing any `receiver`) and posts to `post`.
    pub async fn send_public_message(
        &self,
        from: &UserId,
        mut message: Message,
    ) -> Result<MessageToken, ViberError> {
        message.set_from(from.clone());
        self.dispatch("post", message).await
    }

    pub async fn send_text_message(
        &self,
        receiver: &UserId,
        text: impl Into<String>,
    ) -> Result<MessageToken, ViberError> {
        let message = self.new_text_message(text);
        self.send_message(receiver, message).await
    }

    pub async fn send_url_message(
        &self,
        receiver: &UserId,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<MessageToken, ViberError> {
        let message = self.new_url_message(text, url);
        self.send_message(receiver, message).await
    }

    pub async fn send_picture_message(
        &self,
        receiver: &UserId,
        text: impl Into<String>,
        url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Result<MessageToken, ViberError> {
        let message = self.new_picture_message(text, url, thumbnail);
        self.send_message(receiver, message).await
    }

    /// Fetch a user's profile (`get_user_details`).
    pub async fn user_details(&self, id: &UserId) -> Result<UserDetailsResponse, ViberError> {
        let body = crate::transport::encode_user_details_request(id).map_err(ViberError::Encode)?;
        self.call(
            "get_user_details",
            body,
            crate::transport::decode_user_details_json_response,
        )
        .await
    }

    /// Fetch online status for up to 100 users (`get_online`).
    pub async fn user_online(&self, ids: Vec<UserId>) -> Result<Vec<UserOnline>, ViberError> {
        let query = UserOnlineQuery::new(ids)?;
        let body =
            crate::transport::encode_user_online_request(&query).map_err(ViberError::Encode)?;
        let response = self
            .call(
                "get_online",
                body,
                crate::transport::decode_user_online_json_response,
            )
            .await?;
        Ok(response.users)
    }

    /// Register `url` as the webhook (`set_webhook`).
    ///
    /// `event_types: None` subscribes to every callback; `Some(&[])` to the mandatory
    /// ones only.
    pub async fn set_webhook(
        &self,
        url: &WebhookUrl,
        event_types: Option<&[EventType]>,
    ) -> Result<WebhookResponse, ViberError> {
        let request = SetWebhook::new(url.clone(), event_types.map(<[EventType]>::to_vec));
        self.webhook(&request).await
    }

    /// Remove the webhook by registering an empty URL.
    pub async fn remove_webhook(&self) -> Result<WebhookResponse, ViberError> {
        self.webhook(&SetWebhook::remove()).await
    }

    async fn webhook(&self, request: &SetWebhook) -> Result<WebhookResponse, ViberError> {
        let body =
            crate::transport::encode_set_webhook_request(request).map_err(ViberError::Encode)?;
        self.call(
            "set_webhook",
            body,
            crate::transport::decode_webhook_json_response,
        )
        .await
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        mut message: Message,
    ) -> Result<MessageToken, ViberError> {
        message.apply_default_min_api_version(self.min_api_version);
        tracing::debug!(
            endpoint,
            kind = message.kind().as_str(),
            "dispatching Viber message"
        );
        let body = crate::transport::encode_message(&message).map_err(ViberError::Encode)?;
        let response = self
            .call(
                endpoint,
                body,
                crate::transport::decode_message_json_response,
            )
            .await?;
        Ok(response.message_token.unwrap_or_default())
    }

    async fn call<T: StatusEnvelope>(
        &self,
        endpoint: &str,
        body: String,
        decode: fn(&str) -> Result<T, TransportError>,
    ) -> Result<T, ViberError> {
        let url = format!("{}/{}", self.api_base, endpoint);
        let response = self
            .http
            .post_json(&url, self.auth.as_str(), body)
            .await
            .map_err(ViberError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(ViberError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = decode(&response.body).map_err(parse_error)?;
        Ok(check_status(parsed)?)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
