use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Viber bot / public account authentication token.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct AuthToken(String);

impl AuthToken {
    /// HTTP header carrying the token (`X-Viber-Auth-Token`).
    pub const HEADER: &'static str = "X-Viber-Auth-Token";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "auth_token",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Viber user id, as received in callbacks and used as `receiver` / `from`.
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    /// JSON field name used by Viber (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender identity shown to the receiver (`sender`).
///
/// Invariant: the name is non-empty after trimming and at most
/// [`Sender::MAX_NAME_LEN`] characters.
pub struct Sender {
    name: String,
    avatar: Option<String>,
}

impl Sender {
    /// JSON field name used by Viber (`sender`).
    pub const FIELD: &'static str = "sender";
    /// Maximum length of a sender name accepted by Viber.
    pub const MAX_NAME_LEN: usize = 28;

    /// Create a sender without an avatar.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: Self::MAX_NAME_LEN,
                actual: len,
            });
        }
        Ok(Self {
            name: trimmed.to_owned(),
            avatar: None,
        })
    }

    /// Attach an avatar URL. An empty value removes the avatar.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        let avatar = avatar.into();
        self.avatar = if avatar.trim().is_empty() {
            None
        } else {
            Some(avatar)
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Opaque token Viber assigns to an accepted message (`message_token`).
pub struct MessageToken(u64);

impl MessageToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Webhook endpoint registered with `set_webhook`.
///
/// Invariant: an absolute `https` URL.
pub struct WebhookUrl(url::Url);

impl WebhookUrl {
    /// JSON field name used by Viber (`url`).
    pub const FIELD: &'static str = "url";

    /// Parse and validate a webhook URL.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            field: "webhook",
            input: trimmed.to_owned(),
        })?;
        if parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                field: "webhook",
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(parsed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Hex color in `#RRGGBB` form, as used by keyboards and buttons.
pub struct Color(String);

impl Color {
    /// Parse a `#RRGGBB` color.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let valid = trimmed.len() == 7
            && trimmed.starts_with('#')
            && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(ValidationError::InvalidColor {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality is based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// JSON field name used by Viber contact messages (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Contact card carried by a contact message.
pub struct Contact {
    name: String,
    phone_number: PhoneNumber,
}

impl Contact {
    /// Create a contact with a non-empty display name.
    pub fn new(
        name: impl Into<String>,
        phone_number: PhoneNumber,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Geographic point carried by a location message.
///
/// Invariant: `lat` in `-90..=90`, `lon` in `-180..=180`.
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::OutOfRange {
                field: "lat",
                min: -90.0,
                max: 90.0,
                actual: lat,
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::OutOfRange {
                field: "lon",
                min: -180.0,
                max: 180.0,
                actual: lon,
            });
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(self) -> f64 {
        self.lat
    }

    pub fn lon(self) -> f64 {
        self.lon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Viber API status code (`status`).
///
/// `0` means success. The value is preserved as-is even when unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    pub const OK: Self = Self(0);

    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Viber.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    pub fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Viber status codes.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Ok,
    InvalidUrl,
    InvalidAuthToken,
    BadData,
    MissingData,
    ReceiverNotRegistered,
    ReceiverNotSubscribed,
    PublicAccountBlocked,
    PublicAccountNotFound,
    PublicAccountSuspended,
    WebhookNotSet,
    ReceiverNoSuitableDevice,
    TooManyRequests,
    ApiVersionNotSupported,
    IncompatibleWithVersion,
    PublicAccountNotAuthorized,
    InchatReplyMessageNotAllowed,
    PublicAccountIsNotInline,
    NoPublicChat,
    CannotSendBroadcast,
    BroadcastNotAllowed,
    UnsupportedCountry,
    PaymentUnsupported,
    FreeMessagesExceeded,
    NoBalance,
}

impl KnownStatusCode {
    /// Convert a raw Viber integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Ok,
            1 => Self::InvalidUrl,
            2 => Self::InvalidAuthToken,
            3 => Self::BadData,
            4 => Self::MissingData,
            5 => Self::ReceiverNotRegistered,
            6 => Self::ReceiverNotSubscribed,
            7 => Self::PublicAccountBlocked,
            8 => Self::PublicAccountNotFound,
            9 => Self::PublicAccountSuspended,
            10 => Self::WebhookNotSet,
            11 => Self::ReceiverNoSuitableDevice,
            12 => Self::TooManyRequests,
            13 => Self::ApiVersionNotSupported,
            14 => Self::IncompatibleWithVersion,
            15 => Self::PublicAccountNotAuthorized,
            16 => Self::InchatReplyMessageNotAllowed,
            17 => Self::PublicAccountIsNotInline,
            18 => Self::NoPublicChat,
            19 => Self::CannotSendBroadcast,
            20 => Self::BroadcastNotAllowed,
            21 => Self::UnsupportedCountry,
            22 => Self::PaymentUnsupported,
            23 => Self::FreeMessagesExceeded,
            24 => Self::NoBalance,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::TooManyRequests)
    }

    /// Whether this status indicates invalid or unauthorized credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidAuthToken | Self::PublicAccountNotAuthorized
        )
    }
}
