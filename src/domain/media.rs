use crate::domain::message::MessageBody;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Headers observed when probing a media URL.
pub struct MediaProbe {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
}

impl MediaProbe {
    /// Build a probe from raw header values.
    ///
    /// A missing length stays `None`; a non-numeric one fails the whole probe.
    pub fn from_headers(
        content_type: Option<&str>,
        content_length: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let content_length = content_length
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| ValidationError::InvalidContentLength {
                        input: raw.to_owned(),
                    })
            })
            .transpose()?;
        Ok(Self {
            content_type: content_type.map(str::to_owned),
            content_length,
        })
    }

    /// Media type without parameters, lowercased (`Image/JPEG; q=1` -> `image/jpeg`).
    fn essence(&self) -> Option<String> {
        self.content_type.as_deref().map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
    }
}

/// Pick the message body for a media URL from what a probe reported.
///
/// - `image/jpeg`, `image/pjpeg` become a picture,
/// - `video/mp4`, `video/h264` become a video sized by `Content-Length`,
/// - anything else, or no probe at all, becomes a file named after the URL's last path
///   segment, without caption.
pub fn classify_media(
    text: impl Into<String>,
    media: impl Into<String>,
    thumbnail: Option<String>,
    probe: Option<&MediaProbe>,
) -> MessageBody {
    let text = text.into();
    let media = media.into();
    let size = probe.and_then(|p| p.content_length).unwrap_or(0);

    match probe.and_then(MediaProbe::essence).as_deref() {
        Some("image/jpeg" | "image/pjpeg") => MessageBody::Picture {
            text,
            media,
            thumbnail,
        },
        Some("video/mp4" | "video/h264") => MessageBody::Video {
            text,
            media,
            thumbnail,
            size,
            duration: None,
        },
        _ => {
            let file_name = file_name_from_url(&media);
            MessageBody::File {
                media,
                size,
                file_name,
            }
        }
    }
}

/// Last non-empty path segment of `media`, or the input itself when it has none.
pub fn file_name_from_url(media: &str) -> String {
    let from_parsed = url::Url::parse(media).ok().and_then(|parsed| {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()).map(str::to_owned))
    });

    from_parsed.unwrap_or_else(|| {
        media
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or(media)
            .to_owned()
    })
}
