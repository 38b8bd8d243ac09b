use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
    InvalidUrl {
        field: &'static str,
        input: String,
    },
    InvalidColor {
        input: String,
    },
    InvalidContentLength {
        input: String,
    },
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidUrl { field, input } => write!(f, "invalid {field} url: {input}"),
            Self::InvalidColor { input } => {
                write!(f, "invalid color: {input} (expected #RRGGBB)")
            }
            Self::InvalidContentLength { input } => write!(f, "invalid content length: {input}"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "receiver" };
        assert_eq!(err.to_string(), "receiver must not be empty");

        let err = ValidationError::TooLong {
            field: "name",
            max: 28,
            actual: 30,
        };
        assert_eq!(err.to_string(), "name is too long: 30 characters (max 28)");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidUrl {
            field: "webhook",
            input: "nope".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid webhook url: nope");

        let err = ValidationError::InvalidColor {
            input: "red".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid color: red (expected #RRGGBB)");

        let err = ValidationError::InvalidContentLength {
            input: "lots".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid content length: lots");

        let err = ValidationError::OutOfRange {
            field: "lat",
            min: -90.0,
            max: 90.0,
            actual: 91.5,
        };
        assert_eq!(err.to_string(), "lat out of range: 91.5 (expected -90..=90)");
    }
}
