use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required { field: &'static str },
    Empty { field: &'static str },
    NotAnObject { field: &'static str },
    InvalidCharacters { field: &'static str },
    DotSegment { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotAnObject { field } => write!(f, "{field} must be a JSON object"),
            Self::InvalidCharacters { field } => {
                write!(f, "{field} contains characters not allowed in a header")
            }
            Self::DotSegment { field } => write!(f, "{field} must not be `.` or `..`"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Required { field: "apiKey" };
        assert_eq!(err.to_string(), "apiKey is required");

        let err = ValidationError::Empty { field: "email" };
        assert_eq!(err.to_string(), "email must not be empty");

        let err = ValidationError::NotAnObject { field: "params" };
        assert_eq!(err.to_string(), "params must be a JSON object");

        let err = ValidationError::DotSegment { field: "itemId" };
        assert_eq!(err.to_string(), "itemId must not be `.` or `..`");
    }
}
