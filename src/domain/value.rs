use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Iterable server-side API key, sent in the `Api-Key` header.
///
/// Invariant: non-empty after trimming and made only of characters an HTTP
/// header value can carry. `Debug` output never shows the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name reported by validation errors.
    pub const FIELD: &'static str = "apiKey";

    /// Header name used by Iterable.
    pub const HEADER: &'static str = "Api-Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: Self::FIELD });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_graphic() || c == ' ' || c == '\t')
        {
            return Err(ValidationError::InvalidCharacters { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Reject a blank value. Non-blank values are returned unchanged.
pub(crate) fn non_blank<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Encode `value` as exactly one URL path segment.
///
/// Everything except ASCII alphanumerics and `*-._` is percent-encoded, so
/// `/`, `?`, `#` and spaces stay inside the segment. `.` and `..` are rejected
/// since URL parsing would resolve them against the surrounding path.
pub(crate) fn path_segment(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = non_blank(field, value)?;
    if value == "." || value == ".." {
        return Err(ValidationError::DotSegment { field });
    }
    // byte_serialize writes a space as `+`, which a path would keep literally.
    Ok(url::form_urlencoded::byte_serialize(value.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Iterable response `code` (for example `"Success"` or `"BadParams"`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ResponseCode(String);

impl ResponseCode {
    /// Construct a response code from its wire representation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as provided by Iterable.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known response code variant, if one exists.
    pub fn known(&self) -> Option<KnownResponseCode> {
        KnownResponseCode::from_code(&self.0)
    }

    /// Returns `true` for `Success`.
    pub fn is_success(&self) -> bool {
        self.known() == Some(KnownResponseCode::Success)
    }

    /// Returns `true` if this code represents an authentication/authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl From<KnownResponseCode> for ResponseCode {
    fn from(value: KnownResponseCode) -> Self {
        Self(value.as_str().to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Iterable response codes.
///
/// Unknown codes are preserved as [`ResponseCode`] and return `None` from [`KnownResponseCode::from_code`].
pub enum KnownResponseCode {
    Success,
    BadApiKey,
    BadAuthorizationHeader,
    BadJsonBody,
    BadParams,
    BatchTryAgain,
    ConflictEmailsError,
    ConflictUserIdsError,
    DatabaseError,
    EmailAlreadyExists,
    ExternalKeyConflict,
    FeatureNotEnabled,
    Forbidden,
    ForbiddenParamsError,
    ForgottenUserError,
    GenericError,
    InvalidEmailAddressError,
    InvalidJwtPayload,
    InvalidUserIdError,
    JwtUserIdentifiersMismatched,
    NotFound,
    QueueEmailError,
    RateLimitExceeded,
    RequestFieldsTypesMismatched,
    UniqueFieldsLimitExceeded,
}

impl KnownResponseCode {
    const ALL: [Self; 25] = [
        Self::Success,
        Self::BadApiKey,
        Self::BadAuthorizationHeader,
        Self::BadJsonBody,
        Self::BadParams,
        Self::BatchTryAgain,
        Self::ConflictEmailsError,
        Self::ConflictUserIdsError,
        Self::DatabaseError,
        Self::EmailAlreadyExists,
        Self::ExternalKeyConflict,
        Self::FeatureNotEnabled,
        Self::Forbidden,
        Self::ForbiddenParamsError,
        Self::ForgottenUserError,
        Self::GenericError,
        Self::InvalidEmailAddressError,
        Self::InvalidJwtPayload,
        Self::InvalidUserIdError,
        Self::JwtUserIdentifiersMismatched,
        Self::NotFound,
        Self::QueueEmailError,
        Self::RateLimitExceeded,
        Self::RequestFieldsTypesMismatched,
        Self::UniqueFieldsLimitExceeded,
    ];

    /// Convert a raw Iterable code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == code)
    }

    /// The wire representation of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::BadApiKey => "BadApiKey",
            Self::BadAuthorizationHeader => "BadAuthorizationHeader",
            Self::BadJsonBody => "BadJsonBody",
            Self::BadParams => "BadParams",
            Self::BatchTryAgain => "BatchTryAgain",
            Self::ConflictEmailsError => "ConflictEmailsError",
            Self::ConflictUserIdsError => "ConflictUserIdsError",
            Self::DatabaseError => "DatabaseError",
            Self::EmailAlreadyExists => "EmailAlreadyExists",
            Self::ExternalKeyConflict => "ExternalKeyConflict",
            Self::FeatureNotEnabled => "FeatureNotEnabled",
            Self::Forbidden => "Forbidden",
            Self::ForbiddenParamsError => "ForbiddenParamsError",
            Self::ForgottenUserError => "ForgottenUserError",
            Self::GenericError => "GenericError",
            Self::InvalidEmailAddressError => "InvalidEmailAddressError",
            Self::InvalidJwtPayload => "InvalidJwtPayload",
            Self::InvalidUserIdError => "InvalidUserIdError",
            Self::JwtUserIdentifiersMismatched => "JwtUserIdentifiersMismatched",
            Self::NotFound => "NotFound",
            Self::QueueEmailError => "QueueEmailError",
            Self::RateLimitExceeded => "RateLimitExceeded",
            Self::RequestFieldsTypesMismatched => "RequestFieldsTypesMismatched",
            Self::UniqueFieldsLimitExceeded => "UniqueFieldsLimitExceeded",
        }
    }

    /// Returns `true` if this code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::BadApiKey
                | Self::BadAuthorizationHeader
                | Self::Forbidden
                | Self::InvalidJwtPayload
                | Self::JwtUserIdentifiersMismatched
        )
    }
}
