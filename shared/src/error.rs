//! Unified error codes
//!
//! Error codes are shared with the platform REST API and organized by
//! category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility with the backend API. The client decodes
/// these out of error envelopes to classify failures more precisely than
/// the HTTP status alone allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Account is disabled
    AccountDisabled = 1006,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Cannot modify a system role
    SystemRoleImmutable = 2003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Service unavailable
    ServiceUnavailable = 9002,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code means the session token or credentials were
    /// rejected (the 1xxx auth category)
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::NotAuthenticated
                | ErrorCode::InvalidCredentials
                | ErrorCode::TokenExpired
                | ErrorCode::TokenInvalid
                | ErrorCode::SessionExpired
                | ErrorCode::AccountDisabled
        )
    }

    /// Whether this code means the caller lacks a permission or role
    /// (the 2xxx permission category)
    pub fn is_permission_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::PermissionDenied
                | ErrorCode::RoleRequired
                | ErrorCode::SystemRoleImmutable
        )
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Required role missing",
            ErrorCode::SystemRoleImmutable => "System roles cannot be modified",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ServiceUnavailable => "Service unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::AccountDisabled),
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::SystemRoleImmutable),
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ServiceUnavailable),
            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        let code = ErrorCode::try_from(1002u16).unwrap();
        assert_eq!(code, ErrorCode::InvalidCredentials);
        assert_eq!(u16::from(code), 1002);

        assert!(ErrorCode::try_from(42u16).is_err());
    }

    #[test]
    fn test_error_code_categories() {
        assert!(ErrorCode::SessionExpired.is_auth_error());
        assert!(ErrorCode::AccountDisabled.is_auth_error());
        assert!(!ErrorCode::NotFound.is_auth_error());

        assert!(ErrorCode::RoleRequired.is_permission_error());
        assert!(!ErrorCode::TokenExpired.is_permission_error());
    }

    #[test]
    fn test_error_code_serde() {
        let json = serde_json::to_string(&ErrorCode::SessionExpired).unwrap();
        assert_eq!(json, "1005");

        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::PermissionDenied);
    }
}
