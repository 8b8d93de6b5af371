//! Authentication request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "username must be between 1 and 100 characters"))]
    #[schema(example = "jdoe")]
    pub username: String,
    #[validate(email(message = "The email is not valid"))]
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "The email is not valid"))]
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "secret123")]
    pub password: String,
}

/// Access token returned by login, signup and refresh.
///
/// The matching refresh token travels in the `refreshToken` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "The email is not valid"))]
    #[schema(example = "jdoe@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
    #[validate(length(min = 6, message = "newPassword must be at least 6 characters"))]
    #[schema(example = "new-secret123")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_password_request_uses_camel_case() {
        let json = r#"{"token":"abc","newPassword":"secret123"}"#;
        let req: ResetPasswordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.new_password, "secret123");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_reset_password_request_short_password() {
        let req = ResetPasswordRequest {
            token: "abc".to_string(),
            new_password: "123".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_password = LoginRequest {
            password: String::new(),
            ..ok.clone()
        };
        assert!(empty_password.validate().is_err());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_signup_request_validation() {
        let req = SignupRequest {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_message_response_serialize() {
        let json = serde_json::to_string(&MessageResponse::new("Logged out successfully")).unwrap();
        assert_eq!(json, r#"{"message":"Logged out successfully"}"#);
    }
}
