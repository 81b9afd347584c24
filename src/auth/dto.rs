use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::role::Role;

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

/// Caller profile returned from `/api/auth/me`.
#[derive(Debug, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_has_token_and_role() {
        let response = AuthResponse {
            access_token: "abc.def.ghi".into(),
            token_type: "bearer",
            email: "dev@example.com".into(),
            full_name: "Dev Example".into(),
            role: Role::Employer,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["role"], "employer");
    }

    #[test]
    fn signup_request_rejects_unknown_role() {
        let raw = r#"{"email":"a@b.co","password":"longenough","full_name":"A B","role":"admin"}"#;
        assert!(serde_json::from_str::<SignupRequest>(raw).is_err());
    }

    #[test]
    fn signup_request_parses_valid_payload() {
        let raw = r#"{"email":"a@b.co","password":"longenough","full_name":"A B","role":"candidate"}"#;
        let req: SignupRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.role, Role::Candidate);
        assert_eq!(req.full_name, "A B");
    }
}
