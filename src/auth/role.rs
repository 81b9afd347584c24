use serde::{Deserialize, Serialize};

/// Account role, fixed at signup. A closed set: anything else is rejected
/// when the signup payload or a token is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
}

impl Role {
    pub fn is_employer(self) -> bool {
        matches!(self, Role::Employer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Employer => "employer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Role::Candidate).unwrap(), "\"candidate\"");
        assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
        let role: Role = serde_json::from_str("\"employer\"").unwrap();
        assert_eq!(role, Role::Employer);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn only_employer_may_post() {
        assert!(Role::Employer.is_employer());
        assert!(!Role::Candidate.is_employer());
    }
}
