//! User roles

use serde::{Deserialize, Serialize};

/// User role in the portal
///
/// The backend stores roles as uppercase strings and older deployments still
/// emit the original Indonesian spellings (`MAHASISWA`/`DOSEN`). Both are
/// accepted on input; unknown values are always rejected rather than being
/// mapped to a deny-all default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Student (backend: MAHASISWA)
    #[serde(alias = "MAHASISWA")]
    Student,
    /// Instructor (backend: DOSEN)
    #[serde(alias = "DOSEN")]
    Instructor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "STUDENT"),
            Self::Instructor => write!(f, "INSTRUCTOR"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STUDENT" | "MAHASISWA" => Ok(Self::Student),
            "INSTRUCTOR" | "DOSEN" => Ok(Self::Instructor),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// Error parsing a role from a string
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(Role::from_str("STUDENT").unwrap(), Role::Student);
        assert_eq!(Role::from_str("INSTRUCTOR").unwrap(), Role::Instructor);
    }

    #[test]
    fn test_parse_legacy_names() {
        assert_eq!(Role::from_str("MAHASISWA").unwrap(), Role::Student);
        assert_eq!(Role::from_str("DOSEN").unwrap(), Role::Instructor);
        // Case-insensitive on input
        assert_eq!(Role::from_str("mahasiswa").unwrap(), Role::Student);
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Role::from_str("ADMIN").is_err());
        assert!(Role::from_str("").is_err());
        let err = Role::from_str("superuser").unwrap_err();
        assert_eq!(err.0, "superuser");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "\"STUDENT\"");
        let role: Role = serde_json::from_str("\"DOSEN\"").unwrap();
        assert_eq!(role, Role::Instructor);
    }

    #[test]
    fn test_serde_unknown_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"ROOT\"");
        assert!(result.is_err());
    }
}
