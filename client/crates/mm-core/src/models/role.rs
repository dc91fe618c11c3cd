use crate::{CoreError, CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role of a user account.
///
/// The API has shipped both `admin` and `Admin` spellings over time, so parsing
/// is case-insensitive while the canonical (serialized) form is capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Member,
    Developer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Developer => "Developer",
        }
    }

    /// Whether the role may create, edit and delete member records.
    pub fn can_manage_members(&self) -> bool {
        match self {
            Self::Admin => true,
            Self::Member | Self::Developer => false,
        }
    }

    /// Whether the role may read, generate and wipe server-side matches.
    pub fn can_manage_matches(&self) -> bool {
        match self {
            Self::Admin | Self::Developer => true,
            Self::Member => false,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "developer" => Ok(Self::Developer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Role::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Deserializes an optional role, mapping blank or unknown values to `None`.
///
/// Used for third-party records where an unrecognised role must not make the
/// whole list unreadable.
pub fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| Role::from_str(&s).ok()))
}
