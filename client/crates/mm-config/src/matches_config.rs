use std::str::FromStr;

use serde::Deserialize;

/// What the matches view lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchesMode {
    /// Server-confirmed mutual pairs
    #[default]
    Mutual,
    /// The viewer's own submitted likes, kept locally
    Pending,
}

impl MatchesMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutual => "mutual",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for MatchesMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mutual" => Ok(Self::Mutual),
            "pending" => Ok(Self::Pending),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchesConfig {
    pub mode: MatchesMode,
}
