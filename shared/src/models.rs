use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ProfileError;

/// Hemisphere a player has chosen. New profiles start out `Unset` until the
/// user picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Unset,
    North,
    South,
}

impl Hemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Unset => "unset",
            Hemisphere::North => "north",
            Hemisphere::South => "south",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unset" => Ok(Hemisphere::Unset),
            "north" => Ok(Hemisphere::North),
            "south" => Ok(Hemisphere::South),
            other => Err(ProfileError::ValidationError(format!(
                "unknown hemisphere: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub hemisphere: Hemisphere,
}

impl UserProfile {
    /// Default profile written when a user first confirms their account.
    pub fn new_default(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            hemisphere: Hemisphere::default(),
        }
    }
}
