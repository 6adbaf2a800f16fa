use crate::ProfileError;

/// Fixed table the post-confirmation trigger seeds profiles into when
/// PROFILE_TABLE is not set.
pub const DEFAULT_PROFILE_TABLE: &str = "UserProfiles";

/// Environment variable that overrides the profile table name.
pub const PROFILE_TABLE_ENV: &str = "PROFILE_TABLE";

/// Runtime configuration for the profile Lambdas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    pub table_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_PROFILE_TABLE.to_string(),
        }
    }
}

impl ProfileConfig {
    /// Create config from Lambda environment variables.
    /// PROFILE_TABLE is optional and falls back to the fixed table name.
    pub fn from_env() -> Result<Self, ProfileError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProfileError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(PROFILE_TABLE_ENV) {
            None => Ok(Self::default()),
            Some(name) if name.trim().is_empty() => Err(ProfileError::ConfigError(format!(
                "{} is set but empty",
                PROFILE_TABLE_ENV
            ))),
            Some(name) => Ok(Self { table_name: name }),
        }
    }
}
