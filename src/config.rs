use crate::error::SubmitError;

/// Submission endpoint used when `B12_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://b12.io/apply/submission";

#[derive(Debug, Clone)]
pub struct Config {
    pub secret: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub repository_link: String,
    pub action_run_link: String,
    pub endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, SubmitError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Every required
    /// value is trimmed of surrounding whitespace; a value that is missing
    /// or empty after trimming is a fatal configuration error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SubmitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(&lookup, "B12_SECRET")?;
        let name = required(&lookup, "B12_NAME")?;
        let email = required(&lookup, "B12_EMAIL")?;
        let resume_link = required(&lookup, "B12_RESUME_LINK")?;
        let repository_link = required(&lookup, "B12_REPOSITORY_LINK")?;
        let action_run_link = required(&lookup, "B12_ACTION_RUN_LINK")?;

        let endpoint = optional(&lookup, "B12_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Config {
            secret,
            name,
            email,
            resume_link,
            repository_link,
            action_run_link,
            endpoint,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, SubmitError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key)
        .ok_or_else(|| SubmitError::Config(format!("Missing required environment variable: {key}")))
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
