use std::env;
use std::time::Duration;

use crate::error::{ComedorError, ComedorResult};
use crate::model::Person;

/// Connection details for the hosted people directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub api_key: String,
}

impl DirectoryConfig {
    /// Read the backend location from the environment. `None` means no
    /// backend is configured, which callers treat the same as a failed
    /// query (degraded mode with sample data).
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("COMEDOR_API_URL").ok()?;
        let api_key = env::var("COMEDOR_API_KEY").ok()?;
        Some(Self { base_url, api_key })
    }
}

/// Fetch every person in the directory, sorted by category then name.
///
/// This is the whole remote contract: one select-all-with-sort query.
/// Failures are returned as `ComedorError::Directory`; the fallback
/// decision belongs to the caller (see `ops::roster_ops::resolve_roster`),
/// so the degraded-mode policy stays visible and testable.
pub fn fetch_people(config: &DirectoryConfig) -> ComedorResult<Vec<Person>> {
    let url = format!(
        "{}/rest/v1/people?select=*&order=category.asc,name.asc",
        config.base_url.trim_end_matches('/')
    );

    let response = ureq::get(&url)
        .set("apikey", &config.api_key)
        .set("Authorization", &format!("Bearer {}", config.api_key))
        .timeout(Duration::from_secs(10))
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                // Truncate by chars, not bytes: the backend's error text
                // may be Spanish and a byte index can land mid-character.
                let snippet: String = body.chars().take(200).collect();
                ComedorError::Directory(format!("HTTP {}: {}", code, snippet))
            }
            ureq::Error::Transport(t) => {
                ComedorError::Directory(format!("could not reach directory: {}", t))
            }
        })?;

    let people: Vec<Person> = response
        .into_json()
        .map_err(|e| ComedorError::Directory(format!("bad directory response: {}", e)))?;

    log::debug!("directory returned {} people", people.len());
    Ok(people)
}
