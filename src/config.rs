//! Build-time Configuration
//!
//! Store credentials are baked in at compile time from `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY`. Without them the app keeps its library in
//! localStorage.

use serde::{Deserialize, Serialize};

/// localStorage key of the offline library snapshot
pub const LOCAL_STORAGE_KEY: &str = "range-trainer-library";

/// Lines kept by the in-memory log buffer
pub const LOG_CAPACITY: usize = 500;

/// How long a notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Remote store connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Both values must be present and non-blank
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|k| !k.is_empty())?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// PostgREST endpoint of a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}
