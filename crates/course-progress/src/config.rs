//! Site Configuration
//!
//! Storage key, query parameter, log level and the course list, read from
//! the bundled `data/site.json`. Every setting except the course list has a
//! default.

use log::LevelFilter;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::domain::{Course, DomainError, DomainResult};

const BUNDLED_SITE: &str = include_str!("../data/site.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// localStorage key holding the serialized progress
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Query parameter carrying the active course id
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// One of off/error/warn/info/debug/trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

fn default_storage_key() -> String {
    "userProgress".to_string()
}

fn default_query_param() -> String {
    "course".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            query_param: default_query_param(),
            log_level: default_log_level(),
            courses: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// The configuration compiled into the binary
    pub fn bundled() -> DomainResult<Self> {
        Self::from_json(BUNDLED_SITE)
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Parsed log level; anything unrecognised means `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn catalog(&self) -> DomainResult<Catalog> {
        Catalog::new(self.courses.clone())
    }
}
