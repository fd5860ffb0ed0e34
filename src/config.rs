//! Store configuration.
//!
//! Loaded from environment variables with fallback to defaults. Notifier
//! settings are only read by notifier constructors; checkout never sees them.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use crate::catalog::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Write orders as mail files into `file_location`.
    File,
    /// Publish orders as JSON to `nats_subject`.
    Nats,
}

impl FromStr for NotifierKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "nats" => Ok(Self::Nats),
            _ => Err(ConfigError::InvalidValue("STORE_NOTIFIER".to_string())),
        }
    }
}

/// Where and how order notifications are delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierSettings {
    pub kind: NotifierKind,

    /// Recipient of order mails
    pub mail_to: String,

    /// Sender of order mails
    pub mail_from: String,

    pub subject: String,

    /// Directory for file-drop delivery
    pub file_location: PathBuf,

    pub nats_url: String,

    pub nats_subject: String,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            kind: NotifierKind::File,
            mail_to: "orders@example.com".to_string(),
            mail_from: "sportsstore@example.com".to_string(),
            subject: "New order submitted!".to_string(),
            file_location: PathBuf::from("./order_emails"),
            nats_url: "nats://localhost:4222".to_string(),
            nats_subject: "store.orders.submitted".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Products per catalog page
    pub page_size: usize,

    pub notifier: NotifierSettings,
}

impl Default for StoreConfig {
    fn default() -> Self { Self { page_size: DEFAULT_PAGE_SIZE, notifier: NotifierSettings::default() } }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value for a
    /// variable name or `None` when it is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = NotifierSettings::default();
        let page_size = match lookup("STORE_PAGE_SIZE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue("STORE_PAGE_SIZE".to_string()))?,
            None => DEFAULT_PAGE_SIZE,
        };
        if page_size == 0 {
            return Err(ConfigError::InvalidValue("STORE_PAGE_SIZE".to_string()));
        }

        let notifier = NotifierSettings {
            kind: lookup("STORE_NOTIFIER").map(|raw| raw.parse::<NotifierKind>()).transpose()?.unwrap_or(defaults.kind),
            mail_to: lookup("STORE_MAIL_TO").unwrap_or(defaults.mail_to),
            mail_from: lookup("STORE_MAIL_FROM").unwrap_or(defaults.mail_from),
            subject: lookup("STORE_MAIL_SUBJECT").unwrap_or(defaults.subject),
            file_location: lookup("STORE_ORDER_DIR").map(PathBuf::from).unwrap_or(defaults.file_location),
            nats_url: lookup("NATS_URL").unwrap_or(defaults.nats_url),
            nats_subject: lookup("STORE_NATS_SUBJECT").unwrap_or(defaults.nats_subject),
        };

        if notifier.mail_to.trim().is_empty() {
            return Err(ConfigError::MissingRequired("STORE_MAIL_TO".to_string()));
        }

        Ok(Self { page_size, notifier })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
