//! Contact form submissions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Name left blank
    #[error("name cannot be empty")]
    EmptyName,
    /// Message left blank
    #[error("message cannot be empty")]
    EmptyMessage,
    /// Address without a local part and a domain
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// A validated message from the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Message body
    pub message: String,
    /// When the submission was accepted (RFC3339)
    pub received_at: String,
}

impl ContactMessage {
    /// Validate raw form fields and stamp the receive time
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        let valid_email = email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        });
        if !valid_email {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            received_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
