use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{FolioError, Result};

/// Message typed into the contact section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional
    pub subject: String,
    pub message: String,
}

/// Acknowledgement of a submitted message
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
    pub sent_at: DateTime<Utc>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FolioError::missing_fields(&missing))
        }
    }

    /// Validates, waits out the simulated send delay, then clears the form.
    ///
    /// Nothing leaves the machine; the delay has no cancellation path.
    pub async fn submit(&mut self, delay: Duration) -> Result<ContactReceipt> {
        self.validate()?;

        debug!("Sending message from {} ({:?} simulated)", self.email, delay);
        tokio::time::sleep(delay).await;

        let form = std::mem::take(self);
        info!("Message sent by {}", form.name);
        Ok(ContactReceipt {
            name: form.name,
            email: form.email,
            sent_at: Utc::now(),
        })
    }
}
