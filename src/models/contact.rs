use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const MIN_MESSAGE_CHARS: usize = 5;
pub const MESSAGE_TOO_SHORT: &str = "Le message est trop court.";
pub const ACKNOWLEDGMENT: &str = "Merci pour votre message. Nous vous contacterons bientôt.";

/// Contact-form submission from the website.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

/// Sender details echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceivedContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub status: &'static str,
    pub received: ReceivedContact,
    pub message: &'static str,
}

impl ContactRequest {
    /// Field checks first (422), then the message length rule (400).
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(ref email) = self.email {
            if !is_valid_email(email) {
                return Err(ApiError::unprocessable(format!(
                    "email: value is not a valid email address: {}",
                    email
                )));
            }
        }

        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(ApiError::bad_request(MESSAGE_TOO_SHORT));
        }

        Ok(())
    }

    /// Consumes the request. The message body itself is not echoed.
    pub fn into_ack(self) -> ContactAck {
        ContactAck {
            status: "ok",
            received: ReceivedContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
            },
            message: ACKNOWLEDGMENT,
        }
    }
}

/// Syntactic email check: one `@`, a dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.len() > 253 {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let local_chars = |c: char| c.is_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c);
    if !local.chars().all(local_chars) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}
