//! "Stay Informed" sign-up on the results page.
//!
//! Addresses are checked for shape and acknowledged. Nothing is stored or forwarded, and
//! the address is never written to logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionAck {
    pub subscribed: bool,
    pub message: &'static str,
    pub acknowledged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("email address is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

pub fn acknowledge(request: &SubscriptionRequest) -> Result<SubscriptionAck, NewsletterError> {
    acknowledge_at(request, Utc::now())
}

pub(crate) fn acknowledge_at(
    request: &SubscriptionRequest,
    now: DateTime<Utc>,
) -> Result<SubscriptionAck, NewsletterError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(NewsletterError::MissingEmail);
    }
    if !looks_like_email(email) {
        return Err(NewsletterError::InvalidEmail(email.to_string()));
    }

    info!("newsletter sign-up acknowledged");
    Ok(SubscriptionAck {
        subscribed: true,
        message: "You'll receive helpful health tips and reminders in your inbox.",
        acknowledged_at: now,
    })
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
