//! Delivery address collection and validation.
//!
//! Validation is entirely local: a failed field never causes a network call.
//! The rules match the backend's own expectations — a 5 or 6 digit ZIP and a
//! phone number that strips down to exactly 10 digits.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A validated delivery address, created fresh per checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
}

/// Raw form input, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
}

/// Per-field validation messages. A `None` field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressErrors {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
}

impl AddressErrors {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
            && self.phone.is_none()
    }

    /// Flatten to `(field, message)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(m) = &self.street {
            out.push(("street", m.as_str()));
        }
        if let Some(m) = &self.city {
            out.push(("city", m.as_str()));
        }
        if let Some(m) = &self.state {
            out.push(("state", m.as_str()));
        }
        if let Some(m) = &self.zip_code {
            out.push(("zipCode", m.as_str()));
        }
        if let Some(m) = &self.phone {
            out.push(("phone", m.as_str()));
        }
        out
    }
}

fn zip_regex() -> &'static Regex {
    static ZIP: OnceLock<Regex> = OnceLock::new();
    ZIP.get_or_init(|| Regex::new(r"^\d{5,6}$").expect("static regex compiles"))
}

impl AddressInput {
    /// Validate every field, collecting all failures at once.
    pub fn validate(&self) -> Result<DeliveryAddress, AddressErrors> {
        let mut errors = AddressErrors::default();

        if self.street.trim().is_empty() {
            errors.street = Some("Street address is required".to_string());
        }
        if self.city.trim().is_empty() {
            errors.city = Some("City is required".to_string());
        }
        if self.state.trim().is_empty() {
            errors.state = Some("State is required".to_string());
        }

        if self.zip_code.trim().is_empty() {
            errors.zip_code = Some("ZIP code is required".to_string());
        } else if !zip_regex().is_match(&self.zip_code) {
            errors.zip_code = Some("Invalid ZIP code".to_string());
        }

        if self.phone.trim().is_empty() {
            errors.phone = Some("Phone number is required".to_string());
        } else {
            let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.len() != 10 {
                errors.phone = Some("Invalid phone number".to_string());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(DeliveryAddress {
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            phone: self.phone.clone(),
        })
    }
}
