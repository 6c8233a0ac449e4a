//! In-progress product creation form.
//!
//! Numeric fields hold whatever the input coercion produced, including
//! `NaN`. That is a legal transient state while editing. Submittability is
//! only judged once, by [`DraftProduct::check`], at submit time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::product::{DEFAULT_WEIGHT, NewProduct};

/// Reasons a draft is not submittable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("product name is required")]
    MissingName,
    #[error("{0} is required")]
    Missing(DraftField),
    #[error("{0} is not a number")]
    NotANumber(DraftField),
    #[error("{0} must not be negative")]
    Negative(DraftField),
}

/// Numeric draft fields, named in [`DraftError`] messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Price,
    Weight,
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price => f.write_str("price"),
            Self::Weight => f.write_str("weight"),
        }
    }
}

/// A partially-filled product awaiting submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftProduct {
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// `None` while the input is empty.
    pub price: Option<f64>,
    /// `None` while the input is empty.
    pub weight: Option<f64>,
}

impl Default for DraftProduct {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            price: None,
            weight: Some(DEFAULT_WEIGHT),
        }
    }
}

impl DraftProduct {
    /// Store the coerced value of a price input.
    pub fn set_price_input(&mut self, raw: &str) {
        self.price = coerce_numeric_input(raw);
    }

    /// Store the coerced value of a weight input.
    pub fn set_weight_input(&mut self, raw: &str) {
        self.weight = coerce_numeric_input(raw);
    }

    /// Whether every field still holds its default.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Submit-time validation.
    ///
    /// # Errors
    ///
    /// Returns the first field that keeps the draft from being submittable.
    pub fn check(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        check_number(self.price, DraftField::Price)?;
        check_number(self.weight, DraftField::Weight)
    }

    /// Build the request body without any validation.
    ///
    /// An empty numeric slot is sent as `NaN`, which goes over the wire as
    /// `null`.
    #[must_use]
    pub fn to_payload(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price: self.price.unwrap_or(f64::NAN),
            weight: self.weight.unwrap_or(f64::NAN),
        }
    }
}

fn check_number(value: Option<f64>, field: DraftField) -> Result<(), DraftError> {
    match value {
        None => Err(DraftError::Missing(field)),
        Some(v) if !v.is_finite() => Err(DraftError::NotANumber(field)),
        Some(v) if v < 0.0 => Err(DraftError::Negative(field)),
        Some(_) => Ok(()),
    }
}

/// Coerce raw numeric input the way a number widget does.
///
/// Empty input yields `None`. Otherwise the longest leading decimal
/// literal is parsed (`"12abc"` is 12), and input with no such prefix is
/// `NaN`.
#[must_use]
pub fn coerce_numeric_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let literal = leading_decimal(trimmed);
    Some(literal.parse::<f64>().unwrap_or(f64::NAN))
}

fn leading_decimal(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let mut frac = end + 1;
        while bytes.get(frac).is_some_and(u8::is_ascii_digit) {
            frac += 1;
        }
        mantissa_digits += frac - end - 1;
        end = frac;
    }
    if mantissa_digits == 0 {
        return "";
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits_start = exp;
        while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            exp += 1;
        }
        if exp > exp_digits_start {
            end = exp;
        }
    }
    s.get(..end).unwrap_or_default()
}
