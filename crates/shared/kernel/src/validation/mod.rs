//! Form validation run before anything is sent to the backend.
//!
//! Violations are collected rather than short-circuited so the operator sees every
//! problem of a form at once.

mod rules;

use std::fmt;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        write!(f, "Invalid input: {joined}")
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(ValidationError { field, message: message.into() });
    }

    /// Records `message` against `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &'static str, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.add(field, message);
        }
        self
    }

    pub fn require_text(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.check(!value.trim().is_empty(), field, "is required")
    }

    pub fn require_email(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.check(is_valid_email(value), field, "must be a valid e-mail address")
    }

    /// E-mail is optional; when present it must look like an address.
    pub fn optional_email(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        let ok = value.is_none_or(|v| v.trim().is_empty() || is_valid_email(v));
        self.check(ok, field, "must be a valid e-mail address")
    }

    /// Phone numbers are optional; when present they must have exactly ten digits.
    pub fn optional_phone(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        let ok = value.is_none_or(|v| v.trim().is_empty() || is_valid_phone(v));
        self.check(ok, field, "must have 10 digits")
    }

    pub fn positive(&mut self, field: &'static str, value: f64) -> &mut Self {
        self.check(value.is_finite() && value > 0.0, field, "must be greater than zero")
    }

    pub fn non_negative(&mut self, field: &'static str, value: i64) -> &mut Self {
        self.check(value >= 0, field, "cannot be negative")
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Records that can be checked before being sent.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Loose shape check: `local@domain.tld` without spaces.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Exactly ten ASCII digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}
