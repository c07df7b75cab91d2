//! Request payload validation.
//!
//! Shape (required keys, unknown keys, JSON types) is enforced by serde when
//! the body is decoded. The checks here cover value ranges and formats, and
//! collect every failure instead of stopping at the first.

use jobly::{CompanyPatch, Decimal, JobPatch, NewCompany, NewJob};
use serde::Serialize;

const MAX_HANDLE_LEN: usize = 25;

/// A machine-friendly validation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    Required,
    Len,
    Range,
    Url,
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub code: ValidationCode,
    pub message: String,
}

/// A collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub items: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, field: &'static str, code: ValidationCode, message: impl Into<String>) {
        self.items.push(ValidationError {
            field,
            code,
            message: message.into(),
        });
    }

    /// Human-readable lines, `field: message`.
    pub fn messages(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn non_empty(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, ValidationCode::Required, "must not be empty");
        }
    }

    fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(
                field,
                ValidationCode::Len,
                format!("must be at most {max} characters"),
            );
        }
    }

    fn non_negative(&mut self, field: &'static str, value: i32) {
        if value < 0 {
            self.push(field, ValidationCode::Range, "must be greater than or equal to 0");
        }
    }

    fn fraction(&mut self, field: &'static str, value: Decimal) {
        if value < Decimal::ZERO || value > Decimal::ONE {
            self.push(field, ValidationCode::Range, "must be between 0 and 1");
        }
    }

    fn url(&mut self, field: &'static str, value: &str) {
        if url::Url::parse(value).is_err() {
            self.push(field, ValidationCode::Url, "must be an absolute URL");
        }
    }
}

/// Value-level checks for a decoded payload.
pub trait Validate {
    fn validate(&self) -> ValidationErrors;
}

impl Validate for NewCompany {
    fn validate(&self) -> ValidationErrors {
        let mut errs = ValidationErrors::default();
        errs.non_empty("handle", &self.handle);
        errs.max_len("handle", &self.handle, MAX_HANDLE_LEN);
        errs.non_empty("name", &self.name);
        if let Some(n) = self.num_employees {
            errs.non_negative("numEmployees", n);
        }
        if let Some(url) = &self.logo_url {
            errs.url("logoUrl", url);
        }
        errs
    }
}

impl Validate for CompanyPatch {
    fn validate(&self) -> ValidationErrors {
        let mut errs = ValidationErrors::default();
        if self.is_empty() {
            errs.push("body", ValidationCode::Required, "at least one field is required");
        }
        if let Some(name) = &self.name {
            errs.non_empty("name", name);
        }
        if let Some(Some(n)) = self.num_employees {
            errs.non_negative("numEmployees", n);
        }
        if let Some(Some(url)) = &self.logo_url {
            errs.url("logoUrl", url);
        }
        errs
    }
}

impl Validate for NewJob {
    fn validate(&self) -> ValidationErrors {
        let mut errs = ValidationErrors::default();
        errs.non_empty("title", &self.title);
        errs.non_empty("companyHandle", &self.company_handle);
        if let Some(salary) = self.salary {
            errs.non_negative("salary", salary);
        }
        if let Some(equity) = self.equity {
            errs.fraction("equity", equity);
        }
        errs
    }
}

impl Validate for JobPatch {
    fn validate(&self) -> ValidationErrors {
        let mut errs = ValidationErrors::default();
        if self.is_empty() {
            errs.push("body", ValidationCode::Required, "at least one field is required");
        }
        if let Some(title) = &self.title {
            errs.non_empty("title", title);
        }
        if let Some(Some(salary)) = self.salary {
            errs.non_negative("salary", salary);
        }
        if let Some(Some(equity)) = self.equity {
            errs.fraction("equity", equity);
        }
        if let Some(handle) = &self.company_handle {
            errs.non_empty("companyHandle", handle);
        }
        errs
    }
}
