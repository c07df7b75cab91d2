use crate::builder::{FilterCriteria, Predicate, contains_pattern};
use crate::error::JoblyResult;
use crate::param::Param;
use crate::row::{FromRow, RowExt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A job as stored. `equity` is a fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl FromRow for Job {
    fn from_row(row: &Row) -> JoblyResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
        })
    }
}

/// A job nested under its company; the handle is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

impl FromRow for JobSummary {
    fn from_row(row: &Row) -> JoblyResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
        })
    }
}

/// Input for creating a job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default)]
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Changed fields for a job. `id` is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::present")]
    pub equity: Option<Option<Decimal>>,
    #[serde(default)]
    pub company_handle: Option<String>,
}

impl JobPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.salary.is_none()
            && self.equity.is_none()
            && self.company_handle.is_none()
    }

    /// The set fields keyed by their API names, in declaration order.
    pub fn into_changes(self) -> Vec<(&'static str, Param)> {
        let mut changes = Vec::new();
        if let Some(title) = self.title {
            changes.push(("title", Param::new(title)));
        }
        if let Some(salary) = self.salary {
            changes.push(("salary", Param::new(salary)));
        }
        if let Some(equity) = self.equity {
            changes.push(("equity", Param::new(equity)));
        }
        if let Some(company_handle) = self.company_handle {
            changes.push(("companyHandle", Param::new(company_handle)));
        }
        changes
    }
}

/// Search filters for listing jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    /// `Some(true)` keeps jobs with positive equity; otherwise no constraint.
    pub has_equity: Option<bool>,
}

impl FilterCriteria for JobFilter {
    fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            predicates.push(Predicate::ilike("title", contains_pattern(title)));
        }
        if let Some(min) = self.min_salary {
            predicates.push(Predicate::at_least("salary", min));
        }
        if self.has_equity == Some(true) {
            predicates.push(Predicate::positive("equity"));
        }
        predicates
    }
}
