use super::JobSummary;
use crate::builder::{FilterCriteria, Predicate, contains_pattern};
use crate::error::{JoblyError, JoblyResult};
use crate::param::Param;
use crate::row::{FromRow, RowExt};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A company as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl FromRow for Company {
    fn from_row(row: &Row) -> JoblyResult<Self> {
        Ok(Self {
            handle: row.try_get_column("handle")?,
            name: row.try_get_column("name")?,
            description: row.try_get_column("description")?,
            num_employees: row.try_get_column("num_employees")?,
            logo_url: row.try_get_column("logo_url")?,
        })
    }
}

/// A single company together with its jobs, ordered by job id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<JobSummary>,
}

/// Input for creating a company.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i32>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Changed fields for a company. `handle` is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub num_employees: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::present")]
    pub logo_url: Option<Option<String>>,
}

impl CompanyPatch {
    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.num_employees.is_none()
            && self.logo_url.is_none()
    }

    /// The set fields keyed by their API names, in declaration order.
    pub fn into_changes(self) -> Vec<(&'static str, Param)> {
        let mut changes = Vec::new();
        if let Some(name) = self.name {
            changes.push(("name", Param::new(name)));
        }
        if let Some(description) = self.description {
            changes.push(("description", Param::new(description)));
        }
        if let Some(num_employees) = self.num_employees {
            changes.push(("numEmployees", Param::new(num_employees)));
        }
        if let Some(logo_url) = self.logo_url {
            changes.push(("logoUrl", Param::new(logo_url)));
        }
        changes
    }
}

/// Search filters for listing companies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
    /// Case-insensitive substring of the company name.
    pub name: Option<String>,
}

impl FilterCriteria for CompanyFilter {
    fn validate(&self) -> JoblyResult<()> {
        if let (Some(min), Some(max)) = (self.min_employees, self.max_employees) {
            if min > max {
                return Err(JoblyError::validation(
                    "Minimum employee number cannot be greater than maximum employee number.",
                ));
            }
        }
        Ok(())
    }

    fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(min) = self.min_employees {
            predicates.push(Predicate::at_least("num_employees", min));
        }
        if let Some(max) = self.max_employees {
            predicates.push(Predicate::at_most("num_employees", max));
        }
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            predicates.push(Predicate::ilike("name", contains_pattern(name)));
        }
        predicates
    }
}
