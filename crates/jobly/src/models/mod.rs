//! Records, inputs and search filters for companies and jobs.
//!
//! Field names serialize in camelCase. Patch types use `Option<Option<T>>`
//! for nullable columns: an absent key leaves the column alone, `null`
//! clears it.

mod company;
mod job;

pub use company::{Company, CompanyDetail, CompanyFilter, CompanyPatch, NewCompany};
pub use job::{Job, JobFilter, JobPatch, JobSummary, NewJob};

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so that a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
