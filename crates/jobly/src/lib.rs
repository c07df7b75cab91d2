//! # jobly
//!
//! A Postgres data-access layer for companies and the jobs they post.
//!
//! ## Features
//!
//! - **Partial updates**: [`partial_update`] turns any non-empty set of
//!   changed fields into a parameterized `SET` list, mapping API field names
//!   to storage columns through a closed per-resource table.
//! - **Filtered listing**: [`FilterCriteria`] turns optional search filters
//!   into a conjunction of predicates, rejecting contradictory bounds before
//!   any SQL is built.
//! - **Repositories**: [`CompanyRepository`] and [`JobRepository`] compose the
//!   builders with fixed statement templates.
//! - **Client-agnostic**: every operation takes a [`GenericClient`], so it runs
//!   on a plain connection, a pooled connection or a transaction.
//!
//! ## Example
//!
//! ```ignore
//! use jobly::{CompanyFilter, CompanyPatch, CompanyRepository};
//!
//! let pool = jobly::create_pool(&database_url)?;
//! let client = pool.get().await?;
//!
//! let small = CompanyRepository::list(
//!     &client,
//!     &CompanyFilter { max_employees: Some(50), ..Default::default() },
//! )
//! .await?;
//!
//! CompanyRepository::update(
//!     &client,
//!     "acme",
//!     CompanyPatch { logo_url: Some(None), ..Default::default() },
//! )
//! .await?;
//! ```

pub mod builder;
pub mod client;
pub mod error;
pub mod mapper;
pub mod models;
pub mod param;
pub mod query;
pub mod repo;
pub mod row;

pub use builder::{FilterCriteria, Predicate, SqlFragment, partial_update, where_clause};
pub use client::GenericClient;
pub use error::{JoblyError, JoblyResult};
pub use mapper::{COMPANY_COLUMNS, ColumnMap, JOB_COLUMNS, column_name};
pub use models::{
    Company, CompanyDetail, CompanyFilter, CompanyPatch, Job, JobFilter, JobPatch, JobSummary,
    NewCompany, NewJob,
};
pub use param::Param;
pub use query::{Query, query};
pub use repo::{CompanyRepository, JobRepository};
pub use row::{FromRow, RowExt};
pub use rust_decimal::Decimal;

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};
