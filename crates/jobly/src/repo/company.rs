use super::{select_filtered, update_returning};
use crate::builder::{FilterCriteria, partial_update};
use crate::client::GenericClient;
use crate::error::{JoblyError, JoblyResult};
use crate::mapper::COMPANY_COLUMNS;
use crate::models::{Company, CompanyDetail, CompanyFilter, CompanyPatch, JobSummary, NewCompany};
use crate::query::query;

const COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Create, read, list, update and delete companies.
pub struct CompanyRepository;

impl CompanyRepository {
    /// Insert a company and return it as stored.
    ///
    /// A taken handle surfaces as [`JoblyError::Conflict`], raised by the
    /// primary key itself so concurrent creators cannot both succeed.
    pub async fn create(conn: &impl GenericClient, data: NewCompany) -> JoblyResult<Company> {
        let handle = data.handle.clone();
        query(format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .tagged("companies.create")
        .bind(data.handle)
        .bind(data.name)
        .bind(data.description)
        .bind(data.num_employees)
        .bind(data.logo_url)
        .fetch_one_as::<Company>(conn)
        .await
        .map_err(|e| match e {
            JoblyError::Conflict(detail) => {
                JoblyError::conflict(format!("Duplicate company: {handle} ({detail})"))
            }
            other => other,
        })
    }

    /// Fetch one company with its jobs attached, ordered by job id.
    pub async fn get(conn: &impl GenericClient, handle: &str) -> JoblyResult<CompanyDetail> {
        let company = query(format!("SELECT {COLUMNS} FROM companies WHERE handle = $1"))
            .tagged("companies.get")
            .bind(handle.to_string())
            .fetch_opt_as::<Company>(conn)
            .await?
            .ok_or_else(|| JoblyError::not_found(format!("No company: {handle}")))?;

        let jobs = query(
            "SELECT id, title, salary, equity FROM jobs WHERE company_handle = $1 ORDER BY id",
        )
        .tagged("companies.get.jobs")
        .bind(handle.to_string())
        .fetch_all_as::<JobSummary>(conn)
        .await?;

        Ok(CompanyDetail { company, jobs })
    }

    /// List companies matching `filter`, ordered by name.
    ///
    /// Inverted employee bounds fail before any statement is issued.
    pub async fn list(conn: &impl GenericClient, filter: &CompanyFilter) -> JoblyResult<Vec<Company>> {
        let clause = filter.to_where(0)?;
        select_filtered(COLUMNS, "companies", clause, "name")
            .tagged("companies.list")
            .fetch_all_as(conn)
            .await
    }

    /// Apply `patch` to the company at `handle` and return the result.
    pub async fn update(
        conn: &impl GenericClient,
        handle: &str,
        patch: CompanyPatch,
    ) -> JoblyResult<Company> {
        let set = partial_update(patch.into_changes(), COMPANY_COLUMNS)?;
        let sql = update_returning("companies", &set, "handle", COLUMNS);

        query(sql)
            .tagged("companies.update")
            .bind_all(set.into_params())
            .bind(handle.to_string())
            .fetch_opt_as::<Company>(conn)
            .await?
            .ok_or_else(|| JoblyError::not_found(format!("No company: {handle}")))
    }

    /// Delete the company at `handle`. Its jobs go with it (`ON DELETE CASCADE`).
    pub async fn delete(conn: &impl GenericClient, handle: &str) -> JoblyResult<()> {
        let affected = query("DELETE FROM companies WHERE handle = $1")
            .tagged("companies.delete")
            .bind(handle.to_string())
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(JoblyError::not_found(format!("No company: {handle}")));
        }
        Ok(())
    }
}
