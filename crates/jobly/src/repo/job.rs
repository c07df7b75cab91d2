use super::{select_filtered, update_returning};
use crate::builder::{FilterCriteria, partial_update};
use crate::client::GenericClient;
use crate::error::{JoblyError, JoblyResult};
use crate::mapper::JOB_COLUMNS;
use crate::models::{Job, JobFilter, JobPatch, NewJob};
use crate::query::query;

const COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Create, read, list, update and delete jobs.
pub struct JobRepository;

impl JobRepository {
    /// Insert a job and return it with its assigned id.
    ///
    /// An unknown company handle fails with
    /// [`JoblyError::ForeignKeyViolation`].
    pub async fn create(conn: &impl GenericClient, data: NewJob) -> JoblyResult<Job> {
        query(format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .tagged("jobs.create")
        .bind(data.title)
        .bind(data.salary)
        .bind(data.equity)
        .bind(data.company_handle)
        .fetch_one_as::<Job>(conn)
        .await
    }

    pub async fn get(conn: &impl GenericClient, id: i32) -> JoblyResult<Job> {
        query(format!("SELECT {COLUMNS} FROM jobs WHERE id = $1"))
            .tagged("jobs.get")
            .bind(id)
            .fetch_opt_as::<Job>(conn)
            .await?
            .ok_or_else(|| JoblyError::not_found(format!("No job: {id}")))
    }

    /// List jobs matching `filter`, ordered by title (ties by id).
    pub async fn list(conn: &impl GenericClient, filter: &JobFilter) -> JoblyResult<Vec<Job>> {
        let clause = filter.to_where(0)?;
        select_filtered(COLUMNS, "jobs", clause, "title, id")
            .tagged("jobs.list")
            .fetch_all_as(conn)
            .await
    }

    pub async fn update(conn: &impl GenericClient, id: i32, patch: JobPatch) -> JoblyResult<Job> {
        let set = partial_update(patch.into_changes(), JOB_COLUMNS)?;
        let sql = update_returning("jobs", &set, "id", COLUMNS);

        query(sql)
            .tagged("jobs.update")
            .bind_all(set.into_params())
            .bind(id)
            .fetch_opt_as::<Job>(conn)
            .await?
            .ok_or_else(|| JoblyError::not_found(format!("No job: {id}")))
    }

    pub async fn delete(conn: &impl GenericClient, id: i32) -> JoblyResult<()> {
        let affected = query("DELETE FROM jobs WHERE id = $1")
            .tagged("jobs.delete")
            .bind(id)
            .execute(conn)
            .await?;

        if affected == 0 {
            return Err(JoblyError::not_found(format!("No job: {id}")));
        }
        Ok(())
    }
}
