//! Pre-numbered SQL execution.
//!
//! Repositories assemble a statement from a fixed template and the fragments
//! produced by [`crate::builder`], then hand the final text and the ordered
//! value list to [`Query`].

use crate::client::GenericClient;
use crate::error::JoblyResult;
use crate::param::Param;
use crate::row::FromRow;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

#[cfg(feature = "tracing")]
const MAX_LOGGED_SQL_BYTES: usize = 200;

/// A SQL string with `$1, $2, ...` already in place, plus its values.
///
/// # Example
///
/// ```ignore
/// use jobly::query;
///
/// let company: Option<Company> = query("SELECT * FROM companies WHERE handle = $1")
///     .bind("c1".to_string())
///     .fetch_opt_as(&conn)
///     .await?;
/// ```
#[must_use]
pub struct Query {
    sql: String,
    params: Vec<Param>,
    tag: Option<&'static str>,
}

/// Create a new query with the given SQL
pub fn query(sql: impl Into<String>) -> Query {
    Query {
        sql: sql.into(),
        params: Vec::new(),
        tag: None,
    }
}

impl Query {
    /// Associate a tag for logging, e.g. `"companies.update"`.
    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Bind the next parameter.
    pub fn bind<T: ToSql + Sync + Send + 'static>(mut self, value: T) -> Self {
        self.params.push(Param::new(value));
        self
    }

    /// Bind already-wrapped parameters in order.
    pub fn bind_all(mut self, values: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(values);
        self
    }

    /// The SQL text as it will be sent.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Number of bound parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    #[cfg(feature = "tracing")]
    fn trace(&self) {
        let sql = truncate_sql_bytes(&self.sql, MAX_LOGGED_SQL_BYTES);
        tracing::debug!(
            target: "jobly.sql",
            tag = self.tag.unwrap_or("-"),
            params = self.params.len(),
            sql,
            "executing statement"
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn trace(&self) {}

    /// Execute the query and return all rows
    pub async fn fetch_all(&self, conn: &impl GenericClient) -> JoblyResult<Vec<Row>> {
        self.trace();
        conn.query(&self.sql, &self.params_ref()).await
    }

    /// Execute the query and return all rows mapped to type T
    pub async fn fetch_all_as<T: FromRow>(&self, conn: &impl GenericClient) -> JoblyResult<Vec<T>> {
        let rows = self.fetch_all(conn).await?;
        rows.iter().map(T::from_row).collect()
    }

    /// Execute the query and return exactly one row mapped to type T
    ///
    /// Zero rows is [`crate::JoblyError::NotFound`].
    pub async fn fetch_one_as<T: FromRow>(&self, conn: &impl GenericClient) -> JoblyResult<T> {
        self.trace();
        let row = conn.query_one(&self.sql, &self.params_ref()).await?;
        T::from_row(&row)
    }

    /// Execute the query and return at most one row mapped to type T
    pub async fn fetch_opt_as<T: FromRow>(
        &self,
        conn: &impl GenericClient,
    ) -> JoblyResult<Option<T>> {
        self.trace();
        let row = conn.query_opt(&self.sql, &self.params_ref()).await?;
        row.as_ref().map(T::from_row).transpose()
    }

    /// Execute the statement and return the number of affected rows
    pub async fn execute(&self, conn: &impl GenericClient) -> JoblyResult<u64> {
        self.trace();
        conn.execute(&self.sql, &self.params_ref()).await
    }
}

#[cfg(feature = "tracing")]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
