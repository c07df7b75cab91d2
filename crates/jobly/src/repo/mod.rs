//! Repositories for the two resources.
//!
//! Every operation takes the connection to run on, so callers can pass a
//! pooled client or an open transaction. Each operation is a single
//! statement except [`CompanyRepository::get`], which issues a second query
//! for the company's jobs.

mod company;
mod job;


pub use company::CompanyRepository;
pub use job::JobRepository;

use crate::builder::SqlFragment;
use crate::query::{Query, query};

/// `SELECT <columns> FROM <table> [WHERE ...] ORDER BY <order_by>`
fn select_filtered(columns: &str, table: &str, clause: SqlFragment, order_by: &str) -> Query {
    let mut sql = format!("SELECT {columns} FROM {table}");
    if !clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(clause.sql());
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(order_by);
    query(sql).bind_all(clause.into_params())
}

/// `UPDATE <table> SET ... WHERE <key> = $n RETURNING <columns>`, key unbound.
fn update_returning(table: &str, set: &SqlFragment, key: &str, columns: &str) -> String {
    format!(
        "UPDATE {table} SET {} WHERE {key} = ${} RETURNING {columns}",
        set.sql(),
        set.next_placeholder()
    )
}
