//! Clause builders for dynamic statements.
//!
//! Two builders produce [`SqlFragment`]s:
//! - [`partial_update`] turns a set of changed fields into a `SET` list.
//! - [`FilterCriteria::to_where`] turns optional search filters into the body
//!   of a `WHERE` clause.
//!
//! A fragment is never mutated once built. Its placeholders are numbered
//! contiguously, starting after whatever offset it was built with, and its
//! value list is in placeholder order.
//!
//! ```ignore
//! let set = partial_update(patch.into_changes(), COMPANY_COLUMNS)?;
//! let sql = format!(
//!     "UPDATE companies SET {} WHERE handle = ${}",
//!     set.sql(),
//!     set.next_placeholder(),
//! );
//! ```

mod filter;
mod update;

#[cfg(test)]
mod tests;

pub use filter::{FilterCriteria, Predicate, contains_pattern, where_clause};
pub use update::partial_update;

use crate::param::{Param, ParamList};

/// A rendered clause and the values bound to its placeholders.
#[derive(Debug, Clone)]
pub struct SqlFragment {
    sql: String,
    offset: usize,
    params: Vec<Param>,
}

impl SqlFragment {
    pub(crate) fn new(sql: String, params: ParamList) -> Self {
        Self {
            sql,
            offset: params.offset(),
            params: params.into_params(),
        }
    }

    /// The clause text, without a leading keyword.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, in placeholder order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of placeholders in the fragment.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `true` when the fragment holds no clause at all.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// The index the next placeholder after this fragment must use.
    pub fn next_placeholder(&self) -> usize {
        self.offset + self.params.len() + 1
    }

    pub fn into_params(self) -> Vec<Param> {
        self.params
    }
}
