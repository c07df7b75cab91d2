use super::SqlFragment;
use crate::error::{JoblyError, JoblyResult};
use crate::mapper::{ColumnMap, column_name};
use crate::param::{Param, ParamList};

/// Build the `SET` list of a partial update.
///
/// Produces `"col_a"=$1, "col_b"=$2, ...` in the iteration order of `fields`,
/// mapping each field name through `columns`. Fails with
/// [`JoblyError::Validation`] when `fields` is empty.
///
/// Values are bound as given; type and range checks belong to the caller.
pub fn partial_update<I, K>(fields: I, columns: ColumnMap) -> JoblyResult<SqlFragment>
where
    I: IntoIterator<Item = (K, Param)>,
    K: AsRef<str>,
{
    let mut params = ParamList::new();
    let mut sql = String::new();

    for (field, value) in fields {
        if !params.is_empty() {
            sql.push_str(", ");
        }
        let idx = params.push_param(value);
        push_quoted(&mut sql, column_name(field.as_ref(), columns));
        sql.push_str(&format!("=${idx}"));
    }

    if params.is_empty() {
        return Err(JoblyError::validation("No data"));
    }

    Ok(SqlFragment::new(sql, params))
}

/// Append `name` as a quoted identifier, doubling embedded quotes.
fn push_quoted(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}
