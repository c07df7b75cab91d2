use super::SqlFragment;
use crate::error::JoblyResult;
use crate::param::{Param, ParamList};

/// One search predicate over a storage column.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// `column >= $n`
    AtLeast { column: &'static str, value: Param },
    /// `column <= $n`
    AtMost { column: &'static str, value: Param },
    /// `column ILIKE $n`; `pattern` already carries its wildcards.
    ILike {
        column: &'static str,
        pattern: String,
    },
    /// `(column > 0) = $n`, bound to `true`.
    Positive { column: &'static str },
}

impl Predicate {
    pub fn at_least<T>(column: &'static str, value: T) -> Self
    where
        T: tokio_postgres::types::ToSql + Send + Sync + 'static,
    {
        Predicate::AtLeast {
            column,
            value: Param::new(value),
        }
    }

    pub fn at_most<T>(column: &'static str, value: T) -> Self
    where
        T: tokio_postgres::types::ToSql + Send + Sync + 'static,
    {
        Predicate::AtMost {
            column,
            value: Param::new(value),
        }
    }

    pub fn ilike(column: &'static str, pattern: impl Into<String>) -> Self {
        Predicate::ILike {
            column,
            pattern: pattern.into(),
        }
    }

    pub fn positive(column: &'static str) -> Self {
        Predicate::Positive { column }
    }

    fn build(self, params: &mut ParamList) -> String {
        match self {
            Predicate::AtLeast { column, value } => {
                let idx = params.push_param(value);
                format!("{column} >= ${idx}")
            }
            Predicate::AtMost { column, value } => {
                let idx = params.push_param(value);
                format!("{column} <= ${idx}")
            }
            Predicate::ILike { column, pattern } => {
                let idx = params.push_param(Param::new(pattern));
                format!("{column} ILIKE ${idx}")
            }
            Predicate::Positive { column } => {
                let idx = params.push_param(Param::new(true));
                format!("({column} > 0) = ${idx}")
            }
        }
    }
}

/// Join `predicates` with `AND`, numbering placeholders from `offset + 1`.
///
/// No predicates yields an empty fragment with no values.
pub fn where_clause(predicates: impl IntoIterator<Item = Predicate>, offset: usize) -> SqlFragment {
    let mut params = ParamList::starting_after(offset);
    let parts: Vec<String> = predicates
        .into_iter()
        .map(|p| p.build(&mut params))
        .collect();
    SqlFragment::new(parts.join(" AND "), params)
}

/// Wrap `needle` for a substring `ILIKE`, escaping its own wildcards.
pub fn contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// The recognized search filters of one resource.
pub trait FilterCriteria {
    /// Cross-field checks that must pass before any predicate is built.
    fn validate(&self) -> JoblyResult<()> {
        Ok(())
    }

    /// One predicate per filter that is present, in a fixed order.
    fn predicates(&self) -> Vec<Predicate>;

    /// Validate, then build the `WHERE` body starting after `offset`.
    fn to_where(&self, offset: usize) -> JoblyResult<SqlFragment> {
        self.validate()?;
        Ok(where_clause(self.predicates(), offset))
    }
}
