//! Parameter storage shared by the clause builders and [`crate::Query`].

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly bound value.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.0, f)
    }
}

/// An append-only list of parameters whose placeholder numbering may start
/// after values already bound earlier in the same statement.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    offset: usize,
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty parameter list numbered from `$1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list whose first placeholder is `$offset + 1`.
    pub fn starting_after(offset: usize) -> Self {
        Self {
            offset,
            params: Vec::new(),
        }
    }

    /// Add a parameter and return its 1-based placeholder index.
    pub fn push_param(&mut self, param: Param) -> usize {
        self.params.push(param);
        self.offset + self.params.len()
    }

    /// Number of parameters held by this list (the offset is not counted).
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn into_params(self) -> Vec<Param> {
        self.params
    }
}
