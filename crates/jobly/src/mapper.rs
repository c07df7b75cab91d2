//! External field name → storage column name.
//!
//! Each resource owns a small closed table of overrides. Fields not listed
//! are assumed to share their name with the column.

/// Pairs of `(api_field, column)`.
pub type ColumnMap = &'static [(&'static str, &'static str)];

/// Company overrides.
pub const COMPANY_COLUMNS: ColumnMap = &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")];

/// Job overrides.
pub const JOB_COLUMNS: ColumnMap = &[("companyHandle", "company_handle")];

/// Map `field` through `map`, falling back to `field` itself.
pub fn column_name<'a>(field: &'a str, map: ColumnMap) -> &'a str {
    map.iter()
        .find(|(api, _)| *api == field)
        .map(|(_, column)| *column)
        .unwrap_or(field)
}
