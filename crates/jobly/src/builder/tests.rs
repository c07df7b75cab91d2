use super::*;
use crate::mapper::{COMPANY_COLUMNS, ColumnMap};
use crate::models::{CompanyFilter, CompanyPatch, JobFilter, JobPatch};
use crate::param::Param;

const PERSON_COLUMNS: ColumnMap = &[("firstName", "first_name"), ("lastName", "last_name")];

fn debug_params(fragment: &SqlFragment) -> String {
    format!("{:?}", fragment.params())
}

// ==================== partial_update ====================

#[test]
fn update_single_field_uses_mapped_column() {
    let set = partial_update([("firstName", Param::new("Lisa".to_string()))], PERSON_COLUMNS)
        .unwrap();

    assert_eq!(set.sql(), r#""first_name"=$1"#);
    assert_eq!(debug_params(&set), r#"["Lisa"]"#);
    assert_eq!(set.next_placeholder(), 2);
}

#[test]
fn update_mixes_mapped_and_identity_columns() {
    let set = partial_update(
        [
            ("firstName", Param::new("Aliya".to_string())),
            ("age", Param::new(32_i32)),
        ],
        PERSON_COLUMNS,
    )
    .unwrap();

    assert_eq!(set.sql(), r#""first_name"=$1, "age"=$2"#);
    assert_eq!(debug_params(&set), r#"["Aliya", 32]"#);
}

#[test]
fn update_rejects_empty_input() {
    let err = partial_update(Vec::<(&str, Param)>::new(), PERSON_COLUMNS).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Validation error: No data");
}

#[test]
fn update_placeholders_are_contiguous_from_one() {
    for n in 1..=8 {
        let fields: Vec<(String, Param)> = (0..n)
            .map(|i| (format!("field{i}"), Param::new(i as i32)))
            .collect();
        let set = partial_update(fields, &[]).unwrap();

        assert_eq!(set.len(), n);
        let expected: Vec<String> = (0..n)
            .map(|i| format!("\"field{i}\"=${}", i + 1))
            .collect();
        assert_eq!(set.sql(), expected.join(", "));
        assert_eq!(set.next_placeholder(), n + 1);
    }
}

#[test]
fn update_escapes_quotes_in_field_names() {
    let set = partial_update([(r#"x"; DROP TABLE companies; --"#, Param::new(1_i32))], &[])
        .unwrap();
    assert_eq!(set.sql(), r#""x""; DROP TABLE companies; --"=$1"#);
}

#[test]
fn update_is_deterministic() {
    let build = || {
        let patch = CompanyPatch {
            name: Some("New".into()),
            logo_url: Some(Some("http://new.img".into())),
            ..Default::default()
        };
        partial_update(patch.into_changes(), COMPANY_COLUMNS).unwrap()
    };
    let (a, b) = (build(), build());
    assert_eq!(a.sql(), b.sql());
    assert_eq!(debug_params(&a), debug_params(&b));
}

#[test]
fn company_patch_uses_declaration_order_and_storage_columns() {
    let patch: CompanyPatch = serde_json::from_value(serde_json::json!({
        "logoUrl": "http://c1.img",
        "numEmployees": 10,
        "name": "C1 New",
    }))
    .unwrap();

    let set = partial_update(patch.into_changes(), COMPANY_COLUMNS).unwrap();
    assert_eq!(set.sql(), r#""name"=$1, "num_employees"=$2, "logo_url"=$3"#);
    assert_eq!(
        debug_params(&set),
        r#"["C1 New", Some(10), Some("http://c1.img")]"#
    );
}

#[test]
fn company_patch_null_clears_nullable_column() {
    let patch: CompanyPatch =
        serde_json::from_value(serde_json::json!({ "numEmployees": null })).unwrap();
    assert_eq!(patch.num_employees, Some(None));
    assert!(patch.logo_url.is_none());

    let set = partial_update(patch.into_changes(), COMPANY_COLUMNS).unwrap();
    assert_eq!(set.sql(), r#""num_employees"=$1"#);
    assert_eq!(debug_params(&set), "[None]");
}

#[test]
fn company_patch_rejects_handle() {
    let res: Result<CompanyPatch, _> =
        serde_json::from_value(serde_json::json!({ "handle": "other" }));
    assert!(res.is_err());
}

#[test]
fn empty_patches_fail_for_every_resource() {
    let company = partial_update(CompanyPatch::default().into_changes(), COMPANY_COLUMNS);
    assert!(company.unwrap_err().is_validation());

    let job = partial_update(JobPatch::default().into_changes(), crate::mapper::JOB_COLUMNS);
    assert!(job.unwrap_err().is_validation());
}

#[test]
fn job_patch_maps_company_handle() {
    let patch = JobPatch {
        salary: Some(Some(90_000)),
        company_handle: Some("c2".into()),
        ..Default::default()
    };
    let set = partial_update(patch.into_changes(), crate::mapper::JOB_COLUMNS).unwrap();
    assert_eq!(set.sql(), r#""salary"=$1, "company_handle"=$2"#);
}

// ==================== where_clause / FilterCriteria ====================

#[test]
fn no_filters_build_an_empty_clause() {
    let clause = CompanyFilter::default().to_where(0).unwrap();
    assert!(clause.is_empty());
    assert_eq!(clause.len(), 0);
    assert_eq!(clause.next_placeholder(), 1);

    let clause = JobFilter::default().to_where(0).unwrap();
    assert!(clause.is_empty());
}

#[test]
fn employee_bounds_compare_in_the_right_direction() {
    let filter = CompanyFilter {
        min_employees: Some(3),
        max_employees: Some(10),
        ..Default::default()
    };
    let clause = filter.to_where(0).unwrap();

    assert_eq!(
        clause.sql(),
        "num_employees >= $1 AND num_employees <= $2"
    );
    assert_eq!(debug_params(&clause), "[3, 10]");
}

#[test]
fn single_bounds_build_single_predicates() {
    let min_only = CompanyFilter {
        min_employees: Some(5),
        ..Default::default()
    };
    assert_eq!(min_only.to_where(0).unwrap().sql(), "num_employees >= $1");

    let max_only = CompanyFilter {
        max_employees: Some(5),
        ..Default::default()
    };
    assert_eq!(max_only.to_where(0).unwrap().sql(), "num_employees <= $1");
}

#[test]
fn inverted_employee_bounds_are_rejected() {
    let filter = CompanyFilter {
        min_employees: Some(10),
        max_employees: Some(3),
        ..Default::default()
    };
    let err = filter.to_where(0).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn equal_employee_bounds_are_allowed() {
    let filter = CompanyFilter {
        min_employees: Some(4),
        max_employees: Some(4),
        ..Default::default()
    };
    assert!(filter.to_where(0).is_ok());
}

#[test]
fn name_filter_is_case_insensitive_substring() {
    let filter = CompanyFilter {
        name: Some("net".into()),
        min_employees: Some(1),
        ..Default::default()
    };
    let clause = filter.to_where(0).unwrap();

    assert_eq!(clause.sql(), "num_employees >= $1 AND name ILIKE $2");
    assert_eq!(debug_params(&clause), r#"[1, "%net%"]"#);
}

#[test]
fn empty_name_is_ignored() {
    let filter = CompanyFilter {
        name: Some(String::new()),
        ..Default::default()
    };
    assert!(filter.to_where(0).unwrap().is_empty());
}

#[test]
fn numbering_continues_after_offset() {
    let filter = CompanyFilter {
        min_employees: Some(1),
        name: Some("a".into()),
        ..Default::default()
    };
    let clause = filter.to_where(3).unwrap();

    assert_eq!(clause.sql(), "num_employees >= $4 AND name ILIKE $5");
    assert_eq!(clause.len(), 2);
    assert_eq!(clause.next_placeholder(), 6);
}

#[test]
fn job_filters_compose() {
    let filter = JobFilter {
        title: Some("eng".into()),
        min_salary: Some(50_000),
        has_equity: Some(true),
    };
    let clause = filter.to_where(0).unwrap();

    assert_eq!(
        clause.sql(),
        "title ILIKE $1 AND salary >= $2 AND (equity > 0) = $3"
    );
    assert_eq!(debug_params(&clause), r#"["%eng%", 50000, true]"#);
}

#[test]
fn has_equity_false_adds_no_constraint() {
    let filter = JobFilter {
        has_equity: Some(false),
        ..Default::default()
    };
    assert!(filter.to_where(0).unwrap().is_empty());
}

#[test]
fn where_clause_accepts_explicit_predicates() {
    let clause = where_clause(
        [
            Predicate::at_most("salary", 10_i32),
            Predicate::positive("equity"),
        ],
        0,
    );
    assert_eq!(clause.sql(), "salary <= $1 AND (equity > 0) = $2");
}

#[test]
fn contains_pattern_escapes_wildcards() {
    assert_eq!(contains_pattern("net"), "%net%");
    assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
    assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
}
