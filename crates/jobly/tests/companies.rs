//! Company repository against a live database.
//!
//! Each test skips when `DATABASE_URL` is not set.

mod common;

use common::{TestDb, handles, new_company};
use jobly::{
    Company, CompanyFilter, CompanyPatch, CompanyRepository, JobRepository, JoblyResult,
};

#[tokio::test]
async fn create_then_get_round_trips() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("create_then_get_round_trips").await else {
        return Ok(());
    };

    let data = new_company("new", Some(10));
    let created = CompanyRepository::create(&db.client, data.clone()).await?;
    assert_eq!(
        created,
        Company {
            handle: data.handle.clone(),
            name: data.name.clone(),
            description: data.description.clone(),
            num_employees: data.num_employees,
            logo_url: data.logo_url.clone(),
        }
    );

    let fetched = CompanyRepository::get(&db.client, "new").await?;
    assert_eq!(fetched.company, created);
    assert!(fetched.jobs.is_empty());

    db.teardown().await;
    Ok(())
}

#[tokio::test]
async fn duplicate_handle_is_a_conflict() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("duplicate_handle_is_a_conflict").await else {
        return Ok(());
    };

    CompanyRepository::create(&db.client, new_company("dup", None)).await?;
    let mut again = new_company("dup", None);
    again.name = "Another name".into();
    let err = CompanyRepository::create(&db.client, again).await.unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");

    db.teardown().await;
    Ok(())
}

#[tokio::test]
async fn get_attaches_jobs_ordered_by_id() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("get_attaches_jobs_ordered_by_id").await else {
        return Ok(());
    };
    let jobs = db.seed().await;

    let detail = CompanyRepository::get(&db.client, "c1").await?;
    let ids: Vec<i32> = detail.jobs.iter().map(|j| j.id).collect();
    let expected: Vec<i32> = jobs.iter().map(|j| j.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(detail.jobs[0].title, "j1");

    let other = CompanyRepository::get(&db.client, "c2").await?;
    assert!(other.jobs.is_empty());

    let err = CompanyRepository::get(&db.client, "nope").await.unwrap_err();
    assert!(err.is_not_found());

    db.teardown().await;
    Ok(())
}

#[tokio::test]
async fn list_applies_filters() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("list_applies_filters").await else {
        return Ok(());
    };
    db.seed().await;

    let all = CompanyRepository::list(&db.client, &CompanyFilter::default()).await?;
    assert_eq!(handles(&all), ["c1", "c2", "c3"]);

    let mid = CompanyRepository::list(
        &db.client,
        &CompanyFilter {
            min_employees: Some(2),
            max_employees: Some(2),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(handles(&mid), ["c2"]);

    let at_least_two = CompanyRepository::list(
        &db.client,
        &CompanyFilter {
            min_employees: Some(2),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(handles(&at_least_two), ["c2", "c3"]);

    let by_name = CompanyRepository::list(
        &db.client,
        &CompanyFilter {
            name: Some("c3".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(handles(&by_name), ["c3"]);

    let none = CompanyRepository::list(
        &db.client,
        &CompanyFilter {
            name: Some("%".into()),
            ..Default::default()
        },
    )
    .await?;
    assert!(none.is_empty());

    db.teardown().await;
    Ok(())
}

#[tokio::test]
async fn list_bounds_include_and_reject() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("list_bounds_include_and_reject").await else {
        return Ok(());
    };

    CompanyRepository::create(&db.client, new_company("c1", Some(5))).await?;

    let found = CompanyRepository::list(
        &db.client,
        &CompanyFilter {
            min_employees: Some(3),
            max_employees: Some(10),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(handles(&found), ["c1"]);

    let err = CompanyRepository::list(
        &db.client,
        &CompanyFilter {
            min_employees: Some(10),
            max_employees: Some(3),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_validation());

    db.teardown().await;
    Ok(())
}

#[tokio::test]
async fn update_changes_only_supplied_fields() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("update_changes_only_supplied_fields").await else {
        return Ok(());
    };
    db.seed().await;

    let updated = CompanyRepository::update(
        &db.client,
        "c1",
        CompanyPatch {
            name: Some("New".into()),
            logo_url: Some(None),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(
        updated,
        Company {
            handle: "c1".into(),
            name: "New".into(),
            description: "Descc1".into(),
            num_employees: Some(1),
            logo_url: None,
        }
    );

    let err = CompanyRepository::update(&db.client, "c1", CompanyPatch::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = CompanyRepository::update(
        &db.client,
        "nope",
        CompanyPatch {
            name: Some("x".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found());

    db.teardown().await;
    Ok(())
}

#[tokio::test]
async fn delete_cascades_to_jobs() -> JoblyResult<()> {
    let Some(db) = TestDb::connect("delete_cascades_to_jobs").await else {
        return Ok(());
    };
    let jobs = db.seed().await;

    CompanyRepository::delete(&db.client, "c1").await?;

    let err = CompanyRepository::get(&db.client, "c1").await.unwrap_err();
    assert!(err.is_not_found());
    for job in jobs {
        let err = JobRepository::get(&db.client, job.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    let err = CompanyRepository::delete(&db.client, "c1").await.unwrap_err();
    assert!(err.is_not_found());

    db.teardown().await;
    Ok(())
}
