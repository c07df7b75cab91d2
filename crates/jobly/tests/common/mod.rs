#![allow(dead_code)]

use jobly::{Company, CompanyRepository, Decimal, Job, JobRepository, NewCompany, NewJob};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio_postgres::{Client, NoTls};

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

/// A connection whose `search_path` points at a throwaway schema.
pub struct TestDb {
    pub client: Client,
    schema: String,
}

impl TestDb {
    /// Connect to `DATABASE_URL` and create the fixture tables in a fresh
    /// schema. Returns `None` (after saying so) when the variable is unset.
    pub async fn connect(test_name: &str) -> Option<Self> {
        let _ = dotenvy::dotenv();
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(v) => v,
            Err(_) => {
                eprintln!("DATABASE_URL is not set; skipping {test_name}");
                return None;
            }
        };

        let (client, connection) = tokio_postgres::connect(&database_url, NoTls)
            .await
            .expect("Failed to connect to DATABASE_URL with NoTls");
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("tokio-postgres connection error: {e}");
            }
        });

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX_EPOCH")
            .as_nanos();
        let schema = format!("jobly_test_{}_{}", std::process::id(), nanos);

        client
            .batch_execute(&format!(
                "CREATE SCHEMA {schema}; SET search_path TO {schema}; {SCHEMA_SQL}"
            ))
            .await
            .expect("create test schema");

        Some(Self { client, schema })
    }

    pub async fn teardown(self) {
        self.client
            .batch_execute(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .await
            .expect("drop test schema");
    }

    /// Three companies (c1..c3 with 1..3 employees) and three jobs on c1.
    pub async fn seed(&self) -> Vec<Job> {
        for n in 1..=3 {
            CompanyRepository::create(&self.client, new_company(&format!("c{n}"), Some(n)))
                .await
                .expect("seed company");
        }

        let mut jobs = Vec::new();
        for (title, salary, equity) in [
            ("j1", 100_000, Some(Decimal::new(1, 1))),
            ("j2", 200_000, Some(Decimal::ZERO)),
            ("j3", 300_000, None),
        ] {
            let job = JobRepository::create(
                &self.client,
                NewJob {
                    title: title.to_string(),
                    salary: Some(salary),
                    equity,
                    company_handle: "c1".to_string(),
                },
            )
            .await
            .expect("seed job");
            jobs.push(job);
        }
        jobs
    }
}

pub fn new_company(handle: &str, num_employees: Option<i32>) -> NewCompany {
    NewCompany {
        handle: handle.to_string(),
        name: handle.to_uppercase(),
        description: format!("Desc{handle}"),
        num_employees,
        logo_url: Some(format!("http://{handle}.img")),
    }
}

pub fn handles(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.handle.as_str()).collect()
}
