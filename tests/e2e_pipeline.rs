//! Check run E2E tests with in-memory collaborators

mod helper;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use helper::{FakeRegistry, FakeRepository, index_html, test_config};
use ui5_eocp_check::action::error::ActionError;
use ui5_eocp_check::action::pipeline::{BuildStatus, EocpCheck};
use ui5_eocp_check::config::Target;
use ui5_eocp_check::version::urgency::UrgencyTier;

fn mid_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
}

fn setup(
    content: &str,
    registry: FakeRegistry,
) -> (Arc<FakeRepository>, Arc<FakeRegistry>, EocpCheck) {
    let repository = Arc::new(FakeRepository::new().with_file("webapp/index.html", content));
    let registry = Arc::new(registry);
    let check = EocpCheck::new(repository.clone(), registry.clone(), repository.clone());
    (repository, registry, check)
}

#[tokio::test]
async fn expired_version_is_reported_and_fails_build() {
    let (repository, _registry, check) = setup(
        &index_html("1.71.0"),
        FakeRegistry::new()
            .with_patch("1.96.8", "Q1/2029")
            .with_patch("1.71.0", "Q4/2022"),
    );

    let outcome = check.run(&test_config("42", true), mid_2024()).await.unwrap();

    assert_eq!(outcome.tier, UrgencyTier::Expired);
    assert_eq!(
        outcome.build_status,
        BuildStatus::Fail {
            message: "You need to update, eocp was last year or earlier.".to_string()
        }
    );

    let posted = repository.posted();
    assert_eq!(posted.len(), 1);
    let (target, report) = &posted[0];
    assert_eq!(*target, Target::PullRequest(42));
    assert!(report.body.contains("## SAPUI5 EOCP check (Q2/2024)"));
    assert!(report.body.contains("1.71.0"));
    assert!(report.body.contains("Q4/2022"));
    assert!(
        report
            .body
            .contains("You need to update, eocp was last year or earlier.")
    );
}

#[tokio::test]
async fn expired_version_passes_build_when_not_failing_on_urgent() {
    let (repository, _registry, check) = setup(
        &index_html("1.71.0"),
        FakeRegistry::new().with_patch("1.71.0", "Q4/2022"),
    );

    let outcome = check
        .run(&test_config("42", false), mid_2024())
        .await
        .unwrap();

    assert_eq!(outcome.tier, UrgencyTier::Expired);
    assert_eq!(outcome.build_status, BuildStatus::Pass);
    assert_eq!(repository.posted().len(), 1);
}

#[tokio::test]
async fn safe_version_opens_issue_when_targeting_new_issue() {
    let (repository, _registry, check) = setup(
        &index_html("1.96.8"),
        FakeRegistry::new().with_patch("1.96.8", "Q1/2029"),
    );

    let outcome = check
        .run(&test_config("new-issue", true), mid_2024())
        .await
        .unwrap();

    assert_eq!(outcome.tier, UrgencyTier::Safe);
    assert_eq!(outcome.build_status, BuildStatus::Pass);

    let posted = repository.posted();
    assert_eq!(posted[0].0, Target::NewIssue);
    assert_eq!(
        posted[0].1.title,
        "SAPUI5 1.96.8: end of cloud provisioning Q1/2029"
    );
}

#[tokio::test]
async fn missing_version_fails_with_lookup_error_and_posts_nothing() {
    let (repository, registry, check) = setup(
        &index_html("1.84.3"),
        FakeRegistry::new().with_patch("1.84.2", "Q3/2025"),
    );

    let result = check.run(&test_config("42", true), mid_2024()).await;

    assert!(matches!(result, Err(ActionError::Lookup { .. })));
    assert_eq!(registry.fetch_count(), 1);
    assert!(repository.posted().is_empty());
}

#[tokio::test]
async fn content_without_bootstrap_fails_without_querying_registry() {
    let (repository, registry, check) = setup(
        "<html><script src=\"resources/sap-ui-core.js\"></script></html>",
        FakeRegistry::new().with_patch("1.71.0", "Q4/2022"),
    );

    let result = check.run(&test_config("42", true), mid_2024()).await;

    assert!(matches!(result, Err(ActionError::Extraction { .. })));
    assert_eq!(registry.fetch_count(), 0);
    assert!(repository.posted().is_empty());
}

#[tokio::test]
async fn repeated_runs_with_fixed_time_produce_identical_reports() {
    let (repository, _registry, check) = setup(
        &index_html("1.71.0"),
        FakeRegistry::new().with_patch("1.71.0", "Q1/2024"),
    );
    let config = test_config("42", true);

    let first = check.run(&config, mid_2024()).await.unwrap();
    let second = check.run(&config, mid_2024()).await.unwrap();

    assert_eq!(first.tier, UrgencyTier::PastQuarter);
    assert_eq!(first.report, second.report);
    assert_eq!(first.build_status, second.build_status);
    assert!(first.build_status.is_failure());

    let posted = repository.posted();
    assert_eq!(posted[0].1, posted[1].1);
}
