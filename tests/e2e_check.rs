//! End-to-end tests for the check pipeline

use std::fs;

use mockito::{Matcher, Mock, ServerGuard};
use tempfile::TempDir;

use unifi_release_watch::checker::{self, Outcome};
use unifi_release_watch::config::ResolverConfig;
use unifi_release_watch::output::OutputTarget;
use unifi_release_watch::release::resolver::ReleaseResolver;
use unifi_release_watch::store::ledger;

const GROUPS_BODY: &str = r#"{
    "data": {
        "publicReleaseGroups": [
            {"id": "g-protect", "title": "UniFi Protect"},
            {"id": "g-network", "title": "UniFi Network Application"}
        ]
    }
}"#;

const HISTORY_BODY: &str = r#"{
    "data": {
        "releases": {
            "items": [
                {"version": "9.4.0-beta.1", "stage": "BETA", "slug": "beta-slug"},
                {"version": "9.3.45", "stage": "GA", "slug": "unifi-network-application-9-3-45"}
            ]
        }
    }
}"#;

async fn mock_api(server: &mut ServerGuard) -> (Mock, Mock) {
    let groups = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "operationName": "GetPublicReleaseGroups"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(GROUPS_BODY)
        .create_async()
        .await;
    let history = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "operationName": "GetReleaseVersionHistory",
            "variables": {"groupId": "g-network", "betas": null, "alphas": null}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HISTORY_BODY)
        .create_async()
        .await;
    (groups, history)
}

fn resolver_for(server: &ServerGuard) -> ReleaseResolver {
    let config = ResolverConfig {
        endpoint: format!("{}/graphql", server.url()),
        ..ResolverConfig::default()
    };
    ReleaseResolver::new(&config)
}

#[tokio::test]
async fn a_new_version_flows_into_the_step_output_file() {
    // 1. Mock API where 9.3.45 is the newest GA release
    let mut server = mockito::Server::new_async().await;
    let (groups, history) = mock_api(&mut server).await;

    // 2. Ledger only knows the previous version
    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("versions.txt");
    fs::write(&ledger_path, "9.3.43\n").unwrap();

    // 3. Resolve, compare, emit
    let latest = resolver_for(&server).resolve_latest_ga().await.unwrap();
    let known = ledger::load_known_versions(&ledger_path).unwrap();
    let outcome = checker::detect(&latest, &known);

    let output_path = dir.path().join("step-output");
    OutputTarget::File(output_path.clone()).emit(&outcome).unwrap();

    groups.assert_async().await;
    history.assert_async().await;
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "new_version=9.3.45\n\
         release_slug=unifi-network-application-9-3-45\n\
         release_url=https://community.ui.com/releases/unifi-network-application-9-3-45\n"
    );
}

#[tokio::test]
async fn a_known_version_emits_empty_step_outputs() {
    // 1. Mock API where the newest GA release is already in the ledger
    let mut server = mockito::Server::new_async().await;
    let (groups, history) = mock_api(&mut server).await;

    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("versions.txt");
    fs::write(&ledger_path, "9.3.43\n9.3.45\n").unwrap();

    // 2. Resolve, compare, emit
    let latest = resolver_for(&server).resolve_latest_ga().await.unwrap();
    let known = ledger::load_known_versions(&ledger_path).unwrap();
    let outcome = checker::detect(&latest, &known);

    let output_path = dir.path().join("step-output");
    OutputTarget::File(output_path.clone()).emit(&outcome).unwrap();

    groups.assert_async().await;
    history.assert_async().await;
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "new_version=\nrelease_slug=\nrelease_url=\n"
    );
}

#[tokio::test]
async fn a_missing_ledger_treats_every_version_as_new() {
    let mut server = mockito::Server::new_async().await;
    let (groups, history) = mock_api(&mut server).await;

    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("versions.txt");

    let latest = resolver_for(&server).resolve_latest_ga().await.unwrap();
    let known = ledger::load_known_versions(&ledger_path).unwrap();
    let outcome = checker::detect(&latest, &known);

    groups.assert_async().await;
    history.assert_async().await;
    assert!(matches!(outcome, Outcome::NewVersion { .. }));
}

#[tokio::test]
async fn an_api_error_stops_the_pipeline_before_emission() {
    // The errors array wins even though data looks usable
    let mut server = mockito::Server::new_async().await;
    let groups = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "operationName": "GetPublicReleaseGroups"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "data": {"publicReleaseGroups": [{"id": "g-network", "title": "UniFi Network Application"}]},
                "errors": [{"message": "service degraded"}]
            }"#,
        )
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("step-output");

    let result = resolver_for(&server).resolve_latest_ga().await;

    groups.assert_async().await;
    assert!(result.is_err());
    // Nothing was emitted because resolution never produced an outcome
    assert!(!output_path.exists());
}
