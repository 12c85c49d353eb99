//! Integration tests for `DremioClient` using wiremock to mock the REST API.

use lakescan_client::{DremioClient, DremioConfig, JobState};
use lakescan_core::{collect_catalog, CatalogSource, Error, SourceSelector, SpaceSelector};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DremioClient {
    DremioClient::new(DremioConfig::new(server.uri(), "pat-123")).unwrap()
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog"))
        .and(header("authorization", "Bearer pat-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let root = client.root_catalog().await.unwrap();
    assert!(root.data.is_empty());
}

#[tokio::test]
async fn non_success_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.root_catalog().await.unwrap_err();
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "unauthorized");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn grants_endpoint_missing_key_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/abc/grants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let grants = client.object_grants("abc").await.unwrap();
    assert!(grants.grants.is_none());
}

#[tokio::test]
async fn graph_endpoint_parses_parents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/v1/graph"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "parents": [
                { "id": "p1", "path": ["src", "tbl"], "datasetType": "PHYSICAL_DATASET" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let graph = client.dataset_graph("v1").await.unwrap();
    let parents = graph.parents.unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].id, "p1");
    assert_eq!(parents[0].dataset_type, "PHYSICAL_DATASET");
}

#[tokio::test]
async fn dataset_id_resolution_strips_quotes_and_splits_on_dots() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/by-path/space/folder/view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "d-42" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client.get_dataset_id("\"space\".\"folder\".\"view\"").await.unwrap();
    assert_eq!(id, "d-42");
}

#[tokio::test]
async fn missing_dataset_id_maps_to_empty_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/by-path/nope"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "errorMessage": "x" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client.get_dataset_id("nope").await.unwrap();
    assert_eq!(id, "");
}

#[tokio::test]
async fn sql_submission_waits_for_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/sql"))
        .and(body_json(serde_json::json!({ "sql": "SELECT 1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "job-1" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/job/job-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "jobState": "COMPLETED" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job_id = client.post_sql_query("SELECT 1").await.unwrap();
    assert_eq!(job_id, "job-1");
}

#[tokio::test]
async fn failed_job_state_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/job/job-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "jobState": "FAILED", "errorMessage": "boom" }),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let state = client.get_query_info("job-9").await.unwrap();
    assert_eq!(state, JobState::Failed);

    let err = client.get_query_data("job-9", 500).await.unwrap_err();
    assert!(matches!(err, Error::JobFailed { .. }));
}

#[tokio::test]
async fn query_results_are_paged_until_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/job/job-2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "jobState": "COMPLETED" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/job/job-2/results"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rows": [ { "n": 1 }, { "n": 2 } ],
            "columns": [ { "name": "n" } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/job/job-2/results"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rows": [],
            "columns": [ { "name": "n" } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client.get_query_data("job-2", 2).await.unwrap();
    assert_eq!(data.rows.len(), 2);
    assert_eq!(data.columns.len(), 1);
}

#[tokio::test]
async fn end_to_end_crawl_against_mocked_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [ { "id": "s1", "path": ["srcA"], "containerType": "SOURCE" } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "entityType": "source",
            "name": "srcA",
            "children": [
                { "id": "p1", "path": ["srcA", "orders"], "type": "DATASET", "datasetType": "PROMOTED" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/s1/grants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/catalog/p1/grants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "grants": [ { "granteeType": "USER", "name": "alice", "privileges": ["SELECT"] } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = collect_catalog(
        &client,
        &SpaceSelector::default(),
        &SourceSelector::match_all(),
    )
    .await
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "s1");
    assert_eq!(entries[0].object_type, "source");
    assert_eq!(entries[1].id, "p1");
    assert_eq!(entries[1].parent, vec!["srcA".to_string()]);
    assert_eq!(
        entries[1].grants.as_ref().unwrap()[0].privileges,
        vec!["SELECT".to_string()]
    );
}
