//! Tests de integración de la pasarela HTTP contra un servidor mock.

mod support;

use httpmock::Method::{DELETE, GET};
use httpmock::MockServer;
use reqwest::Method;
use serde_json::{json, Value};

use autoprokat_client::ApiError;

#[tokio::test]
async fn test_attaches_bearer_token_when_session_present() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());
    h.session.set_session("tok-123".into(), None);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/bookings")
            .header("authorization", "Bearer tok-123");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let bookings: Vec<Value> = h
        .gateway
        .request("bookings", Method::GET, None, &[], true)
        .await
        .unwrap();

    assert!(bookings.is_empty());
    mock.assert();
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_unauthenticated_request_aborts_before_network() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());

    let mock = server.mock(|when, then| {
        when.method(GET).path("/bookings");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let result: Result<Vec<Value>, _> = h
        .gateway
        .request("bookings", Method::GET, None, &[], true)
        .await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(mock.hits(), 0);
    assert_eq!(h.navigator.login_redirects(), 1);
    assert_eq!(h.notifier.error_count(), 1);
}

#[tokio::test]
async fn test_401_clears_credential_once_and_redirects() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());
    h.session.set_session("stale-token".into(), None);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/bookings");
        then.status(401)
            .header("content-type", "application/json")
            .json_body(json!({ "message": "Token expired" }));
    });

    let result: Result<Vec<Value>, _> = h
        .gateway
        .request("bookings", Method::GET, None, &[], true)
        .await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert_eq!(mock.hits(), 1);
    assert!(h.session.token().is_none());
    assert_eq!(h.navigator.login_redirects(), 1);
    assert_eq!(h.notifier.error_count(), 1);

    // el reintento no puede reutilizar la credencial antigua: se aborta
    // antes de tocar la red
    let retry: Result<Vec<Value>, _> = h
        .gateway
        .request("bookings", Method::GET, None, &[], true)
        .await;

    assert!(matches!(retry, Err(ApiError::Unauthorized)));
    assert_eq!(mock.hits(), 1);
    assert_eq!(h.navigator.login_redirects(), 2);
}

#[tokio::test]
async fn test_extracts_error_message_from_body() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());

    server.mock(|when, then| {
        when.method(GET).path("/cars/99");
        then.status(404)
            .header("content-type", "application/json")
            .json_body(json!({ "message": "Car not found" }));
    });

    let result: Result<Value, _> = h
        .gateway
        .request("cars/99", Method::GET, None, &[], false)
        .await;

    match result {
        Err(ApiError::Http { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Car not found");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(h.notifier.error_count(), 1);
}

#[tokio::test]
async fn test_falls_back_to_status_line_without_error_body() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());

    server.mock(|when, then| {
        when.method(GET).path("/cars");
        then.status(500).body("boom");
    });

    let result: Result<Value, _> = h
        .gateway
        .request("cars", Method::GET, None, &[], false)
        .await;

    match result {
        Err(ApiError::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "500 Internal Server Error");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_body_success_yields_empty_result() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());
    h.session.set_session("tok-123".into(), None);

    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/cars/7");
        then.status(204);
    });

    let result: Result<(), _> = h
        .gateway
        .request("cars/7", Method::DELETE, None, &[], true)
        .await;

    assert!(result.is_ok());
    mock.assert();
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_absolute_endpoint_is_not_double_prefixed() {
    let server = MockServer::start();
    // base deliberadamente errónea: el endpoint absoluto debe ignorarla
    let h = support::harness("http://misconfigured.invalid/api");

    let mock = server.mock(|when, then| {
        when.method(GET).path("/cars/categories");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!(["sedan", "suv"]));
    });

    let categories: Vec<String> = h
        .gateway
        .request(&server.url("/cars/categories"), Method::GET, None, &[], false)
        .await
        .unwrap();

    assert_eq!(categories, vec!["sedan".to_string(), "suv".to_string()]);
    mock.assert();
}

#[tokio::test]
async fn test_query_parameters_are_sent() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cars/3/availability")
            .query_param("startDate", "2025-06-01")
            .query_param("endDate", "2025-06-04");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "available": true }));
    });

    let query = vec![
        ("startDate".to_string(), "2025-06-01".to_string()),
        ("endDate".to_string(), "2025-06-04".to_string()),
    ];
    let response: Value = h
        .gateway
        .request("cars/3/availability", Method::GET, None, &query, false)
        .await
        .unwrap();

    assert_eq!(response["available"], true);
    mock.assert();
}

#[tokio::test]
async fn test_request_in_flight_completes_with_stale_credential() {
    let server = MockServer::start();
    let h = support::harness(&server.base_url());
    h.session.set_session("tok-slow".into(), None);

    let slow = server.mock(|when, then| {
        when.method(GET)
            .path("/bookings")
            .header("authorization", "Bearer tok-slow");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]))
            .delay(std::time::Duration::from_millis(300));
    });

    let gateway = h.gateway.clone();
    let handle = tokio::spawn(async move {
        gateway
            .request::<Vec<Value>>("bookings", Method::GET, None, &[], true)
            .await
    });

    // la invalidación llega con la petición ya en vuelo
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    h.session.clear();

    let bookings = handle.await.unwrap().unwrap();
    assert!(bookings.is_empty());
    assert_eq!(slow.hits(), 1);
    assert!(h.session.token().is_none());
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn test_network_failure_notifies_once_and_propagates() {
    // puerto cerrado: fallo de transporte sin respuesta HTTP
    let h = support::harness("http://127.0.0.1:1/api");

    let result: Result<Value, _> = h
        .gateway
        .request("cars", Method::GET, None, &[], false)
        .await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(h.notifier.error_count(), 1);
}
