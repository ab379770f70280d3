use gymhub_domain::config::ApiConfig;
use gymhub_domain::{Client, PersonStatus, Product};
use gymhub_http::{ApiClient, ApiError, CANNOT_CONNECT, Collection};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig { base_url: format!("{}/api", server.uri()), ..ApiConfig::default() })
        .unwrap()
}

fn client_json(folio: &str, nombre: &str) -> serde_json::Value {
    json!({
        "folio": folio,
        "nombre": nombre,
        "apellidoPaterno": "Ruiz",
        "email": "ana@gym.mx",
        "estatus": "Activo",
        "fechaRegistro": "2024-03-01T10:00:00"
    })
}

#[tokio::test]
async fn lists_and_gets_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clientes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([client_json("CLI001", "Ana"), client_json("CLI002", "Eva")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/clientes/CLI002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json("CLI002", "Eva")))
        .expect(1)
        .mount(&server)
        .await;

    let clients = Collection::<Client>::new(api(&server));
    let all = clients.list().await.unwrap();
    assert_eq!(all.iter().map(|c| c.folio.as_str()).collect::<Vec<_>>(), ["CLI001", "CLI002"]);
    assert_eq!(all[0].estatus, PersonStatus::Active);

    let eva = clients.get("CLI002").await.unwrap();
    assert_eq!(eva.nombre, "Eva");
}

#[tokio::test]
async fn search_sends_term_and_blank_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos/buscar"))
        .and(query_param("termino", "agua"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "nombre": "Agua 1L", "precio": 15.0, "stock": 40 }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let products = Collection::<Product>::new(api(&server));
    let hits = products.search("  agua ").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_ref().map(ToString::to_string).as_deref(), Some("3"));

    assert!(products.search("   ").await.unwrap().is_empty());
}

#[tokio::test]
async fn create_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clientes"))
        .and(body_partial_json(json!({ "folio": "CLI003", "apellidoPaterno": "Ruiz" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(client_json("CLI003", "Ana")))
        .expect(1)
        .mount(&server)
        .await;

    let clients = Collection::<Client>::new(api(&server));
    let draft: Client = serde_json::from_value(client_json("CLI003", "Ana")).unwrap();
    let created = clients.create(&draft).await.unwrap();
    assert_eq!(created.folio, "CLI003");
}

#[tokio::test]
async fn conflict_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/clientes/CLI001"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({ "mensaje": "El cliente tiene membresías activas" })),
        )
        .mount(&server)
        .await;

    let clients = Collection::<Client>::new(api(&server));
    let err = clients.delete("CLI001").await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message("Could not delete client"), "El cliente tiene membresías activas");
}

#[tokio::test]
async fn not_found_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clientes/CLI404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Not Found" })))
        .mount(&server)
        .await;

    let clients = Collection::<Client>::new(api(&server));
    let err = clients.get("CLI404").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.user_message("Could not load client"), "Could not load client");
}

#[tokio::test]
async fn unreachable_backend_reports_cannot_connect() {
    // Bind then release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{port}/api");

    let api = ApiClient::new(&ApiConfig {
        base_url: base,
        connect_timeout_secs: 1,
        timeout_secs: 2,
    })
    .unwrap();
    let err = Collection::<Client>::new(api).list().await.unwrap_err();
    assert_eq!(err.status(), Some(0));
    assert_eq!(err.user_message("x"), CANNOT_CONNECT);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clientes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let err = Collection::<Client>::new(api(&server)).list().await.unwrap_err();
    assert_eq!(err.kind(), "Decode");
    assert_eq!(err.status(), None);
}
