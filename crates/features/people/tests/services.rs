use gymhub_domain::config::ApiConfig;
use gymhub_domain::{Administrator, Client, PersonStatus};
use gymhub_http::ApiClient;
use gymhub_people::{AdministratorService, ClientService, PeopleError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig { base_url: format!("{}/api", server.uri()), ..ApiConfig::default() })
        .unwrap()
}

fn client(folio: &str) -> Client {
    serde_json::from_value(json!({
        "folio": folio,
        "nombre": "Ana",
        "apellidoPaterno": "Ruiz",
        "telefono": "5512345678",
        "estatus": "Activo"
    }))
    .unwrap()
}

#[tokio::test]
async fn create_with_next_folio_uses_highest_suffix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clientes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "folio": "CLI001", "nombre": "A", "apellidoPaterno": "B" },
            { "folio": "CLI009", "nombre": "C", "apellidoPaterno": "D" },
            { "folio": "legacy-7", "nombre": "E", "apellidoPaterno": "F" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/clientes"))
        .and(body_partial_json(json!({ "folio": "CLI010" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "folio": "CLI010", "nombre": "Ana", "apellidoPaterno": "Ruiz", "estatus": "Activo"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = ClientService::new(api(&server)).create_with_next_folio(client("")).await.unwrap();
    assert_eq!(created.folio, "CLI010");
}

#[tokio::test]
async fn first_administrator_gets_adm001() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/administradores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let folio = AdministratorService::new(api(&server)).next_folio().await.unwrap();
    assert_eq!(folio, "ADM001");
}

#[tokio::test]
async fn invalid_record_is_never_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

    let admin: Administrator = serde_json::from_value(json!({
        "nombre": "Root",
        "apellidoPaterno": "Admin",
        "usuario": "",
        "email": "root@"
    }))
    .unwrap();

    let err = AdministratorService::new(api(&server)).create(&admin).await.unwrap_err();
    let PeopleError::Validation { source, .. } = &err else { panic!("expected validation error, got {err}") };
    assert!(source.has_field("usuario"));
    assert!(source.has_field("email"));
}

#[tokio::test]
async fn set_status_puts_whole_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clientes/CLI004"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "folio": "CLI004", "nombre": "Ana", "apellidoPaterno": "Ruiz", "estatus": "Activo"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/clientes/CLI004"))
        .and(body_partial_json(json!({ "estatus": "Inactivo", "nombre": "Ana" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "folio": "CLI004", "nombre": "Ana", "apellidoPaterno": "Ruiz", "estatus": "Inactivo"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated =
        ClientService::new(api(&server)).set_status("CLI004", PersonStatus::Inactive).await.unwrap();
    assert_eq!(updated.estatus, PersonStatus::Inactive);
}

#[tokio::test]
async fn duplicate_folio_message_reaches_operator() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clientes"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "El folio CLI001 ya existe" })),
        )
        .mount(&server)
        .await;

    let err = ClientService::new(api(&server)).create(&client("CLI001")).await.unwrap_err();
    assert_eq!(err.kind(), "Api");
    assert_eq!(err.user_message("Could not create client"), "El folio CLI001 ya existe");
    assert!(err.to_string().contains("Failed to create client"));
}
