use gymhub_domain::config::ApiConfig;
use gymhub_domain::{ClientMembership, PaymentMethod, PaymentStatus};
use gymhub_http::ApiClient;
use gymhub_payments::{PaymentError, PaymentService, ProductService};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig { base_url: format!("{}/api", server.uri()), ..ApiConfig::default() })
        .unwrap()
}

#[tokio::test]
async fn membership_payment_gets_next_folio_and_final_price() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pagos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "folio": "PAG041", "folioCliente": "CLI002", "monto": 100.0, "concepto": "Agua" },
            { "folio": "PAG007", "folioCliente": "CLI003", "monto": 80.0, "concepto": "Toalla" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/pagos"))
        .and(body_partial_json(json!({
            "folio": "PAG042",
            "folioCliente": "CLI001",
            "idClienteMembresia": 7,
            "monto": 1200.0,
            "metodoPago": "Tarjeta",
            "concepto": "Membresía Mensual",
            "estatus": "Completado"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "folio": "PAG042", "folioCliente": "CLI001", "monto": 1200.0, "metodoPago": "Tarjeta",
            "concepto": "Membresía Mensual", "estatus": "Completado", "fechaPago": "2025-03-01T10:15:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let membership: ClientMembership = serde_json::from_value(json!({
        "id": 7, "folioCliente": "CLI001", "idMembresia": 1, "nombreMembresia": "Mensual",
        "fechaInicio": "2025-03-01", "fechaFin": "2025-05-30", "estatus": "Activa", "precioFinal": 1200.0
    }))
    .unwrap();

    let payment = PaymentService::new(api(&server))
        .for_membership(&membership, PaymentMethod::Card, Some("  ".to_owned()))
        .await
        .unwrap();
    assert_eq!(payment.folio, "PAG042");
    assert_eq!(payment.estatus, PaymentStatus::Completed);
}

#[tokio::test]
async fn zero_amount_payment_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

    let membership: ClientMembership = serde_json::from_value(json!({
        "id": 9, "folioCliente": "CLI001", "idMembresia": 1,
        "fechaInicio": "2025-03-01", "fechaFin": "2025-03-31"
    }))
    .unwrap();

    let err = PaymentService::new(api(&server))
        .for_membership(&membership, PaymentMethod::Cash, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "Validation");
    assert!(err.user_message("x").contains("monto"));
}

#[tokio::test]
async fn adjust_stock_updates_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/productos/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "nombre": "Agua 1L", "precio": 15.0, "stock": 10, "estatus": "Activo"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/productos/3"))
        .and(body_partial_json(json!({ "id": 3, "stock": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "nombre": "Agua 1L", "precio": 15.0, "stock": 7, "estatus": "Activa"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let products = ProductService::new(api(&server));
    assert_eq!(products.adjust_stock("3", -3).await.unwrap().stock, 7);

    let err = products.adjust_stock("3", -11).await.unwrap_err();
    assert!(matches!(err, PaymentError::InsufficientStock { available: 10, requested: 11, .. }));
}
