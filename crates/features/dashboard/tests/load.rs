use chrono::NaiveDate;
use gymhub_dashboard::{DashboardError, DashboardService};
use gymhub_domain::config::ApiConfig;
use gymhub_domain::{MembershipStatus, PaymentMethod};
use gymhub_http::ApiClient;
use gymhub_kernel::confirm::NeverConfirm;
use gymhub_memberships::ClientMembershipService;
use gymhub_payments::{PaymentService, ProductService};
use gymhub_people::ClientService;
use gymhub_training::ActivityService;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> DashboardService {
    let api = ApiClient::new(&ApiConfig { base_url: format!("{}/api", server.uri()), ..ApiConfig::default() })
        .unwrap();
    DashboardService::new(
        ClientService::new(api.clone()),
        ClientMembershipService::new(api.clone(), Arc::new(NeverConfirm)),
        PaymentService::new(api.clone()),
        ProductService::new(api.clone()),
        ActivityService::new(api),
    )
}

async fn serve(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{route}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

#[tokio::test]
async fn computes_tiles_from_all_collections() {
    let server = MockServer::start().await;
    serve(
        &server,
        "clientes",
        json!([
            { "folio": "CLI001", "nombre": "Ana", "apellidoPaterno": "López", "estatus": "Activo" },
            { "folio": "CLI002", "nombre": "Luis", "apellidoPaterno": "Pérez", "estatus": "Activo" },
            { "folio": "CLI003", "nombre": "Eva", "apellidoPaterno": "Ruiz", "estatus": "Inactivo" }
        ]),
    )
    .await;
    serve(
        &server,
        "membresias-clientes",
        json!([
            { "id": 1, "folioCliente": "CLI001", "idMembresia": 1, "fechaInicio": "2025-02-20",
              "fechaFin": "2025-03-20", "estatus": "Activa" },
            { "id": 2, "folioCliente": "CLI002", "idMembresia": 1, "fechaInicio": "2025-01-01",
              "fechaFin": "2025-03-01", "estatus": "Activa" },
            { "id": 3, "folioCliente": "CLI003", "idMembresia": 2, "fechaInicio": "2025-03-01",
              "fechaFin": "2025-06-01", "estatus": "Cancelada" }
        ]),
    )
    .await;
    serve(
        &server,
        "pagos",
        json!([
            { "folio": "PAG001", "folioCliente": "CLI001", "monto": 500.0, "metodoPago": "Efectivo",
              "concepto": "Membresía", "estatus": "Completado", "fechaPago": "2025-03-15T09:00:00" },
            { "folio": "PAG002", "folioCliente": "CLI002", "monto": 300.0, "metodoPago": "Tarjeta",
              "concepto": "Membresía", "estatus": "Completado", "fechaPago": "2025-03-02T09:00:00" },
            { "folio": "PAG003", "folioCliente": "CLI002", "monto": 999.0, "metodoPago": "Tarjeta",
              "concepto": "Membresía", "estatus": "Pendiente", "fechaPago": "2025-03-15T10:00:00" }
        ]),
    )
    .await;
    serve(
        &server,
        "productos",
        json!([
            { "id": 1, "nombre": "Agua", "precio": 15.0, "stock": 2, "stockMinimo": 5 },
            { "id": 2, "nombre": "Toalla", "precio": 80.0, "stock": 40 }
        ]),
    )
    .await;
    serve(
        &server,
        "actividades",
        json!([
            { "id": 1, "nombre": "Spinning", "horaInicio": "07:00:00", "horaFin": "08:00:00",
              "cupoMaximo": 20, "inscritos": 20 },
            { "id": 2, "nombre": "Yoga", "horaInicio": "09:00:00", "horaFin": "10:00:00",
              "cupoMaximo": 10, "inscritos": 5 }
        ]),
    )
    .await;

    let stats = service(&server).load(today(), 7).await.unwrap();

    assert_eq!(stats.total_clients, 3);
    assert_eq!(stats.active_clients, 2);
    assert_eq!(stats.active_client_percent, 66.7);
    assert_eq!(stats.active_memberships, 1);
    assert_eq!(stats.expiring_memberships, 1);
    let expired = stats
        .memberships_by_status
        .iter()
        .find(|(status, _)| *status == MembershipStatus::Expired)
        .map(|(_, count)| *count);
    assert_eq!(expired, Some(1));
    assert_eq!(stats.revenue_today, 500.0);
    assert_eq!(stats.revenue_month, 800.0);
    assert!(stats.revenue_by_method.contains(&(PaymentMethod::Card, 300.0)));
    assert_eq!(stats.low_stock.len(), 1);
    assert_eq!(stats.low_stock[0].nombre, "Agua");
    assert_eq!(stats.average_occupancy, 75.0);
    assert_eq!(stats.full_activities, 1);
}

#[tokio::test]
async fn one_failing_collection_fails_the_load() {
    let server = MockServer::start().await;
    for route in ["clientes", "membresias-clientes", "productos", "actividades"] {
        serve(&server, route, json!([])).await;
    }
    Mock::given(method("GET"))
        .and(path("/api/pagos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service(&server).load(today(), 7).await.unwrap_err();
    assert!(matches!(err, DashboardError::Payment { .. }));
    assert_eq!(err.user_message("Could not load the dashboard."), "Could not load the dashboard.");
}
