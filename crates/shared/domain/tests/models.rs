use chrono::NaiveDate;
use gymhub_domain::{
    Client, ClientMembership, MembershipStatus, Person, PersonStatus, RecordId, Routine,
    RoutineLevel, UserProfile, Role,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn client_reads_backend_shape() {
    let raw = json!({
        "folio": "CLI007",
        "nombre": "Ana",
        "apellidoPaterno": "López",
        "apellidoMaterno": "Ruiz",
        "email": "ana@example.com",
        "telefono": "5512345678",
        "fechaNacimiento": "1994-03-02",
        "estatus": "Activo",
        "fechaRegistro": "2024-01-15T10:20:30",
        "unCampoNuevo": 1
    });

    let client: Client = serde_json::from_value(raw).unwrap();
    assert_eq!(client.full_name(), "Ana López Ruiz");
    assert_eq!(client.status(), PersonStatus::Active);
    assert_eq!(client.fecha_nacimiento, NaiveDate::from_ymd_opt(1994, 3, 2));
    assert_eq!(<Client as Person>::FOLIO_PREFIX, "CLI");
}

#[test]
fn server_assigned_fields_are_not_sent_when_absent() {
    let client = Client {
        folio: "CLI001".to_owned(),
        nombre: "Luis".to_owned(),
        apellido_paterno: "Mora".to_owned(),
        apellido_materno: None,
        email: None,
        telefono: None,
        fecha_nacimiento: None,
        estatus: PersonStatus::Active,
        fecha_registro: None,
    };

    let value = serde_json::to_value(&client).unwrap();
    assert_eq!(
        value,
        json!({ "folio": "CLI001", "nombre": "Luis", "apellidoPaterno": "Mora", "estatus": "Activo" })
    );
    assert_eq!(client.full_name(), "Luis Mora");
}

#[test]
fn client_membership_with_plan_and_numeric_ids() {
    let raw = json!({
        "id": 15,
        "folioCliente": "CLI001",
        "idMembresia": 3,
        "fechaInicio": "2025-01-01",
        "fechaFin": "2025-03-31",
        "estatus": "Cancelada",
        "planPago": { "id": 2, "nombre": "Trimestral", "factorDescuento": 0.8, "duracionDias": 90 },
        "precioFinal": 1200.0
    });

    let membership: ClientMembership = serde_json::from_value(raw).unwrap();
    assert_eq!(membership.id, Some(RecordId::from("15")));
    assert_eq!(membership.estatus, MembershipStatus::Cancelled);
    let plan = membership.plan_pago.unwrap();
    assert_eq!(plan.duracion_dias, 90);
    assert!((plan.factor_descuento - 0.8).abs() < f64::EPSILON);
}

#[test]
fn routine_defaults_missing_collections() {
    let routine: Routine =
        serde_json::from_value(json!({ "nombre": "Full body", "nivel": "Avanzado" })).unwrap();
    assert!(routine.ejercicios.is_empty());
    assert_eq!(routine.nivel, RoutineLevel::Advanced);
}

#[test]
fn user_profile_accepts_role_aliases() {
    let profile: UserProfile = serde_json::from_value(json!({
        "folio": "ADM001", "nombre": "Root", "usuario": "root", "rol": "ADMIN"
    }))
    .unwrap();
    assert_eq!(profile.rol, Role::Administrator);
}
