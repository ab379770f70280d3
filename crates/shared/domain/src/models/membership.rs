use crate::id::RecordId;
use crate::status::{CatalogStatus, MembershipStatus};
use chrono::{NaiveDate, NaiveDateTime};
use gymhub_derive::api_model;

/// A membership type offered by the gym, priced per month.
#[api_model]
#[derive(PartialEq)]
pub struct Membership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Base monthly price.
    pub precio: f64,
    #[serde(default = "default_duration_days")]
    pub duracion_dias: u32,
    #[serde(default)]
    pub beneficios: Vec<String>,
    #[serde(default)]
    pub estatus: CatalogStatus,
}

/// A payment plan: pay several months up front for a discount.
#[api_model]
#[derive(PartialEq)]
pub struct PaymentPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    /// Multiplier applied to the monthly price, in `(0, 1]`.
    pub factor_descuento: f64,
    pub duracion_dias: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub estatus: CatalogStatus,
}

/// A membership assigned to a client for a period.
#[api_model]
#[derive(PartialEq)]
pub struct ClientMembership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub folio_cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_cliente: Option<String>,
    pub id_membresia: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_membresia: Option<String>,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    #[serde(default)]
    pub estatus: MembershipStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_pago: Option<PaymentPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_final: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDateTime>,
}

/// Body of `POST membresias-clientes`.
#[api_model]
#[derive(PartialEq)]
pub struct AssignMembership {
    pub folio_cliente: String,
    pub id_membresia: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_plan_pago: Option<RecordId>,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub precio_final: f64,
}

/// Body of `PUT membresias-clientes/{id}/renovar`.
#[api_model]
#[derive(PartialEq)]
pub struct RenewMembership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_plan_pago: Option<RecordId>,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub precio_final: f64,
}

const fn default_duration_days() -> u32 {
    crate::constants::DAYS_PER_MONTH
}
