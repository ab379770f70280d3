use crate::id::RecordId;
use crate::status::{CatalogStatus, PaymentMethod, PaymentStatus};
use chrono::NaiveDateTime;
use gymhub_derive::api_model;

#[api_model]
#[derive(PartialEq)]
pub struct Payment {
    #[serde(default)]
    pub folio: String,
    pub folio_cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_cliente_membresia: Option<RecordId>,
    pub monto: f64,
    #[serde(default)]
    pub metodo_pago: PaymentMethod,
    pub concepto: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencia: Option<String>,
    #[serde(default)]
    pub estatus: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_pago: Option<NaiveDateTime>,
}

#[api_model]
#[derive(PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    pub precio: f64,
    #[serde(default)]
    pub stock: i32,
    /// Stock level at or below which the dashboard raises an alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i32>,
    #[serde(default)]
    pub estatus: CatalogStatus,
}
