use crate::id::RecordId;
use crate::status::{CatalogStatus, RoutineLevel};
use chrono::NaiveTime;
use gymhub_derive::api_model;

/// A scheduled group class.
#[api_model]
#[derive(PartialEq)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folio_instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dia_semana: Option<String>,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub cupo_maximo: u32,
    #[serde(default)]
    pub inscritos: u32,
    #[serde(default)]
    pub estatus: CatalogStatus,
}

#[api_model]
#[derive(PartialEq)]
pub struct Exercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grupo_muscular: Option<String>,
    pub series: u32,
    pub repeticiones: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descanso_segundos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

#[api_model]
#[derive(PartialEq)]
pub struct Routine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub nivel: RoutineLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objetivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folio_instructor: Option<String>,
    #[serde(default)]
    pub ejercicios: Vec<Exercise>,
    #[serde(default)]
    pub estatus: CatalogStatus,
}
