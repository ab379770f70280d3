use crate::status::PersonStatus;
use chrono::{NaiveDate, NaiveDateTime};
use gymhub_derive::api_model;

/// Shared read access to the people records (clients and staff).
///
/// Filters, validation and folio generation work on this trait so they are written
/// once for the four record kinds.
pub trait Person {
    /// Folio prefix used for records of this kind (`CLI`, `ADM`, ...).
    const FOLIO_PREFIX: &'static str;

    fn folio(&self) -> &str;
    fn set_folio(&mut self, folio: String);
    fn first_name(&self) -> &str;
    fn last_names(&self) -> (&str, Option<&str>);
    fn email(&self) -> Option<&str>;
    fn phone(&self) -> Option<&str>;
    fn status(&self) -> PersonStatus;
    fn set_status(&mut self, status: PersonStatus);

    /// `nombre apellidoPaterno apellidoMaterno`, skipping blanks.
    fn full_name(&self) -> String {
        let (paternal, maternal) = self.last_names();
        [self.first_name(), paternal, maternal.unwrap_or_default()]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[api_model]
#[derive(PartialEq)]
pub struct Client {
    #[serde(default)]
    pub folio: String,
    pub nombre: String,
    pub apellido_paterno: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default)]
    pub estatus: PersonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDateTime>,
}

#[api_model]
#[derive(PartialEq)]
pub struct Instructor {
    #[serde(default)]
    pub folio: String,
    pub nombre: String,
    pub apellido_paterno: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub especialidad: Option<String>,
    #[serde(default)]
    pub estatus: PersonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDateTime>,
}

#[api_model]
#[derive(PartialEq)]
pub struct Receptionist {
    #[serde(default)]
    pub folio: String,
    pub nombre: String,
    pub apellido_paterno: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    /// Shift label as entered by the gym (e.g. `Matutino`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turno: Option<String>,
    #[serde(default)]
    pub estatus: PersonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDateTime>,
}

#[api_model]
#[derive(PartialEq)]
pub struct Administrator {
    #[serde(default)]
    pub folio: String,
    pub nombre: String,
    pub apellido_paterno: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub usuario: String,
    /// Only sent when creating or resetting credentials; never returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    #[serde(default)]
    pub estatus: PersonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDateTime>,
}

macro_rules! impl_person {
    ($ty:ty, $prefix:expr) => {
        impl Person for $ty {
            const FOLIO_PREFIX: &'static str = $prefix;

            fn folio(&self) -> &str {
                &self.folio
            }

            fn set_folio(&mut self, folio: String) {
                self.folio = folio;
            }

            fn first_name(&self) -> &str {
                &self.nombre
            }

            fn last_names(&self) -> (&str, Option<&str>) {
                (&self.apellido_paterno, self.apellido_materno.as_deref())
            }

            fn email(&self) -> Option<&str> {
                self.email.as_deref()
            }

            fn phone(&self) -> Option<&str> {
                self.telefono.as_deref()
            }

            fn status(&self) -> PersonStatus {
                self.estatus
            }

            fn set_status(&mut self, status: PersonStatus) {
                self.estatus = status;
            }
        }
    };
}

impl_person!(Client, crate::constants::CLIENT_FOLIO_PREFIX);
impl_person!(Instructor, crate::constants::INSTRUCTOR_FOLIO_PREFIX);
impl_person!(Receptionist, crate::constants::RECEPTIONIST_FOLIO_PREFIX);
impl_person!(Administrator, crate::constants::ADMINISTRATOR_FOLIO_PREFIX);
