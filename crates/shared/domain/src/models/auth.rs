use crate::status::Role;
use gymhub_derive::api_model;
use serde::Serialize;
use std::fmt;

/// Body of `POST auth/login`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub usuario: String,
    pub contrasena: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("usuario", &self.usuario)
            .field("contrasena", &"<redacted>")
            .finish()
    }
}

/// Flat profile returned by a successful login.
#[api_model]
#[derive(PartialEq, Eq)]
pub struct UserProfile {
    pub folio: String,
    pub nombre: String,
    pub usuario: String,
    pub rol: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
