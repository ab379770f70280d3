//! Status vocabularies exchanged with the backend.
//!
//! The backend speaks Spanish status strings; every enum here keeps the wire value
//! in both its serde and strum representation so `Display` matches what operators
//! see in the backend and `FromStr` accepts it case-insensitively.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle of people records (clients, staff).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PersonStatus {
    #[default]
    #[serde(rename = "Activo")]
    #[strum(serialize = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    #[strum(serialize = "Inactivo")]
    Inactive,
}

/// Availability of catalog entries (membership types, plans, products, activities).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CatalogStatus {
    #[default]
    #[serde(rename = "Activa", alias = "Activo")]
    #[strum(serialize = "Activa")]
    Active,
    #[serde(rename = "Inactiva", alias = "Inactivo")]
    #[strum(serialize = "Inactiva")]
    Inactive,
}

/// Status of a membership assigned to a client.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MembershipStatus {
    #[default]
    #[serde(rename = "Activa")]
    #[strum(serialize = "Activa")]
    Active,
    #[serde(rename = "Inactiva")]
    #[strum(serialize = "Inactiva")]
    Inactive,
    #[serde(rename = "Expirada")]
    #[strum(serialize = "Expirada")]
    Expired,
    #[serde(rename = "Cancelada")]
    #[strum(serialize = "Cancelada")]
    Cancelled,
    /// Any status string this client does not know about.
    #[serde(rename = "Desconocida", other)]
    #[strum(serialize = "Desconocida")]
    Unknown,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Efectivo")]
    #[strum(serialize = "Efectivo")]
    Cash,
    #[serde(rename = "Tarjeta")]
    #[strum(serialize = "Tarjeta")]
    Card,
    #[serde(rename = "Transferencia")]
    #[strum(serialize = "Transferencia")]
    Transfer,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "Completado")]
    #[strum(serialize = "Completado")]
    Completed,
    #[serde(rename = "Pendiente")]
    #[strum(serialize = "Pendiente")]
    Pending,
    #[serde(rename = "Cancelado")]
    #[strum(serialize = "Cancelado")]
    Cancelled,
}

/// Role of the signed-in operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    #[serde(rename = "Administrador", alias = "ADMIN")]
    #[strum(serialize = "Administrador")]
    Administrator,
    #[serde(rename = "Recepcionista", alias = "RECEPCIONISTA")]
    #[strum(serialize = "Recepcionista")]
    Receptionist,
    #[serde(rename = "Instructor", alias = "INSTRUCTOR")]
    #[strum(serialize = "Instructor")]
    Instructor,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum RoutineLevel {
    #[default]
    #[serde(rename = "Principiante")]
    #[strum(serialize = "Principiante")]
    Beginner,
    #[serde(rename = "Intermedio")]
    #[strum(serialize = "Intermedio")]
    Intermediate,
    #[serde(rename = "Avanzado")]
    #[strum(serialize = "Avanzado")]
    Advanced,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_values_round_trip_through_display() {
        assert_eq!(MembershipStatus::Cancelled.to_string(), "Cancelada");
        assert_eq!(PersonStatus::Inactive.to_string(), "Inactivo");
        assert_eq!(MembershipStatus::from_str("expirada").unwrap(), MembershipStatus::Expired);
        assert_eq!(PaymentMethod::from_str("TARJETA").unwrap(), PaymentMethod::Card);
    }

    #[test]
    fn unknown_membership_status_is_tolerated() {
        let status: MembershipStatus = serde_json::from_str("\"Suspendida\"").unwrap();
        assert_eq!(status, MembershipStatus::Unknown);
    }

    #[test]
    fn catalog_status_accepts_masculine_alias() {
        let status: CatalogStatus = serde_json::from_str("\"Activo\"").unwrap();
        assert_eq!(status, CatalogStatus::Active);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Activa\"");
    }
}
