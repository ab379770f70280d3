//! Renewal and cancellation rules for assigned memberships.
//!
//! The backend owns the real state machine; these helpers decide what the operator is
//! shown and offered. An `Activa` membership whose end date has passed is treated as
//! `Expirada` even before the backend catches up.

use chrono::{Days, NaiveDate};
use gymhub_domain::{ClientMembership, MembershipStatus};

/// A billing period as stored by the backend.
///
/// `end` is `start` plus the covered days, and it is also the day a renewal of a running
/// membership starts on, so consecutive periods share their boundary date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Period of `duration_days` starting at `start`.
    #[must_use]
    pub fn starting(start: NaiveDate, duration_days: u32) -> Self {
        let end = start.checked_add_days(Days::new(duration_days.into())).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }
}

/// Status to display for `membership` on `today`.
#[must_use]
pub fn effective_status(membership: &ClientMembership, today: NaiveDate) -> MembershipStatus {
    match membership.estatus {
        MembershipStatus::Active if membership.fecha_fin < today => MembershipStatus::Expired,
        status => status,
    }
}

/// Whole days left until the end date; zero once it has passed.
#[must_use]
pub fn days_remaining(membership: &ClientMembership, today: NaiveDate) -> i64 {
    (membership.fecha_fin - today).num_days().max(0)
}

/// Period a renewal of `duration_days` would cover.
///
/// A membership that is still running is extended from its end date so no paid day is
/// lost; anything else starts over today.
#[must_use]
pub fn renewal_period(membership: &ClientMembership, duration_days: u32, today: NaiveDate) -> Period {
    let start = match effective_status(membership, today) {
        MembershipStatus::Active => membership.fecha_fin,
        _ => today,
    };
    Period::starting(start, duration_days)
}

/// Message shown to the operator before confirming a renewal.
#[must_use]
pub const fn renewal_notice(status: MembershipStatus) -> &'static str {
    match status {
        MembershipStatus::Active => {
            "La membresía sigue activa. El nuevo periodo comenzará cuando termine el actual."
        },
        MembershipStatus::Expired => "La membresía ha vencido. El nuevo periodo comenzará hoy.",
        MembershipStatus::Inactive => {
            "La membresía está inactiva. Al renovarla se reactiva a partir de hoy."
        },
        MembershipStatus::Cancelled => {
            "Las membresías canceladas no se pueden renovar. Asigne una nueva membresía."
        },
        MembershipStatus::Unknown => {
            "No se reconoce el estatus de la membresía. El nuevo periodo comenzará hoy."
        },
    }
}

/// Cancelled memberships are closed; everything else may be renewed.
#[must_use]
pub const fn can_renew(status: MembershipStatus) -> bool {
    !matches!(status, MembershipStatus::Cancelled)
}

/// Only running or paused memberships can be cancelled.
#[must_use]
pub const fn can_cancel(status: MembershipStatus) -> bool {
    matches!(status, MembershipStatus::Active | MembershipStatus::Inactive)
}

/// Active and ending within `window_days` of `today`.
#[must_use]
pub fn is_expiring(membership: &ClientMembership, today: NaiveDate, window_days: i64) -> bool {
    effective_status(membership, today) == MembershipStatus::Active
        && days_remaining(membership, today) <= window_days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn membership(status: MembershipStatus, start: NaiveDate, end: NaiveDate) -> ClientMembership {
        ClientMembership {
            id: Some(7_u64.into()),
            folio_cliente: "CLI001".to_owned(),
            nombre_cliente: None,
            id_membresia: 1_u64.into(),
            nombre_membresia: Some("Mensual".to_owned()),
            fecha_inicio: start,
            fecha_fin: end,
            estatus: status,
            plan_pago: None,
            precio_final: Some(500.0),
            fecha_registro: None,
        }
    }

    #[test]
    fn active_past_end_is_expired() {
        let m = membership(MembershipStatus::Active, day(1, 1), day(1, 31));
        assert_eq!(effective_status(&m, day(1, 31)), MembershipStatus::Active);
        assert_eq!(effective_status(&m, day(2, 1)), MembershipStatus::Expired);

        let cancelled = membership(MembershipStatus::Cancelled, day(1, 1), day(1, 31));
        assert_eq!(effective_status(&cancelled, day(3, 1)), MembershipStatus::Cancelled);
    }

    #[test]
    fn remaining_days_never_negative() {
        let m = membership(MembershipStatus::Active, day(1, 1), day(1, 31));
        assert_eq!(days_remaining(&m, day(1, 21)), 10);
        assert_eq!(days_remaining(&m, day(3, 1)), 0);
    }

    #[test]
    fn period_end_is_start_plus_covered_days() {
        assert_eq!(Period::starting(day(1, 1), 30).end, day(1, 31));
        assert_eq!(Period::starting(day(3, 1), 90).end, day(5, 30));
    }

    #[test]
    fn running_membership_renews_from_end_date() {
        let m = membership(MembershipStatus::Active, day(1, 1), day(1, 31));
        let period = renewal_period(&m, 30, day(1, 20));
        assert_eq!(period, Period { start: day(1, 31), end: day(3, 2) });
    }

    #[test]
    fn lapsed_membership_renews_from_today() {
        let expired = membership(MembershipStatus::Active, day(1, 1), day(1, 31));
        assert_eq!(renewal_period(&expired, 90, day(2, 10)).start, day(2, 10));

        let inactive = membership(MembershipStatus::Inactive, day(1, 1), day(6, 30));
        let period = renewal_period(&inactive, 30, day(2, 10));
        assert_eq!(period, Period { start: day(2, 10), end: day(3, 12) });
    }

    #[test]
    fn transitions_are_advisory_by_status() {
        assert!(can_renew(MembershipStatus::Expired));
        assert!(can_renew(MembershipStatus::Active));
        assert!(!can_renew(MembershipStatus::Cancelled));
        assert!(can_cancel(MembershipStatus::Inactive));
        assert!(!can_cancel(MembershipStatus::Expired));
        assert!(!can_cancel(MembershipStatus::Cancelled));
        assert!(renewal_notice(MembershipStatus::Active).contains("termine el actual"));
        assert!(renewal_notice(MembershipStatus::Expired).contains("hoy"));
    }

    #[test]
    fn expiring_window() {
        let m = membership(MembershipStatus::Active, day(1, 1), day(1, 31));
        assert!(is_expiring(&m, day(1, 25), 7));
        assert!(!is_expiring(&m, day(1, 10), 7));
        assert!(!is_expiring(&m, day(2, 2), 7));
    }
}
