//! Revenue figures over a loaded payments ledger.
//!
//! Only `Completado` payments count as revenue.

use chrono::{Datelike, NaiveDate};
use gymhub_domain::{Payment, PaymentMethod, PaymentStatus};
use gymhub_kernel::money::round_cents;
use strum::IntoEnumIterator;

fn completed_on<'a>(
    payments: &'a [Payment],
    keep: impl Fn(NaiveDate) -> bool + 'a,
) -> impl Iterator<Item = &'a Payment> + 'a {
    payments.iter().filter(move |p| {
        p.estatus == PaymentStatus::Completed && p.fecha_pago.is_some_and(|at| keep(at.date()))
    })
}

/// Completed revenue between `from` and `to`, both inclusive.
#[must_use]
pub fn revenue_between(payments: &[Payment], from: NaiveDate, to: NaiveDate) -> f64 {
    round_cents(completed_on(payments, |d| d >= from && d <= to).map(|p| p.monto).sum())
}

#[must_use]
pub fn revenue_on(payments: &[Payment], day: NaiveDate) -> f64 {
    revenue_between(payments, day, day)
}

/// Completed revenue in the calendar month containing `day`.
#[must_use]
pub fn revenue_in_month(payments: &[Payment], day: NaiveDate) -> f64 {
    round_cents(
        completed_on(payments, |d| d.year() == day.year() && d.month() == day.month())
            .map(|p| p.monto)
            .sum(),
    )
}

/// Completed revenue per payment method, every method listed even when zero.
#[must_use]
pub fn revenue_by_method(payments: &[Payment]) -> Vec<(PaymentMethod, f64)> {
    PaymentMethod::iter()
        .map(|method| {
            let total: f64 = completed_on(payments, |_| true)
                .filter(|p| p.metodo_pago == method)
                .map(|p| p.monto)
                .sum();
            (method, round_cents(total))
        })
        .collect()
}

/// Number of payments per status.
#[must_use]
pub fn count_by_status(payments: &[Payment]) -> Vec<(PaymentStatus, usize)> {
    PaymentStatus::iter()
        .map(|status| (status, payments.iter().filter(|p| p.estatus == status).count()))
        .collect()
}
