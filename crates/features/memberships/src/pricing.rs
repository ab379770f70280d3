//! Plan-based pricing.
//!
//! A membership is priced per month. A payment plan covers `ceil(duracionDias / 30)`
//! months paid up front, each at `precio * factorDescuento`.

use gymhub_domain::PaymentPlan;
use gymhub_domain::constants::DAYS_PER_MONTH;
use gymhub_kernel::money::{format_money, round_cents};
use gymhub_kernel::validation::{Validate, ValidationErrors};
use std::fmt;

/// Months billed for a period of `duration_days`, never less than one.
#[must_use]
pub const fn months_covered(duration_days: u32) -> u32 {
    let months = duration_days.div_ceil(DAYS_PER_MONTH);
    if months == 0 { 1 } else { months }
}

/// Total charged for `base` (monthly price) under `plan`.
///
/// Without a plan the base price is charged unchanged.
#[must_use]
pub fn discounted_price(base: f64, plan: Option<&PaymentPlan>) -> f64 {
    match plan {
        None => base,
        Some(plan) => {
            round_cents(base * plan.factor_descuento * f64::from(months_covered(plan.duracion_dias)))
        },
    }
}

/// What the covered months would cost without the plan discount.
#[must_use]
pub fn undiscounted_total(base: f64, plan: Option<&PaymentPlan>) -> f64 {
    match plan {
        None => base,
        Some(plan) => round_cents(base * f64::from(months_covered(plan.duracion_dias))),
    }
}

/// Money saved by paying through `plan`.
#[must_use]
pub fn savings(base: f64, plan: Option<&PaymentPlan>) -> f64 {
    round_cents((undiscounted_total(base, plan) - discounted_price(base, plan)).max(0.0))
}

/// Discount of `plan` as a whole percentage (`0.8` → `20`).
#[must_use]
pub fn discount_percent(plan: &PaymentPlan) -> u32 {
    ((1.0 - plan.factor_descuento).clamp(0.0, 1.0) * 100.0).round() as u32
}

/// `"1 mes"`, `"1 año"` or `"{n} meses"`.
#[must_use]
pub fn format_duration(months: u32) -> String {
    match months {
        1 => "1 mes".to_owned(),
        12 => "1 año".to_owned(),
        n => format!("{n} meses"),
    }
}

/// Rejects plans whose factor is outside `(0, 1]` or that cover no days.
pub fn validate_plan(plan: &PaymentPlan) -> Result<(), ValidationErrors> {
    plan.validate()
}

/// Price breakdown shown before a membership is assigned or renewed.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Monthly base price.
    pub base: f64,
    pub months: u32,
    pub total: f64,
    pub undiscounted: f64,
    pub savings: f64,
    pub discount_percent: u32,
    /// Human-readable duration (`"3 meses"`).
    pub label: String,
}

impl Quote {
    #[must_use]
    pub fn new(base: f64, plan: Option<&PaymentPlan>) -> Self {
        let months = plan.map_or(1, |p| months_covered(p.duracion_dias));
        Self {
            base,
            months,
            total: discounted_price(base, plan),
            undiscounted: undiscounted_total(base, plan),
            savings: savings(base, plan),
            discount_percent: plan.map_or(0, discount_percent),
            label: format_duration(months),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} por {}", format_money(self.total), self.label)?;
        if self.savings > 0.0 {
            write!(f, " (ahorro {}, {}% de descuento)", format_money(self.savings), self.discount_percent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymhub_domain::CatalogStatus;
    use proptest::prelude::*;

    fn plan(factor: f64, days: u32) -> PaymentPlan {
        PaymentPlan {
            id: Some("2".into()),
            nombre: "Plan".to_owned(),
            factor_descuento: factor,
            duracion_dias: days,
            descripcion: None,
            estatus: CatalogStatus::Active,
        }
    }

    #[test]
    fn no_plan_keeps_base_price() {
        assert_eq!(discounted_price(499.99, None), 499.99);
        assert_eq!(savings(499.99, None), 0.0);
    }

    #[test]
    fn quarterly_plan_with_twenty_percent_off() {
        let quarterly = plan(0.8, 90);
        assert_eq!(discounted_price(500.0, Some(&quarterly)), 1200.0);
        assert_eq!(undiscounted_total(500.0, Some(&quarterly)), 1500.0);
        assert_eq!(savings(500.0, Some(&quarterly)), 300.0);
        assert_eq!(discount_percent(&quarterly), 20);
    }

    #[test]
    fn partial_months_round_up() {
        assert_eq!(months_covered(30), 1);
        assert_eq!(months_covered(31), 2);
        assert_eq!(months_covered(365), 13);
        assert_eq!(months_covered(0), 1);
        assert_eq!(discounted_price(100.0, Some(&plan(1.0, 45))), 200.0);
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(discounted_price(333.33, Some(&plan(0.85, 60))), 566.66);
    }

    #[test]
    fn duration_labels() {
        assert_eq!(format_duration(1), "1 mes");
        assert_eq!(format_duration(12), "1 año");
        assert_eq!(format_duration(3), "3 meses");
        assert_eq!(format_duration(24), "24 meses");
    }

    #[test]
    fn quote_summarises_plan() {
        let quote = Quote::new(500.0, Some(&plan(0.8, 90)));
        assert_eq!(quote.months, 3);
        assert_eq!(quote.label, "3 meses");
        assert_eq!(quote.to_string(), "$1,200.00 por 3 meses (ahorro $300.00, 20% de descuento)");
        assert_eq!(Quote::new(350.0, None).to_string(), "$350.00 por 1 mes");
    }

    #[test]
    fn plan_validation_guards_factor() {
        assert!(validate_plan(&plan(0.9, 30)).is_ok());
        assert!(validate_plan(&plan(0.0, 30)).is_err());
        assert!(validate_plan(&plan(0.5, 0)).is_err());
    }

    proptest! {
        #[test]
        fn discount_never_costs_more(base in 1.0f64..5000.0, factor in 0.01f64..=1.0, days in 1u32..400) {
            let p = plan(factor, days);
            let total = discounted_price(base, Some(&p));
            prop_assert!(total <= undiscounted_total(base, Some(&p)) + 0.01);
            prop_assert!(savings(base, Some(&p)) >= 0.0);
        }
    }
}
