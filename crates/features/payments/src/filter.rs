use crate::stock::is_low_stock;
use chrono::NaiveDate;
use gymhub_domain::{Payment, PaymentMethod, PaymentStatus, Product};
use gymhub_kernel::filter::{Filter, any_text_matches, text_matches};

/// Screen filter for the payments ledger. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    /// Matched against folio, client folio, concept and reference.
    pub text: String,
    pub method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    pub client_folio: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Filter<Payment> for PaymentFilter {
    fn matches(&self, item: &Payment) -> bool {
        if self.method.is_some_and(|m| m != item.metodo_pago)
            || self.status.is_some_and(|s| s != item.estatus)
            || self.client_folio.as_deref().is_some_and(|f| !f.trim().eq_ignore_ascii_case(&item.folio_cliente))
        {
            return false;
        }

        if self.from.is_some() || self.to.is_some() {
            let Some(paid_on) = item.fecha_pago.map(|at| at.date()) else {
                return false;
            };
            if self.from.is_some_and(|from| paid_on < from) || self.to.is_some_and(|to| paid_on > to) {
                return false;
            }
        }

        any_text_matches(
            &self.text,
            [
                item.folio.as_str(),
                item.folio_cliente.as_str(),
                item.concepto.as_str(),
                item.referencia.as_deref().unwrap_or_default(),
            ],
        )
    }
}

/// Screen filter for the product inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Matched against name and description.
    pub text: String,
    pub category: Option<String>,
    pub in_stock_only: bool,
    pub low_stock_only: bool,
}

impl Filter<Product> for ProductFilter {
    fn matches(&self, item: &Product) -> bool {
        if let Some(category) = self.category.as_deref()
            && !text_matches(category, item.categoria.as_deref().unwrap_or_default())
        {
            return false;
        }
        if (self.in_stock_only && item.stock <= 0) || (self.low_stock_only && !is_low_stock(item)) {
            return false;
        }
        any_text_matches(&self.text, [item.nombre.as_str(), item.descripcion.as_deref().unwrap_or_default()])
    }
}
