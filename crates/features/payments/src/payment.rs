use crate::error::{PaymentError, PaymentErrorExt};
use gymhub_domain::constants::PAYMENT_FOLIO_PREFIX;
use gymhub_domain::{ClientMembership, Payment, PaymentMethod, PaymentStatus, Resource};
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::folio::next_folio;
use gymhub_kernel::validation::Validate;
use tracing::info;

type Records = Collection<Payment>;

/// Payments ledger (`pagos`).
#[derive(Debug, Clone)]
pub struct PaymentService {
    records: Records,
}

impl PaymentService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { records: Collection::new(api) }
    }

    pub async fn list(&self) -> Result<Vec<Payment>, PaymentError> {
        self.records.list().await.context("Failed to list payments")
    }

    pub async fn get(&self, folio: &str) -> Result<Payment, PaymentError> {
        self.records.get(folio).await.context(format!("Failed to load payment {folio}"))
    }

    /// Payments of one client (`pagos/cliente/{folio}`).
    pub async fn by_client(&self, client_folio: &str) -> Result<Vec<Payment>, PaymentError> {
        self.records
            .api()
            .get(&Records::path(&["cliente", client_folio]))
            .await
            .context(format!("Failed to load payments of {client_folio}"))
    }

    /// Records `payment`, assigning the next `PAG` folio when it has none.
    pub async fn record(&self, mut payment: Payment) -> Result<Payment, PaymentError> {
        payment.validate()?;
        if payment.key().is_none() {
            let folios = self.records.keys().await.context("Failed to read payment folios")?;
            payment.folio = next_folio(PAYMENT_FOLIO_PREFIX, &folios);
        }

        let recorded = self.records.create(&payment).await.context("Failed to record payment")?;
        info!(
            folio = %recorded.folio,
            client = %recorded.folio_cliente,
            amount = recorded.monto,
            method = %recorded.metodo_pago,
            "Payment recorded"
        );
        Ok(recorded)
    }

    /// Records the payment of an assigned membership for its final price.
    pub async fn for_membership(
        &self,
        membership: &ClientMembership,
        method: PaymentMethod,
        reference: Option<String>,
    ) -> Result<Payment, PaymentError> {
        self.record(membership_payment(membership, method, reference)).await
    }

    pub async fn update(&self, folio: &str, payment: &Payment) -> Result<Payment, PaymentError> {
        payment.validate()?;
        self.records.update(folio, payment).await.context(format!("Failed to update payment {folio}"))
    }

    pub async fn delete(&self, folio: &str) -> Result<(), PaymentError> {
        self.records.delete(folio).await.context(format!("Failed to delete payment {folio}"))
    }
}

/// Draft payment for `membership`; the folio is assigned on record.
#[must_use]
pub fn membership_payment(
    membership: &ClientMembership,
    method: PaymentMethod,
    reference: Option<String>,
) -> Payment {
    Payment {
        folio: String::new(),
        folio_cliente: membership.folio_cliente.clone(),
        id_cliente_membresia: membership.id.clone(),
        monto: membership.precio_final.unwrap_or_default(),
        metodo_pago: method,
        concepto: format!(
            "Membresía {}",
            membership.nombre_membresia.as_deref().unwrap_or("sin nombre")
        ),
        referencia: reference.filter(|r| !r.trim().is_empty()),
        estatus: PaymentStatus::Completed,
        fecha_pago: None,
    }
}
