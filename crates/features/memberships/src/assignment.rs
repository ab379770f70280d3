use crate::error::{MembershipError, MembershipErrorExt};
use crate::lifecycle::{
    Period, can_cancel, can_renew, effective_status, is_expiring, renewal_notice, renewal_period,
};
use crate::pricing::{Quote, validate_plan};
use chrono::NaiveDate;
use gymhub_domain::{
    AssignMembership, ClientMembership, Membership, PaymentPlan, RenewMembership, Resource,
};
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::confirm::Confirm;
use gymhub_kernel::validation::Validate;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

type Records = Collection<ClientMembership>;

/// Memberships assigned to clients: assignment, renewal and cancellation.
///
/// Renewals and cancellations are put to the [`Confirm`] seam first; a declined prompt
/// returns `Ok(None)` without contacting the backend.
#[derive(Clone)]
pub struct ClientMembershipService {
    records: Records,
    confirm: Arc<dyn Confirm>,
}

impl fmt::Debug for ClientMembershipService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientMembershipService").field("records", &self.records).finish_non_exhaustive()
    }
}

impl ClientMembershipService {
    #[must_use]
    pub fn new(api: ApiClient, confirm: Arc<dyn Confirm>) -> Self {
        Self { records: Collection::new(api), confirm }
    }

    /// Same service asking a different confirmer.
    #[must_use]
    pub fn with_confirm(&self, confirm: Arc<dyn Confirm>) -> Self {
        Self { records: self.records.clone(), confirm }
    }

    pub async fn list(&self) -> Result<Vec<ClientMembership>, MembershipError> {
        self.records.list().await.context("Failed to list client memberships")
    }

    pub async fn get(&self, id: &str) -> Result<ClientMembership, MembershipError> {
        self.records.get(id).await.context(format!("Failed to load client membership {id}"))
    }

    /// Membership history of one client (`membresias-clientes/cliente/{folio}`).
    pub async fn by_client(&self, folio: &str) -> Result<Vec<ClientMembership>, MembershipError> {
        self.records
            .api()
            .get(&Records::path(&["cliente", folio]))
            .await
            .context(format!("Failed to load memberships of {folio}"))
    }

    /// Active memberships ending within `window_days` of `today`.
    pub async fn expiring(&self, today: NaiveDate, window_days: i64) -> Result<Vec<ClientMembership>, MembershipError> {
        let mut all = self.list().await?;
        all.retain(|m| is_expiring(m, today, window_days));
        Ok(all)
    }

    /// Assigns `membership` to a client starting on `start`, priced through `plan`.
    pub async fn assign(
        &self,
        client_folio: &str,
        membership: &Membership,
        plan: Option<&PaymentPlan>,
        start: NaiveDate,
    ) -> Result<ClientMembership, MembershipError> {
        let membership_id = membership.id.clone().ok_or_else(|| MembershipError::NotFound {
            message: format!("membership '{}' has no id", membership.nombre).into(),
            context: None,
        })?;
        if let Some(plan) = plan {
            validate_plan(plan)?;
        }
        let period = Period::starting(start, covered_days(membership, plan));
        let request = AssignMembership {
            folio_cliente: client_folio.trim().to_owned(),
            id_membresia: membership_id,
            id_plan_pago: plan.and_then(|p| p.id.clone()),
            fecha_inicio: period.start,
            fecha_fin: period.end,
            precio_final: Quote::new(membership.precio, plan).total,
        };
        request.validate()?;

        let assigned: ClientMembership = self
            .records
            .api()
            .post(ClientMembership::PATH, &request)
            .await
            .context(format!("Failed to assign membership to {client_folio}"))?;
        info!(
            client = %request.folio_cliente,
            membership = %membership.nombre,
            start = %period.start,
            end = %period.end,
            total = request.precio_final,
            "Membership assigned"
        );
        Ok(assigned)
    }

    /// Renews `current` for another period of `membership` (or of `plan` when given).
    pub async fn renew(
        &self,
        current: &ClientMembership,
        membership: &Membership,
        plan: Option<&PaymentPlan>,
        today: NaiveDate,
    ) -> Result<Option<ClientMembership>, MembershipError> {
        let status = effective_status(current, today);
        if !can_renew(status) {
            return Err(MembershipError::NotRenewable { status });
        }
        let id = record_id(current)?;
        if let Some(plan) = plan {
            validate_plan(plan)?;
        }

        let quote = Quote::new(membership.precio, plan);
        let period = renewal_period(current, covered_days(membership, plan), today);
        let prompt = format!(
            "{} ¿Renovar '{}' de {} del {} al {} ({})?",
            renewal_notice(status),
            membership.nombre,
            current.nombre_cliente.as_deref().unwrap_or(&current.folio_cliente),
            period.start,
            period.end,
            quote,
        );
        if !self.confirm.confirm(&prompt) {
            info!(id = %id, "Renewal declined");
            return Ok(None);
        }

        let request = RenewMembership {
            id_plan_pago: plan.and_then(|p| p.id.clone()),
            fecha_inicio: period.start,
            fecha_fin: period.end,
            precio_final: quote.total,
        };
        request.validate()?;

        let renewed: ClientMembership = self
            .records
            .api()
            .put(&Records::path(&[id.as_str(), "renovar"]), &request)
            .await
            .context(format!("Failed to renew membership {id}"))?;
        info!(id = %id, start = %period.start, end = %period.end, total = quote.total, "Membership renewed");
        Ok(Some(renewed))
    }

    /// Cancels `current` after confirmation.
    pub async fn cancel(
        &self,
        current: &ClientMembership,
        today: NaiveDate,
    ) -> Result<Option<ClientMembership>, MembershipError> {
        let status = effective_status(current, today);
        if !can_cancel(status) {
            return Err(MembershipError::NotCancellable { status });
        }
        let id = record_id(current)?;

        let prompt = format!(
            "¿Cancelar la membresía '{}' de {}? Esta acción no se puede deshacer.",
            current.nombre_membresia.as_deref().unwrap_or("?"),
            current.nombre_cliente.as_deref().unwrap_or(&current.folio_cliente),
        );
        if !self.confirm.confirm(&prompt) {
            info!(id = %id, "Cancellation declined");
            return Ok(None);
        }

        let cancelled: ClientMembership = self
            .records
            .api()
            .put_empty(&Records::path(&[id.as_str(), "cancelar"]))
            .await
            .context(format!("Failed to cancel membership {id}"))?;
        info!(id = %id, "Membership cancelled");
        Ok(Some(cancelled))
    }

    pub async fn delete(&self, id: &str) -> Result<(), MembershipError> {
        self.records.delete(id).await.context(format!("Failed to delete client membership {id}"))
    }
}

/// Days covered by one purchase: the plan duration, or the membership's own.
fn covered_days(membership: &Membership, plan: Option<&PaymentPlan>) -> u32 {
    let days = plan.map_or(membership.duracion_dias, |p| p.duracion_dias);
    debug!(days, with_plan = plan.is_some(), "Covered days");
    days
}

fn record_id(membership: &ClientMembership) -> Result<String, MembershipError> {
    membership.key().ok_or_else(|| MembershipError::NotFound {
        message: format!("membership of {} has no id", membership.folio_cliente).into(),
        context: None,
    })
}
