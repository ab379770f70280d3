use crate::error::{MembershipError, MembershipErrorExt};
use crate::pricing::{Quote, validate_plan};
use gymhub_domain::{CatalogStatus, Membership, PaymentPlan};
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::validation::Validate;
use tracing::debug;

/// Membership types and payment plans offered by the gym.
#[derive(Debug, Clone)]
pub struct MembershipCatalog {
    memberships: Collection<Membership>,
    plans: Collection<PaymentPlan>,
}

impl MembershipCatalog {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { memberships: Collection::new(api.clone()), plans: Collection::new(api) }
    }

    pub async fn list(&self) -> Result<Vec<Membership>, MembershipError> {
        self.memberships.list().await.context("Failed to list memberships")
    }

    /// Membership types that can currently be sold.
    pub async fn active(&self) -> Result<Vec<Membership>, MembershipError> {
        let mut all = self.list().await?;
        all.retain(|m| m.estatus == CatalogStatus::Active);
        Ok(all)
    }

    pub async fn get(&self, id: &str) -> Result<Membership, MembershipError> {
        self.memberships.get(id).await.context(format!("Failed to load membership {id}"))
    }

    pub async fn create(&self, membership: &Membership) -> Result<Membership, MembershipError> {
        membership.validate()?;
        self.memberships.create(membership).await.context("Failed to create membership")
    }

    pub async fn update(&self, id: &str, membership: &Membership) -> Result<Membership, MembershipError> {
        membership.validate()?;
        self.memberships.update(id, membership).await.context(format!("Failed to update membership {id}"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), MembershipError> {
        self.memberships.delete(id).await.context(format!("Failed to delete membership {id}"))
    }

    /// Every payment plan (`membresias/planes`).
    pub async fn plans(&self) -> Result<Vec<PaymentPlan>, MembershipError> {
        self.plans.list().await.context("Failed to list payment plans")
    }

    pub async fn active_plans(&self) -> Result<Vec<PaymentPlan>, MembershipError> {
        let mut plans = self.plans().await?;
        plans.retain(|p| p.estatus == CatalogStatus::Active);
        Ok(plans)
    }

    pub async fn plan(&self, id: &str) -> Result<PaymentPlan, MembershipError> {
        self.plans.get(id).await.context(format!("Failed to load payment plan {id}"))
    }

    pub async fn create_plan(&self, plan: &PaymentPlan) -> Result<PaymentPlan, MembershipError> {
        plan.validate()?;
        self.plans.create(plan).await.context("Failed to create payment plan")
    }

    pub async fn update_plan(&self, id: &str, plan: &PaymentPlan) -> Result<PaymentPlan, MembershipError> {
        plan.validate()?;
        self.plans.update(id, plan).await.context(format!("Failed to update payment plan {id}"))
    }

    pub async fn delete_plan(&self, id: &str) -> Result<(), MembershipError> {
        self.plans.delete(id).await.context(format!("Failed to delete payment plan {id}"))
    }

    /// Loads a membership and an optional plan and prices them together.
    pub async fn quote(
        &self,
        membership_id: &str,
        plan_id: Option<&str>,
    ) -> Result<(Membership, Option<PaymentPlan>, Quote), MembershipError> {
        let membership = self.get(membership_id).await?;
        let plan = match plan_id {
            Some(id) => Some(self.plan(id).await?),
            None => None,
        };
        if let Some(plan) = plan.as_ref() {
            validate_plan(plan)?;
        }
        let quote = Quote::new(membership.precio, plan.as_ref());
        debug!(membership = %membership.nombre, total = quote.total, months = quote.months, "Quoted");
        Ok((membership, plan, quote))
    }
}
