use crate::lifecycle::{effective_status, is_expiring};
use chrono::NaiveDate;
use gymhub_domain::{ClientMembership, MembershipStatus};
use gymhub_kernel::filter::{Filter, any_text_matches};

/// Screen filter for assigned memberships.
///
/// Status comparisons use the effective status on `today`, so an overdue `Activa`
/// record is found under [`MembershipStatus::Expired`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipFilter {
    pub today: NaiveDate,
    /// Matched against client folio, client name and membership name.
    pub text: String,
    pub status: Option<MembershipStatus>,
    pub client_folio: Option<String>,
    /// Only memberships that are active and end within this many days.
    pub expiring_within: Option<i64>,
}

impl MembershipFilter {
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today, text: String::new(), status: None, client_folio: None, expiring_within: None }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: MembershipStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn for_client(mut self, folio: impl Into<String>) -> Self {
        self.client_folio = Some(folio.into());
        self
    }

    #[must_use]
    pub const fn expiring_within(mut self, days: i64) -> Self {
        self.expiring_within = Some(days);
        self
    }
}

impl Filter<ClientMembership> for MembershipFilter {
    fn matches(&self, item: &ClientMembership) -> bool {
        if self.status.is_some_and(|status| status != effective_status(item, self.today)) {
            return false;
        }
        if self.client_folio.as_deref().is_some_and(|folio| !folio.trim().eq_ignore_ascii_case(&item.folio_cliente)) {
            return false;
        }
        if self.expiring_within.is_some_and(|days| !is_expiring(item, self.today, days)) {
            return false;
        }
        any_text_matches(
            &self.text,
            [
                item.folio_cliente.as_str(),
                item.nombre_cliente.as_deref().unwrap_or_default(),
                item.nombre_membresia.as_deref().unwrap_or_default(),
            ],
        )
    }
}
