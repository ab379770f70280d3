//! Facade crate for `GymHub` features and shared modules.
//! Re-exports domain/kernel primitives and wires every feature service onto one
//! backend client. Keep this crate thin: it composes other crates, it does not
//! implement business logic.
//!
//! ## Example
//! ```no_run
//! use gymhub::GymHub;
//! use gymhub::domain::config::ClientConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let hub = GymHub::builder().config(ClientConfig::default()).build()?;
//! let clients = hub.clients().list().await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{GymHubError, GymHubErrorExt};
pub use gymhub_domain as domain;
pub use gymhub_http as http;
pub use gymhub_kernel as kernel;

/// Feature slices re-exported under one roof.
pub mod features {
    pub use gymhub_auth as auth;
    pub use gymhub_dashboard as dashboard;
    pub use gymhub_memberships as memberships;
    pub use gymhub_payments as payments;
    pub use gymhub_people as people;
    pub use gymhub_training as training;
}

use gymhub_auth::{AuthService, Session};
use gymhub_dashboard::DashboardService;
use gymhub_domain::config::ClientConfig;
use gymhub_http::ApiClient;
use gymhub_kernel::confirm::{Confirm, NeverConfirm};
use gymhub_memberships::{ClientMembershipService, MembershipCatalog};
use gymhub_payments::{PaymentService, ProductService};
use gymhub_people::{AdministratorService, ClientService, InstructorService, ReceptionistService};
use gymhub_training::{ActivityService, RoutineService};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A fluent builder for configuring and initializing [`GymHub`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Default)]
pub struct GymHubBuilder {
    config: ClientConfig,
    confirm: Option<Arc<dyn Confirm>>,
    session: Option<Session>,
}

impl fmt::Debug for GymHubBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GymHubBuilder")
            .field("config", &self.config)
            .field("confirm", &self.confirm.is_some())
            .finish_non_exhaustive()
    }
}

impl GymHubBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Backend base URL, e.g. `http://localhost:8081/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    /// Asked before renewals and cancellations. Declines everything when unset.
    pub fn confirm(mut self, confirm: Arc<dyn Confirm>) -> Self {
        self.confirm = Some(confirm);
        self
    }

    /// Shares an existing operator session.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Builds the backend client and every feature service on top of it.
    ///
    /// # Errors
    /// Returns [`GymHubError::Api`] when the configured base URL is unusable.
    pub fn build(self) -> Result<GymHub, GymHubError> {
        let api = ApiClient::new(&self.config.api).context("Failed to build the backend client")?;
        let confirm = self.confirm.unwrap_or_else(|| Arc::new(NeverConfirm));
        let session = self.session.unwrap_or_default();
        debug!(base_url = %self.config.api.base_url, "GymHub client ready");

        let clients = ClientService::new(api.clone());
        let client_memberships = ClientMembershipService::new(api.clone(), confirm);
        let payments = PaymentService::new(api.clone());
        let products = ProductService::new(api.clone());
        let activities = ActivityService::new(api.clone());
        let dashboard = DashboardService::new(
            clients.clone(),
            client_memberships.clone(),
            payments.clone(),
            products.clone(),
            activities.clone(),
        );

        Ok(GymHub {
            instructors: InstructorService::new(api.clone()),
            receptionists: ReceptionistService::new(api.clone()),
            administrators: AdministratorService::new(api.clone()),
            catalog: MembershipCatalog::new(api.clone()),
            routines: RoutineService::new(api.clone()),
            auth: AuthService::with_session(api.clone(), session),
            clients,
            client_memberships,
            payments,
            products,
            activities,
            dashboard,
            config: self.config,
            api,
        })
    }
}

/// Every feature service, sharing one backend client.
#[derive(Debug, Clone)]
pub struct GymHub {
    config: ClientConfig,
    api: ApiClient,
    clients: ClientService,
    instructors: InstructorService,
    receptionists: ReceptionistService,
    administrators: AdministratorService,
    catalog: MembershipCatalog,
    client_memberships: ClientMembershipService,
    payments: PaymentService,
    products: ProductService,
    activities: ActivityService,
    routines: RoutineService,
    auth: AuthService,
    dashboard: DashboardService,
}

impl GymHub {
    pub fn builder() -> GymHubBuilder {
        GymHubBuilder::default()
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub const fn clients(&self) -> &ClientService {
        &self.clients
    }

    #[must_use]
    pub const fn instructors(&self) -> &InstructorService {
        &self.instructors
    }

    #[must_use]
    pub const fn receptionists(&self) -> &ReceptionistService {
        &self.receptionists
    }

    #[must_use]
    pub const fn administrators(&self) -> &AdministratorService {
        &self.administrators
    }

    /// Membership types and payment plans.
    #[must_use]
    pub const fn catalog(&self) -> &MembershipCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn client_memberships(&self) -> &ClientMembershipService {
        &self.client_memberships
    }

    #[must_use]
    pub const fn payments(&self) -> &PaymentService {
        &self.payments
    }

    #[must_use]
    pub const fn products(&self) -> &ProductService {
        &self.products
    }

    #[must_use]
    pub const fn activities(&self) -> &ActivityService {
        &self.activities
    }

    #[must_use]
    pub const fn routines(&self) -> &RoutineService {
        &self.routines
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    #[must_use]
    pub const fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }
}
