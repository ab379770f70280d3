use crate::error::DashboardError;
use crate::stats::{DashboardSnapshot, DashboardStats};
use chrono::NaiveDate;
use gymhub_memberships::ClientMembershipService;
use gymhub_payments::{PaymentService, ProductService};
use gymhub_people::ClientService;
use gymhub_training::ActivityService;
use tracing::{debug, info};

/// Loads every collection the dashboard needs, concurrently.
#[derive(Debug, Clone)]
pub struct DashboardService {
    clients: ClientService,
    memberships: ClientMembershipService,
    payments: PaymentService,
    products: ProductService,
    activities: ActivityService,
}

impl DashboardService {
    #[must_use]
    pub const fn new(
        clients: ClientService,
        memberships: ClientMembershipService,
        payments: PaymentService,
        products: ProductService,
        activities: ActivityService,
    ) -> Self {
        Self { clients, memberships, payments, products, activities }
    }

    /// Fetches all collections at once; any failed request fails the whole load.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, DashboardError> {
        debug!("Loading dashboard collections");
        let (clients, memberships, payments, products, activities) = tokio::try_join!(
            async { self.clients.list().await.map_err(DashboardError::from) },
            async { self.memberships.list().await.map_err(DashboardError::from) },
            async { self.payments.list().await.map_err(DashboardError::from) },
            async { self.products.list().await.map_err(DashboardError::from) },
            async { self.activities.list().await.map_err(DashboardError::from) },
        )?;
        Ok(DashboardSnapshot { clients, memberships, payments, products, activities })
    }

    pub async fn load(&self, today: NaiveDate, expiring_window_days: i64) -> Result<DashboardStats, DashboardError> {
        let snapshot = self.snapshot().await?;
        let stats = DashboardStats::compute(&snapshot, today, expiring_window_days);
        info!(
            clients = stats.total_clients,
            active_memberships = stats.active_memberships,
            expiring = stats.expiring_memberships,
            revenue_month = stats.revenue_month,
            "Dashboard loaded"
        );
        Ok(stats)
    }
}
