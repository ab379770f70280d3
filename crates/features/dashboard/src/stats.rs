use chrono::NaiveDate;
use gymhub_domain::{
    Activity, CatalogStatus, Client, ClientMembership, MembershipStatus, Payment, PaymentMethod,
    PersonStatus, Product,
};
use gymhub_memberships::lifecycle::{effective_status, is_expiring};
use gymhub_payments::stock::low_stock;
use gymhub_payments::summary::{revenue_by_method, revenue_in_month, revenue_on};
use gymhub_training::activity::occupancy;
use strum::IntoEnumIterator;

/// Collections the dashboard is computed from.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub clients: Vec<Client>,
    pub memberships: Vec<ClientMembership>,
    pub payments: Vec<Payment>,
    pub products: Vec<Product>,
    pub activities: Vec<Activity>,
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub today: NaiveDate,
    pub total_clients: usize,
    pub active_clients: usize,
    /// Share of active clients, one decimal.
    pub active_client_percent: f64,
    pub active_memberships: usize,
    pub expiring_memberships: usize,
    /// Count per effective status, every status listed.
    pub memberships_by_status: Vec<(MembershipStatus, usize)>,
    pub revenue_today: f64,
    pub revenue_month: f64,
    pub revenue_by_method: Vec<(PaymentMethod, f64)>,
    /// Products at or below their minimum stock, emptiest first.
    pub low_stock: Vec<Product>,
    /// Mean occupancy of active classes, one decimal.
    pub average_occupancy: f64,
    pub full_activities: usize,
}

/// `part / whole` as a percentage with one decimal; zero for an empty whole.
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / whole as f64).round() / 10.0
}

impl DashboardStats {
    /// Derives every tile from `snapshot` as of `today`.
    #[must_use]
    pub fn compute(snapshot: &DashboardSnapshot, today: NaiveDate, expiring_window_days: i64) -> Self {
        let active_clients = snapshot.clients.iter().filter(|c| c.estatus == PersonStatus::Active).count();

        let memberships_by_status: Vec<(MembershipStatus, usize)> = MembershipStatus::iter()
            .map(|status| {
                let count =
                    snapshot.memberships.iter().filter(|m| effective_status(m, today) == status).count();
                (status, count)
            })
            .collect();
        let active_memberships = memberships_by_status
            .iter()
            .find(|(status, _)| *status == MembershipStatus::Active)
            .map_or(0, |(_, count)| *count);

        let running: Vec<&Activity> =
            snapshot.activities.iter().filter(|a| a.estatus == CatalogStatus::Active).collect();
        let average_occupancy = if running.is_empty() {
            0.0
        } else {
            let total: f64 = running.iter().map(|a| occupancy(a)).sum();
            (total * 10.0 / running.len() as f64).round() / 10.0
        };

        Self {
            today,
            total_clients: snapshot.clients.len(),
            active_clients,
            active_client_percent: percent(active_clients, snapshot.clients.len()),
            active_memberships,
            expiring_memberships: snapshot
                .memberships
                .iter()
                .filter(|m| is_expiring(m, today, expiring_window_days))
                .count(),
            memberships_by_status,
            revenue_today: revenue_on(&snapshot.payments, today),
            revenue_month: revenue_in_month(&snapshot.payments, today),
            revenue_by_method: revenue_by_method(&snapshot.payments),
            low_stock: low_stock(&snapshot.products),
            average_occupancy,
            full_activities: running.iter().filter(|a| a.inscritos >= a.cupo_maximo).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn percentages_of_empty_sets_are_zero() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(2, 3), 66.7);
        assert_eq!(percent(4, 4), 100.0);
    }

    #[test]
    fn empty_snapshot() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let stats = DashboardStats::compute(&DashboardSnapshot::default(), today, 7);
        assert_eq!(stats.total_clients, 0);
        assert_eq!(stats.active_client_percent, 0.0);
        assert_eq!(stats.average_occupancy, 0.0);
        assert_eq!(stats.memberships_by_status.len(), 5);
        assert!(stats.low_stock.is_empty());
    }
}
