//! Controller del dashboard
//!
//! Agrega los números que muestran las tarjetas del panel: conteos por
//! sección, vehículos por estado, facturación por estado y stock bajo.

use rust_decimal::Decimal;

use crate::dto::dashboard_dto::{
    DashboardSummary, InventoryStats, InvoiceStats, PaymentStats, VehicleStats,
};
use crate::models::invoice::InvoiceStatus;
use crate::models::vehicle::VehicleStatus;
use crate::state::AppState;

/// Umbral por debajo del cual un artículo cuenta como stock bajo
const LOW_STOCK_THRESHOLD: u32 = 20;

pub struct DashboardController {
    state: AppState,
}

impl DashboardController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn summary(&self) -> DashboardSummary {
        let vehicles = self.state.vehicles.all().await;
        let invoices = self.state.invoices.all().await;
        let inventory = self.state.inventory.all().await;
        let payments = self.state.payments.all().await;

        let vehicle_stats = VehicleStats {
            total: vehicles.len(),
            active: vehicles.iter().filter(|v| v.status == VehicleStatus::Active).count(),
            maintenance: vehicles
                .iter()
                .filter(|v| v.status == VehicleStatus::Maintenance)
                .count(),
            inactive: vehicles.iter().filter(|v| v.status == VehicleStatus::Inactive).count(),
        };

        let outstanding_amount: Decimal = invoices
            .iter()
            .filter(|i| i.status != InvoiceStatus::Paid)
            .map(|i| i.amount)
            .sum();
        let invoice_stats = InvoiceStats {
            total: invoices.len(),
            paid: invoices.iter().filter(|i| i.status == InvoiceStatus::Paid).count(),
            pending: invoices.iter().filter(|i| i.status == InvoiceStatus::Pending).count(),
            overdue: invoices.iter().filter(|i| i.status == InvoiceStatus::Overdue).count(),
            outstanding_amount,
        };

        let inventory_stats = InventoryStats {
            total_items: inventory.len(),
            total_units: inventory.iter().map(|i| i.quantity as u64).sum(),
            low_stock_items: inventory
                .iter()
                .filter(|i| i.quantity < LOW_STOCK_THRESHOLD)
                .count(),
        };

        let payment_stats = PaymentStats {
            total: payments.len(),
            amount_received: payments.iter().map(|p| p.amount).sum(),
        };

        DashboardSummary {
            vehicles: vehicle_stats,
            invoices: invoice_stats,
            inventory: inventory_stats,
            payments: payment_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::EnvironmentConfig;

    #[tokio::test]
    async fn summary_over_the_seed_fixtures() {
        let state = AppState::new(EnvironmentConfig::default());
        let summary = DashboardController::new(state).summary().await;

        assert_eq!(summary.vehicles.total, 12);
        assert_eq!(
            summary.vehicles.active + summary.vehicles.maintenance + summary.vehicles.inactive,
            12
        );

        assert_eq!(summary.invoices.total, 12);
        assert_eq!(summary.invoices.paid, 4);
        assert_eq!(summary.invoices.pending, 5);
        assert_eq!(summary.invoices.overdue, 3);

        assert_eq!(summary.inventory.total_items, 12);
        // P007 (15), P010 (10) y P012 (18) están por debajo del umbral
        assert_eq!(summary.inventory.low_stock_items, 3);

        assert_eq!(summary.payments.total, 7);
    }
}
