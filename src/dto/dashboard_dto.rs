//! DTOs del dashboard

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStats {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub inactive: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub total: usize,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Suma de los montos aún no cobrados (Pending + Overdue)
    pub outstanding_amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_units: u64,
    pub low_stock_items: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total: usize,
    pub amount_received: Decimal,
}

/// Resumen de las cuatro secciones que alimenta las tarjetas del dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub vehicles: VehicleStats,
    pub invoices: InvoiceStats,
    pub inventory: InventoryStats,
    pub payments: PaymentStats,
}
