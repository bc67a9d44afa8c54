pub mod assistant_routes;
pub mod auth_routes;
pub mod checkout_routes;
pub mod dashboard_routes;
pub mod inventory_routes;
pub mod invoice_routes;
pub mod payment_routes;
pub mod vehicle_routes;
