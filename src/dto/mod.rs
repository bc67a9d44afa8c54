pub mod assistant_dto;
pub mod auth_dto;
pub mod checkout_dto;
pub mod common;
pub mod dashboard_dto;
pub mod inventory_dto;
pub mod invoice_dto;
pub mod payment_dto;
pub mod vehicle_dto;
