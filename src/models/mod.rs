pub mod checkout;
pub mod inventory;
pub mod invoice;
pub mod payment;
pub mod user;
pub mod vehicle;
