pub mod assistant_service;
pub mod mpesa_service;
pub mod session_service;
pub mod stripe_service;
