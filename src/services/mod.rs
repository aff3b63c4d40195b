pub mod amount_service;
pub mod balance_service;
pub mod network_config;
pub mod transfer_service;
