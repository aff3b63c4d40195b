pub mod amount;
pub mod api_response;
pub mod network_config;
pub mod token;
pub mod transfer;
