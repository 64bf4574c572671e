//! CLI command implementations

pub mod create_order;
pub mod currencies;
pub mod methods;
