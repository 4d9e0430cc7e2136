//! Domain types: the payment amount value object, the strategy port and
//! payment plans.

pub mod amount;
pub mod plan;
pub mod ports;
