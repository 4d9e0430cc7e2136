//! Application layer: the `PaymentContext` that delegates to the selected
//! strategy, and the runner that walks a payment plan through it.

pub mod context;
pub mod runner;
