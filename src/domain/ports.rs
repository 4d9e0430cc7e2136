use super::amount::Amount;
use crate::error::Result;
use std::io::Write;

/// A payment algorithm that can be swapped in and out of a
/// [`PaymentContext`](crate::application::context::PaymentContext) at runtime.
pub trait PaymentStrategy: Send + Sync {
    /// Stable label for the payment method, safe to log.
    fn name(&self) -> &'static str;

    /// Charges `amount`, writing a confirmation line to `out`.
    fn pay(&self, amount: Amount, out: &mut dyn Write) -> Result<()>;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
