use crate::domain::amount::Amount;
use crate::domain::ports::PaymentStrategyBox;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::io::Write;
use tracing::debug;

/// Holds the currently selected payment strategy and forwards payments to it.
///
/// The context owns at most one strategy at a time. Confirmation lines written
/// by the strategy go to the sink `W` (stdout in the binary, a `Vec<u8>` in
/// tests).
pub struct PaymentContext<W: Write> {
    strategy: Option<PaymentStrategyBox>,
    out: W,
}

impl<W: Write> PaymentContext<W> {
    /// Creates a context with no strategy selected.
    pub fn new(out: W) -> Self {
        Self {
            strategy: None,
            out,
        }
    }

    pub fn with_strategy(strategy: PaymentStrategyBox, out: W) -> Self {
        Self {
            strategy: Some(strategy),
            out,
        }
    }

    /// Replaces the current strategy. The previous one is dropped.
    pub fn set_strategy(&mut self, strategy: PaymentStrategyBox) {
        debug!(method = strategy.name(), "payment strategy selected");
        self.strategy = Some(strategy);
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Pays `amount` with the current strategy.
    ///
    /// # Errors
    ///
    /// * [`PaymentError::NoStrategy`] if `set_strategy` was never called.
    /// * [`PaymentError::ValidationError`] if `amount` is negative.
    /// * Whatever the strategy itself returns.
    pub fn pay(&mut self, amount: Decimal) -> Result<()> {
        let strategy = self.strategy.as_ref().ok_or(PaymentError::NoStrategy)?;
        let amount = Amount::try_from(amount)?;

        debug!(method = strategy.name(), %amount, "dispatching payment");
        strategy.pay(amount, &mut self.out)
    }

    /// Consumes the context and returns the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
