use crate::domain::amount::Amount;
use crate::domain::ports::PaymentStrategy;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Pays with a credit card.
///
/// All fields are opaque strings. Nothing is validated and no card is charged;
/// the strategy only prints a confirmation line.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCardStrategy {
    /// Card holder name.
    pub name: String,
    pub card_number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub security_code: String,
}

impl CreditCardStrategy {
    pub fn new(
        name: impl Into<String>,
        card_number: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
        security_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            card_number: card_number.into(),
            exp_month: exp_month.into(),
            exp_year: exp_year.into(),
            security_code: security_code.into(),
        }
    }
}

impl fmt::Debug for CreditCardStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardStrategy")
            .field("name", &self.name)
            .field("card_number", &self.card_number)
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("security_code", &"***")
            .finish()
    }
}

impl PaymentStrategy for CreditCardStrategy {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn pay(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        debug!(%amount, "charging credit card");
        writeln!(out, "Paid {} by credit card {}", amount, self.card_number)?;
        Ok(())
    }
}
