use crate::domain::amount::Amount;
use crate::domain::ports::PaymentStrategy;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Pays through an Alipay account. The credentials are never checked.
#[derive(Clone, PartialEq, Eq)]
pub struct AlipayStrategy {
    pub account: String,
    pub password: String,
}

impl AlipayStrategy {
    pub fn new(account: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AlipayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlipayStrategy")
            .field("account", &self.account)
            .field("password", &"***")
            .finish()
    }
}

impl PaymentStrategy for AlipayStrategy {
    fn name(&self) -> &'static str {
        "alipay"
    }

    fn pay(&self, amount: Amount, out: &mut dyn Write) -> Result<()> {
        debug!(%amount, "charging alipay account");
        writeln!(out, "Paid {} by Alipay {}", amount, self.account)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_alipay_confirmation() {
        let strategy = AlipayStrategy::new("zhangsan@qq.com", "123456");
        let mut out = Vec::new();

        strategy
            .pay(Amount::new(dec!(50)).unwrap(), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Paid 50.00 by Alipay zhangsan@qq.com\n"
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let strategy = AlipayStrategy::new("zhangsan@qq.com", "123456");
        assert!(!format!("{strategy:?}").contains("123456"));
    }
}
