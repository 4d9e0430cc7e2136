use super::ports::PaymentStrategyBox;
use crate::infrastructure::alipay::AlipayStrategy;
use crate::infrastructure::credit_card::CreditCardStrategy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Describes which strategy a plan step uses, along with its credentials.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    CreditCard {
        name: String,
        card_number: String,
        #[serde(default)]
        exp_month: String,
        #[serde(default)]
        exp_year: String,
        #[serde(default)]
        security_code: String,
    },
    Alipay {
        account: String,
        #[serde(default)]
        password: String,
    },
}

impl StrategyConfig {
    pub fn into_strategy(self) -> PaymentStrategyBox {
        match self {
            StrategyConfig::CreditCard {
                name,
                card_number,
                exp_month,
                exp_year,
                security_code,
            } => Box::new(CreditCardStrategy::new(
                name,
                card_number,
                exp_month,
                exp_year,
                security_code,
            )),
            StrategyConfig::Alipay { account, password } => {
                Box::new(AlipayStrategy::new(account, password))
            }
        }
    }
}

/// One payment of a plan. The amount is checked when the step runs, so a
/// negative value fails that step only.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentStep {
    pub method: StrategyConfig,
    pub amount: Decimal,
}

/// An ordered list of payments, each made with its own strategy.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct PaymentPlan {
    pub payments: Vec<PaymentStep>,
}

impl PaymentPlan {
    /// Built-in plan: a credit card payment of 100.00 followed by an Alipay
    /// payment of 50.00.
    pub fn demo() -> Self {
        Self {
            payments: vec![
                PaymentStep {
                    method: StrategyConfig::CreditCard {
                        name: "张三".to_string(),
                        card_number: "1234 5678 9012 3456".to_string(),
                        exp_month: "12".to_string(),
                        exp_year: "25".to_string(),
                        security_code: "123".to_string(),
                    },
                    amount: dec!(100.00),
                },
                PaymentStep {
                    method: StrategyConfig::Alipay {
                        account: "zhangsan@qq.com".to_string(),
                        password: "123456".to_string(),
                    },
                    amount: dec!(50.00),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_plan() {
        let plan = PaymentPlan::demo();
        assert_eq!(plan.payments.len(), 2);
        assert_eq!(plan.payments[0].amount, dec!(100.00));
        assert_eq!(plan.payments[1].amount, dec!(50.00));
    }

    #[test]
    fn test_config_into_strategy() {
        let strategy = StrategyConfig::Alipay {
            account: "a@b.c".to_string(),
            password: String::new(),
        }
        .into_strategy();
        assert_eq!(strategy.name(), "alipay");

        let strategy = PaymentPlan::demo().payments[0].method.clone().into_strategy();
        assert_eq!(strategy.name(), "credit_card");
    }

    #[test]
    fn test_step_deserialization() {
        let json = r#"{"method": {"type": "alipay", "account": "zhangsan@qq.com"}, "amount": 50}"#;
        let step: PaymentStep = serde_json::from_str(json).unwrap();

        assert_eq!(
            step.method,
            StrategyConfig::Alipay {
                account: "zhangsan@qq.com".to_string(),
                password: String::new(),
            }
        );
        assert_eq!(step.amount, dec!(50));
    }
}
