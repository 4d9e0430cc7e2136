//! Concrete payment strategies.

pub mod alipay;
pub mod credit_card;
