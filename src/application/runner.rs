use super::context::PaymentContext;
use crate::domain::plan::PaymentPlan;
use std::io::Write;
use tracing::{info, warn};

/// Outcome counts of a plan run.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct PlanSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs every step of `plan` through `context`, switching strategy before each
/// payment.
///
/// A failed step is logged as a `warn` event and counted; the run then moves
/// on to the next step.
pub fn run_plan<W: Write>(plan: PaymentPlan, context: &mut PaymentContext<W>) -> PlanSummary {
    let mut summary = PlanSummary::default();

    for (index, step) in plan.payments.into_iter().enumerate() {
        context.set_strategy(step.method.into_strategy());
        match context.pay(step.amount) {
            Ok(()) => summary.succeeded += 1,
            Err(e) => {
                warn!(step = index, error = %e, "payment failed");
                summary.failed += 1;
            }
        }
    }

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "payment plan finished"
    );
    summary
}
