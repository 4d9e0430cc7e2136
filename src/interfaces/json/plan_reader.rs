use crate::domain::plan::PaymentPlan;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads a [`PaymentPlan`] from a JSON source.
pub struct PlanReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> PlanReader<R> {
    /// Creates a new `PlanReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Parses the whole source into a plan.
    pub fn read(self) -> Result<PaymentPlan> {
        Ok(serde_json::from_reader(self.reader)?)
    }
}
