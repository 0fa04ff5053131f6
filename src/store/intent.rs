use crate::mvi::Intent;
use crate::record::AdviceRecord;

#[derive(Debug, Clone)]
pub enum AdviceIntent {
    /// A fetch was issued. Enter `Loading`, carrying the prior record.
    RequestIssued,
    /// The current fetch resolved with a record.
    FetchSucceeded { record: AdviceRecord },
    /// The current fetch failed. The prior record survives, flagged stale.
    FetchFailed,
}

impl Intent for AdviceIntent {}
