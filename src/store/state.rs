use crate::mvi::StoreState;
use crate::record::AdviceRecord;

/// Fetch lifecycle for the advice screen. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No fetch has started yet.
    #[default]
    Idle,
    /// A fetch is in flight. Carries the last known good record so a
    /// renderer can dim or hold stale content instead of blanking.
    Loading { previous: Option<AdviceRecord> },
    /// The most recent fetch succeeded.
    Loaded { current: AdviceRecord },
    /// The most recent fetch failed. The prior record (if any) is kept
    /// and should be rendered as stale.
    Failed { previous: Option<AdviceRecord> },
}

impl StoreState for FetchState {}

impl FetchState {
    /// Last known good record, regardless of variant.
    pub fn record(&self) -> Option<&AdviceRecord> {
        match self {
            Self::Idle => None,
            Self::Loading { previous } | Self::Failed { previous } => previous.as_ref(),
            Self::Loaded { current } => Some(current),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
