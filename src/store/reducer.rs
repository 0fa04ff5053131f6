use crate::mvi::Reducer;
use crate::store::intent::AdviceIntent;
use crate::store::state::FetchState;

pub struct AdviceReducer;

impl Reducer for AdviceReducer {
    type State = FetchState;
    type Intent = AdviceIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AdviceIntent::RequestIssued => FetchState::Loading {
                previous: state.record().cloned(),
            },
            AdviceIntent::FetchSucceeded { record } => FetchState::Loaded { current: record },
            AdviceIntent::FetchFailed => FetchState::Failed {
                previous: state.record().cloned(),
            },
        }
    }
}
