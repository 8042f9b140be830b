use crate::{Effect, Msg, ScanState, NAVIGATION_DELAY_MS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ScanState, msg: Msg) -> (ScanState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigated { location, at_ms } => {
            state.navigate(location);
            state.schedule(at_ms.saturating_add(NAVIGATION_DELAY_MS));
            vec![Effect::ResetCache]
        }
        Msg::Triggered { source, at_ms } => {
            if source.applies_to(state.page()) {
                state.schedule(at_ms.saturating_add(source.delay_ms()));
            }
            Vec::new()
        }
        Msg::Tick { now_ms } => {
            if state.take_due(now_ms) {
                vec![Effect::RunPass { page: state.page() }]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
