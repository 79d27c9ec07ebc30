use crate::state::{InFlight, PageKind};
use crate::{AppState, Effect, LoadState, Msg, SearchQuery};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_disposed() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Initialize => {
            if *state.load_state() == LoadState::Idle {
                let request = state.begin_fetch(PageKind::First);
                vec![fetch_effect(&state, request)]
            } else {
                Vec::new()
            }
        }
        Msg::RetryClicked => {
            if matches!(state.load_state(), LoadState::Error(_)) {
                let request = state.begin_fetch(PageKind::First);
                vec![fetch_effect(&state, request)]
            } else {
                Vec::new()
            }
        }
        Msg::ScrollEndReached => {
            // At most one request in flight; nothing past the end of data.
            let can_load = *state.load_state() == LoadState::Ready
                && !state.end_of_data()
                && state.in_flight().is_none();
            if can_load {
                let request = state.begin_fetch(PageKind::Next);
                vec![fetch_effect(&state, request)]
            } else {
                Vec::new()
            }
        }
        Msg::SearchTextChanged(text) => {
            state.set_search(SearchQuery::new(text));
            Vec::new()
        }
        Msg::SortPressed(key) => {
            state.set_sort(key);
            Vec::new()
        }
        Msg::ItemSelected(id) => {
            if state.accumulated().contains(id) {
                state.select(Some(id));
            }
            Vec::new()
        }
        Msg::BackPressed => {
            state.select(None);
            Vec::new()
        }
        Msg::PageFetched {
            request_id,
            page,
            result,
        } => {
            // Results for superseded or unknown requests are dropped untouched.
            if let Some(request) = state.take_in_flight(request_id, page) {
                match result {
                    Ok(users) => state.apply_page(request, users),
                    Err(message) => state.apply_failure(request, message),
                }
            }
            Vec::new()
        }
        Msg::Disposed => {
            state.dispose();
            vec![Effect::CancelFetches]
        }
    };

    (state, effects)
}

fn fetch_effect(state: &AppState, request: InFlight) -> Effect {
    Effect::FetchPage {
        request_id: request.request_id,
        page: request.page,
        page_size: state.page_size(),
    }
}
