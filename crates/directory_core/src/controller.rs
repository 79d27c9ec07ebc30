//! Imperative facade over [`update`]: owns the state and turns each intent into
//! at most one page request for the caller to execute.
use crate::{update, AppState, Effect, LoadState, Msg, RequestId, SortKey, User, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub page: u32,
    pub page_size: u32,
}

/// Borrowed snapshot of what the list should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub records: Vec<&'a User>,
    pub load_state: &'a LoadState,
    pub end_of_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListController {
    state: AppState,
}

impl ListController {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: AppState::new(page_size),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Routes `msg` through [`update`] and returns the resulting effects.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    pub fn initialize(&mut self) -> Option<FetchRequest> {
        first_fetch(self.dispatch(Msg::Initialize))
    }

    pub fn retry(&mut self) -> Option<FetchRequest> {
        first_fetch(self.dispatch(Msg::RetryClicked))
    }

    pub fn load_next_page(&mut self) -> Option<FetchRequest> {
        first_fetch(self.dispatch(Msg::ScrollEndReached))
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::SearchTextChanged(text.into()));
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.dispatch(Msg::SortPressed(key));
    }

    pub fn select(&mut self, id: UserId) {
        self.dispatch(Msg::ItemSelected(id));
    }

    pub fn back(&mut self) {
        self.dispatch(Msg::BackPressed);
    }

    /// Applies the outcome of `request`. Stale requests are ignored.
    pub fn complete_fetch(&mut self, request: FetchRequest, result: Result<Vec<User>, String>) {
        self.dispatch(Msg::PageFetched {
            request_id: request.request_id,
            page: request.page,
            result,
        });
    }

    pub fn dispose(&mut self) {
        self.dispatch(Msg::Disposed);
    }

    pub fn derived_view(&self) -> DerivedView<'_> {
        DerivedView {
            records: self.state.derived_records().collect(),
            load_state: self.state.load_state(),
            end_of_data: self.state.end_of_data(),
        }
    }
}

fn first_fetch(effects: Vec<Effect>) -> Option<FetchRequest> {
    effects.into_iter().find_map(|effect| match effect {
        Effect::FetchPage {
            request_id,
            page,
            page_size,
        } => Some(FetchRequest {
            request_id,
            page,
            page_size,
        }),
        Effect::CancelFetches => None,
    })
}
