use std::collections::HashSet;

use crate::query::derive_indices;
use crate::view_model::{DetailsView, ListBody, ListViewModel};
use crate::{SearchQuery, SortKey, User, UserId};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Constructed, nothing requested yet.
    #[default]
    Idle,
    LoadingFirst,
    Ready,
    LoadingMore,
    Error(String),
}

/// Which kind of page an in-flight request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    First,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub request_id: RequestId,
    pub page: u32,
    pub kind: PageKind,
}

/// Arrival-ordered records, unique by id. The first instance of an id wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccumulatedSet {
    records: Vec<User>,
    ids: HashSet<UserId>,
}

impl AccumulatedSet {
    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        if !self.contains(id) {
            return None;
        }
        self.records.iter().find(|user| user.id == id)
    }

    /// Appends `page` in order, dropping ids already present. Returns the number dropped.
    pub fn extend_dedup(&mut self, page: Vec<User>) -> usize {
        let mut dropped = 0;
        for user in page {
            if self.ids.insert(user.id) {
                self.records.push(user);
            } else {
                dropped += 1;
            }
        }
        dropped
    }

    fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page_size: u32,
    accumulated: AccumulatedSet,
    cursor: u32,
    end_of_data: bool,
    load_state: LoadState,
    in_flight: Option<InFlight>,
    next_request_id: RequestId,
    search: SearchQuery,
    sort: SortKey,
    derived: Vec<usize>,
    selected: Option<UserId>,
    last_dropped_duplicates: usize,
    disposed: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    /// A page size of zero is treated as one.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            accumulated: AccumulatedSet::default(),
            cursor: 1,
            end_of_data: false,
            load_state: LoadState::Idle,
            in_flight: None,
            next_request_id: 1,
            search: SearchQuery::default(),
            sort: SortKey::None,
            derived: Vec::new(),
            selected: None,
            last_dropped_duplicates: 0,
            disposed: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> ListViewModel {
        let records: Vec<User> = self.derived_records().cloned().collect();
        let body = match &self.load_state {
            LoadState::Idle | LoadState::LoadingFirst => ListBody::Loading,
            LoadState::Error(message) if self.accumulated.is_empty() => {
                ListBody::Failed(message.clone())
            }
            _ if records.is_empty() => ListBody::Empty,
            LoadState::LoadingMore => ListBody::Records {
                trailing_indicator: true,
            },
            _ => ListBody::Records {
                trailing_indicator: false,
            },
        };
        let details = self
            .selected
            .and_then(|id| self.accumulated.get(id))
            .map(DetailsView::from_user);

        ListViewModel {
            records,
            load_state: self.load_state.clone(),
            body,
            search_text: self.search.text().to_string(),
            sort_key: self.sort,
            end_of_data: self.end_of_data,
            total_loaded: self.accumulated.len(),
            last_dropped_duplicates: self.last_dropped_duplicates,
            details,
            dirty: self.dirty,
        }
    }

    /// Displayed records in display order.
    pub fn derived_records(&self) -> impl Iterator<Item = &User> + '_ {
        let records = self.accumulated.records();
        self.derived.iter().map(move |&idx| &records[idx])
    }

    pub fn accumulated(&self) -> &AccumulatedSet {
        &self.accumulated
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn end_of_data(&self) -> bool {
        self.end_of_data
    }

    pub fn in_flight(&self) -> Option<InFlight> {
        self.in_flight
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// Duplicates dropped from the most recently applied page.
    pub fn last_dropped_duplicates(&self) -> usize {
        self.last_dropped_duplicates
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = None;
    }

    /// Registers a new request for `kind` and moves to the matching loading state.
    pub(crate) fn begin_fetch(&mut self, kind: PageKind) -> InFlight {
        let page = match kind {
            PageKind::First => 1,
            PageKind::Next => self.cursor,
        };
        let request = InFlight {
            request_id: self.next_request_id,
            page,
            kind,
        };
        self.next_request_id += 1;
        self.in_flight = Some(request);
        self.load_state = match kind {
            PageKind::First => LoadState::LoadingFirst,
            PageKind::Next => LoadState::LoadingMore,
        };
        self.mark_dirty();
        request
    }

    /// Takes the in-flight request if both `request_id` and `page` match it.
    pub(crate) fn take_in_flight(&mut self, request_id: RequestId, page: u32) -> Option<InFlight> {
        match self.in_flight {
            Some(request) if request.request_id == request_id && request.page == page => {
                self.in_flight.take()
            }
            _ => None,
        }
    }

    pub(crate) fn apply_page(&mut self, request: InFlight, page: Vec<User>) {
        let received = page.len();
        if request.kind == PageKind::First {
            self.accumulated.clear();
            self.selected = None;
        }
        self.last_dropped_duplicates = self.accumulated.extend_dedup(page);
        self.cursor = request.page + 1;
        self.end_of_data = received < self.page_size as usize;
        self.load_state = LoadState::Ready;
        self.recompute_view();
        self.mark_dirty();
    }

    /// A failed first page replaces whatever was shown; a failed next page keeps it.
    pub(crate) fn apply_failure(&mut self, request: InFlight, message: String) {
        if request.kind == PageKind::First {
            self.accumulated.clear();
            self.derived.clear();
            self.selected = None;
            self.cursor = 1;
            self.end_of_data = false;
            self.last_dropped_duplicates = 0;
        }
        self.load_state = LoadState::Error(message);
        self.mark_dirty();
    }

    pub(crate) fn set_search(&mut self, query: SearchQuery) {
        if self.search == query {
            return;
        }
        self.search = query;
        self.recompute_view();
        self.mark_dirty();
    }

    pub(crate) fn set_sort(&mut self, sort: SortKey) {
        if self.sort == sort {
            return;
        }
        self.sort = sort;
        self.recompute_view();
        self.mark_dirty();
    }

    pub(crate) fn select(&mut self, id: Option<UserId>) {
        if self.selected == id {
            return;
        }
        self.selected = id;
        self.mark_dirty();
    }

    fn recompute_view(&mut self) {
        self.derived = derive_indices(self.accumulated.records(), &self.search, self.sort);
    }
}
