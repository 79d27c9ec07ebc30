//! Directory core: pure list controller state machine and view-model helpers.
mod controller;
mod effect;
mod msg;
mod query;
mod record;
mod state;
mod update;
mod view_model;

pub use controller::{DerivedView, FetchRequest, ListController};
pub use effect::Effect;
pub use msg::Msg;
pub use query::{derive_indices, locale_compare, CollationKey, SearchQuery, SortKey};
pub use record::{Address, Company, User, UserId};
pub use state::{
    AccumulatedSet, AppState, InFlight, LoadState, PageKind, RequestId, DEFAULT_PAGE_SIZE,
};
pub use update::update;
pub use view_model::{DetailsView, ListBody, ListViewModel};
