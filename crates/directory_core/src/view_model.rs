use crate::{LoadState, SortKey, User};

/// What the list area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// First page pending; replaces any content.
    Loading,
    /// First page failed; replaces the whole list.
    Failed(String),
    /// Nothing loaded matches the current search.
    Empty,
    Records { trailing_indicator: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub title: String,
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub company: String,
}

impl DetailsView {
    pub fn from_user(user: &User) -> Self {
        Self {
            title: user.first_name().to_string(),
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address.one_line(),
            company: user.company.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub records: Vec<User>,
    pub load_state: LoadState,
    pub body: ListBody,
    pub search_text: String,
    pub sort_key: SortKey,
    pub end_of_data: bool,
    pub total_loaded: usize,
    pub last_dropped_duplicates: usize,
    pub details: Option<DetailsView>,
    pub dirty: bool,
}
