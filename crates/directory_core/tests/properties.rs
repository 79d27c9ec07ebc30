use std::collections::HashSet;

use directory_core::{
    derive_indices, update, AccumulatedSet, Address, AppState, Company, Effect, Msg, SearchQuery,
    SortKey, User,
};
use proptest::prelude::*;

fn user(id: u64, name: String, email: String) -> User {
    User {
        id,
        name,
        email,
        address: Address {
            street: String::new(),
            city: String::new(),
            zipcode: String::new(),
        },
        company: Company {
            name: String::new(),
        },
    }
}

fn arb_user() -> impl Strategy<Value = User> {
    (0u64..40, "[a-dA-DéÉ ]{0,6}", "[a-d]{1,4}@[xy]\\.org")
        .prop_map(|(id, name, email)| user(id, name, email))
}

fn arb_pages() -> impl Strategy<Value = Vec<Vec<User>>> {
    prop::collection::vec(prop::collection::vec(arb_user(), 0..8), 0..6)
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop_oneof![Just(SortKey::None), Just(SortKey::Name), Just(SortKey::Email)]
}

fn accumulate(pages: &[Vec<User>]) -> AccumulatedSet {
    let mut set = AccumulatedSet::default();
    for page in pages {
        set.extend_dedup(page.clone());
    }
    set
}

/// Drives `update` through `pages` as successive fetches.
fn drive(page_size: u32, pages: &[Vec<User>]) -> (AppState, usize) {
    let (mut state, mut effects) = update(AppState::new(page_size), Msg::Initialize);
    let mut requests = 0;
    for page in pages {
        let Some(Effect::FetchPage {
            request_id,
            page: page_no,
            ..
        }) = effects.pop()
        else {
            break;
        };
        requests += 1;
        let (next, _) = update(
            state,
            Msg::PageFetched {
                request_id,
                page: page_no,
                result: Ok(page.clone()),
            },
        );
        let (next, next_effects) = update(next, Msg::ScrollEndReached);
        state = next;
        effects = next_effects;
    }
    (state, requests)
}

proptest! {
    #[test]
    fn accumulated_ids_are_unique_and_first_seen(pages in arb_pages()) {
        let set = accumulate(&pages);

        let mut seen = HashSet::new();
        let expected: Vec<&User> = pages
            .iter()
            .flatten()
            .filter(|user| seen.insert(user.id))
            .collect();
        let actual: Vec<&User> = set.records().iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn controller_dedups_across_fetched_pages(pages in arb_pages()) {
        let (state, requests) = drive(4, &pages);
        let ids: Vec<u64> = state.accumulated().records().iter().map(|u| u.id).collect();
        let unique: HashSet<u64> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
        prop_assert!(requests <= pages.len());
    }

    #[test]
    fn unsorted_view_is_filtered_arrival_order(pages in arb_pages(), text in "[a-d]{0,2}") {
        let set = accumulate(&pages);
        let query = SearchQuery::new(text.clone());
        let indices = derive_indices(set.records(), &query, SortKey::None);

        let needle = text.to_lowercase();
        let expected: Vec<usize> = set
            .records()
            .iter()
            .enumerate()
            .filter(|(_, u)| u.name.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn filtered_sort_is_subsequence_of_full_sort(
        pages in arb_pages(),
        text in "[a-d]{0,2}",
        sort in arb_sort(),
    ) {
        let set = accumulate(&pages);
        let query = SearchQuery::new(text.clone());
        let full = derive_indices(set.records(), &SearchQuery::default(), sort);
        let filtered = derive_indices(set.records(), &query, sort);

        let needle = text.to_lowercase();
        for &idx in &filtered {
            prop_assert!(set.records()[idx].name.to_lowercase().contains(&needle));
        }
        let mut rest = full.iter();
        for idx in &filtered {
            prop_assert!(rest.any(|candidate| candidate == idx));
        }
    }

    #[test]
    fn repeating_search_changes_nothing(pages in arb_pages(), text in "[a-dA-D]{0,3}") {
        let (state, _) = drive(4, &pages);
        let (once, _) = update(state, Msg::SearchTextChanged(text.clone()));
        let (twice, _) = update(once.clone(), Msg::SearchTextChanged(text));
        prop_assert_eq!(once, twice);
    }
}
