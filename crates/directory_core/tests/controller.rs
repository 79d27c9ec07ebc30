use directory_core::{
    Address, Company, FetchRequest, ListController, LoadState, SortKey, User,
};

fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
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

fn ten_users() -> Vec<User> {
    (1..=10)
        .map(|id| user(id, &format!("Person {id}"), &format!("p{:02}@x.org", 11 - id)))
        .collect()
}

#[test]
fn first_page_of_ten_is_ready() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    assert_eq!(
        request,
        FetchRequest {
            request_id: 1,
            page: 1,
            page_size: 10
        }
    );

    controller.complete_fetch(request, Ok(ten_users()));
    let view = controller.derived_view();
    assert_eq!(*view.load_state, LoadState::Ready);
    assert_eq!(view.records.len(), 10);
}

#[test]
fn timeout_on_first_page_leaves_empty_view() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    controller.complete_fetch(request, Err("timeout".to_string()));

    let view = controller.derived_view();
    assert_eq!(*view.load_state, LoadState::Error("timeout".to_string()));
    assert!(view.records.is_empty());
}

#[test]
fn load_next_page_is_at_most_one_in_flight() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    assert!(controller.load_next_page().is_none());
    controller.complete_fetch(request, Ok(ten_users()));

    let first = controller.load_next_page();
    let second = controller.load_next_page();
    assert_eq!(first.map(|r| r.page), Some(2));
    assert!(second.is_none());
}

#[test]
fn short_second_page_stops_pagination() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    controller.complete_fetch(request, Ok(ten_users()));

    let request = controller.load_next_page().expect("second page request");
    let extra = (11..=13).map(|id| user(id, "Late", "late@x.org")).collect();
    controller.complete_fetch(request, Ok(extra));

    assert!(controller.derived_view().end_of_data);
    assert!(controller.load_next_page().is_none());
    assert_eq!(controller.derived_view().records.len(), 13);
}

#[test]
fn email_sort_then_none_restores_arrival_order() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    controller.complete_fetch(request, Ok(ten_users()));

    controller.set_sort_key(SortKey::Email);
    let sorted: Vec<u64> = controller.derived_view().records.iter().map(|u| u.id).collect();
    assert_eq!(sorted.first(), Some(&10));

    controller.set_sort_key(SortKey::None);
    let restored: Vec<u64> = controller.derived_view().records.iter().map(|u| u.id).collect();
    assert_eq!(restored, (1..=10).collect::<Vec<_>>());
}

#[test]
fn completion_after_dispose_is_noop() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    controller.dispose();
    controller.complete_fetch(request, Ok(ten_users()));

    let view = controller.derived_view();
    assert_eq!(*view.load_state, LoadState::LoadingFirst);
    assert!(view.records.is_empty());
    assert!(controller.state().is_disposed());
}

#[test]
fn search_and_select_through_facade() {
    let mut controller = ListController::new(10);
    let request = controller.initialize().expect("first page request");
    controller.complete_fetch(
        request,
        Ok(vec![user(1, "John Doe", "j@x"), user(2, "Jane", "ja@x")]),
    );

    controller.set_search_query("john");
    let names: Vec<&str> = controller
        .derived_view()
        .records
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, vec!["John Doe"]);

    controller.select(1);
    assert_eq!(
        controller.state().view().details.map(|d| d.title),
        Some("John".to_string())
    );
    controller.back();
    assert!(controller.state().view().details.is_none());
}
