use crate::{RequestId, SortKey, User, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View mounted; request the first page.
    Initialize,
    /// User asked to reload after a failure.
    RetryClicked,
    /// User edited the search box.
    SearchTextChanged(String),
    /// User picked a sort order.
    SortPressed(SortKey),
    /// List scrolled to its end.
    ScrollEndReached,
    /// User opened a record.
    ItemSelected(UserId),
    /// User closed the detail view.
    BackPressed,
    /// Engine completion for a page request. Failures carry a display message.
    PageFetched {
        request_id: RequestId,
        page: u32,
        result: Result<Vec<User>, String>,
    },
    /// Controller torn down; later messages are ignored.
    Disposed,
}
