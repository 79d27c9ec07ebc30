use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        request_id: RequestId,
        page: u32,
        page_size: u32,
    },
    /// Drop any outstanding fetch; its result must never be delivered.
    CancelFetches,
}
