pub mod use_fetch;
pub mod use_room_facilities;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_room_facilities::use_room_facilities;

/// Distinguishes "not fetched yet" from "fetched" so callers can tell an
/// initial load apart from a refetch of existing data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::NotFetched => None,
            FetchState::Fetched(value) => Some(value),
        }
    }
}
