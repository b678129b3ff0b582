//! Value types for the query parameters shared by most list endpoints.

use crate::error::ValidationError;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// One page of a paginated listing.
///
/// The values are passed through to the API as-is; they are range-checked when
/// the request is built, before anything is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    /// 1-based page number.
    pub page: u32,
    /// Items per page, `1..=2000`.
    pub size: u32,
}

impl Paging {
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// First page with `size` items.
    pub const fn first(size: u32) -> Self {
        Self::new(1, size)
    }

    /// The page after this one, same size.
    pub const fn next(self) -> Self {
        Self::new(self.page.saturating_add(1), self.size)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page < 1 {
            return Err(ValidationError::PageOutOfRange(self.page));
        }
        if self.size < 1 || self.size > MAX_PAGE_SIZE {
            return Err(ValidationError::SizeOutOfRange(self.size));
        }
        Ok(())
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::first(20)
    }
}

impl From<(u32, u32)> for Paging {
    fn from((page, size): (u32, u32)) -> Self {
        Self::new(page, size)
    }
}

/// Optional block-number window, sent as `blockNumberStart` / `blockNumberEnd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockRange {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl BlockRange {
    /// No bounds: neither parameter is sent.
    pub const ALL: Self = Self {
        start: None,
        end: None,
    };

    pub const fn between(start: u64, end: u64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub const fn from_block(start: u64) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub const fn until_block(end: u64) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }
}
