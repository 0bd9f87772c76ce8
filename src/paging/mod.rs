//! Page arithmetic. Pure functions over integers; page numbers are 1-indexed.

use thiserror::Error;

/// Default number of resources per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("page number must be a positive number (got {0})")]
    InvalidPage(i64),
    #[error("page size must be a positive number")]
    InvalidPageSize,
}

/// Zero-based offset of the first element on `page`.
pub fn start_offset(page: i64, page_size: usize) -> Result<usize, PagingError> {
    if page < 1 {
        return Err(PagingError::InvalidPage(page));
    }
    if page_size == 0 {
        return Err(PagingError::InvalidPageSize);
    }
    let index = usize::try_from(page - 1).map_err(|_| PagingError::InvalidPage(page))?;
    Ok(index.saturating_mul(page_size))
}

pub fn has_previous(page: i64) -> bool {
    page > 1
}

pub fn has_next(page: i64, page_size: usize, total: usize) -> bool {
    match start_offset(page, page_size) {
        Ok(offset) => offset.saturating_add(page_size) < total,
        Err(_) => false,
    }
}

/// Offset and navigation flags for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub page: i64,
    pub page_size: usize,
    pub offset: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageDescriptor {
    pub fn new(page: i64, page_size: usize, total: usize) -> Result<Self, PagingError> {
        let offset = start_offset(page, page_size)?;
        Ok(Self {
            page,
            page_size,
            offset,
            has_previous: has_previous(page),
            has_next: offset.saturating_add(page_size) < total,
        })
    }
}
