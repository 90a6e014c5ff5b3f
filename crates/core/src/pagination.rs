//! Fixed-size, 1-indexed paging over an ordered result set.

use std::num::{IntErrorKind, NonZeroU32};

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE, QUESTIONS_PER_PAGE};
use crate::error::{CoreError, Result};

/// A validated, 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageRequest(NonZeroU32);

impl PageRequest {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    pub fn new(page: u32) -> Result<Self> {
        NonZeroU32::new(page)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidInput("page must be at least 1".to_owned()))
    }

    /// Parses the raw `page` query value. A missing value means the first page;
    /// a non-numeric or non-positive value is rejected.
    ///
    /// Pages too large to represent saturate to the last representable page,
    /// which is always past the end of any result set.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw.map(str::trim) else {
            return Self::new(DEFAULT_PAGE);
        };
        let page = match raw.parse::<i64>() {
            Ok(page) => page,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
            Err(_) => {
                return Err(CoreError::InvalidInput(format!("page '{raw}' is not a number")));
            },
        };
        if page < 1 {
            return Err(CoreError::InvalidInput(format!("page must be at least 1, got {raw}")));
        }
        Self::new(u32::try_from(page).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based index of the first item on this page, `None` on overflow.
    #[must_use]
    pub fn offset(self) -> Option<usize> {
        let index = usize::try_from(self.get() - 1).ok()?;
        index.checked_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Returns the window of `items` that falls on `page`.
///
/// A page past the end yields an empty slice, never an error.
#[must_use]
pub fn paginate<T>(page: PageRequest, items: &[T]) -> &[T] {
    let Some(start) = page.offset() else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
