use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

/// Results shown per page.
pub const PAGE_SIZE: usize = 5;

/// Idle time after which a session stops accepting navigation.
pub const SESSION_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("there are no results to paginate")]
    EmptyResultSet,

    #[error("this pagination session has expired")]
    SessionExpired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A fixed-size window over a session's results.
#[derive(Debug, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page_index: usize,
    pub page_count: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    /// Zero-based position of `items[0]` in the full result list.
    pub first_item_index: usize,
    pub total_items: usize,
}

/// Cursor over an immutable, non-empty result list.
///
/// Invariant: `current_page <= max_page()`.
#[derive(Debug)]
pub struct SearchSession<T> {
    query: String,
    results: Vec<T>,
    page_size: usize,
    current_page: usize,
    owner_message: Option<u64>,
    created_at: Instant,
    last_activity: Instant,
    ttl: Duration,
    expired: bool,
}

impl<T> SearchSession<T> {
    pub fn create(
        query: impl Into<String>,
        results: Vec<T>,
        now: Instant,
    ) -> Result<Self, PaginationError> {
        Self::with_page_size(query, results, PAGE_SIZE, now)
    }

    pub fn with_page_size(
        query: impl Into<String>,
        results: Vec<T>,
        page_size: usize,
        now: Instant,
    ) -> Result<Self, PaginationError> {
        if results.is_empty() {
            return Err(PaginationError::EmptyResultSet);
        }

        Ok(Self {
            query: query.into(),
            results,
            page_size: page_size.max(1),
            current_page: 0,
            owner_message: None,
            created_at: now,
            last_activity: now,
            ttl: SESSION_TTL,
            expired: false,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn max_page(&self) -> usize {
        (self.results.len() - 1) / self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.max_page() + 1
    }

    pub fn owner_message(&self) -> Option<u64> {
        self.owner_message
    }

    pub(crate) fn set_owner_message(&mut self, message_id: u64) {
        self.owner_message = Some(message_id);
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn expires_at(&self) -> Instant {
        self.last_activity + self.ttl
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expired || now >= self.expires_at()
    }

    /// Flag the session expired so renders disable navigation.
    pub fn expire(&mut self) {
        self.expired = true;
    }

    /// Whether navigation controls should be rendered non-interactive.
    pub fn controls_disabled(&self) -> bool {
        self.expired
    }

    pub fn render_page(&self) -> PageView<'_, T> {
        let total_items = self.results.len();
        let start = (self.current_page * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);
        let max_page = self.max_page();

        PageView {
            items: &self.results[start..end],
            page_index: self.current_page,
            page_count: max_page + 1,
            is_first_page: self.current_page == 0,
            is_last_page: self.current_page == max_page,
            first_item_index: start,
            total_items,
        }
    }

    /// Move the cursor one page, clamping silently at both ends.
    ///
    /// Returns the page index after the move.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> Result<usize, PaginationError> {
        if self.is_expired(now) {
            self.expired = true;
            return Err(PaginationError::SessionExpired);
        }

        self.current_page = match direction {
            Direction::Next => (self.current_page + 1).min(self.max_page()),
            Direction::Previous => self.current_page.saturating_sub(1),
        };
        self.last_activity = now;

        Ok(self.current_page)
    }
}
