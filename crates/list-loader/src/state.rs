//! Loader State
//!
//! Page cursor, counts and trigger bookkeeping for one incrementally
//! loaded list. Pure data: the controller drives the transitions and the
//! view mirrors the result.

use crate::params::PaginationParams;

/// What the "load more" control should look like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Clickable
    Ready,
    /// A request is in flight; clicks are ignored
    #[default]
    Busy,
    /// Every page has been shown; stays this way for the session
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderState {
    /// Last page appended to the list (1-based)
    cursor: u32,
    per_page: u32,
    total_count: u32,
    page_count: u32,
    displayed: u32,
    /// Whether page 1 has landed
    first_page_loaded: bool,
    in_flight: bool,
    exhausted: bool,
}

impl LoaderState {
    /// State right after the parameters arrive, before page 1 is requested.
    pub fn from_params(params: PaginationParams) -> Self {
        let page_count = params.page_count();
        Self {
            cursor: 1,
            per_page: params.per_page,
            total_count: params.total_count,
            page_count,
            displayed: 0,
            first_page_loaded: false,
            in_flight: true,
            exhausted: page_count <= 1,
        }
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn first_page_loaded(&self) -> bool {
        self.first_page_loaded
    }

    pub fn trigger(&self) -> Trigger {
        if self.exhausted {
            Trigger::Exhausted
        } else if self.in_flight {
            Trigger::Busy
        } else {
            Trigger::Ready
        }
    }

    /// Page 1 was rendered; `displayed` is the container's child count.
    pub fn first_page_done(&mut self, displayed: u32) {
        self.first_page_loaded = true;
        self.cursor = 1;
        self.displayed = displayed;
        self.in_flight = false;
    }

    /// Page 1 failed; the trigger becomes a retry for it.
    pub fn first_page_failed(&mut self) {
        self.in_flight = false;
        self.exhausted = false;
    }

    /// Claim the trigger and return the page to request, or `None` when
    /// the trigger is busy or exhausted.
    pub fn begin_next(&mut self) -> Option<u32> {
        if self.trigger() != Trigger::Ready {
            return None;
        }
        self.in_flight = true;
        if self.first_page_loaded {
            Some(self.cursor + 1)
        } else {
            Some(1)
        }
    }

    /// The page was appended. Disables the trigger once the cursor reaches
    /// the last page.
    pub fn finish_next(&mut self, page: u32, displayed: u32) {
        self.in_flight = false;
        self.first_page_loaded = true;
        self.cursor = page;
        self.displayed = displayed;
        if self.cursor >= self.page_count.max(1) {
            self.exhausted = true;
        }
    }

    /// The page request or delete failed: release the claim, keep
    /// everything else.
    pub fn abort_next(&mut self) {
        self.in_flight = false;
    }

    /// Claim the list for a removal. Refused while a page or another
    /// removal is in flight, so page offsets never shift mid-request.
    pub fn begin_removal(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// The server confirmed a delete.
    pub fn item_deleted(&mut self) {
        self.total_count = self.total_count.saturating_sub(1);
    }

    /// The refill settled; `displayed` is the container's child count.
    /// Releases a removal claim.
    pub fn reconcile(&mut self, displayed: u32) {
        self.in_flight = false;
        self.displayed = displayed;
        if self.displayed >= self.total_count {
            self.exhausted = true;
        }
    }
}
