//! List Controller
//!
//! Sequences the source and the view for one incrementally loaded list:
//! initial load, "load more", item removal with refill, and like toggling.
//! All state sits in a `RefCell` that is never borrowed across an await.

use std::cell::{Cell, RefCell};

use crate::error::{LoadError, LoadResult};
use crate::item_id::ItemId;
use crate::source::{ListSource, ListView};
use crate::state::{LoaderState, Trigger};

pub struct ListController<S, V> {
    source: S,
    view: V,
    state: RefCell<Option<LoaderState>>,
    initializing: Cell<bool>,
}

impl<S: ListSource, V: ListView> ListController<S, V> {
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view,
            state: RefCell::new(None),
            initializing: Cell::new(false),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Copy of the current state; `None` until the parameters arrived.
    pub fn snapshot(&self) -> Option<LoaderState> {
        self.state.borrow().clone()
    }

    pub fn trigger(&self) -> Trigger {
        match self.state.borrow().as_ref() {
            Some(state) => state.trigger(),
            None if self.initializing.get() => Trigger::Busy,
            // Parameters never arrived: the trigger retries initialization.
            None => Trigger::Ready,
        }
    }

    // ========================
    // Operations
    // ========================

    /// Fetch the parameters and render page 1. A no-op once the
    /// parameters are known or while another initialization runs.
    pub async fn initialize(&self) -> LoadResult<()> {
        if self.state.borrow().is_some() || self.initializing.replace(true) {
            return Ok(());
        }
        self.view.show_trigger(Trigger::Busy);

        let params = self.source.parameters().await;
        self.initializing.set(false);
        let params = match params {
            Ok(params) => params,
            Err(err) => {
                tracing::warn!("parameters request failed: {}", err);
                self.view.show_trigger(self.trigger());
                return Err(err);
            }
        };

        let state = LoaderState::from_params(params);
        tracing::debug!(
            "list has {} items in {} pages of {}",
            state.total_count(),
            state.page_count(),
            state.per_page()
        );
        self.view.show_counts(0, state.total_count());
        *self.state.borrow_mut() = Some(state);
        self.view.show_trigger(self.trigger());

        let result = self.source.page(1).await;
        match result {
            Ok(html) => {
                self.view.replace_items(&html);
                let displayed = self.view.item_count();
                self.update(|s| s.first_page_done(displayed));
                self.show_state();
                Ok(())
            }
            Err(err) => {
                tracing::warn!("first page failed: {}", err);
                self.update(|s| s.first_page_failed());
                self.show_state();
                Err(err)
            }
        }
    }

    /// Load the next page if the trigger is ready. Returns the page that
    /// was rendered, or `None` when the trigger was busy or exhausted.
    pub async fn load_next(&self) -> LoadResult<Option<u32>> {
        if self.state.borrow().is_none() {
            if self.initializing.get() {
                return Ok(None);
            }
            self.initialize().await?;
            return Ok(self.state.borrow().as_ref().map(|s| s.cursor()));
        }

        let Some(page) = self.update(|s| s.begin_next()).flatten() else {
            return Ok(None);
        };
        self.view.show_trigger(Trigger::Busy);

        match self.source.page(page).await {
            Ok(html) => {
                if page == 1 {
                    self.view.replace_items(&html);
                } else {
                    self.view.append_items(&html);
                }
                let displayed = self.view.item_count();
                self.update(|s| s.finish_next(page, displayed));
                self.show_state();
                Ok(Some(page))
            }
            Err(err) => {
                tracing::warn!("page {} failed: {}", page, err);
                self.update(|s| s.abort_next());
                self.view.show_trigger(self.trigger());
                Err(err)
            }
        }
    }

    /// Delete an item on the server, drop it from the page and pull in the
    /// item that slid into the visible tail.
    ///
    /// Holds the trigger for the whole sequence and fails with
    /// [`LoadError::Busy`] while a page or another removal is in flight.
    pub async fn remove_item(&self, id: ItemId) -> LoadResult<()> {
        match self.update(|s| s.begin_removal()) {
            None => {
                tracing::warn!("remove_item({}) before the list was loaded", id);
                return Ok(());
            }
            Some(false) => {
                tracing::debug!("remove_item({}) while a request is in flight", id);
                return Err(LoadError::Busy);
            }
            Some(true) => {}
        }
        self.view.show_trigger(self.trigger());

        if let Err(err) = self.source.delete(id).await {
            self.update(|s| s.abort_next());
            self.view.show_trigger(self.trigger());
            return Err(err);
        }

        let on_page = self.view.remove_item(id);
        let page = self
            .update(|s| {
                s.item_deleted();
                s.cursor()
            })
            .unwrap_or(1);

        // Nothing shifted into view when the item was not rendered
        let refill = if on_page {
            self.source
                .refill(page)
                .await
                .map(|html| self.view.append_items(&html))
        } else {
            tracing::warn!("deleted item {} was not on the page", id);
            Ok(())
        };
        let displayed = self.view.item_count();
        self.update(|s| s.reconcile(displayed));
        self.show_state();

        refill
    }

    pub async fn toggle_like(&self, post_id: &str) -> LoadResult<()> {
        let page = self.state.borrow().as_ref().map_or(1, |s| s.cursor());
        let html = self.source.toggle_like(post_id, page).await?;
        self.view.replace_like(post_id, &html);
        Ok(())
    }

    // ========================
    // Helpers
    // ========================

    fn update<R>(&self, f: impl FnOnce(&mut LoaderState) -> R) -> Option<R> {
        self.state.borrow_mut().as_mut().map(f)
    }

    fn show_state(&self) {
        let counts = self
            .state
            .borrow()
            .as_ref()
            .map(|s| (s.displayed(), s.total_count()));
        if let Some((displayed, total)) = counts {
            self.view.show_counts(displayed, total);
        }
        self.view.show_trigger(self.trigger());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PaginationParams;
    use crate::test_log::CapturedLogs;

    // ========================
    // Test doubles
    // ========================

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Parameters,
        Page(u32),
        Refill(u32),
        Delete(u64),
        Like(String, u32),
    }

    /// In-memory board: ids newest first, pages sliced like the server does.
    struct FakeSource {
        items: RefCell<Vec<u64>>,
        per_page: u32,
        calls: RefCell<Vec<Call>>,
        failures: RefCell<Vec<(Call, LoadError)>>,
        /// Yield once inside `page` and `delete` so joined calls interleave
        yielding: bool,
    }

    impl FakeSource {
        fn new(total: u64, per_page: u32) -> Self {
            Self {
                items: RefCell::new((1..=total).rev().collect()),
                per_page,
                calls: RefCell::new(Vec::new()),
                failures: RefCell::new(Vec::new()),
                yielding: false,
            }
        }

        /// Fail the next request matching `call` once.
        fn fail_on(&self, call: Call, err: LoadError) {
            self.failures.borrow_mut().push((call, err));
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> LoadResult<()> {
            self.calls.borrow_mut().push(call.clone());
            let mut failures = self.failures.borrow_mut();
            match failures.iter().position(|(c, _)| *c == call) {
                Some(pos) => Err(failures.remove(pos).1),
                None => Ok(()),
            }
        }

        fn render(ids: &[u64]) -> String {
            ids.iter()
                .map(|id| format!(r#"<div class="card mb-3" id="post{}"></div>"#, id))
                .collect()
        }
    }

    impl ListSource for FakeSource {
        async fn parameters(&self) -> LoadResult<PaginationParams> {
            self.record(Call::Parameters)?;
            PaginationParams::new(self.items.borrow().len() as u32, self.per_page)
        }

        async fn page(&self, page: u32) -> LoadResult<String> {
            if self.yielding {
                tokio::task::yield_now().await;
            }
            self.record(Call::Page(page))?;
            let items = self.items.borrow();
            let start = ((page - 1) * self.per_page) as usize;
            let end = (start + self.per_page as usize).min(items.len());
            Ok(Self::render(items.get(start..end).unwrap_or(&[])))
        }

        async fn refill(&self, page: u32) -> LoadResult<String> {
            self.record(Call::Refill(page))?;
            let items = self.items.borrow();
            let offset = ((page - 1) * self.per_page + self.per_page - 1) as usize;
            Ok(Self::render(items.get(offset..=offset).unwrap_or(&[])))
        }

        async fn delete(&self, id: ItemId) -> LoadResult<()> {
            if self.yielding {
                tokio::task::yield_now().await;
            }
            self.record(Call::Delete(id.0))?;
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|&i| i != id.0);
            if items.len() == before {
                return Err(LoadError::Server { status: 400 });
            }
            Ok(())
        }

        async fn toggle_like(&self, post_id: &str, page: u32) -> LoadResult<String> {
            self.record(Call::Like(post_id.to_string(), page))?;
            Ok(format!("<span>liked {}</span>", post_id))
        }
    }

    #[derive(Default)]
    struct FakeView {
        items: RefCell<Vec<u64>>,
        counts: Cell<(u32, u32)>,
        trigger: Cell<Option<Trigger>>,
        likes: RefCell<Vec<(String, String)>>,
    }

    impl FakeView {
        fn parse(html: &str) -> Vec<u64> {
            html.split("id=\"")
                .skip(1)
                .filter_map(|chunk| ItemId::from_element_id(chunk, "post"))
                .map(|id| id.0)
                .collect()
        }

        fn ids(&self) -> Vec<u64> {
            self.items.borrow().clone()
        }
    }

    impl ListView for FakeView {
        fn replace_items(&self, html: &str) {
            *self.items.borrow_mut() = Self::parse(html);
        }

        fn append_items(&self, html: &str) {
            self.items.borrow_mut().extend(Self::parse(html));
        }

        fn remove_item(&self, id: ItemId) -> bool {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|&i| i != id.0);
            items.len() != before
        }

        fn item_count(&self) -> u32 {
            self.items.borrow().len() as u32
        }

        fn show_counts(&self, displayed: u32, total: u32) {
            self.counts.set((displayed, total));
        }

        fn show_trigger(&self, trigger: Trigger) {
            self.trigger.set(Some(trigger));
        }

        fn replace_like(&self, post_id: &str, html: &str) {
            self.likes.borrow_mut().push((post_id.to_string(), html.to_string()));
        }
    }

    fn controller(total: u64, per_page: u32) -> ListController<FakeSource, FakeView> {
        ListController::new(FakeSource::new(total, per_page), FakeView::default())
    }

    fn yielding_controller(total: u64, per_page: u32) -> ListController<FakeSource, FakeView> {
        let mut source = FakeSource::new(total, per_page);
        source.yielding = true;
        ListController::new(source, FakeView::default())
    }

    // ========================
    // Loading
    // ========================

    #[tokio::test]
    async fn test_initialize_renders_first_page() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();

        assert_eq!(c.source().calls(), vec![Call::Parameters, Call::Page(1)]);
        assert_eq!(c.view().item_count(), 10);
        assert_eq!(c.view().counts.get(), (10, 25));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));
    }

    #[tokio::test]
    async fn test_load_all_pages_sequentially() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();

        assert_eq!(c.load_next().await, Ok(Some(2)));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));
        assert_eq!(c.load_next().await, Ok(Some(3)));

        assert_eq!(c.view().counts.get(), (25, 25));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Exhausted));
        assert_eq!(c.view().ids(), (1..=25).rev().collect::<Vec<_>>());

        // Exhausted trigger issues nothing further
        assert_eq!(c.load_next().await, Ok(None));
        assert_eq!(
            c.source().calls(),
            vec![Call::Parameters, Call::Page(1), Call::Page(2), Call::Page(3)]
        );
    }

    #[tokio::test]
    async fn test_single_page_disables_trigger_without_load_more() {
        let c = controller(5, 10);
        c.initialize().await.unwrap();

        assert_eq!(c.view().trigger.get(), Some(Trigger::Exhausted));
        assert_eq!(c.view().counts.get(), (5, 5));
        assert_eq!(c.load_next().await, Ok(None));
        assert_eq!(c.source().calls(), vec![Call::Parameters, Call::Page(1)]);
    }

    #[tokio::test]
    async fn test_empty_board() {
        let c = controller(0, 10);
        c.initialize().await.unwrap();

        assert_eq!(c.view().counts.get(), (0, 0));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Exhausted));
    }

    #[tokio::test]
    async fn test_failed_page_leaves_state_unchanged() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();
        c.source().fail_on(Call::Page(2), LoadError::Server { status: 500 });

        assert_eq!(c.load_next().await, Err(LoadError::Server { status: 500 }));
        assert_eq!(c.view().item_count(), 10);
        assert_eq!(c.view().counts.get(), (10, 25));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));
        assert_eq!(c.snapshot().unwrap().cursor(), 1);

        // Manual retry requests the same page
        assert_eq!(c.load_next().await, Ok(Some(2)));
    }

    #[tokio::test]
    async fn test_parameters_failure_retried_by_trigger() {
        let c = controller(25, 10);
        c.source().fail_on(Call::Parameters, LoadError::Network("offline".into()));

        assert!(c.initialize().await.is_err());
        assert!(c.snapshot().is_none());
        assert_eq!(c.trigger(), Trigger::Ready);

        assert_eq!(c.load_next().await, Ok(Some(1)));
        assert_eq!(c.view().counts.get(), (10, 25));
    }

    #[tokio::test]
    async fn test_first_page_failure_retried_by_trigger() {
        let c = controller(25, 10);
        c.source().fail_on(Call::Page(1), LoadError::Server { status: 502 });

        assert_eq!(c.initialize().await, Err(LoadError::Server { status: 502 }));
        assert_eq!(c.view().counts.get(), (0, 25));
        assert_eq!(c.trigger(), Trigger::Ready);

        assert_eq!(c.load_next().await, Ok(Some(1)));
        assert_eq!(c.view().counts.get(), (10, 25));
        assert_eq!(c.load_next().await, Ok(Some(2)));
        assert_eq!(
            c.source().calls(),
            vec![Call::Parameters, Call::Page(1), Call::Page(1), Call::Page(2)]
        );
    }

    #[tokio::test]
    async fn test_concurrent_clicks_load_one_page() {
        let c = yielding_controller(30, 10);
        c.initialize().await.unwrap();

        let (a, b) = tokio::join!(c.load_next(), c.load_next());
        assert_eq!(a, Ok(Some(2)));
        assert_eq!(b, Ok(None));
        assert_eq!(c.view().item_count(), 20);
        assert_eq!(c.snapshot().unwrap().cursor(), 2);
    }

    // ========================
    // Removal
    // ========================

    #[tokio::test]
    async fn test_remove_item_refills_tail() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();

        c.remove_item(ItemId(20)).await.unwrap();

        assert_eq!(
            c.source().calls()[2..],
            [Call::Delete(20), Call::Refill(1)]
        );
        // one removed, one pulled in: item 15 slid into slot 10
        assert_eq!(c.view().item_count(), 10);
        assert!(!c.view().ids().contains(&20));
        assert_eq!(c.view().ids().last(), Some(&15));
        assert_eq!(c.view().counts.get(), (10, 24));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));
    }

    #[tokio::test]
    async fn test_remove_when_everything_loaded() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();
        c.load_next().await.unwrap();
        c.load_next().await.unwrap();

        c.remove_item(ItemId(3)).await.unwrap();

        // the tail is empty, so the refill appends nothing
        assert_eq!(c.source().calls().last(), Some(&Call::Refill(3)));
        assert_eq!(c.view().item_count(), 24);
        assert_eq!(c.view().counts.get(), (24, 24));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Exhausted));
    }

    #[tokio::test]
    async fn test_remove_exhausts_when_last_hidden_item_arrives() {
        let c = controller(11, 10);
        c.initialize().await.unwrap();
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));

        c.remove_item(ItemId(11)).await.unwrap();

        assert_eq!(c.view().ids(), (1..=10).rev().collect::<Vec<_>>());
        assert_eq!(c.view().counts.get(), (10, 10));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Exhausted));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_item() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();
        c.source().fail_on(Call::Delete(25), LoadError::Server { status: 403 });

        let result = c.remove_item(ItemId(25)).await;

        assert_eq!(result, Err(LoadError::Server { status: 403 }));
        assert!(c.view().ids().contains(&25));
        assert_eq!(c.view().counts.get(), (10, 25));
        assert_eq!(c.snapshot().unwrap().total_count(), 25);
        assert!(!c.source().calls().iter().any(|call| matches!(call, Call::Refill(_))));
    }

    #[tokio::test]
    async fn test_failed_refill_still_reconciles() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();
        c.source().fail_on(Call::Refill(1), LoadError::Network("offline".into()));

        let result = c.remove_item(ItemId(25)).await;

        assert_eq!(result, Err(LoadError::Network("offline".into())));
        // the server already deleted it, so the page follows
        assert!(!c.view().ids().contains(&25));
        assert_eq!(c.view().counts.get(), (9, 24));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));
    }

    #[tokio::test]
    async fn test_failed_delete_releases_trigger() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();
        c.source().fail_on(Call::Delete(25), LoadError::Network("offline".into()));

        assert!(c.remove_item(ItemId(25)).await.is_err());
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));
        assert_eq!(c.load_next().await, Ok(Some(2)));
    }

    #[tokio::test]
    async fn test_remove_refused_while_page_in_flight() {
        let c = yielding_controller(30, 10);
        c.initialize().await.unwrap();

        let (loaded, removed) = tokio::join!(c.load_next(), c.remove_item(ItemId(20)));

        assert_eq!(loaded, Ok(Some(2)));
        assert_eq!(removed, Err(LoadError::Busy));
        assert!(!c.source().calls().contains(&Call::Delete(20)));
        assert_eq!(c.view().ids(), (11..=30).rev().collect::<Vec<_>>());
        assert_eq!(c.view().counts.get(), (20, 30));
    }

    #[tokio::test]
    async fn test_load_more_waits_for_removal() {
        let c = yielding_controller(30, 10);
        c.initialize().await.unwrap();

        let (removed, loaded) = tokio::join!(c.remove_item(ItemId(25)), c.load_next());

        assert_eq!(removed, Ok(()));
        assert_eq!(loaded, Ok(None));
        assert_eq!(c.view().counts.get(), (10, 29));
        assert_eq!(c.view().trigger.get(), Some(Trigger::Ready));

        // the next page starts right after the refilled tail, no repeats
        assert_eq!(c.load_next().await, Ok(Some(2)));
        let ids = c.view().ids();
        let expected: Vec<u64> = (10..=30).rev().filter(|&id| id != 25).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_remove_before_load_is_logged() {
        let (logs, _guard) = CapturedLogs::install();
        let c = controller(25, 10);

        assert_eq!(c.remove_item(ItemId(3)).await, Ok(()));

        assert!(c.source().calls().is_empty());
        assert!(logs.contents().contains("remove_item(3) before the list was loaded"));
    }

    #[tokio::test]
    async fn test_remove_offscreen_item_skips_refill() {
        let (logs, _guard) = CapturedLogs::install();
        let c = controller(25, 10);
        c.initialize().await.unwrap();

        c.remove_item(ItemId(5)).await.unwrap();

        assert_eq!(c.source().calls().last(), Some(&Call::Delete(5)));
        assert_eq!(c.view().ids(), (16..=25).rev().collect::<Vec<_>>());
        assert_eq!(c.view().counts.get(), (10, 24));
        assert!(logs.contents().contains("deleted item 5 was not on the page"));
    }

    // ========================
    // Likes
    // ========================

    #[tokio::test]
    async fn test_toggle_like_replaces_control() {
        let c = controller(25, 10);
        c.initialize().await.unwrap();
        c.load_next().await.unwrap();

        c.toggle_like("17").await.unwrap();

        assert_eq!(c.source().calls().last(), Some(&Call::Like("17".into(), 2)));
        assert_eq!(
            *c.view().likes.borrow(),
            vec![("17".to_string(), "<span>liked 17</span>".to_string())]
        );
    }
}
