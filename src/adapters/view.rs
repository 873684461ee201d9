use crate::core::renderer::render_page;
use crate::domain::ports::ResultView;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    LoadingShown,
    LoadingHidden,
    ResultReplaced(String),
}

#[derive(Debug, Default)]
struct PageState {
    loading: bool,
    result: String,
    history: Vec<ViewUpdate>,
}

/// In-memory page: the `#loading` flag, the `#result` HTML and every update applied.
#[derive(Debug, Default)]
pub struct HtmlDocumentView {
    state: Mutex<PageState>,
}

impl HtmlDocumentView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn result_html(&self) -> String {
        self.lock().result.clone()
    }

    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.lock().history.clone()
    }

    /// Full HTML document for the current state.
    pub fn to_document(&self) -> String {
        let state = self.lock();
        render_page(state.loading, &state.result)
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // A panic mid-update leaves plain data behind; keep serving it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResultView for HtmlDocumentView {
    fn show_loading(&self) {
        let mut state = self.lock();
        state.loading = true;
        state.history.push(ViewUpdate::LoadingShown);
    }

    fn hide_loading(&self) {
        let mut state = self.lock();
        state.loading = false;
        state.history.push(ViewUpdate::LoadingHidden);
    }

    fn replace_result(&self, html: String) {
        let mut state = self.lock();
        state.history.push(ViewUpdate::ResultReplaced(html.clone()));
        state.result = html;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_are_recorded_in_order() {
        let view = HtmlDocumentView::new();
        view.show_loading();
        view.replace_result(String::new());
        view.hide_loading();

        assert!(!view.is_loading());
        assert_eq!(
            view.updates(),
            vec![
                ViewUpdate::LoadingShown,
                ViewUpdate::ResultReplaced(String::new()),
                ViewUpdate::LoadingHidden,
            ]
        );
    }

    #[test]
    fn test_document_reflects_state() {
        let view = HtmlDocumentView::new();
        view.replace_result("<p>ok</p>".to_string());

        let doc = view.to_document();
        assert!(doc.contains("<p>ok</p>"));
        assert!(doc.contains(" hidden"));
    }
}
