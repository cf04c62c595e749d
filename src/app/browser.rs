use super::history::History;
use super::tabs::TabQueue;

/// Snapshot of the session counters, for the status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status<'a> {
    pub current_page: &'a str,
    pub back_pages: usize,
    pub forward_pages: usize,
    pub other_tabs: usize,
}

/// A single simulated browser: one active tab with back/forward history,
/// plus a queue of inactive tabs. Switching or opening tabs discards the
/// history (each tab starts fresh).
pub struct Browser {
    current_page: String,
    history: History,
    tabs: TabQueue,
}

impl Browser {
    pub const HOME_PAGE: &'static str = "home";

    pub fn new() -> Self {
        Self {
            current_page: Self::HOME_PAGE.to_string(),
            history: History::new(),
            tabs: TabQueue::new(),
        }
    }

    /// Navigate the active tab to `url`. The departing page becomes the most
    /// recent back entry; any forward history is irrecoverably discarded.
    pub fn visit(&mut self, url: &str) -> &str {
        let prev = std::mem::replace(&mut self.current_page, url.to_string());
        if !prev.is_empty() {
            self.history.record(prev);
        } else {
            self.history.clear_forward();
        }
        log::debug!(
            "visit {:?} ({} back entries)",
            self.current_page,
            self.history.back_len()
        );
        &self.current_page
    }

    /// Step back one page, or `None` if there is nowhere to go.
    pub fn go_back(&mut self) -> Option<&str> {
        let page = self.history.pop_back()?;
        let prev = std::mem::replace(&mut self.current_page, page);
        self.history.push_forward(prev);
        log::debug!("back to {:?}", self.current_page);
        Some(&self.current_page)
    }

    /// Step forward one page, or `None` if there is nowhere to go.
    pub fn go_forward(&mut self) -> Option<&str> {
        let page = self.history.pop_forward()?;
        let prev = std::mem::replace(&mut self.current_page, page);
        self.history.push_back(prev);
        log::debug!("forward to {:?}", self.current_page);
        Some(&self.current_page)
    }

    /// Open a fresh tab on `url`. The page that was active joins the back of
    /// the tab queue; the new tab starts with no history.
    pub fn open_new_tab(&mut self, url: &str) -> &str {
        let prev = std::mem::replace(&mut self.current_page, url.to_string());
        if !prev.is_empty() {
            self.tabs.push(prev);
        }
        self.history.clear();
        log::debug!(
            "new tab {:?} ({} queued)",
            self.current_page,
            self.tabs.len()
        );
        &self.current_page
    }

    /// Rotate to the tab that has been waiting the longest, or `None` if the
    /// queue is empty. The active page re-joins the back of the queue.
    pub fn switch_to_next_tab(&mut self) -> Option<&str> {
        let next = self.tabs.pop()?;
        let prev = std::mem::replace(&mut self.current_page, next);
        self.tabs.push(prev);
        self.history.clear();
        log::debug!("switched to {:?}", self.current_page);
        Some(&self.current_page)
    }

    /// Pure read; mutates nothing.
    pub fn status(&self) -> Status<'_> {
        Status {
            current_page: &self.current_page,
            back_pages: self.history.back_len(),
            forward_pages: self.history.forward_len(),
            other_tabs: self.tabs.len(),
        }
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tabs(&self) -> &TabQueue {
        &self.tabs
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}
