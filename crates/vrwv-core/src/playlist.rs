//! Demo URL cycling with wrap-around in both directions.

/// Ordered list of demo URLs with a cursor.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    urls: Vec<String>,
    index: usize,
}

impl Playlist {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.urls.get(self.index).map(String::as_str)
    }

    /// Moves to the next URL, wrapping from the last to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.urls.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.urls.len();
        self.current()
    }

    /// Moves to the previous URL, wrapping from the first to the last.
    pub fn previous(&mut self) -> Option<&str> {
        if self.urls.is_empty() {
            return None;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.urls.len() - 1);
        self.current()
    }

    /// Jumps to `index`; out-of-range indices leave the cursor unchanged.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.urls.len() {
            return None;
        }
        self.index = index;
        self.current()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}
