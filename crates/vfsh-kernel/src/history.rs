//! Session command history.
//!
//! History is append-only. Every non-blank submitted line is recorded before
//! it runs, so failed commands show up too.

/// Ordered list of raw submitted lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by 1-based display number.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
            .map(String::as_str)
    }

    /// `1  first`, `2  second`, ... one line per entry.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, line)| format!("{}  {}", idx + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Start a recall cursor over this history.
    pub fn cursor(&self) -> HistoryCursor<'_> {
        HistoryCursor {
            history: self,
            position: None,
        }
    }
}

/// Up/down recall over a [`History`].
///
/// `previous` walks from the newest entry towards the oldest and sticks at
/// the oldest; `next` walks back towards the newest and sticks there. A fresh
/// cursor has no position, so `next` on it yields nothing.
#[derive(Debug, Clone)]
pub struct HistoryCursor<'a> {
    history: &'a History,
    position: Option<usize>,
}

impl<'a> HistoryCursor<'a> {
    /// Move to the previous (older) entry.
    pub fn previous(&mut self) -> Option<&'a str> {
        let len = self.history.len();
        if len == 0 {
            return None;
        }
        let idx = match self.position {
            None => len - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.position = Some(idx);
        self.history.entries.get(idx).map(String::as_str)
    }

    /// Move to the next (newer) entry.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a str> {
        let len = self.history.len();
        let idx = (self.position? + 1).min(len.checked_sub(1)?);
        self.position = Some(idx);
        self.history.entries.get(idx).map(String::as_str)
    }

    /// Forget the current position, as after submitting a line.
    pub fn reset(&mut self) {
        self.position = None;
    }

    /// Current 0-based position, if any.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}
