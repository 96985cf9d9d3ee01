// "Copied" feedback for code block copy buttons
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct CopyFeedback {
    copied: HashMap<String, Instant>,
    duration: Duration,
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            copied: HashMap::new(),
            duration,
        }
    }

    pub fn mark(&mut self, key: &str) {
        self.mark_at(key, Instant::now());
    }

    fn mark_at(&mut self, key: &str, at: Instant) {
        self.copied.insert(key.to_string(), at);
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.is_copied_at(key, Instant::now())
    }

    fn is_copied_at(&self, key: &str, now: Instant) -> bool {
        self.copied
            .get(key)
            .is_some_and(|at| now.saturating_duration_since(*at) < self.duration)
    }

    pub fn has_pending(&self) -> bool {
        !self.copied.is_empty()
    }

    /// Drop expired entries.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let duration = self.duration;
        self.copied
            .retain(|_, at| now.saturating_duration_since(*at) < duration);
    }
}
