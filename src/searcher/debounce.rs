use crate::utils::any::Any;
use std::time::Duration;
use tokio::time::Instant;

// NOTE: single slot; restarting always replaces the previous pending deadline, so at most one
// deadline is pending at a time
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self { window, deadline: None }
    }

    pub fn restart(&mut self) {
        self.deadline = (Instant::now() + self.window).some();
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
