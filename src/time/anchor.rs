/// Monotonic reference every effect measures its elapsed time from.
///
/// Reset on activation and whenever the tracked text changes; read-only during a frame.
#[derive(Clone, Debug, Default)]
pub struct TimeAnchor {
    start: f64,
    master_text: Option<String>,
}

impl TimeAnchor {
    /// Anchor starting at `now` seconds.
    pub fn new(now: f64) -> Self {
        Self {
            start: now,
            master_text: None,
        }
    }

    /// Restart every effect's clock at `now`. Returns the new anchor.
    pub fn reset(&mut self, now: f64) -> f64 {
        self.start = now;
        tracing::debug!(anchor = now, "time anchor reset");
        now
    }

    /// Seconds since the anchor. Negative if `now` precedes it.
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start
    }

    /// Anchor timestamp in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Record `text` as the master text and reset the anchor.
    pub fn activate(&mut self, text: &str, now: f64) -> f64 {
        self.master_text = Some(text.to_owned());
        self.reset(now)
    }

    /// Reset only if `text` differs from the stored master text.
    ///
    /// Returns `true` when a reset happened.
    pub fn observe_text(&mut self, text: &str, now: f64) -> bool {
        if self.master_text.as_deref() == Some(text) {
            return false;
        }
        self.activate(text, now);
        true
    }

    /// Text recorded by the last activation.
    pub fn master_text(&self) -> Option<&str> {
        self.master_text.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/anchor.rs"]
mod tests;
