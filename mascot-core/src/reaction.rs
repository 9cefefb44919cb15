/// Shrink-and-fade transition played after a successful drop
use log::debug;

/// Host notification fired once the transition completes
pub type ConsumedCallback = Box<dyn FnOnce()>;

/// Visual state of the transition for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionFrame {
    pub scale: f64,
    pub opacity: f64,
    pub finished: bool,
}

pub struct DropReaction {
    duration_ms: f64,
    started_at: Option<f64>,
    callback: Option<ConsumedCallback>,
    fired: bool,
}

impl std::fmt::Debug for DropReaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropReaction")
            .field("duration_ms", &self.duration_ms)
            .field("started_at", &self.started_at)
            .field("fired", &self.fired)
            .finish()
    }
}

impl DropReaction {
    /// The clock starts on the first `poll`
    pub fn new(duration_ms: f64, callback: Option<ConsumedCallback>) -> Self {
        Self {
            duration_ms: duration_ms.max(f64::EPSILON),
            started_at: None,
            callback,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Progress in `[0, 1]` without advancing anything
    pub fn progress(&self, now_ms: f64) -> f64 {
        match self.started_at {
            Some(start) => ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> ReactionFrame {
        let now_ms = if now_ms.is_finite() { now_ms } else { 0.0 };
        self.started_at.get_or_insert(now_ms);
        let t = self.progress(now_ms);
        let finished = t >= 1.0;

        if finished && !self.fired {
            self.fired = true;
            debug!("drop reaction finished, notifying host");
            if let Some(callback) = self.callback.take() {
                callback();
            }
        }

        ReactionFrame {
            scale: 1.0 - t * t,
            opacity: 1.0 - t,
            finished,
        }
    }
}
