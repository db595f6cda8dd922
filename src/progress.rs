use crate::float_fmt;
use crate::protocol::Matches;

const PERCENT: f64 = 100.0;

/// Completed comparisons (`now`) out of `total`, verbatim from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub now: u64,
    pub total: u64,
}

impl Progress {
    pub fn new(now: u64, total: u64) -> Self {
        Self { now, total }
    }

    /// `now / total * 100`, or 0 when nothing is expected yet.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.now as f64 / self.total as f64 * PERCENT
    }

    /// Bar fill width; a server reporting `now > total` must not overflow the track.
    pub fn bar_width(&self) -> f64 {
        self.percent().clamp(0.0, PERCENT)
    }

    pub fn label(&self) -> String {
        format!("{} %", float_fmt::trimmed(self.percent(), 2))
    }

    pub fn title(&self) -> String {
        format!("{} / {}", self.now, self.total)
    }
}

impl From<Matches> for Progress {
    fn from(m: Matches) -> Self {
        Self::new(m.finished, m.total)
    }
}
