/// Fill state of the progress indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    position: usize,
    total: usize,
}

impl Progress {
    /// Progress for the cursor at `current_index` in a deck of `total` slides
    pub fn new(current_index: usize, total: usize) -> Self {
        Self {
            position: current_index + 1,
            total,
        }
    }

    /// 1-based position of the active slide
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `(current_index + 1) / total`, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn label(&self) -> String {
        format!("{}/{} {:.1}%", self.position, self.total, self.percent())
    }
}
