/// How the drain phase of `stand_by` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Every registered job reported completion.
    Completed,
    /// The configured drain deadline expired first.
    DeadlineExceeded { remaining: i64 },
}

impl DrainOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
