use objview_types::Mode;

/// Maps a display mode to the number of members a body may show.
///
/// The same policy governs both the property list and the entry list at
/// every level of recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    brief_limit: usize,
}

impl RenderPolicy {
    /// Members shown per body in brief mode.
    pub const DEFAULT_BRIEF_LIMIT: usize = 3;

    pub fn new(brief_limit: usize) -> Self {
        Self { brief_limit }
    }

    /// Limit for the given mode; `None` means unbounded.
    pub fn limit_for(&self, mode: Mode) -> Option<usize> {
        match mode {
            Mode::Brief => Some(self.brief_limit),
            Mode::Full => None,
        }
    }
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BRIEF_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_limits_to_three_by_default() {
        let policy = RenderPolicy::default();
        assert_eq!(policy.limit_for(Mode::Brief), Some(3));
    }

    #[test]
    fn test_full_is_unbounded() {
        let policy = RenderPolicy::default();
        assert_eq!(policy.limit_for(Mode::Full), None);
    }

    #[test]
    fn test_custom_brief_limit() {
        let policy = RenderPolicy::new(5);
        assert_eq!(policy.limit_for(Mode::Brief), Some(5));
        assert_eq!(policy.limit_for(Mode::Full), None);
    }
}
