/// Limits for the accessibility scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanPolicy {
    /// Inputs with at most this many characters are treated as fragments and
    /// never reported as lacking text content.
    pub min_view_chars: usize,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self { min_view_chars: 100 }
    }
}

/// Limits for advice assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvicePolicy {
    pub max_points_per_guide: usize,
    /// Hard cap over the assembled list; notice and headers count too.
    pub max_recommendations: usize,
}

impl Default for AdvicePolicy {
    fn default() -> Self {
        Self {
            max_points_per_guide: 3,
            max_recommendations: 5,
        }
    }
}
