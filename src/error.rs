use thiserror::Error;

/// Errors surfaced by stencil construction and application.
///
/// Both variants are deterministic given the inputs; callers should treat
/// them as call-site configuration mistakes rather than retryable failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StencilError {
    /// A caller-supplied shape constraint was violated, e.g. an even point
    /// count, a derivative order at or above the point count, or a
    /// non-positive grid spacing.
    #[error("invalid stencil configuration: {0}")]
    InvalidConfiguration(String),

    /// The Taylor coefficient matrix for the requested stencil has no
    /// inverse, so no weight vector exists.
    #[error("coefficient matrix for a {num_points}-point stencil is singular")]
    SingularSystem { num_points: usize },
}
