/// Boxed error used at the problem and observer boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a minimization run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The problem failed to evaluate a point. The problem's own error is kept as source.
    #[error("problem error")]
    Problem(#[source] BoxError),

    /// The observer returned an error.
    #[error("observer error")]
    Observer(#[source] BoxError),
}

/// Errors that can occur when validating a gradient descent configuration.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("precision must be finite and non-negative")]
    Precision,

    #[error("min_denominator must be finite and non-negative")]
    MinDenominator,

    #[error("`{0}` must be initialized")]
    UninitializedField(&'static str),
}

impl From<derive_builder::UninitializedFieldError> for ConfigError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        ConfigError::UninitializedField(e.field_name())
    }
}
