use derivative::Derivative;
use std::{error::Error, sync::Arc};
use thiserror::Error;

/// An error attached to a failure as its cause.
pub type ExternalError = Arc<dyn Error + Send + Sync + 'static>;

/// What went wrong, independent of the wording of the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The actual value was required to be non-null but was null.
    NullActual,
    /// A required type argument was missing.
    NullExpectedType,
    ExpectedNullButWasNotNull,
    ExpectedNotNullButWasNull,
    Equality,
    Inequality,
    Identity,
    NonIdentity,
    Emptiness,
    Containment,
    Condition,
    Ordering,
    Pattern,
    Type,
    Panic,
    StructuredComparison,
    Custom,
}

/// An equality failure between two text values. Carries both texts so that
/// diff-capable consumers can render them side by side.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ComparisonFailure {
    message: String,
    expected: String,
    actual: String,
}

impl ComparisonFailure {
    pub fn new(message: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ComparisonFailure {
            message: message.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }
}

/// The payload every assertion panics with.
#[derive(Clone, Debug, Derivative, Error)]
#[derivative(PartialEq)]
pub enum AssertionError {
    /// The asserted property did not hold.
    #[error("{message}")]
    Failed {
        kind: FailureKind,
        message: String,
        #[derivative(PartialEq = "ignore")]
        #[source]
        cause: Option<ExternalError>,
    },
    #[error("{0}")]
    Comparison(#[from] ComparisonFailure),
    /// The assertion API was called with an argument it cannot work with.
    #[error("{message}")]
    IllegalArgument { kind: FailureKind, message: String },
}

impl AssertionError {
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        AssertionError::Failed {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn failed_with_cause(kind: FailureKind, message: impl Into<String>, cause: ExternalError) -> Self {
        AssertionError::Failed {
            kind,
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn illegal_argument(kind: FailureKind, message: impl Into<String>) -> Self {
        AssertionError::IllegalArgument {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            AssertionError::Failed { kind, .. } | AssertionError::IllegalArgument { kind, .. } => *kind,
            AssertionError::Comparison(_) => FailureKind::StructuredComparison,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AssertionError::Failed { message, .. } | AssertionError::IllegalArgument { message, .. } => message,
            AssertionError::Comparison(comparison) => comparison.message(),
        }
    }

    pub fn cause(&self) -> Option<&ExternalError> {
        match self {
            AssertionError::Failed { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }

    /// True when the API was misused, as opposed to an assertion not holding.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AssertionError::IllegalArgument { .. })
    }

    pub fn as_comparison(&self) -> Option<&ComparisonFailure> {
        match self {
            AssertionError::Comparison(comparison) => Some(comparison),
            _ => None,
        }
    }
}
