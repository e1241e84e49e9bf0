use derive_more::{Display, From};

// Leaf errors. Each carries an optional free-form context, and two errors
// are equal when their kind and context match.

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(c) => format!(" ({c})"),
        None => String::new()
    }
}

macro_rules! decl_error {
    ($(#[$m:meta])* $name:ident, $msg:literal) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Display)]
        #[display("{}{}", $msg, context_suffix(context))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            context: Option<String>
        }

        impl $name {
            pub fn new() -> Self {
                Self { context: None }
            }

            pub fn with_context<S>(context: S) -> Self
            where S: Into<String> {
                Self { context: Some(context.into()) }
            }

            pub fn context(&self) -> Option<&str> {
                self.context.as_deref()
            }
        }

        impl std::error::Error for $name {}
    };
}

decl_error!(
    /// The element has no multiplicative inverse.
    ReciprocalUnavailable, "reciprocal unavailable"
);

decl_error!(
    /// The divisor has no multiplicative inverse.
    DivisionByNonUnit, "division by non-unit"
);

decl_error!(
    /// An operation needing at least one element got none.
    EmptyCollection, "empty collection"
);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
pub enum AlgErrorKind {
    ReciprocalUnavailable,
    DivisionByNonUnit,
    EmptyCollection
}

/// Umbrella over the leaf errors, for callers that want one catch site.
/// Every leaf error converts into it via `From`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgError {
    #[display("{_0}")]
    ReciprocalUnavailable(ReciprocalUnavailable),

    #[display("{_0}")]
    DivisionByNonUnit(DivisionByNonUnit),

    #[display("{_0}")]
    EmptyCollection(EmptyCollection)
}

impl AlgError {
    pub fn kind(&self) -> AlgErrorKind {
        match self {
            AlgError::ReciprocalUnavailable(_) => AlgErrorKind::ReciprocalUnavailable,
            AlgError::DivisionByNonUnit(_)     => AlgErrorKind::DivisionByNonUnit,
            AlgError::EmptyCollection(_)       => AlgErrorKind::EmptyCollection
        }
    }

    pub fn context(&self) -> Option<&str> {
        match self {
            AlgError::ReciprocalUnavailable(e) => e.context(),
            AlgError::DivisionByNonUnit(e)     => e.context(),
            AlgError::EmptyCollection(e)       => e.context()
        }
    }
}

impl std::error::Error for AlgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlgError::ReciprocalUnavailable(e) => Some(e),
            AlgError::DivisionByNonUnit(e)     => Some(e),
            AlgError::EmptyCollection(e)       => Some(e)
        }
    }
}

pub trait IntoAlgError: std::error::Error {
    fn into_alg_error(self) -> AlgError;
}

impl<E> IntoAlgError for E
where E: std::error::Error + Into<AlgError> {
    fn into_alg_error(self) -> AlgError {
        self.into()
    }
}

pub trait AlgResultExt<T> {
    fn map_alg_err(self) -> Result<T, AlgError>;
}

impl<T, E> AlgResultExt<T> for Result<T, E>
where E: IntoAlgError {
    fn map_alg_err(self) -> Result<T, AlgError> {
        self.map_err(IntoAlgError::into_alg_error)
    }
}
