use apollo_compiler::InvalidNameError;
use apollo_compiler::Schema;
use apollo_compiler::validation::DiagnosticList;
use apollo_compiler::validation::WithErrors;

/// Create an internal error.
///
/// # Example
/// ```rust
/// use fusion_composition::internal_error;
/// use fusion_composition::error::FusionError;
/// # fn may_be_none() -> Option<()> { None }
///
/// const NAME: &str = "the thing";
/// let result: Result<(), FusionError> = may_be_none()
///     .ok_or_else(|| internal_error!("Expected {NAME} to be Some"));
/// ```
#[macro_export]
macro_rules! internal_error {
    ( $( $arg:tt )+ ) => {
        $crate::error::FusionError::internal(format!( $( $arg )+ ))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SingleFusionError {
    #[error(
        "An internal error has occurred, please report this bug to the composition maintainers.\n\nDetails: {message}"
    )]
    Internal { message: String },
    #[error("{message}")]
    InvalidArgument { message: String },
    #[error("{message}")]
    ConfigurationConflict { message: String },
    #[error("{message}")]
    NotSupported { message: String },
    #[error("{diagnostics}")]
    InvalidGraphQL { diagnostics: DiagnosticList },
}

impl SingleFusionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SingleFusionError::Internal { .. } => ErrorCode::Internal,
            SingleFusionError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            SingleFusionError::ConfigurationConflict { .. } => ErrorCode::ConfigurationConflict,
            SingleFusionError::NotSupported { .. } => ErrorCode::NotSupported,
            SingleFusionError::InvalidGraphQL { .. } => ErrorCode::InvalidGraphQL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Internal,
    InvalidArgument,
    ConfigurationConflict,
    NotSupported,
    #[strum(serialize = "INVALID_GRAPHQL")]
    InvalidGraphQL,
}

impl ErrorCode {
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::Internal => {
                "An internal consistency check failed, for instance a directive template references a fusion type that was not registered."
            }
            ErrorCode::InvalidArgument => {
                "An input to composition is invalid, for instance a prefix that is not a valid GraphQL name."
            }
            ErrorCode::ConfigurationConflict => {
                "The schema was already composed with a different naming configuration, or defines a member whose name is taken by the fusion vocabulary."
            }
            ErrorCode::NotSupported => {
                "The requested operation is not supported for the given schema member or value."
            }
            ErrorCode::InvalidGraphQL => "The composed schema is not valid GraphQL.",
        }
    }
}

impl From<InvalidNameError> for SingleFusionError {
    fn from(err: InvalidNameError) -> Self {
        SingleFusionError::InvalidArgument {
            message: format!("Invalid GraphQL name \"{}\"", err.name),
        }
    }
}

impl From<InvalidNameError> for FusionError {
    fn from(err: InvalidNameError) -> Self {
        SingleFusionError::from(err).into()
    }
}

impl From<DiagnosticList> for SingleFusionError {
    fn from(diagnostics: DiagnosticList) -> Self {
        SingleFusionError::InvalidGraphQL { diagnostics }
    }
}

impl From<WithErrors<Schema>> for FusionError {
    fn from(value: WithErrors<Schema>) -> Self {
        SingleFusionError::from(value.errors).into()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FusionError {
    #[error(transparent)]
    SingleFusionError(#[from] SingleFusionError),
}

impl FusionError {
    pub fn internal(message: impl Into<String>) -> Self {
        SingleFusionError::Internal {
            message: message.into(),
        }
        .into()
    }

    pub(crate) fn not_supported(message: impl Into<String>) -> Self {
        SingleFusionError::NotSupported {
            message: message.into(),
        }
        .into()
    }

    pub fn error(&self) -> &SingleFusionError {
        match self {
            FusionError::SingleFusionError(e) => e,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.error().code()
    }
}
