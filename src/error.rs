use crate::services::ServiceError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure of one workflow, scoped to the user action that started it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// A required field was empty; no request was sent
    #[error("Missing required field(s): {0}")]
    Validation(String),

    /// The service answered with a non-2xx status
    #[error("Error {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Could not reach service: {0}")]
    Connectivity(String),

    /// 2xx response that did not carry the expected record
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

impl From<ServiceError> for WorkflowError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::RequestError(e) => WorkflowError::Connectivity(e.to_string()),
            ServiceError::ApiError { status, message } => WorkflowError::Remote { status, message },
            ServiceError::NotFound(msg) => WorkflowError::NotFound(msg),
            ServiceError::InvalidResponse(msg) => WorkflowError::InvalidResponse(msg),
        }
    }
}

impl From<ValidationErrors> for WorkflowError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        WorkflowError::Validation(fields.join(", "))
    }
}
