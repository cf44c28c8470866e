use thiserror::Error;

/// Errors that can occur when talking to the remote secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Secret not found: {0}")]
    NotFound(String),
    #[error("Secret already exists: {0}")]
    AlreadyExists(String),
    #[error("Secret {0} has no string value")]
    NoStringValue(String),
    #[error("{operation} response is missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
}

/// Errors that can occur while running the external editor.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to prepare temporary file: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("Editor not found: {program}")]
    NotFound { program: String },
    #[error("Failed to start editor {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "Editor {program} exited unsuccessfully ({})",
        .code.map_or_else(|| "terminated by signal".to_string(), |c| format!("status {c}"))
    )]
    Failed { program: String, code: Option<i32> },
    #[error("Failed to read back edited file: {0}")]
    ReadBack(#[source] std::io::Error),
}

/// Errors that prevent a connection to the remote store from being set up.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No AWS region configured (set AWS_REGION or pass --region)")]
    MissingRegion,
    #[error("No AWS credentials available: {0}")]
    Credentials(String),
}

/// Errors that can occur during validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Secret name validation failed: {0}")]
    SecretName(String),
}

impl StoreError {
    /// Wrap an SDK failure, keeping its full source chain in the message.
    pub fn request<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error,
    {
        StoreError::Request {
            operation,
            message: aws_sdk_secretsmanager::error::DisplayErrorContext(err).to_string(),
        }
    }
}
