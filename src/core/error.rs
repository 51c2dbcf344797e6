use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find binary: {0}")]
    BinaryNotFound(String),

    #[error("Failed to spawn shell for command: {0}")]
    ProcessSpawn(String),

    #[error("Invalid command template: {0}")]
    CommandFormat(String),

    #[error("Invalid resource registration: {0}")]
    InvalidRegistration(String),

    #[error("Unsatisfied dependency: {0}")]
    UnsatisfiedDependency(String),

    #[error("Resource for parameter '{parameter}' is not a {expected}")]
    ResourceType {
        parameter: String,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::BinaryNotFound(_) => "BINARY_NOT_FOUND",
            Error::ProcessSpawn(_) => "PROCESS_SPAWN_FAILED",
            Error::CommandFormat(_) => "COMMAND_FORMAT_ERROR",
            Error::InvalidRegistration(_) => "INVALID_REGISTRATION",
            Error::UnsatisfiedDependency(_) => "UNSATISFIED_DEPENDENCY",
            Error::ResourceType { .. } => "RESOURCE_TYPE_MISMATCH",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
