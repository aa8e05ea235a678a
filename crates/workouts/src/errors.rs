use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivityCode(String),

    #[error("Malformed package {code}: expected {expected} values, got {actual}")]
    MalformedPackage {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Package-level errors reject a single package; the rest abort the run.
    pub fn is_package_error(&self) -> bool {
        matches!(
            self,
            WorkoutError::UnknownActivityCode(_)
                | WorkoutError::MalformedPackage { .. }
                | WorkoutError::InvalidValue { .. }
        )
    }
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;
