use thiserror::Error;

#[derive(Error, Debug)]
pub enum FisherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid frame id: {0:?}")]
    InvalidFrameId(String),

    #[error("Unsupported value for frame {id}: {reason}")]
    UnsupportedValue { id: String, reason: String },

    #[error("Invalid MIME type: {0:?}")]
    InvalidMimeType(String),

    #[error("Tag size {size} exceeds the synchsafe limit of {max} bytes")]
    TagTooLarge { size: u64, max: u32 },

    #[error("Cannot allocate {requested} bytes for tagged output")]
    AllocationFailed { requested: usize },

    #[error("Invalid version string: {0:?}")]
    InvalidVersion(String),
}

pub type Result<T> = std::result::Result<T, FisherError>;

#[cfg(feature = "python")]
mod python {
    use super::FisherError;
    use pyo3::create_exception;
    use pyo3::exceptions::PyException;

    // Python exception hierarchy rooted at FisherError
    create_exception!(fisher_rs, FisherPyError, PyException);
    create_exception!(fisher_rs, MalformedFieldError, FisherPyError);
    create_exception!(fisher_rs, TagTooLargeError, MalformedFieldError);

    impl From<FisherError> for pyo3::PyErr {
        fn from(err: FisherError) -> pyo3::PyErr {
            match err {
                FisherError::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
                e @ FisherError::InvalidFrameId(_)
                | e @ FisherError::UnsupportedValue { .. }
                | e @ FisherError::InvalidMimeType(_) => MalformedFieldError::new_err(e.to_string()),
                e @ FisherError::TagTooLarge { .. } => TagTooLargeError::new_err(e.to_string()),
                e @ FisherError::AllocationFailed { .. } => {
                    pyo3::exceptions::PyMemoryError::new_err(e.to_string())
                }
                FisherError::InvalidVersion(msg) => pyo3::exceptions::PyValueError::new_err(msg),
            }
        }
    }
}

#[cfg(feature = "python")]
pub use python::{FisherPyError, MalformedFieldError, TagTooLargeError};
