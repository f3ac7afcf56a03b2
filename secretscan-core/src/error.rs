use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Scan request is missing a scan_id")]
    MissingScanId,

    #[error("Scan {0} has no input target")]
    MissingInput(String),

    #[error("Scan {0} is already registered")]
    DuplicateId(String),

    #[error("Unsupported scan input: {0}")]
    UnsupportedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScanError {
    /// True for errors caused by a malformed start request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScanError::MissingScanId
                | ScanError::MissingInput(_)
                | ScanError::UnsupportedInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_request_shape_errors_are_validation() {
        assert!(ScanError::MissingScanId.is_validation());
        assert!(ScanError::MissingInput("A".into()).is_validation());
        assert!(ScanError::UnsupportedInput("image".into()).is_validation());

        assert!(!ScanError::DuplicateId("A".into()).is_validation());
        assert!(!ScanError::Internal("boom".into()).is_validation());
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(!ScanError::from(io).is_validation());
    }
}
