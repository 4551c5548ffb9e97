use std::fmt;

#[derive(Debug)]
pub enum PreviewError {
    /// Camera permission is missing.
    Permission(String),
    /// The capture source failed to open or configure.
    Device(String),
    /// A capture source is already attached and requested or running.
    SourceAttached,
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Permission(msg) => write!(f, "permission error: {msg}"),
            PreviewError::Device(msg) => write!(f, "device error: {msg}"),
            PreviewError::SourceAttached => {
                write!(f, "a capture source is already attached; stop or release it first")
            }
        }
    }
}

impl std::error::Error for PreviewError {}

impl From<std::io::Error> for PreviewError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => PreviewError::Permission(err.to_string()),
            _ => PreviewError::Device(err.to_string()),
        }
    }
}
