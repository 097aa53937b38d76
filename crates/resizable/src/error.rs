use resizable_core::edges::Handle;
use resizable_core::host::HostError;

/// Errors that can occur while attaching or reconfiguring a resizable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// The host could not create the zone for a handle.
    ZoneCreation { handle: Handle, source: HostError },
    /// The behavior was already detached.
    Detached,
}

impl std::fmt::Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeError::ZoneCreation { handle, source } => {
                write!(f, "Failed to create {} zone: {}", handle, source)
            }
            ResizeError::Detached => write!(f, "Resizable element is detached"),
        }
    }
}

impl std::error::Error for ResizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResizeError::ZoneCreation { source, .. } => Some(source),
            ResizeError::Detached => None,
        }
    }
}

/// Result type for resizable operations.
pub type ResizeResult<T> = Result<T, ResizeError>;
