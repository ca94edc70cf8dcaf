use std::fmt;

/// Failure raised while building a success response.
///
/// Every variant is recovered by the handler into a 500 envelope, so callers
/// never see one of these cross the invocation boundary.
#[derive(Debug)]
pub enum HandlerError {
    /// The event was valid JSON but not a mapping.
    EventNotObject { found: &'static str },
    Serialize(serde_json::Error),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::EventNotObject { found } => {
                write!(f, "event must be a JSON object, got {found}")
            }
            HandlerError::Serialize(e) => write!(f, "failed to serialize JSON: {e}"),
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HandlerError::EventNotObject { .. } => None,
            HandlerError::Serialize(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(e: serde_json::Error) -> Self {
        HandlerError::Serialize(e)
    }
}
