pub mod context;
pub mod envelope;
pub mod error;
pub mod event;
pub mod handler;
pub mod payload;
pub mod runtime;

pub use context::InvocationContext;
pub use envelope::Envelope;
pub use error::HandlerError;
pub use handler::{function_handler, handle, handle_at};
