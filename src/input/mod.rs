pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{ControlEvent, EventHandled};
pub use handler::ControlHandler;
