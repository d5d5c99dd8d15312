pub mod core;
pub mod messages;
pub mod state;

// Re-export key components
pub use self::core::ChartEngine;
pub use messages::{FetchOutcome, FetchTicket};
pub use state::ViewState;
