pub mod activity;
pub mod board;
pub mod errors;
pub mod stats;
pub mod user;

// Re-export all types
pub use activity::*;
pub use board::*;
pub use errors::*;
pub use stats::*;
pub use user::*;
