pub mod board;
pub mod minimax;
pub mod rps;
pub mod session;
pub mod snake;

// Re-export main components
pub use board::*;
pub use minimax::*;
pub use rps::*;
pub use session::*;
pub use snake::*;
