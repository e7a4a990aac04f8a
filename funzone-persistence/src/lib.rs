pub mod achievements;
pub mod keys;
pub mod leaderboard;
pub mod ledger;
pub mod legacy;
pub mod storage;
pub mod users;

pub use achievements::*;
pub use leaderboard::*;
pub use legacy::*;
pub use ledger::*;
pub use storage::*;
pub use users::*;
