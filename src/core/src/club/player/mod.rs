pub mod condition;
pub mod player;

pub use condition::*;
pub use player::*;
