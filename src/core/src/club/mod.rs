pub mod club;
pub mod player;
pub mod reward;

pub use club::*;
pub use player::*;
pub use reward::*;
