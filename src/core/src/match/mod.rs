pub mod resolver;
pub mod result;
pub mod score;
pub mod strength;

pub use resolver::*;
pub use result::*;
pub use score::*;
pub use strength::*;
