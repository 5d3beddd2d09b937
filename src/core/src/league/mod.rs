pub mod fixture;
pub mod schedule;
pub mod table;

pub use fixture::*;
pub use schedule::*;
pub use table::*;
