pub mod generators;
pub mod store;

pub use generators::{DatabaseGenerator, GeneratedLeague, PlayerGenerator};
pub use store::InMemoryStore;

#[cfg(test)]
mod tests;
