pub mod adr;
pub mod state;

pub use adr::{AdrDirectory, AdrState, IndexType};
pub use state::State;
