//! YAML encoding of [`State`]
//!
//! Key order follows the struct declarations, so equal states always encode
//! to identical bytes.

use super::error::{StateError, StateResult};
use crate::models::State;

pub fn marshal(state: &State) -> StateResult<String> {
    serde_yaml::to_string(state).map_err(StateError::Serialize)
}

/// Decode a state file. An empty document is the empty state.
pub fn unmarshal(data: &[u8]) -> StateResult<State> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(State::default());
    }
    serde_yaml::from_slice(data).map_err(StateError::Parse)
}
