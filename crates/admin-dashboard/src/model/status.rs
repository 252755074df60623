use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Outcome of the most recently triggered store operation.
///
/// This describes the store as a whole, not any one entity: a users fetch that fails
/// right after a successful products fetch leaves the status at `Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// An operation is in flight. Also the state before anything has run.
    #[default]
    Loading,
    Success,
    Error,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Loading => "loading",
            Status::Success => "success",
            Status::Error => "error",
        };
        f.write_str(label)
    }
}
