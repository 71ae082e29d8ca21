//! Sheet lifecycle phase.

use serde::{Deserialize, Serialize};

/// Whether a sheet is still being assembled or has entered play.
///
/// The phase gates the recompute discipline: during `Creation` a recompute
/// also resets the current pools and the sanity baseline; once `Play` has
/// begun those values belong to the player and are preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetPhase {
    #[default]
    Creation,
    Play,
}

impl SheetPhase {
    #[inline]
    pub fn is_creation(&self) -> bool {
        matches!(self, Self::Creation)
    }
}
