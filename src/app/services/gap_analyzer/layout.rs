//! Per-file layout resolution
//!
//! Each known TESDA publication file follows one of three positional
//! structures. Resolution is declarative: the file identifier classifies into
//! a [`LayoutKind`], and the kind maps to a fixed [`SourceLayout`].

use crate::app::models::{LayoutKind, SourceLayout};
use tracing::debug;

/// Resolve the positional layout for a file identifier
///
/// Never fails: identifiers outside the known set (0-8) fall back to the
/// regional layout. Callers that want unknown identifiers rejected check
/// [`crate::constants::is_known_file_index`] before resolving.
pub fn resolve_layout(file_index: usize) -> SourceLayout {
    let kind = LayoutKind::for_file_index(file_index);
    let layout = SourceLayout::for_kind(kind);
    debug!(
        "Resolved layout for file index {}: {:?} (start_row={}, name_col={}, supply_col={})",
        file_index, kind, layout.start_row, layout.name_col, layout.supply_col
    );
    layout
}
