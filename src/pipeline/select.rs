use crate::{error::SelectionError, parcel::ParcelId};

use super::{RankedParcel, TopK};

/// Look up a parcel among the current candidates.
pub fn select<'a>(table: &'a TopK, id: &ParcelId) -> Result<&'a RankedParcel, SelectionError> {
    table.get(id).ok_or_else(|| SelectionError::NotInCandidates { id: id.clone() })
}

/// Resolve the requested selection, falling back to the best-ranked row when
/// nothing is requested or the request names a parcel that is no longer a candidate.
pub fn resolve_selection<'a>(table: &'a TopK, requested: Option<&ParcelId>) -> Option<&'a RankedParcel> {
    match requested.map(|id| select(table, id)) {
        Some(Ok(row)) => Some(row),
        Some(Err(err)) => {
            log::warn!("[pipeline::select] {err}, resetting to the first candidate");
            table.rows().first()
        }
        None => table.rows().first(),
    }
}
