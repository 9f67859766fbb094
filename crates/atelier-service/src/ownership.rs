//! Owner-transfer resolution shared by the owned-resource services.

use uuid::Uuid;

use atelier_core::error::AppError;
use atelier_core::result::AppResult;
use atelier_database::UserStore;

/// Applies an owner-transfer request against a row's current owner.
///
/// Returns the owner reference the row should carry after the update. A
/// transfer happens only when the row has an owner, the request names one,
/// and the two differ; the target must then exist in the user directory.
/// A transfer request against an ownerless row keeps the row as-is rather
/// than failing, so callers must not assume a requested transfer happened.
pub async fn resolve_owner_transfer(
    users: &dyn UserStore,
    current: Option<Uuid>,
    requested: Option<Uuid>,
) -> AppResult<Option<Uuid>> {
    let (current_id, target_id) = match (current, requested) {
        (Some(current_id), Some(target_id)) => (current_id, target_id),
        _ => return Ok(current),
    };

    if target_id == current_id {
        return Ok(current);
    }

    if users.find_by_id(target_id).await?.is_none() {
        return Err(AppError::reference_not_found("Target owner not found"));
    }

    Ok(Some(target_id))
}
