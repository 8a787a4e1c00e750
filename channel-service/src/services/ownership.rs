//! Ownership guard shared by every mutation path.

use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// True when the actor owns the entity.
pub fn can_mutate(actor_id: Uuid, owner_id: Uuid) -> bool {
    actor_id == owner_id
}

/// Forbidden unless the actor owns the entity. `what` names the entity in
/// the error message ("comment", "playlist", ...).
pub fn ensure_owner(actor_id: Uuid, owner_id: Uuid, what: &str) -> ServiceResult<()> {
    if can_mutate(actor_id, owner_id) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(format!(
            "you are not authorized to modify this {what}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_passes_everyone_else_is_forbidden() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        assert!(ensure_owner(owner, owner, "tweet").is_ok());
        assert!(matches!(
            ensure_owner(stranger, owner, "tweet"),
            Err(ServiceError::Forbidden(_))
        ));
    }
}
