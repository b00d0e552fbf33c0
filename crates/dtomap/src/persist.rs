use dtomap_core::{Result, Value};

/// What `persist` does with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistAction {
    /// The identity is set and a row with it exists.
    UpdateExisting,

    /// The identity is set but no row has it yet.
    InsertWithKey,

    /// The identity is unset; the database generates one, which is assigned
    /// back to the record.
    InsertGenerated,
}

impl PersistAction {
    /// Picks the action for a record whose stored identity value is
    /// `identity`. `count` is only called when the identity is set and returns
    /// the number of rows holding it.
    pub fn decide(identity: &Value, count: impl FnOnce() -> Result<i64>) -> Result<PersistAction> {
        if identity.is_unset() {
            return Ok(PersistAction::InsertGenerated);
        }

        Ok(if count()? > 0 {
            PersistAction::UpdateExisting
        } else {
            PersistAction::InsertWithKey
        })
    }
}
