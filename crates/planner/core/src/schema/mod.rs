//! Slot schema and limit resolver.
//!
//! The schema is a fixed, ordered list of equipment slots grouped into
//! categories. Per-group visibility ceilings depend on the loadout's effective
//! armor class (see [`limits`]).

mod limits;
mod slots;

use crate::error::{ErrorSeverity, PlannerError};

pub use limits::{
    ArmorClass, backpack_exceeds_core, effective_armor_class, filled_slot_count, is_slot_visible,
    max_slots, visible_slot_count, visible_slots,
};
pub use slots::{
    CLASSED_ARMOR_SLOTS, SLOTS, SlotDefinition, SlotGroup, ids, index_in_group,
    is_classed_armor_slot, slot, slots_in_group,
};

/// Errors raised when user input names a slot the schema does not define.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown slot '{0}'")]
    UnknownSlot(String),

    #[error("slot '{0}' does not carry an armor class")]
    NotClassedSlot(String),
}

impl PlannerError for SchemaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSlot(_) => "SCHEMA_UNKNOWN_SLOT",
            Self::NotClassedSlot(_) => "SCHEMA_NOT_CLASSED_SLOT",
        }
    }
}

/// Looks up a slot, failing with [`SchemaError::UnknownSlot`].
pub fn require_slot(id: &str) -> Result<&'static SlotDefinition, SchemaError> {
    slot(id).ok_or_else(|| SchemaError::UnknownSlot(id.to_string()))
}

/// Validates that `id` is one of the armor slots that carry a class.
pub fn require_classed_slot(id: &str) -> Result<&'static SlotDefinition, SchemaError> {
    let def = require_slot(id)?;
    if is_classed_armor_slot(def.id) {
        Ok(def)
    } else {
        Err(SchemaError::NotClassedSlot(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_slot_rejects_legacy_ids() {
        assert!(require_slot("core").is_ok());
        let err = require_slot("utility1").unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_UNKNOWN_SLOT");
    }

    #[test]
    fn undersuit_has_no_class() {
        assert!(require_classed_slot("helmet").is_ok());
        assert_eq!(
            require_classed_slot("undersuit").unwrap_err(),
            SchemaError::NotClassedSlot("undersuit".into())
        );
    }
}
