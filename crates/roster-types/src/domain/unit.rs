use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of organization unit within the church body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Headquarters,
    Branch,
}

/// An organization unit (congregation) members belong to.
///
/// Units are owned by the record source; the roster only ever sees them
/// through the denormalized [`UnitRef`] carried on each member record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUnit {
    pub id: Uuid,
    pub name: String,
    pub kind: UnitKind,
}

/// Denormalized reference to an organization unit.
///
/// Carries the id for exact-match filtering and a display-name copy so the
/// roster never has to resolve units itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRef {
    pub id: Uuid,
    pub name: String,
}

impl OrganizationUnit {
    pub fn to_ref(&self) -> UnitRef {
        UnitRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
