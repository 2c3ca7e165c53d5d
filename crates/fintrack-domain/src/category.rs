//! Domain types representing expense categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, Owned};

/// Labels a user's expenses for grouping and reporting.
///
/// Categories are unique per owner by id only; display names may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(owner: Uuid, name: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            icon,
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Category {
    fn owner(&self) -> Uuid {
        self.owner
    }
}
