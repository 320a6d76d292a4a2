//! Category Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<Category> for shared::models::Category {
    fn from(c: Category) -> Self {
        Self {
            id: serde_helpers::id_to_string(&c.id),
            name: c.name,
            image: c.image,
        }
    }
}
