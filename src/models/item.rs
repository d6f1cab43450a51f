use serde::{Deserialize, Serialize};

// Catalog entry for a collectible material. Ids are assigned by the backend;
// the catalog is read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleItem {
    pub id: i32,
    pub name: String,
    pub image_url: String,
}
