use crate::{AccountId, Role};

use serde::{Deserialize, Serialize};

/// Application-side identity record, persisted under the `mock_profile` key.
///
/// Field names on the wire follow the stored browser format (`nom`,
/// `telephone`, `entreprise`, `photo_profil`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: AccountId,
    #[serde(rename = "nom")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "telephone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "entreprise", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "photo_profil", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
