use serde::{Deserialize, Serialize};

use super::StatusMessage;

#[derive(Deserialize, Serialize, Debug)]
pub struct VersionResponse {
    #[serde(flatten)]
    pub status: StatusMessage,
    pub version: String,
}
