//! Status bodies returned from the operational endpoints.

use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

pub const MSG_RESOURCE_FOUND: &str = "resource_found";
pub const MSG_RESOURCE_NOT_FOUND: &str = "resource_not_found";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "internal_server_error";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StatusMessage {
    pub status: String,
    pub status_message: String,
}

impl StatusMessage {
    pub fn resource_found() -> StatusMessage {
        StatusMessage {
            status: String::from(STATUS_SUCCESS),
            status_message: String::from(MSG_RESOURCE_FOUND),
        }
    }

    pub fn resource_not_found() -> StatusMessage {
        StatusMessage {
            status: String::from(STATUS_ERROR),
            status_message: String::from(MSG_RESOURCE_NOT_FOUND),
        }
    }

    pub fn internal_server_error() -> StatusMessage {
        StatusMessage {
            status: String::from(STATUS_ERROR),
            status_message: String::from(MSG_INTERNAL_SERVER_ERROR),
        }
    }
}
