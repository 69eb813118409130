//! Shared helpers for controller tests.

use std::path::PathBuf;

use crate::app_data::DiffAppData;

pub fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static")
}

pub fn app_data() -> DiffAppData {
    DiffAppData::new(templates_dir(), static_dir())
}
