//! Test support shared by the backend's unit and integration tests:
//! one-time logging initialisation, unique names, and tile JSON builders.

pub mod logging;
pub mod tile_json;
pub mod unique_helpers;
