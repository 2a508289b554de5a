pub mod hub;
pub mod protocol;
