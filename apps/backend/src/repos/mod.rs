//! Storage seams for the service layer.

pub mod games;
