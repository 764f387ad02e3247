//! DTO modules bridging services with the API surface.

pub mod api;
