// ClinicDirectory-api lib.rs
//
// HTTP surface of the ClinicDirectory service: router, handlers,
// public response entities and the OpenAPI document.

// Public modules
pub mod api;
pub mod entities;
pub mod openapi;
