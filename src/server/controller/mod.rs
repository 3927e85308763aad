//! HTTP request handlers.
//!
//! Controllers convert request DTOs into domain parameters, call the matching service
//! and convert the domain result back into a response DTO with its status code.

pub mod docs;
pub mod param;
pub mod project;
pub mod user;
