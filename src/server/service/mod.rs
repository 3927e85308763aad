//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting invalid field values before anything is written
//! - **Existence checks**: Turning missing rows into `NotFound` / `BadRequest` errors
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod project;
pub mod user;

#[cfg(test)]
mod test;
