//! SeaORM entities for the roster database schema.

pub mod prelude;

pub mod project;
pub mod user;
