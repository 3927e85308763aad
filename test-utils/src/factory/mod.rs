//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let project = factory::project::create_project(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, project) = factory::helpers::create_project_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Alice")
//!     .age(22)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod project;
pub mod user;

pub use project::create_project;
pub use user::create_user;
