pub use super::project::Entity as Project;
pub use super::user::Entity as User;
