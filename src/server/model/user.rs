//! User domain models and parameters.
//!
//! Provides the user domain model along with the parameter types for creating,
//! replacing (PUT) and partially updating (PATCH) users.

use crate::{
    model::user::{CreateUserDto, PaginatedUsersDto, PatchUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{require_email, require_non_negative, require_not_blank},
    },
};

/// User record with contact details and student identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub student_id: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            age: self.age,
            student_id: self.student_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            age: entity.age,
            student_id: entity.student_id,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub student_id: String,
}

impl CreateUserParam {
    /// Checks every field against the user field rules.
    ///
    /// # Returns
    /// - `Ok(())` - All fields are valid
    /// - `Err(AppError::BadRequest)` - First invalid field encountered
    pub fn validate(&self) -> Result<(), AppError> {
        require_not_blank("name", &self.name)?;
        require_email(&self.email)?;
        require_non_negative("age", self.age)?;
        require_not_blank("student_id", &self.student_id)?;
        Ok(())
    }
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            student_id: dto.student_id,
        }
    }
}

/// Parameters for replacing every field of an existing user.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub student_id: String,
}

impl UpdateUserParam {
    pub fn validate(&self) -> Result<(), AppError> {
        require_not_blank("name", &self.name)?;
        require_email(&self.email)?;
        require_non_negative("age", self.age)?;
        require_not_blank("student_id", &self.student_id)?;
        Ok(())
    }
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            student_id: dto.student_id,
        }
    }
}

/// Parameters for partially updating a user.
///
/// Only `Some` fields are written; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PatchUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub student_id: Option<String>,
}

impl PatchUserParam {
    /// Validates only the fields present in the patch.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            require_not_blank("name", name)?;
        }
        if let Some(email) = &self.email {
            require_email(email)?;
        }
        if let Some(age) = self.age {
            require_non_negative("age", age)?;
        }
        if let Some(student_id) = &self.student_id {
            require_not_blank("student_id", student_id)?;
        }
        Ok(())
    }
}

impl From<PatchUserDto> for PatchUserParam {
    fn from(dto: PatchUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            age: dto.age,
            student_id: dto.student_id,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
