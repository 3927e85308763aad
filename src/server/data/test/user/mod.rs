use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, PatchUserParam, UpdateUserParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod find_by_id;
mod get_all_paginated;
mod update;
