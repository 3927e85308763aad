use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParam, PatchProjectParam, UpdateProjectParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_paginated;
mod get_by_owner;
mod replace;
mod update;
