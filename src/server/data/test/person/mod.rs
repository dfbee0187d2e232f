mod create;
mod find_by_email;
mod get_all;
mod get_by_id;
mod update;

use crate::server::data::person::PersonRepository;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
