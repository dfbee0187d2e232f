mod create;
mod delete;
mod delete_by_author;
mod get_all;
mod get_by_author;
mod get_by_id;
mod update;

use crate::server::data::note::NoteRepository;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
