use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_person_table::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(pk_auto(Note::Id))
                    .col(text(Note::Content))
                    .col(timestamp_with_time_zone(Note::CreatedAt))
                    .col(integer(Note::AuthorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_note_author_id")
                            .from(Note::Table, Note::AuthorId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_note_author_id")
                    .table(Note::Table)
                    .col(Note::AuthorId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Note {
    Table,
    Id,
    Content,
    CreatedAt,
    AuthorId,
}
