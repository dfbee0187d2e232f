use super::*;

/// Tests fetching a note by ID.
///
/// Expected: Ok(Some) for an existing note, Ok(None) otherwise
#[tokio::test]
async fn finds_note_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let created = factory::note::NoteFactory::new(db, person.id)
        .content("remember the milk")
        .build()
        .await?;

    let repo = NoteRepository::new(db);

    let note = repo.get_by_id(created.id).await?.expect("note should exist");
    assert_eq!(note.content, "remember the milk");
    assert_eq!(note.author_id, person.id);

    assert!(repo.get_by_id(999999).await?.is_none());

    Ok(())
}
