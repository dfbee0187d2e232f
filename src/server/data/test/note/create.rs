use super::*;

/// Tests creating a note for an existing author.
///
/// Expected: Ok with note stored under the author
#[tokio::test]
async fn creates_note() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let note = NoteRepository::new(db)
        .create(person.id, "hi".to_string())
        .await?;

    assert!(note.id > 0);
    assert_eq!(note.author_id, person.id);
    assert_eq!(note.content, "hi");

    let db_note = Note::find_by_id(note.id).one(db).await?;
    assert_eq!(db_note.map(|n| n.content), Some("hi".to_string()));

    Ok(())
}

/// Tests creating a note for an author that doesn't exist.
///
/// Verifies the foreign key constraint rejects the insert.
///
/// Expected: Err and no note row created
#[tokio::test]
async fn fails_for_nonexistent_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NoteRepository::new(db)
        .create(999999, "orphan".to_string())
        .await;

    assert!(result.is_err());
    assert_eq!(Note::find().count(db).await?, 0);

    Ok(())
}
