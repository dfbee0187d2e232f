use super::*;

/// Tests deleting all notes of an author.
///
/// Expected: Ok with the number of removed notes; other authors keep theirs
#[tokio::test]
async fn deletes_only_authors_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, _) = factory::helpers::create_person_with_notes(db, 3).await?;
    let (other, _) = factory::helpers::create_person_with_notes(db, 1).await?;

    let deleted = NoteRepository::new(db).delete_by_author(person.id).await?;

    assert_eq!(deleted, 3);

    let remaining = Note::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].author_id, other.id);

    Ok(())
}
