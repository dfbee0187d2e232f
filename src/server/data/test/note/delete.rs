use super::*;

/// Tests deleting one note without affecting others.
///
/// Expected: Ok(1) with only the target note removed
#[tokio::test]
async fn deletes_note_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, notes) = factory::helpers::create_person_with_notes(db, 3).await?;

    let deleted = NoteRepository::new(db).delete(notes[1].id).await?;

    assert_eq!(deleted, 1);
    assert!(Note::find_by_id(notes[1].id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(Note::find().count(db).await?, 2);

    // The author is untouched
    assert!(Person::find_by_id(person.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent note.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_note_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(NoteRepository::new(db).delete(999999).await?, 0);

    Ok(())
}
