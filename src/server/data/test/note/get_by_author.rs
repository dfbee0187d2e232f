use super::*;

/// Tests listing the notes of a single author.
///
/// Expected: Ok with only that author's notes
#[tokio::test]
async fn returns_only_authors_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, notes) = factory::helpers::create_person_with_notes(db, 2).await?;
    factory::helpers::create_person_with_notes(db, 3).await?;

    let result = NoteRepository::new(db).get_by_author(person.id).await?;

    let ids: Vec<i32> = result.iter().map(|n| n.id).collect();
    let expected: Vec<i32> = notes.iter().map(|n| n.id).collect();
    assert_eq!(ids, expected);
    assert!(result.iter().all(|n| n.author_id == person.id));

    Ok(())
}

/// Tests listing notes of an author without notes.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_author_without_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let result = NoteRepository::new(db).get_by_author(person.id).await?;

    assert!(result.is_empty());

    Ok(())
}
