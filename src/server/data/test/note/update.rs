use super::*;
use chrono::{Duration, Utc};

/// Tests updating a note's content.
///
/// Verifies that only the content and the timestamp change; the ID and author are
/// preserved.
///
/// Expected: Ok(Some) with new content and a newer timestamp
#[tokio::test]
async fn updates_content_and_refreshes_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let created = factory::note::NoteFactory::new(db, person.id)
        .content("draft")
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let updated = NoteRepository::new(db)
        .update(created.id, "final".to_string())
        .await?
        .expect("note should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.author_id, person.id);
    assert_eq!(updated.content, "final");
    assert!(updated.created_at > created.created_at);

    Ok(())
}

/// Tests updating a nonexistent note.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_note() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NoteRepository::new(db)
        .update(999999, "final".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
