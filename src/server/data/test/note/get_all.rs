use super::*;

/// Tests listing notes across authors in storage order.
///
/// Expected: Ok with every note ordered by ascending ID
#[tokio::test]
async fn returns_all_notes_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_note_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::create_person(db).await?;
    let bea = factory::create_person(db).await?;
    let first = factory::create_note(db, ana.id).await?;
    let second = factory::create_note(db, bea.id).await?;
    let third = factory::create_note(db, ana.id).await?;

    let notes = NoteRepository::new(db).get_all().await?;

    let ids: Vec<i32> = notes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(notes[1].author_id, bea.id);

    Ok(())
}
