use super::*;

/// Tests updating a person's name and email.
///
/// Verifies the new values are stored and the creation timestamp is kept.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_person(db).await?;

    let updated = PersonRepository::new(db)
        .update(created.id, "Bea".to_string(), "b@x.com".to_string())
        .await?
        .expect("person should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Bea");
    assert_eq!(updated.email, "b@x.com");
    assert_eq!(updated.created_at, created.created_at);

    let db_person = entity::prelude::Person::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_person.email, "b@x.com");

    Ok(())
}

/// Tests updating a person that doesn't exist.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_missing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PersonRepository::new(db)
        .update(999999, "Bea".to_string(), "b@x.com".to_string())
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Person::find().count(db).await?, 0);

    Ok(())
}
