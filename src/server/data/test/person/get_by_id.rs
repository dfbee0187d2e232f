use super::*;

/// Tests fetching an existing person.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::person::PersonFactory::new(db)
        .name("Ana")
        .email("ana@example.com")
        .build()
        .await?;

    let person = PersonRepository::new(db).get_by_id(created.id).await?;

    let person = person.expect("person should exist");
    assert_eq!(person.id, created.id);
    assert_eq!(person.name, "Ana");
    assert_eq!(person.email, "ana@example.com");
    assert_eq!(person.created_at, created.created_at);

    Ok(())
}

/// Tests fetching a person that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);

    assert!(repo.get_by_id(999999).await?.is_none());
    assert!(!repo.exists(999999).await?);

    Ok(())
}
