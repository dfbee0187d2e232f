use super::*;

/// Tests looking a person up by email.
///
/// Expected: Ok(Some) for a used email, Ok(None) otherwise
#[tokio::test]
async fn finds_person_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::person::PersonFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = PersonRepository::new(db);

    let found = repo.find_by_email("taken@example.com").await?;
    assert_eq!(found.map(|p| p.id), Some(created.id));

    let missing = repo.find_by_email("free@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
