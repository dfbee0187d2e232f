use super::*;

/// Tests creating a new person.
///
/// Verifies that the repository inserts the row and returns the generated ID
/// together with the stored name and email.
///
/// Expected: Ok with person created
#[tokio::test]
async fn creates_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create("Ana".to_string(), "a@x.com".to_string())
        .await?;

    assert!(person.id > 0);
    assert_eq!(person.name, "Ana");
    assert_eq!(person.email, "a@x.com");

    let db_person = entity::prelude::Person::find_by_id(person.id).one(db).await?;
    assert!(db_person.is_some());
    assert_eq!(db_person.unwrap().email, "a@x.com");

    Ok(())
}

/// Tests that the email column is unique at the storage level.
///
/// Expected: Err on the second insert and only one row stored
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    repo.create("Ana".to_string(), "a@x.com".to_string())
        .await?;
    let result = repo
        .create("Other".to_string(), "a@x.com".to_string())
        .await;

    assert!(result.is_err());

    let count = entity::prelude::Person::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
