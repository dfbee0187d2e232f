use super::*;

/// Tests listing people in storage order.
///
/// Expected: Ok with people ordered by ascending ID
#[tokio::test]
async fn returns_people_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_person(db).await?;
    let second = factory::create_person(db).await?;
    let third = factory::create_person(db).await?;

    let people = PersonRepository::new(db).get_all().await?;

    let ids: Vec<i32> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing people on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Person).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let people = PersonRepository::new(db).get_all().await?;

    assert!(people.is_empty());

    Ok(())
}
