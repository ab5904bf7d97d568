use anyhow::Result;
use proptest::prelude::*;
use roster::{filter_adults, group_by_age_range, AgeRange, Person, RosterError};

fn roster_with_ages(ages: &[i64]) -> Result<Vec<Person>> {
    ages.iter()
        .enumerate()
        .map(|(i, age)| {
            Person::new(format!("Member {}", i), *age, format!("member{}@example.com", i))
                .map_err(anyhow::Error::from)
        })
        .collect()
}

/// 範例資料：25, 17, 30, 70
#[test]
fn test_sample_ages_partition() -> Result<()> {
    let people = roster_with_ages(&[25, 17, 30, 70])?;

    let groups = group_by_age_range(&people);
    let ages = |range: AgeRange| -> Vec<u64> { groups.get(range).iter().map(|p| p.age()).collect() };

    assert_eq!(ages(AgeRange::Minor), vec![17]);
    assert_eq!(ages(AgeRange::Adult), vec![25, 30]);
    assert_eq!(ages(AgeRange::Senior), vec![70]);

    let adults: Vec<u64> = filter_adults(&people).iter().map(|p| p.age()).collect();
    assert_eq!(adults, vec![25, 30, 70]);

    Ok(())
}

#[test]
fn test_filter_returns_the_same_records() -> Result<()> {
    let people = roster_with_ages(&[40, 3])?;
    let adults = filter_adults(&people);

    assert_eq!(adults.len(), 1);
    assert!(std::ptr::eq(adults[0], &people[0]));
    Ok(())
}

#[test]
fn test_invalid_records_never_reach_classification() {
    let results = [
        Person::new("Ok", 20, "ok@example.com"),
        Person::new("Negative", -3, "neg@example.com"),
        Person::new("NoAt", 20, "noat.example.com"),
    ];

    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(RosterError::ValidationError { .. })));
    assert!(matches!(results[2], Err(RosterError::ValidationError { .. })));
}

proptest! {
    #[test]
    fn prop_valid_inputs_construct(
        age in 0i64..1_000,
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
    ) {
        let email = format!("{}@{}.com", local, domain);
        let person = Person::new("Someone", age, email.as_str());
        prop_assert!(person.is_ok());
        let person = person.unwrap();
        prop_assert_eq!(person.is_adult(), age >= 18);
        prop_assert_eq!(person.email(), email.as_str());
    }

    #[test]
    fn prop_negative_age_fails(age in i64::MIN..0) {
        prop_assert!(Person::new("Someone", age, "someone@example.com").is_err());
    }

    #[test]
    fn prop_email_without_at_fails(email in "[a-z.]{0,20}", age in 0i64..120) {
        prop_assert!(Person::new("Someone", age, email).is_err());
    }

    #[test]
    fn prop_grouping_is_a_total_disjoint_partition(ages in prop::collection::vec(0i64..120, 0..40)) {
        let people = roster_with_ages(&ages).unwrap();
        let groups = group_by_age_range(&people);

        prop_assert_eq!(groups.len(), people.len());

        for (range, members) in groups.iter() {
            // 每組內的順序與輸入一致
            let expected: Vec<&Person> = people.iter().filter(|p| p.age_range() == range).collect();
            prop_assert_eq!(members.to_vec(), expected);
        }

        let adults = filter_adults(&people);
        prop_assert_eq!(adults.len(), groups.adults().len() + groups.seniors().len());
    }
}
