use crate::domain::model::{AgeRange, Person};

/// 依年齡分組的結果，各組保留輸入的相對順序
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgeGroups<'a> {
    minors: Vec<&'a Person>,
    adults: Vec<&'a Person>,
    seniors: Vec<&'a Person>,
}

impl<'a> AgeGroups<'a> {
    pub fn minors(&self) -> &[&'a Person] {
        &self.minors
    }

    pub fn adults(&self) -> &[&'a Person] {
        &self.adults
    }

    pub fn seniors(&self) -> &[&'a Person] {
        &self.seniors
    }

    pub fn get(&self, range: AgeRange) -> &[&'a Person] {
        match range {
            AgeRange::Minor => &self.minors,
            AgeRange::Adult => &self.adults,
            AgeRange::Senior => &self.seniors,
        }
    }

    /// 固定順序：minors, adults, seniors
    pub fn iter(&self) -> impl Iterator<Item = (AgeRange, &[&'a Person])> + '_ {
        AgeRange::ALL.into_iter().map(move |range| (range, self.get(range)))
    }

    pub fn len(&self) -> usize {
        self.minors.len() + self.adults.len() + self.seniors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, person: &'a Person) {
        match person.age_range() {
            AgeRange::Minor => self.minors.push(person),
            AgeRange::Adult => self.adults.push(person),
            AgeRange::Senior => self.seniors.push(person),
        }
    }
}

pub fn filter_adults(people: &[Person]) -> Vec<&Person> {
    people.iter().filter(|person| person.is_adult()).collect()
}

pub fn group_by_age_range(people: &[Person]) -> AgeGroups<'_> {
    let mut groups = AgeGroups::default();
    for person in people {
        groups.push(person);
    }

    tracing::debug!(
        minors = groups.minors.len(),
        adults = groups.adults.len(),
        seniors = groups.seniors.len(),
        "Grouped people by age range"
    );

    groups
}
