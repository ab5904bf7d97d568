use crate::utils::error::Result;
use crate::utils::validation::{validate_contains, validate_non_negative};
use serde::Serialize;
use std::fmt;

pub const ADULT_AGE: u64 = 18;
pub const SENIOR_AGE: u64 = 65;

/// 經過驗證的人員記錄，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u64,
    email: String,
}

impl Person {
    /// 建立記錄；年齡為負或 email 缺少 '@' 時拒絕
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Result<Self> {
        let email = email.into();

        validate_non_negative("age", age, "Age cannot be negative")?;
        validate_contains("email", &email, '@', "Invalid email format")?;

        Ok(Self {
            name: name.into(),
            age: age.unsigned_abs(),
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn age_range(&self) -> AgeRange {
        AgeRange::of(self.age)
    }

    pub fn projection(&self) -> PersonProjection<'_> {
        PersonProjection {
            name: &self.name,
            age: self.age,
            email: &self.email,
            is_adult: self.is_adult(),
        }
    }

    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), self.name.clone().into());
        map.insert("age".to_string(), self.age.into());
        map.insert("email".to_string(), self.email.clone().into());
        map.insert("is_adult".to_string(), self.is_adult().into());
        map
    }
}

/// 序列化時保持 name, age, email, is_adult 的欄位順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonProjection<'a> {
    pub name: &'a str,
    pub age: u64,
    pub email: &'a str,
    pub is_adult: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeRange {
    Minor,
    Adult,
    Senior,
}

impl AgeRange {
    pub const ALL: [AgeRange; 3] = [AgeRange::Minor, AgeRange::Adult, AgeRange::Senior];

    pub fn of(age: u64) -> Self {
        if age < ADULT_AGE {
            AgeRange::Minor
        } else if age < SENIOR_AGE {
            AgeRange::Adult
        } else {
            AgeRange::Senior
        }
    }

    /// 分組鍵名
    pub fn bucket_name(&self) -> &'static str {
        match self {
            AgeRange::Minor => "minors",
            AgeRange::Adult => "adults",
            AgeRange::Senior => "seniors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::Minor => "Minors",
            AgeRange::Adult => "Adults",
            AgeRange::Senior => "Seniors",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bucket_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RosterError;

    #[test]
    fn test_valid_person() {
        let person = Person::new("Alice Johnson", 25, "alice@example.com").unwrap();
        assert_eq!(person.name(), "Alice Johnson");
        assert_eq!(person.age(), 25);
        assert_eq!(person.email(), "alice@example.com");
        assert!(person.is_adult());
    }

    #[test]
    fn test_zero_age_is_accepted() {
        let person = Person::new("Newborn", 0, "baby@example.com").unwrap();
        assert_eq!(person.age(), 0);
        assert!(!person.is_adult());
    }

    #[test]
    fn test_negative_age_rejected() {
        let err = Person::new("Bob", -1, "bob@example.com").unwrap_err();
        match err {
            RosterError::ValidationError { field, message } => {
                assert_eq!(field, "age");
                assert_eq!(message, "Age cannot be negative");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_email_without_at_rejected() {
        let err = Person::new("Bob", 30, "bob.example.com").unwrap_err();
        assert!(matches!(
            err,
            RosterError::ValidationError { ref field, .. } if field == "email"
        ));
    }

    #[test]
    fn test_age_checked_before_email() {
        let err = Person::new("Bob", -5, "no-at-sign").unwrap_err();
        assert!(matches!(
            err,
            RosterError::ValidationError { ref field, .. } if field == "age"
        ));
    }

    #[test]
    fn test_adult_boundary() {
        assert!(!Person::new("A", 17, "a@x").unwrap().is_adult());
        assert!(Person::new("B", 18, "b@x").unwrap().is_adult());
    }

    #[test]
    fn test_age_range_boundaries() {
        assert_eq!(AgeRange::of(0), AgeRange::Minor);
        assert_eq!(AgeRange::of(17), AgeRange::Minor);
        assert_eq!(AgeRange::of(18), AgeRange::Adult);
        assert_eq!(AgeRange::of(64), AgeRange::Adult);
        assert_eq!(AgeRange::of(65), AgeRange::Senior);
        assert_eq!(AgeRange::Senior.to_string(), "seniors");
        assert_eq!(AgeRange::Minor.label(), "Minors");
    }

    #[test]
    fn test_projection_keeps_field_order() {
        let person = Person::new("Diana Prince", 70, "diana@example.com").unwrap();
        let json = serde_json::to_string(&person.projection()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Diana Prince","age":70,"email":"diana@example.com","is_adult":true}"#
        );
    }

    #[test]
    fn test_to_map() {
        let person = Person::new("Bob Smith", 17, "bob@example.com").unwrap();
        let map = person.to_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["name"], "Bob Smith");
        assert_eq!(map["age"], 17);
        assert_eq!(map["email"], "bob@example.com");
        assert_eq!(map["is_adult"], false);
    }
}
