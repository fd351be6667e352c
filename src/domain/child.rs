//! Children, users, and the value mappings derived from them

use super::age::ChildAge;
use super::timestamp;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account holder as stored in the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A child profile as stored in the `children` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Child {
    /// Age string at `target`; empty when the birth date is unknown or later
    pub fn age_at(&self, target: NaiveDate) -> String {
        self.date_of_birth
            .map(|dob| super::age::calculate_age_at_date(dob, target))
            .unwrap_or_default()
    }

    /// Lifestage at `target`, when the birth date is known
    pub fn lifestage_at(&self, target: NaiveDate) -> Option<Lifestage> {
        self.date_of_birth.map(|dob| Lifestage::at(dob, target))
    }
}

/// Child gender, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Boy,
    Girl,
    #[default]
    Unspecified,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boy" | "male" | "m" => Ok(Gender::Boy),
            "girl" | "female" | "f" => Ok(Gender::Girl),
            "" | "unspecified" | "other" | "prefer_not_to_say" | "prefer-not-to-say" => {
                Ok(Gender::Unspecified)
            }
            _ => Err(format!(
                "Invalid gender: '{}'. Valid values are: boy, girl, unspecified",
                s
            )),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
            Gender::Unspecified => "unspecified",
        };
        f.write_str(label)
    }
}

/// Developmental stage derived from a child's age
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestage {
    /// Birth date still in the future
    Expecting,
    /// Under 3 months
    Newborn,
    /// Under 12 months
    Infant,
    /// Under 3 years
    Toddler,
    /// Under 5 years
    Preschooler,
    SchoolAge,
}

impl Lifestage {
    pub fn at(date_of_birth: NaiveDate, target: NaiveDate) -> Self {
        match ChildAge::between(date_of_birth, target) {
            None => Lifestage::Expecting,
            Some(age) => match age.total_months() {
                0..=2 => Lifestage::Newborn,
                3..=11 => Lifestage::Infant,
                12..=35 => Lifestage::Toddler,
                36..=59 => Lifestage::Preschooler,
                _ => Lifestage::SchoolAge,
            },
        }
    }
}

impl fmt::Display for Lifestage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Lifestage::Expecting => "expecting",
            Lifestage::Newborn => "newborn",
            Lifestage::Infant => "infant",
            Lifestage::Toddler => "toddler",
            Lifestage::Preschooler => "preschooler",
            Lifestage::SchoolAge => "school age",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gender_aliases() {
        assert_eq!(Gender::from_str("boy").unwrap(), Gender::Boy);
        assert_eq!(Gender::from_str("Male").unwrap(), Gender::Boy);
        assert_eq!(Gender::from_str("F").unwrap(), Gender::Girl);
        assert_eq!(Gender::from_str("").unwrap(), Gender::Unspecified);
        assert_eq!(
            Gender::from_str("prefer_not_to_say").unwrap(),
            Gender::Unspecified
        );
    }

    #[test]
    fn test_gender_invalid() {
        let err = Gender::from_str("dragon").unwrap_err();
        assert!(err.contains("Invalid gender"));
        assert!(err.contains("boy, girl, unspecified"));
    }

    #[test]
    fn test_child_deserializes_with_legacy_gender() {
        let json = r#"{
            "id": "c1",
            "parentId": "u1",
            "name": "Ada",
            "dateOfBirth": {"seconds": 1704844800, "nanoseconds": 0},
            "gender": "female"
        }"#;
        let child: Child = serde_json::from_str(json).unwrap();
        assert_eq!(child.gender, Gender::Girl);
        assert_eq!(child.date_of_birth, Some(date(2024, 1, 10)));
        assert!(child.avatar_url.is_none());
    }

    #[test]
    fn test_child_rejects_unknown_gender() {
        let json = r#"{"id": "c1", "parentId": "u1", "name": "Ada", "gender": "dragon"}"#;
        assert!(serde_json::from_str::<Child>(json).is_err());
    }

    #[test]
    fn test_lifestage_boundaries() {
        let dob = date(2020, 1, 15);
        assert_eq!(Lifestage::at(dob, date(2020, 1, 1)), Lifestage::Expecting);
        assert_eq!(Lifestage::at(dob, date(2020, 4, 14)), Lifestage::Newborn);
        assert_eq!(Lifestage::at(dob, date(2020, 4, 15)), Lifestage::Infant);
        assert_eq!(Lifestage::at(dob, date(2021, 1, 15)), Lifestage::Toddler);
        assert_eq!(Lifestage::at(dob, date(2023, 1, 15)), Lifestage::Preschooler);
        assert_eq!(Lifestage::at(dob, date(2025, 1, 15)), Lifestage::SchoolAge);
    }

    #[test]
    fn test_child_without_birth_date() {
        let child = Child {
            id: "c1".to_string(),
            parent_id: "u1".to_string(),
            name: "Ada".to_string(),
            date_of_birth: None,
            gender: Gender::Unspecified,
            avatar_url: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(child.age_at(date(2024, 1, 1)), "");
        assert!(child.lifestage_at(date(2024, 1, 1)).is_none());
    }
}
