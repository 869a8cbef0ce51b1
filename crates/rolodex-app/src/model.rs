// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, DirectoryResult};
use crate::ids::EmployeeIndex;

/// Response body of the people endpoint. Only `results` is required; every
/// per-person field is optional here and checked during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBatch {
    pub results: Vec<RawPerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPerson {
    pub name: Option<RawName>,
    pub email: Option<String>,
    pub location: Option<RawLocation>,
    pub picture: Option<RawPicture>,
    pub phone: Option<String>,
    pub dob: Option<RawDob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawName {
    pub title: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLocation {
    pub street: Option<RawStreet>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<RawPostcode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStreet {
    pub number: Option<i64>,
    pub name: Option<String>,
}

/// The upstream API sends numeric postcodes for some nationalities and
/// alphanumeric ones for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPostcode {
    Number(i64),
    Text(String),
}

impl RawPostcode {
    pub fn as_display(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPicture {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDob {
    pub date: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub index: EmployeeIndex,
    pub thumbnail_url: String,
    pub full_image_url: String,
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
}

impl EmployeeRecord {
    pub fn from_raw(index: EmployeeIndex, raw: &RawPerson) -> DirectoryResult<Self> {
        let position = index.get();
        let name = require(raw.name.as_ref(), position, "name")?;
        let first = require(name.first.as_deref(), position, "name.first")?;
        let last = require(name.last.as_deref(), position, "name.last")?;
        let email = require(raw.email.as_deref(), position, "email")?;

        let location = require(raw.location.as_ref(), position, "location")?;
        let city = require(location.city.as_deref(), position, "location.city")?;
        let state = require(location.state.as_deref(), position, "location.state")?;
        let street = require(location.street.as_ref(), position, "location.street")?;
        let street_number = require(street.number.as_ref(), position, "location.street.number")?;
        let street_name = require(street.name.as_deref(), position, "location.street.name")?;
        let postcode = require(location.postcode.as_ref(), position, "location.postcode")?;

        let picture = require(raw.picture.as_ref(), position, "picture")?;
        let thumbnail = require(picture.thumbnail.as_deref(), position, "picture.thumbnail")?;
        let large = require(picture.large.as_deref(), position, "picture.large")?;

        let phone = require(raw.phone.as_deref(), position, "phone")?;
        let dob = require(raw.dob.as_ref(), position, "dob")?;
        let dob_date = require(dob.date.as_deref(), position, "dob.date")?;
        let birthday = format_birthday(dob_date);

        Ok(Self {
            index,
            thumbnail_url: thumbnail.to_owned(),
            full_image_url: large.to_owned(),
            full_name: format!("{first} {last}"),
            email: email.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            phone: phone.to_owned(),
            address: format_address(
                *street_number,
                street_name,
                city,
                state,
                &postcode.as_display(),
            ),
            birthday,
        })
    }

    /// "City, State" line shown on the gallery card.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

fn require<T>(value: Option<T>, index: usize, field: &'static str) -> DirectoryResult<T> {
    value.ok_or(DirectoryError::MalformedRecord { index, field })
}

/// Keeps the first ten characters of an ISO-8601 timestamp with `-` shown
/// as `/`. The value is displayed as given, never validated.
pub fn format_birthday(raw: &str) -> String {
    raw.chars()
        .take(10)
        .map(|ch| if ch == '-' { '/' } else { ch })
        .collect()
}

pub fn format_address(
    street_number: i64,
    street_name: &str,
    city: &str,
    state: &str,
    postcode: &str,
) -> String {
    format!("{street_number} {street_name}, {city}, {state} {postcode}")
}

#[cfg(test)]
mod tests {
    use super::{
        EmployeeRecord, RawBatch, RawDob, RawLocation, RawName, RawPerson, RawPicture,
        RawPostcode, RawStreet, format_address, format_birthday,
    };
    use crate::{DirectoryError, EmployeeIndex};

    fn sample_person() -> RawPerson {
        RawPerson {
            name: Some(RawName {
                title: Some("Ms".to_owned()),
                first: Some("Ann".to_owned()),
                last: Some("Lee".to_owned()),
            }),
            email: Some("ann.lee@example.com".to_owned()),
            location: Some(RawLocation {
                street: Some(RawStreet {
                    number: Some(4521),
                    name: Some("Hickory Creek Dr".to_owned()),
                }),
                city: Some("Madison".to_owned()),
                state: Some("Wisconsin".to_owned()),
                postcode: Some(RawPostcode::Number(53703)),
            }),
            picture: Some(RawPicture {
                large: Some("https://img.example/large/1.jpg".to_owned()),
                medium: None,
                thumbnail: Some("https://img.example/thumb/1.jpg".to_owned()),
            }),
            phone: Some("(608) 555-0142".to_owned()),
            dob: Some(RawDob {
                date: Some("1987-03-09T04:12:55.813Z".to_owned()),
                age: Some(39),
            }),
        }
    }

    #[test]
    fn from_raw_normalizes_every_field() -> Result<(), DirectoryError> {
        let record = EmployeeRecord::from_raw(EmployeeIndex::new(3), &sample_person())?;
        assert_eq!(record.index, EmployeeIndex::new(3));
        assert_eq!(record.full_name, "Ann Lee");
        assert_eq!(record.email, "ann.lee@example.com");
        assert_eq!(record.location_label(), "Madison, Wisconsin");
        assert_eq!(
            record.address,
            "4521 Hickory Creek Dr, Madison, Wisconsin 53703"
        );
        assert_eq!(record.birthday, "1987/03/09");
        assert_eq!(record.thumbnail_url, "https://img.example/thumb/1.jpg");
        assert_eq!(record.full_image_url, "https://img.example/large/1.jpg");
        assert_eq!(record.initials(), "AL");
        Ok(())
    }

    #[test]
    fn from_raw_reports_missing_top_level_field() {
        let mut person = sample_person();
        person.phone = None;
        let error = EmployeeRecord::from_raw(EmployeeIndex::new(7), &person)
            .expect_err("missing phone should fail");
        assert_eq!(
            error,
            DirectoryError::MalformedRecord {
                index: 7,
                field: "phone"
            }
        );
    }

    #[test]
    fn from_raw_reports_missing_nested_field() {
        let mut person = sample_person();
        if let Some(picture) = person.picture.as_mut() {
            picture.large = None;
        }
        let error = EmployeeRecord::from_raw(EmployeeIndex::new(0), &person)
            .expect_err("missing large picture should fail");
        assert_eq!(
            error,
            DirectoryError::MalformedRecord {
                index: 0,
                field: "picture.large"
            }
        );
    }

    #[test]
    fn from_raw_displays_odd_birthdays_as_given() -> Result<(), DirectoryError> {
        let mut person = sample_person();
        person.dob = Some(RawDob {
            date: Some("1993-02-30T00:00:00Z".to_owned()),
            age: None,
        });
        let record = EmployeeRecord::from_raw(EmployeeIndex::new(2), &person)?;
        assert_eq!(record.birthday, "1993/02/30");
        Ok(())
    }

    #[test]
    fn from_raw_reports_missing_birthday_date() {
        let mut person = sample_person();
        person.dob = Some(RawDob {
            date: None,
            age: Some(30),
        });
        let error = EmployeeRecord::from_raw(EmployeeIndex::new(2), &person)
            .expect_err("missing dob.date should fail");
        assert_eq!(
            error,
            DirectoryError::MalformedRecord {
                index: 2,
                field: "dob.date"
            }
        );
    }

    #[test]
    fn format_birthday_keeps_date_portion_only() {
        assert_eq!(format_birthday("1993-07-25T11:02:13.420Z"), "1993/07/25");
        assert_eq!(format_birthday("1993-07-25"), "1993/07/25");
        assert_eq!(format_birthday("short"), "short");
        assert_eq!(format_birthday("1993-ñé-25T00:00"), "1993/ñé/25");
    }

    #[test]
    fn format_address_joins_street_and_locality() {
        assert_eq!(
            format_address(12, "Elm St", "Austin", "Texas", "73301"),
            "12 Elm St, Austin, Texas 73301"
        );
    }

    #[test]
    fn raw_batch_accepts_string_and_numeric_postcodes() -> Result<(), serde_json::Error> {
        let batch: RawBatch = serde_json::from_str(
            r#"{"results":[
                {"location":{"postcode":90210}},
                {"location":{"postcode":"N4B 7X2"}},
                {}
            ]}"#,
        )?;
        assert_eq!(batch.results.len(), 3);
        let postcodes = batch
            .results
            .iter()
            .map(|person| {
                person
                    .location
                    .as_ref()
                    .and_then(|location| location.postcode.as_ref())
                    .map(RawPostcode::as_display)
            })
            .collect::<Vec<_>>();
        assert_eq!(
            postcodes,
            vec![Some("90210".to_owned()), Some("N4B 7X2".to_owned()), None]
        );
        Ok(())
    }

    #[test]
    fn raw_batch_requires_results_array() {
        let error = serde_json::from_str::<RawBatch>(r#"{"info":{}}"#)
            .expect_err("missing results should fail");
        assert!(error.to_string().contains("results"));
    }
}
