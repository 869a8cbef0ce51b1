// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use crate::{
    EmployeeStore, RawDob, RawLocation, RawName, RawPerson, RawPicture, RawPostcode, RawStreet,
};

pub(crate) fn person(first: &str, last: &str) -> RawPerson {
    RawPerson {
        name: Some(RawName {
            title: None,
            first: Some(first.to_owned()),
            last: Some(last.to_owned()),
        }),
        email: Some(format!("{first}.{last}@example.com").to_ascii_lowercase()),
        location: Some(RawLocation {
            street: Some(RawStreet {
                number: Some(10),
                name: Some("Main St".to_owned()),
            }),
            city: Some("Denver".to_owned()),
            state: Some("Colorado".to_owned()),
            postcode: Some(RawPostcode::Text("80202".to_owned())),
        }),
        picture: Some(RawPicture {
            large: Some(format!("https://img.example/large/{first}.jpg")),
            medium: None,
            thumbnail: Some(format!("https://img.example/thumb/{first}.jpg")),
        }),
        phone: Some("555-0100".to_owned()),
        dob: Some(RawDob {
            date: Some("1990-01-02T00:00:00Z".to_owned()),
            age: None,
        }),
    }
}

/// Builds a store from "First Last" names.
pub(crate) fn store_of(names: &[&str]) -> Arc<EmployeeStore> {
    let raw = names
        .iter()
        .map(|name| {
            let (first, last) = name.split_once(' ').unwrap_or((name, ""));
            person(first, last)
        })
        .collect::<Vec<_>>();
    Arc::new(EmployeeStore::populate(&raw).expect("fixture names should populate"))
}
