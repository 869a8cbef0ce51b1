// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use rolodex_app::{
    RawBatch, RawDob, RawLocation, RawName, RawPerson, RawPicture, RawPostcode, RawStreet,
};

const FIRST_NAMES: [&str; 20] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan", "Noor", "Mateo", "Ines", "Tomas",
];
const LAST_NAMES: [&str; 20] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks", "Okafor",
    "Lindqvist",
];
const TITLES: [&str; 4] = ["Mr", "Ms", "Mx", "Dr"];

const LOCALITIES: [(&str, &str); 12] = [
    ("Austin", "Texas"),
    ("Seattle", "Washington"),
    ("Denver", "Colorado"),
    ("Madison", "Wisconsin"),
    ("Portland", "Oregon"),
    ("Raleigh", "North Carolina"),
    ("Tucson", "Arizona"),
    ("Boise", "Idaho"),
    ("Omaha", "Nebraska"),
    ("Albany", "New York"),
    ("Savannah", "Georgia"),
    ("Burlington", "Vermont"),
];

const STREET_NAMES: [&str; 10] = [
    "Maple Ave",
    "Oak St",
    "Cedar Ln",
    "Pine Rd",
    "Elm St",
    "Birch Way",
    "Walnut Dr",
    "Willow Ct",
    "Aspen Pl",
    "Spruce Blvd",
];

const EMAIL_DOMAINS: [&str; 4] = [
    "example.com",
    "staff.example.org",
    "mail.example.net",
    "corp.example.io",
];

const PORTRAIT_BASE: &str = "https://randomuser.me/api/portraits";

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Deterministic stand-in for the people API.
#[derive(Debug, Clone)]
pub struct PeopleFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl PeopleFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn batch(&mut self, size: usize) -> RawBatch {
        RawBatch {
            results: (0..size).map(|_| self.person()).collect(),
        }
    }

    pub fn person(&mut self) -> RawPerson {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        self.person_named(first, last)
    }

    pub fn person_named(&mut self, first: &str, last: &str) -> RawPerson {
        let (city, state) = self.pick(&LOCALITIES);
        let domain = self.pick(&EMAIL_DOMAINS);
        let portrait_group = if self.rng.bool() { "women" } else { "men" };
        let portrait = self.int_range(1, 99);
        let postcode = if self.rng.bool() {
            RawPostcode::Number(self.int_range(10_000, 99_999) as i64)
        } else {
            RawPostcode::Text(format!("{:05}", self.int_range(501, 99_950)))
        };

        RawPerson {
            name: Some(RawName {
                title: Some(self.pick(&TITLES).to_owned()),
                first: Some(first.to_owned()),
                last: Some(last.to_owned()),
            }),
            email: Some(
                format!("{first}.{last}@{domain}")
                    .to_lowercase()
                    .replace(' ', ""),
            ),
            location: Some(RawLocation {
                street: Some(RawStreet {
                    number: Some(self.int_range(1, 9_999) as i64),
                    name: Some(self.pick(&STREET_NAMES).to_owned()),
                }),
                city: Some(city.to_owned()),
                state: Some(state.to_owned()),
                postcode: Some(postcode),
            }),
            picture: Some(RawPicture {
                large: Some(format!("{PORTRAIT_BASE}/{portrait_group}/{portrait}.jpg")),
                medium: Some(format!(
                    "{PORTRAIT_BASE}/med/{portrait_group}/{portrait}.jpg"
                )),
                thumbnail: Some(format!(
                    "{PORTRAIT_BASE}/thumb/{portrait_group}/{portrait}.jpg"
                )),
            }),
            phone: Some(format!(
                "({:03}) {:03}-{:04}",
                self.int_range(200, 999),
                self.int_range(200, 999),
                self.int_range(0, 9_999),
            )),
            dob: Some(self.dob()),
        }
    }

    fn dob(&mut self) -> RawDob {
        let year = self.int_range(1950, 2004);
        let month = self.int_range(1, 12);
        let day = self.int_range(1, 28);
        RawDob {
            date: Some(format!(
                "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:03}Z",
                self.int_range(0, 23),
                self.int_range(0, 59),
                self.int_range(0, 59),
                self.int_range(0, 999),
            )),
            age: Some((2026 - year) as u32),
        }
    }

    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.int_n(values.len())]
    }

    /// Inclusive on both ends.
    fn int_range(&mut self, low: usize, high: usize) -> usize {
        low + self.rng.int_n(high - low + 1)
    }
}

/// A batch whose people carry the given "First Last" names, in order.
pub fn named_batch(names: &[&str]) -> RawBatch {
    let mut faker = PeopleFaker::new(names.len() as u64);
    RawBatch {
        results: names
            .iter()
            .map(|name| {
                let (first, last) = name.split_once(' ').unwrap_or((name, ""));
                faker.person_named(first, last)
            })
            .collect(),
    }
}

/// Serializes a batch the way the people API returns it.
pub fn batch_json(batch: &RawBatch) -> Result<String> {
    serde_json::to_string(batch).context("encode people batch")
}
