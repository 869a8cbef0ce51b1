// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::error::{DirectoryError, DirectoryResult};
use crate::ids::EmployeeIndex;
use crate::model::{EmployeeRecord, RawPerson};

/// Normalized employees for one fetched batch. Never resized after
/// population; a new batch produces a new store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStore {
    records: Vec<EmployeeRecord>,
}

impl EmployeeStore {
    /// Normalizes `raw_results` in input order. The first record with a missing
    /// required field aborts the whole population.
    pub fn populate(raw_results: &[RawPerson]) -> DirectoryResult<Self> {
        let records = raw_results
            .iter()
            .enumerate()
            .map(|(position, raw)| EmployeeRecord::from_raw(EmployeeIndex::new(position), raw))
            .collect::<DirectoryResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn get(&self, index: EmployeeIndex) -> DirectoryResult<&EmployeeRecord> {
        self.records
            .get(index.get())
            .ok_or(DirectoryError::IndexOutOfRange {
                index: index.get(),
                len: self.records.len(),
            })
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last_index(&self) -> Option<EmployeeIndex> {
        self.records.len().checked_sub(1).map(EmployeeIndex::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.iter()
    }
}
