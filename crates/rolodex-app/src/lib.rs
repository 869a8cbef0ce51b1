// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod directory;
pub mod error;
pub mod gallery;
pub mod ids;
pub mod model;
pub mod overlay;
pub mod search;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use directory::*;
pub use error::*;
pub use gallery::*;
pub use ids::*;
pub use model::*;
pub use overlay::*;
pub use search::*;
pub use state::*;
pub use store::*;
