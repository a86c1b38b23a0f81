//! # tama-names: Pet Name Resolution
//!
//! Supplies names for pets created with "random name" ticked:
//!   - **randomuser**: `GET https://randomuser.me/api/0.8`, first name of the
//!     first result
//!   - **roster**: a configured list, no network
//!   - **none**: always fails
//!
//! Failures are never fatal. [`NameClient::resolve`] returns a
//! [`NameResolution`] and the caller substitutes its fallback name. The game
//! loop only sees the [`NameLookup`] trait, which `NameClient` implements.

#![deny(clippy::unwrap_used)]

pub mod client;
pub mod error;
pub mod lookup;
pub mod types;

pub use client::{NameClient, NameProvider};
pub use error::NameError;
pub use lookup::NameLookup;
pub use types::{NameResolution, NameSource};
