//! # TAMA Core Library
//!
//! Engine-agnostic virtual pet simulation.
//!
//! Each pet has three stats (**energy**, **fullness**, **happiness**) held in
//! `[0, 100]`. Player actions ([`Action`]) push them around, a per-pet decay
//! timer drains them, and a pet runs away as soon as any stat reaches zero.
//!
//! The [`PetCollection`] owns every pet and the [`DecayScheduler`], takes the
//! current [`SimTime`] on every call, and buffers [`PetEvent`]s for whatever
//! presentation layer sits on top. Nothing in this crate reads a clock or
//! performs I/O beyond loading a config file.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod collection;
pub mod config;
pub mod decay;
pub mod error;
pub mod events;
pub mod metrics;
pub mod pet;
pub mod types;

pub use action::Action;
pub use collection::PetCollection;
pub use config::TamaConfig;
pub use decay::{DecayHandle, DecayScheduler};
pub use error::PetError;
pub use events::PetEvent;
pub use pet::{Pet, PetView};
pub use types::*;
