//! # tama-runtime: Event Loop and Front End for TAMA
//!
//! Connects the clock-free `tama-core` engine to real time and to a user
//! interface.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  commands   ┌──────────────────────────────┐
//! │  GameHandle  │────────────▶│           GameLoop           │
//! └──────────────┘             │  ┌────────────────────────┐  │
//!                              │  │  tama-core collection  │  │
//! ┌──────────────┐  resolved   │  └────────────────────────┘  │
//! │ name lookups │────────────▶│   decay deadline (sleep)     │
//! │ (tama-names) │             └──────────────┬───────────────┘
//! └──────────────┘                            │ PetEvent
//!                                             ▼
//!                                  ┌─────────────────────┐
//!                                  │  PresentationHooks  │
//!                                  └─────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `service`: the single-owner game loop
//! - `commands`: requests and the cloneable `GameHandle`
//! - `hooks`: presentation trait, event dispatch, a recording implementation
//! - `terminal`: line-based front end used by the `tama` binary

#![deny(clippy::unwrap_used)]

pub mod commands;
pub mod error;
pub mod hooks;
pub mod service;
pub mod terminal;

pub use commands::{GameHandle, GameSnapshot};
pub use error::RuntimeError;
pub use hooks::{PresentationHooks, RecordingHooks, dispatch};
pub use service::{GameLoop, NAME_FAILURE_NOTICE, start};
