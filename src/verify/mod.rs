// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked validators and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked validators** (`verify_chain`, `verify_array`, `SortedBy`) that walk a
//!    container and return `InvariantError` instead of panicking. Safe to call on
//!    anything, in any build.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch bugs during development.
//!
//! The containers call the contracts after every structural mutation; tests and
//! fuzz targets call the validators.

pub mod contracts;
mod types;

pub use types::*;
