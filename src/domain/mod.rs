// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`CollectionError`](error::CollectionError))
//! - [`navigation`]: Destination keys and locators ([`PageKey`](navigation::PageKey),
//!   [`Locator`](navigation::Locator), [`EntryId`](navigation::EntryId))
//! - [`ui`]: UI value objects ([`Visibility`](ui::Visibility), [`Rgb`](ui::Rgb))

pub mod error;
pub mod navigation;
pub mod ui;
