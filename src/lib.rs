// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! # Market Billing
//!
//! This library provides a small supermarket billing workflow: a flat-file
//! login gate, a bounded order of line items with a recomputed grand total,
//! and a bill renderer shared by the screen and file export.
//!
//! ## Core Components
//!
//! - [`CredentialStore`]: Append-only `username password` file
//! - [`AuthGate`]: Sign-up then login against the store
//! - [`Order`]: Customer plus at most [`MAX_ITEMS`] line items
//! - [`render`]: Bill text for an order
//! - [`Session`]: Menu loop owning the order of a run
//! - [`BillingError`]: Error types for every recoverable failure
//!
//! ## Example
//!
//! ```
//! use market_billing_rs::{Customer, Order, render};
//! use rust_decimal_macros::dec;
//!
//! let mut order = Order::new(Customer::new("Ada", "ada@example.com"));
//! order.add_item("Milk", dec!(2.50), dec!(2)).unwrap();
//! order.add_item("Bread", dec!(1.00), dec!(3)).unwrap();
//!
//! assert_eq!(order.current_total(), dec!(8.00));
//! assert!(render(&order).contains("Grand Total: $8.00"));
//! ```
//!
//! ## Threading
//!
//! Everything runs on the calling thread. File handles are opened and closed
//! within each operation.

pub mod auth;
pub mod bill;
pub mod console;
pub mod credentials;
pub mod error;
pub mod order;
pub mod session;

pub use auth::{AuthGate, AuthState};
pub use bill::{export_bill, render, write_bill};
pub use console::Console;
pub use credentials::{Credential, CredentialStore};
pub use error::BillingError;
pub use order::{Customer, LineItem, MAX_ITEMS, Order};
pub use session::{MenuChoice, Session, collect_customer};
