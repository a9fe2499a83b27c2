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

//! Order accumulation.
//!
//! An [`Order`] holds one customer and at most [`MAX_ITEMS`] line items in
//! insertion order. The grand total is recomputed from every item, oldest
//! first, after each successful insertion.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use market_billing_rs::{Customer, Order};
//!
//! let mut order = Order::new(Customer::new("Ada", "ada@example.com"));
//! order.add_item("Milk", dec!(2.50), dec!(2)).unwrap();
//! order.add_item("Bread", dec!(1.00), dec!(3)).unwrap();
//! assert_eq!(order.current_total(), dec!(8.00));
//! ```

use crate::BillingError;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Maximum number of line items an order may hold.
pub const MAX_ITEMS: usize = 20;

/// The customer an order is billed to. Captured once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One product entry. Quantity is fractional to allow goods sold by weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: Decimal,
}

impl LineItem {
    /// `unit_price * quantity`, or `None` when it leaves the decimal range.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(self.quantity)
    }

    /// Line total.
    ///
    /// Items stored in an [`Order`] are guaranteed to have a representable
    /// total, so this never saturates for them.
    pub fn total(&self) -> Decimal {
        self.checked_total().unwrap_or(Decimal::MAX)
    }
}

/// A customer plus an append-only, bounded list of line items.
///
/// # Invariants
///
/// - `items.len() <= MAX_ITEMS`.
/// - `grand_total` equals the sum of every item's total, accumulated in
///   insertion order, immediately after each insertion.
/// - Items are never mutated or removed.
#[derive(Debug, Clone)]
pub struct Order {
    customer: Customer,
    items: Vec<LineItem>,
    grand_total: Decimal,
}

impl Order {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            items: Vec::with_capacity(MAX_ITEMS),
            grand_total: Decimal::ZERO,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ITEMS
    }

    /// Returns the cached grand total. It is only refreshed by [`Order::add_item`].
    pub fn current_total(&self) -> Decimal {
        self.grand_total
    }

    /// Appends a line item and recomputes the grand total over all items.
    ///
    /// Prices and quantities are not validated: zero and negative values are
    /// accepted as entered.
    ///
    /// # Errors
    ///
    /// - [`BillingError::CapacityExceeded`] - the order already holds [`MAX_ITEMS`] items.
    /// - [`BillingError::TotalOverflow`] - the new total cannot be represented.
    ///
    /// On error the order is left unchanged.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> Result<(), BillingError> {
        if self.is_full() {
            warn!(limit = MAX_ITEMS, "order is full, item rejected");
            return Err(BillingError::CapacityExceeded);
        }

        self.items.push(LineItem {
            name: name.into(),
            unit_price,
            quantity,
        });

        match Self::sum(&self.items) {
            Some(total) => self.grand_total = total,
            None => {
                self.items.pop();
                warn!("item rejected, total out of range");
                return Err(BillingError::TotalOverflow);
            }
        }

        debug!(items = self.items.len(), total = %self.grand_total, "item added");
        self.assert_invariants();
        Ok(())
    }

    /// Sums item totals from the oldest item to the newest.
    fn sum(items: &[LineItem]) -> Option<Decimal> {
        items.iter().try_fold(Decimal::ZERO, |acc, item| {
            acc.checked_add(item.checked_total()?)
        })
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.items.len() <= MAX_ITEMS,
            "Invariant violated: order holds {} items",
            self.items.len()
        );
        debug_assert_eq!(
            Some(self.grand_total),
            Self::sum(&self.items),
            "Invariant violated: grand total out of sync with items"
        );
    }
}
