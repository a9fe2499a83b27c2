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

//! Order public API integration tests.

use market_billing_rs::{BillingError, Customer, MAX_ITEMS, Order};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn make_order() -> Order {
    Order::new(Customer::new("Ada Lovelace", "ada@example.com"))
}

#[test]
fn milk_and_bread_total() {
    let mut order = make_order();
    order.add_item("Milk", dec!(2.50), dec!(2)).unwrap();
    order.add_item("Bread", dec!(1.00), dec!(3)).unwrap();

    assert_eq!(order.current_total(), dec!(8.00));
    assert_eq!(order.items()[0].total(), dec!(5.00));
    assert_eq!(order.items()[1].total(), dec!(3.00));
}

#[test]
fn total_tracks_every_insertion() {
    let mut order = make_order();
    let prices = [dec!(0.99), dec!(12.50), dec!(3.333), dec!(-1.00)];
    let mut expected = Decimal::ZERO;

    for (i, price) in prices.into_iter().enumerate() {
        let quantity = Decimal::from(i + 1);
        order.add_item(format!("item-{i}"), price, quantity).unwrap();
        expected += price * quantity;
        assert_eq!(order.current_total(), expected);
    }
}

#[test]
fn twenty_first_item_is_rejected() {
    let mut order = make_order();
    for i in 0..MAX_ITEMS {
        order.add_item(format!("item-{i}"), dec!(1.25), dec!(2)).unwrap();
    }
    let total = order.current_total();
    let items = order.items().to_vec();

    let result = order.add_item("one too many", dec!(9.99), dec!(1));

    assert!(matches!(result, Err(BillingError::CapacityExceeded)));
    assert_eq!(order.items(), items.as_slice());
    assert_eq!(order.current_total(), total);
    assert_eq!(total, dec!(50.00));
}

#[test]
fn customer_is_kept() {
    let order = make_order();
    assert_eq!(
        order.customer(),
        &Customer::new("Ada Lovelace", "ada@example.com")
    );
}

#[test]
fn weighed_goods() {
    let mut order = make_order();
    order.add_item("Bananas", dec!(1.10), dec!(1.5)).unwrap();
    order.add_item("Cheese", dec!(18.00), dec!(0.25)).unwrap();
    assert_eq!(order.current_total(), dec!(6.15));
}
