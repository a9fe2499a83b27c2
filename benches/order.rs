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

//! Benchmarks for order accumulation and bill rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use market_billing_rs::{Customer, MAX_ITEMS, Order, render};
use rust_decimal::Decimal;

fn make_full_order() -> Order {
    let mut order = Order::new(Customer::new("Ada Lovelace", "ada@example.com"));
    for i in 0..MAX_ITEMS {
        order
            .add_item(format!("item-{i}"), Decimal::new(199 + i as i64, 2), Decimal::new(1500, 3))
            .unwrap();
    }
    order
}

fn bench_fill_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_order");
    group.throughput(Throughput::Elements(MAX_ITEMS as u64));
    group.bench_function("add_item_to_capacity", |b| {
        b.iter(|| black_box(make_full_order()))
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let order = make_full_order();
    c.bench_function("render_full_order", |b| b.iter(|| render(black_box(&order))));
}

criterion_group!(benches, bench_fill_order, bench_render);
criterion_main!(benches);
