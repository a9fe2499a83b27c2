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

//! Bill rendering.
//!
//! [`render`] is the single source of the bill layout; the screen and the
//! exported file receive the same text.
//!
//! # Format
//!
//! ```text
//!
//! *** SUPERMARKET BILLING SYSTEM ***
//!
//! Customer Name: Ada
//! Customer Email: ada@example.com
//! ----------------------------------------------
//!   Product Name  | Price  | Quantity | Total
//! ----------------------------------------------
//!   Milk          | 2.50   | 2        | 5.00
//!   Bread         | 1.00   | 3        | 3.00
//!
//! Grand Total: $8.00
//! ```
//!
//! Totals are rounded half away from zero to [`MONEY_PRECISION`] decimal
//! places. Unit prices are shown as entered, padded to at least that many
//! places, so `0.125` stays `0.125`. Row totals are computed per row; the
//! grand total line shows the order's stored total.

use crate::order::{LineItem, Order};
use crate::BillingError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub const BANNER: &str = "*** SUPERMARKET BILLING SYSTEM ***";

/// Decimal places used when rendering money.
pub const MONEY_PRECISION: u32 = 2;

const RULE: &str = "----------------------------------------------";

/// Renders the bill for an order.
pub fn render(order: &Order) -> String {
    let customer = order.customer();

    let mut lines = vec![
        String::new(),
        BANNER.to_string(),
        String::new(),
        format!("Customer Name: {}", customer.name),
        format!("Customer Email: {}", customer.email),
        RULE.to_string(),
        row("Product Name", "Price", "Quantity", "Total"),
        RULE.to_string(),
    ];
    lines.extend(order.items().iter().map(item_row));
    lines.push(String::new());
    lines.push(format!("Grand Total: ${}", money(order.current_total())));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes the rendered bill to any writer.
pub fn write_bill<W: Write>(order: &Order, mut writer: W) -> io::Result<()> {
    writer.write_all(render(order).as_bytes())?;
    writer.flush()
}

/// Renders the bill and overwrites `path` with it.
///
/// The bill is rendered before the file is opened, so a failed open leaves
/// nothing behind.
///
/// # Errors
///
/// - [`BillingError::ExportUnavailable`] - `path` cannot be opened for writing.
/// - [`BillingError::Io`] - writing to the opened file failed.
pub fn export_bill(order: &Order, path: &Path) -> Result<(), BillingError> {
    let bill = render(order);

    let mut file = File::create(path).map_err(|source| BillingError::ExportUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(bill.as_bytes())?;
    file.flush()?;

    info!(path = %path.display(), items = order.len(), "bill exported");
    Ok(())
}

fn item_row(item: &LineItem) -> String {
    row(
        &item.name,
        &unit_price(item.unit_price),
        &item.quantity.normalize().to_string(),
        &money(item.total()),
    )
}

fn row(name: &str, price: &str, quantity: &str, total: &str) -> String {
    format!("  {name:<14}| {price:<7}| {quantity:<9}| {total}")
}

fn money(amount: Decimal) -> String {
    let precision = MONEY_PRECISION as usize;
    let rounded =
        amount.round_dp_with_strategy(MONEY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.precision$}")
}

fn unit_price(amount: Decimal) -> String {
    let exact = amount.normalize();
    if exact.scale() > MONEY_PRECISION {
        exact.to_string()
    } else {
        money(exact)
    }
}
