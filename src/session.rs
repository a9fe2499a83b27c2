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

//! Interactive billing session.
//!
//! A [`Session`] owns the single [`Order`] of a run and dispatches the
//! four menu actions against it until the user exits.

use crate::bill::{self, BANNER};
use crate::console::Console;
use crate::order::{Customer, Order};
use crate::BillingError;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    DisplayBill,
    WriteBill,
    Exit,
}

impl MenuChoice {
    /// Parses a menu selection. Only `1` to `4` are valid.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddItem),
            "2" => Some(Self::DisplayBill),
            "3" => Some(Self::WriteBill),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Prompts for the customer's name and email.
pub fn collect_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Customer, BillingError> {
    console.say("Enter customer details:")?;
    let name = console.ask_line("Customer name: ")?;
    let email = console.ask_line("Customer email: ")?;
    Ok(Customer::new(name, email))
}

/// One order plus the destination its bill is exported to.
pub struct Session {
    order: Order,
    bill_path: PathBuf,
}

impl Session {
    pub fn new(customer: Customer, bill_path: impl Into<PathBuf>) -> Self {
        Self {
            order: Order::new(customer),
            bill_path: bill_path.into(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn bill_path(&self) -> &Path {
        &self.bill_path
    }

    /// Runs the menu loop until the user chooses to exit.
    ///
    /// # Errors
    ///
    /// Only console failures ([`BillingError::Io`]) end the loop early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), BillingError> {
        loop {
            display_menu(console)?;
            let input = console.ask_token("Enter your choice: ")?;

            let Some(choice) = MenuChoice::parse(&input) else {
                console.say("Invalid choice. Please enter a number between 1 and 4.")?;
                continue;
            };
            debug!(?choice, "menu selection");

            match choice {
                MenuChoice::AddItem => self.add_item(console)?,
                MenuChoice::DisplayBill => bill::write_bill(&self.order, console.output())?,
                MenuChoice::WriteBill => self.write_bill(console)?,
                MenuChoice::Exit => {
                    console.say("Exiting program.")?;
                    return Ok(());
                }
            }
        }
    }

    fn add_item<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), BillingError> {
        if self.order.is_full() {
            console.say("Maximum items reached!")?;
            return Ok(());
        }

        console.say("")?;
        console.say(&format!("Enter details for item {}:", self.order.len() + 1))?;
        let name = console.ask_line("Product name: ")?;
        let price = console.ask_amount("Price: ")?;
        let quantity = console.ask_amount("Quantity: ")?;

        match self.order.add_item(name, price, quantity) {
            Ok(()) => Ok(()),
            Err(BillingError::CapacityExceeded) => {
                console.say("Maximum items reached!")?;
                Ok(())
            }
            Err(BillingError::TotalOverflow) => {
                console.say("Item total is too large. Item not added.")?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn write_bill<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(), BillingError> {
        let path = self.bill_path.display().to_string();
        match bill::export_bill(&self.order, &self.bill_path) {
            Ok(()) => console.say(&format!("Bill successfully written to {path}"))?,
            Err(BillingError::ExportUnavailable { source, .. }) => {
                warn!(%path, error = %source, "bill export failed");
                console.say(&format!("Error: Could not open file {path}"))?;
            }
            Err(e) => {
                warn!(%path, error = %e, "bill export failed");
                console.say(&format!("Error: Could not write file {path}"))?;
            }
        }
        Ok(())
    }
}

fn display_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), BillingError> {
    console.say("")?;
    console.say(BANNER)?;
    console.say("")?;
    console.say("1. Add Item")?;
    console.say("2. Display Bill")?;
    console.say("3. Write Bill to File")?;
    console.say("4. Exit")?;
    Ok(())
}
