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

//! Sign-up and login gate.
//!
//! One authentication attempt per run:
//!
//! ```text
//!  "have an account?" ──n──► sign up ──ok──► log in ──match──► Authenticated
//!          │                    │               ▲  │
//!          └────────y───────────┼───────────────┘  └──no match──► Unauthenticated
//!                               └──mismatch / store error──────► Unauthenticated
//! ```
//!
//! A successful sign-up does not log the user in; credentials are asked for
//! again at the login prompt.

use crate::console::Console;
use crate::credentials::CredentialStore;
use crate::BillingError;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Outcome of the authentication gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Runs sign-up and login against a [`CredentialStore`].
#[derive(Debug, Clone)]
pub struct AuthGate {
    store: CredentialStore,
}

impl AuthGate {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Asks whether the user has an account, signs them up if not, then logs in.
    ///
    /// Recoverable failures are printed and yield [`AuthState::Unauthenticated`].
    ///
    /// # Errors
    ///
    /// Only console failures ([`BillingError::Io`]) are returned.
    pub fn authenticate<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<AuthState, BillingError> {
        let has_account = console.ask_yes_no("Do you have an account? (y/n): ")?;

        if !has_account {
            match self.sign_up(console) {
                Ok(()) => {}
                Err(BillingError::Io(e)) => return Err(e.into()),
                Err(_) => return Ok(AuthState::Unauthenticated),
            }
        }

        match self.login(console) {
            Ok(()) => Ok(AuthState::Authenticated),
            Err(BillingError::Io(e)) => Err(e.into()),
            Err(_) => Ok(AuthState::Unauthenticated),
        }
    }

    /// Collects a username, password and confirmation and appends them to the store.
    ///
    /// # Errors
    ///
    /// - [`BillingError::AuthenticationFailed`] - confirmation differs; nothing is stored.
    /// - [`BillingError::StoreUnavailable`] - the store cannot be opened or written.
    pub fn sign_up<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(), BillingError> {
        console.say("Sign Up")?;
        let username = console.ask_token("Enter username: ")?;
        let password = console.ask_token("Enter password: ")?;
        let confirmation = console.ask_token("Confirm password: ")?;

        if password != confirmation {
            console.say("Passwords do not match. Try again.")?;
            warn!(%username, "sign-up rejected, password confirmation mismatch");
            return Err(BillingError::AuthenticationFailed);
        }

        if let Err(e) = self.store.add(&username, &password) {
            if matches!(e, BillingError::StoreUnavailable { .. }) {
                console.say("Error: Could not open file to save user data.")?;
            }
            return Err(e);
        }

        console.say("Sign up successful. You can now log in.")?;
        Ok(())
    }

    /// Collects a username and password and checks them against the store.
    ///
    /// # Errors
    ///
    /// - [`BillingError::AuthenticationFailed`] - no record matches.
    pub fn login<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(), BillingError> {
        console.say("Log In")?;
        let username = console.ask_token("Enter username: ")?;
        let password = console.ask_token("Enter password: ")?;

        if self.store.find_match(&username, &password) {
            console.say("Login successful.")?;
            info!(%username, "login succeeded");
            Ok(())
        } else {
            console.say("Invalid username or password.")?;
            warn!(%username, "login failed");
            Err(BillingError::AuthenticationFailed)
        }
    }
}
