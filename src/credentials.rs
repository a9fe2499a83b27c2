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

//! Flat-file credential store.
//!
//! One record per line, `username password`, appended on sign-up with a
//! single space between the fields and no quoting or escaping. Records are
//! read back split on any run of whitespace, so hand-edited lines using tabs
//! or extra spaces still match. Nothing is cached: every lookup scans the
//! file from the start, so the earliest matching record wins.
//!
//! Passwords are stored in clear text. This reproduces the record format
//! the utility has always used and is not a secure design; anything beyond
//! a single trusted terminal would need hashed passwords.

use crate::BillingError;
use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A username and password pair. Neither may contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Append-only username/password store backed by a text file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a credential record. Duplicate usernames are not checked.
    ///
    /// # Errors
    ///
    /// - [`BillingError::StoreUnavailable`] - the file cannot be opened for
    ///   appending, or the record could not be written to it.
    pub fn add(&self, username: &str, password: &str) -> Result<(), BillingError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.unavailable(source))?;

        let mut wtr = WriterBuilder::new()
            .delimiter(b' ')
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .from_writer(file);

        wtr.serialize(Credential::new(username, password))
            .map_err(|e| self.unavailable(csv_to_io(e)))?;
        wtr.flush().map_err(|source| self.unavailable(source))?;

        info!(username, store = %self.path.display(), "credential appended");
        Ok(())
    }

    /// Returns `true` if any record matches both fields exactly.
    ///
    /// An unreadable or missing store is reported as no match. Lines with
    /// fewer than two fields are skipped; fields past the second are ignored.
    pub fn find_match(&self, username: &str, password: &str) -> bool {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                warn!(store = %self.path.display(), error = %e, "credential store unreadable");
                return false;
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(store = %self.path.display(), error = %e, "credential store read failed");
                    return false;
                }
            };

            let Some(record) = parse_record(&line) else {
                debug!("skipping malformed credential record");
                continue;
            };

            if record.username == username && record.password == password {
                debug!(username, "credential matched");
                return true;
            }
        }

        debug!(username, "no matching credential");
        false
    }

    fn unavailable(&self, source: io::Error) -> BillingError {
        BillingError::StoreUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

/// Splits a store line into a credential on any whitespace.
fn parse_record(line: &str) -> Option<Credential> {
    let mut fields = line.split_whitespace();
    let username = fields.next()?;
    let password = fields.next()?;
    Some(Credential::new(username, password))
}

fn csv_to_io(error: csv::Error) -> io::Error {
    match error.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::other(format!("{other:?}")),
    }
}
