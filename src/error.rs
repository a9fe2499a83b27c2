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

//! Error types for billing, authentication and export.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Billing utility errors.
///
/// Every variant except [`BillingError::Io`] is recovered by the session and
/// shown to the user as a message. `Io` covers the console itself going away.
#[derive(Error, Debug)]
pub enum BillingError {
    /// Credential store could not be opened
    #[error("could not open credential store {}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Order already holds the maximum number of line items
    #[error("maximum items reached")]
    CapacityExceeded,

    /// Password confirmation mismatch or no matching credential
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Bill destination could not be opened for writing
    #[error("could not open file {}", path.display())]
    ExportUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line total or grand total exceeds the decimal range
    #[error("total exceeds the supported amount range")]
    TotalOverflow,

    /// Console read or write failure
    #[error(transparent)]
    Io(#[from] io::Error),
}
