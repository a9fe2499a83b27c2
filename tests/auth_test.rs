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

//! Authentication gate integration tests.

use market_billing_rs::{AuthGate, AuthState, BillingError, Console, CredentialStore};
use std::io::Cursor;
use tempfile::TempDir;

fn make_gate() -> (TempDir, AuthGate) {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join("users.txt"));
    (dir, AuthGate::new(store))
}

fn authenticate(gate: &AuthGate, input: &str) -> (AuthState, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let state = gate.authenticate(&mut console).unwrap();
    (state, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn existing_account_logs_in() {
    let (_dir, gate) = make_gate();
    gate.store().add("alice", "pw1").unwrap();

    let (state, output) = authenticate(&gate, "y\nalice\npw1\n");

    assert_eq!(state, AuthState::Authenticated);
    assert!(output.contains("Login successful."));
}

#[test]
fn wrong_password_is_rejected() {
    let (_dir, gate) = make_gate();
    gate.store().add("alice", "pw1").unwrap();

    let (state, output) = authenticate(&gate, "y\nalice\nwrong\n");

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(output.contains("Invalid username or password."));
}

#[test]
fn empty_store_rejects_everyone() {
    let (_dir, gate) = make_gate();
    let (state, _) = authenticate(&gate, "y\nalice\npw1\n");
    assert_eq!(state, AuthState::Unauthenticated);
}

#[test]
fn sign_up_then_login_again() {
    let (_dir, gate) = make_gate();

    let (state, output) = authenticate(&gate, "n\nbob\nsecret\nsecret\nbob\nsecret\n");

    assert_eq!(state, AuthState::Authenticated);
    let signed_up = output.find("Sign up successful.").unwrap();
    let logged_in = output.find("Log In").unwrap();
    assert!(signed_up < logged_in);
    assert!(gate.store().find_match("bob", "secret"));
}

#[test]
fn sign_up_does_not_log_in_by_itself() {
    let (_dir, gate) = make_gate();

    let (state, _) = authenticate(&gate, "N\nbob\nsecret\nsecret\nbob\nnot-secret\n");

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(gate.store().find_match("bob", "secret"));
}

#[test]
fn mismatched_confirmation_aborts() {
    let (_dir, gate) = make_gate();

    let (state, output) = authenticate(&gate, "n\nbob\nsecret\nsecrte\n");

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(output.contains("Passwords do not match. Try again."));
    assert!(!output.contains("Log In"));
    assert!(!gate.store().path().exists());
}

#[test]
fn unavailable_store_aborts_sign_up() {
    let dir = tempfile::tempdir().unwrap();
    let gate = AuthGate::new(CredentialStore::new(dir.path().join("no-such-dir").join("users.txt")));

    let (state, output) = authenticate(&gate, "n\nbob\nsecret\nsecret\n");

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(output.contains("Error: Could not open file to save user data."));
    assert!(!output.contains("Log In"));
}

#[test]
fn earliest_duplicate_still_matches() {
    let (_dir, gate) = make_gate();
    gate.store().add("alice", "first").unwrap();
    gate.store().add("alice", "second").unwrap();

    let (state, _) = authenticate(&gate, "y\nalice\nfirst\n");
    assert_eq!(state, AuthState::Authenticated);
}

#[test]
fn sign_up_errors_are_typed() {
    let (_dir, gate) = make_gate();
    let mut console = Console::new(Cursor::new(b"bob\na\nb\n".to_vec()), Vec::new());

    let result = gate.sign_up(&mut console);
    assert!(matches!(result, Err(BillingError::AuthenticationFailed)));
}

#[cfg(target_os = "linux")]
#[test]
fn failed_store_write_fails_authentication() {
    let gate = AuthGate::new(CredentialStore::new("/dev/full"));

    let (state, output) = authenticate(&gate, "n\nbob\nsecret\nsecret\nbob\nsecret\n");

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(output.contains("Error: Could not open file to save user data."));
    assert!(!output.contains("Log In"));
}
