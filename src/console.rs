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

//! Line-based prompt and read layer.
//!
//! Two kinds of reads are supported:
//! - a *token*: the first whitespace-delimited word of the next non-blank
//!   line, with the rest of that line discarded;
//! - a *line*: the next line, trimmed.
//!
//! End of input is reported as [`io::ErrorKind::UnexpectedEof`].

use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prompt/read pair over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the console prints to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a message followed by a newline.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prints a prompt without a newline and flushes it.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    pub fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }

    pub fn read_token(&mut self) -> io::Result<String> {
        loop {
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }

    /// Prompts and reads a whole line.
    pub fn ask_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        self.read_line()
    }

    /// Prompts and reads a single token.
    pub fn ask_token(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        self.read_token()
    }

    /// Prompts for a decimal amount. Anything unparsable reads as zero.
    pub fn ask_amount(&mut self, prompt: &str) -> io::Result<Decimal> {
        let token = self.ask_token(prompt)?;
        Ok(parse_amount(&token))
    }

    /// Prompts for a yes/no answer. Only `n`/`N` (or a word starting with it)
    /// counts as no.
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let token = self.ask_token(prompt)?;
        Ok(!token.starts_with(['n', 'N']))
    }
}

/// Parses a decimal amount, falling back to zero.
///
/// Plain (`2.50`) and scientific (`1e3`) notation are accepted.
pub fn parse_amount(token: &str) -> Decimal {
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .unwrap_or(Decimal::ZERO)
}
