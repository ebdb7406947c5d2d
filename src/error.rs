// Copyright 2019 The Grin Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the threshold-mnemonic crate

use failure::{Backtrace, Context, Fail};
use std::env;
use std::fmt::{self, Display};

/// Error definition
#[derive(Debug, Fail)]
pub struct Error {
	inner: Context<ErrorKind>,
}

/// The kinds of error this crate can produce. Every variant corresponds to
/// one of the checks described by the specification; callers are expected
/// to match on `kind()` rather than parse the display string.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	/// A word in a submitted mnemonic is not present in the wordlist
	#[fail(display = "word not in wordlist: {}", _0)]
	InvalidWordlist(String),

	/// A mnemonic decoded but its embedded checksum bits disagree with the
	/// recomputed SHA-256 checksum
	#[fail(display = "mnemonic checksum does not match")]
	ChecksumMismatch,

	/// A byte count, word count, or entropy bit count isn't one of the
	/// allowed values
	#[fail(display = "invalid size: {}", _0)]
	InvalidSize(String),

	/// A share index isn't in 1..=255
	#[fail(display = "invalid share index: {}", _0)]
	InvalidShareIndex(u16),

	/// Two shares in the same set carry the same index
	#[fail(display = "duplicate share index: {}", _0)]
	DuplicateShareIndex(u8),

	/// Share values supplied to recovery don't all have the same length
	#[fail(display = "shares have inconsistent value lengths")]
	InconsistentShareLengths,

	/// Fewer than `t` shares were supplied to recovery
	#[fail(display = "insufficient shares: need {}, have {}", needed, have)]
	InsufficientShares {
		/// shares required
		needed: u8,
		/// shares supplied
		have: usize,
	},

	/// A supplied commitment didn't match the one recomputed from the share
	#[fail(display = "commitment does not match recomputed value")]
	CommitmentMismatch,

	/// An entropy encoder produced fewer than 128 bits
	#[fail(display = "insufficient entropy: {} bits, need at least 128", _0)]
	InsufficientEntropy(usize),

	/// A hex/dice/cards/indices token was malformed
	#[fail(display = "invalid entropy input: {}", _0)]
	InvalidEntropyInput(String),

	/// The sharing engine's post-generation self-test reconstruction
	/// failed. This should be unreachable; if it triggers, it indicates a
	/// bug in this crate rather than a caller error.
	#[fail(display = "internal failure: {}", _0)]
	InternalFailure(String),
}

impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let show_bt = match env::var("RUST_BACKTRACE") {
			Ok(r) => r == "1",
			Err(_) => false,
		};
		let backtrace = match self.backtrace() {
			Some(b) => format!("{}", b),
			None => String::from("Unknown"),
		};
		let inner_output = format!("{}", self.inner);
		let backtrace_output = format!("\n Backtrace: {}", backtrace);
		let mut output = inner_output;
		if show_bt {
			output.push_str(&backtrace_output);
		}
		Display::fmt(&output, f)
	}
}

impl Error {
	/// get kind
	pub fn kind(&self) -> ErrorKind {
		self.inner.get_context().clone()
	}
	/// get cause string
	pub fn cause_string(&self) -> String {
		match self.cause() {
			Some(k) => format!("{}", k),
			None => "Unknown".to_string(),
		}
	}
	/// get cause
	pub fn cause(&self) -> Option<&dyn Fail> {
		self.inner.cause()
	}
	/// get backtrace
	pub fn backtrace(&self) -> Option<&Backtrace> {
		self.inner.backtrace()
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Error {
		Error {
			inner: Context::new(kind),
		}
	}
}

impl From<Context<ErrorKind>> for Error {
	fn from(inner: Context<ErrorKind>) -> Error {
		Error { inner }
	}
}
