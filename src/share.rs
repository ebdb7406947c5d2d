// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! The unit the sharing engine produces and the recovery engine
//! consumes: a share index paired with a secret-sized byte value, plus
//! the session metadata (threshold and session id) needed to recombine
//! it with its siblings.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// One share of a split secret. `value` is zeroized on drop; it carries
/// the same sensitivity as the secret it was split from.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Share {
	#[zeroize(skip)]
	index: u8,
	value: Vec<u8>,
}

impl Share {
	/// Builds a share from its index (1..=max_share_index, never 0) and
	/// value bytes.
	pub fn new(index: u8, value: Vec<u8>) -> Share {
		Share { index, value }
	}

	/// The share's index, 1..=max_share_index.
	pub fn index(&self) -> u8 {
		self.index
	}

	/// The share's payload bytes, the same length as the original
	/// secret.
	pub fn value(&self) -> &[u8] {
		&self.value
	}
}

impl std::fmt::Debug for Share {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Share")
			.field("index", &self.index)
			.field("value", &"<redacted>")
			.finish()
	}
}

/// Metadata describing the session a set of shares belongs to: how many
/// of them are required to reconstruct the secret, and (for
/// deterministic generation) the session id the coefficients were
/// derived under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingSession {
	/// Shares required to reconstruct the secret.
	pub threshold: u8,
	/// Total shares produced.
	pub total_shares: u8,
	/// Session id used for deterministic coefficient derivation, if any.
	pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors_round_trip() {
		let s = Share::new(3, vec![1, 2, 3]);
		assert_eq!(s.index(), 3);
		assert_eq!(s.value(), &[1, 2, 3]);
	}

	#[test]
	fn debug_does_not_print_value() {
		let s = Share::new(1, vec![0xAA; 16]);
		let out = format!("{:?}", s);
		assert!(!out.contains("170"));
		assert!(out.contains("redacted"));
	}
}
