// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Per-share commitments: a SHA-256 digest over the canonical string
//! `"{index}: {phrase}"`, letting a recovery engine detect a share
//! that's been tampered with or substituted without access to any other
//! share.

use crate::config::SharingConfig;
use crate::mnemonic::Mnemonic;

use sha2::{Digest, Sha256};

/// A 32-byte commitment digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment([u8; 32]);

impl Commitment {
	/// Computes the commitment for a share index and its mnemonic
	/// phrase, using `cfg.commitment_separator` between the two.
	pub fn compute(cfg: &SharingConfig, index: u8, mnemonic: &Mnemonic) -> Commitment {
		let canonical = format!(
			"{}{}{}",
			index,
			cfg.commitment_separator,
			mnemonic.phrase()
		);
		let digest = Sha256::digest(canonical.as_bytes());
		let mut out = [0u8; 32];
		out.copy_from_slice(&digest);
		Commitment(out)
	}

	/// The raw digest bytes.
	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl std::fmt::Display for Commitment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for byte in &self.0 {
			write!(f, "{:02x}", byte)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn commitment_depends_on_index_and_phrase() {
		let cfg = SharingConfig::default();
		let raw = vec![0u8; 16];
		let mn = Mnemonic::encode(&raw).unwrap();

		let c1 = Commitment::compute(&cfg, 1, &mn);
		let c2 = Commitment::compute(&cfg, 2, &mn);
		assert_ne!(c1, c2);
	}

	#[test]
	fn commitment_is_deterministic() {
		let cfg = SharingConfig::default();
		let raw = vec![7u8; 16];
		let mn = Mnemonic::encode(&raw).unwrap();

		let c1 = Commitment::compute(&cfg, 3, &mn);
		let c2 = Commitment::compute(&cfg, 3, &mn);
		assert_eq!(c1, c2);
	}

	#[test]
	fn matches_manual_canonical_string() {
		let cfg = SharingConfig::default();
		let raw = vec![9u8; 16];
		let mn = Mnemonic::encode(&raw).unwrap();

		let canonical = format!("5: {}", mn.phrase());
		let expect = Sha256::digest(canonical.as_bytes());

		let c = Commitment::compute(&cfg, 5, &mn);
		assert_eq!(&c.0[..], &expect[..]);
	}
}
