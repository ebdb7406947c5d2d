// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Reconstructing a secret from a set of shares.
//!
//! Five preconditions are checked, in order, before any interpolation is
//! attempted, so a caller handed a bad share set gets a precise reason
//! rather than a byte mismatch or a panic:
//!
//! 1. every share index is in `1..=max_share_index`
//! 2. no two shares carry the same index
//! 3. every share's value is the same length, and that length is one of
//!    the allowed secret sizes
//! 4. at least `threshold` shares were supplied
//! 5. if commitments were supplied, each share's recomputed commitment
//!    matches

use crate::commitment::Commitment;
use crate::config::SharingConfig;
use crate::error::{Error, ErrorKind};
use crate::field::lagrange::LagrangeBasis;
use crate::mnemonic::Mnemonic;
use crate::share::Share;

use log::trace;
use std::collections::HashSet;

/// Reconstructs the secret from `shares`, requiring at least `threshold`
/// of them. If `commitments` is `Some`, each of its entries is checked
/// against the share with the matching index before reconstruction; a
/// commitment for an index not present among `shares` is ignored.
pub fn recover(
	cfg: &SharingConfig,
	threshold: u8,
	shares: &[Share],
	commitments: Option<&[(u8, Commitment)]>,
) -> Result<Vec<u8>, Error> {
	for share in shares {
		if share.index() == 0 || share.index() > cfg.max_share_index {
			return Err(ErrorKind::InvalidShareIndex(share.index() as u16))?;
		}
	}

	let mut seen = HashSet::new();
	for share in shares {
		if !seen.insert(share.index()) {
			return Err(ErrorKind::DuplicateShareIndex(share.index()))?;
		}
	}

	let value_len = match shares.first() {
		Some(s) => s.value().len(),
		None => 0,
	};
	if shares.iter().any(|s| s.value().len() != value_len) {
		return Err(ErrorKind::InconsistentShareLengths)?;
	}
	if !shares.is_empty() && !crate::config::ALLOWED_BYTE_LENGTHS.contains(&(value_len as u8)) {
		return Err(ErrorKind::InvalidSize(format!(
			"{} is not an allowed secret length in bytes",
			value_len
		)))?;
	}

	if shares.len() < threshold as usize {
		return Err(ErrorKind::InsufficientShares {
			needed: threshold,
			have: shares.len(),
		})?;
	}

	if let Some(commitments) = commitments {
		for share in shares {
			let expected = commitments
				.iter()
				.find(|(idx, _)| *idx == share.index())
				.map(|(_, c)| c);
			if let Some(expected) = expected {
				let mnemonic = Mnemonic::encode(share.value())?;
				let actual = Commitment::compute(cfg, share.index(), &mnemonic);
				if actual != *expected {
					return Err(ErrorKind::CommitmentMismatch)?;
				}
			}
		}
	}

	trace!(
		"reconstructing from {} shares, threshold {}",
		shares.len(),
		threshold
	);

	let subset = &shares[..threshold as usize];
	let xs: Vec<u8> = subset.iter().map(|s| s.index()).collect();
	let basis = LagrangeBasis::new(&xs)?;

	let secret: Vec<u8> = (0..value_len)
		.map(|i| {
			let ys: Vec<u8> = subset.iter().map(|s| s.value()[i]).collect();
			basis.reconstruct(&ys)
		})
		.collect();

	Ok(secret)
}
