// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Splitting a secret into `n` shares, `t` of which reconstruct it. Each
//! byte position of the secret is the constant term of its own
//! degree-`(t - 1)` polynomial over GF(256); a share's value at that
//! position is the polynomial evaluated at `x = share index`.

use crate::coefficient;
use crate::config::SharingConfig;
use crate::error::{Error, ErrorKind};
use crate::field::gf256::Gf256;
use crate::field::lagrange::LagrangeBasis;
use crate::field::poly::Poly;
use crate::share::{Share, SharingSession};

use log::{debug, trace};
use rand::{CryptoRng, RngCore};

/// Where a share set's polynomial coefficients come from.
pub enum Mode {
	/// Coefficients are drawn fresh from the supplied RNG; the same
	/// secret shared twice in this mode produces unrelated shares.
	Random,
	/// Coefficients are derived from the secret itself via
	/// [`coefficient::derive_row`], keyed by `session_id`; the same secret,
	/// threshold, and session id always produce the same shares. The
	/// derivation is versioned in name only for now; callers that need
	/// cross-release compatibility should pin the crate version rather
	/// than assume this mode's output is stable forever.
	Deterministic {
		/// Caller-supplied session identifier, mixed into every
		/// derived coefficient.
		session_id: String,
	},
}

/// Splits `secret` into `total_shares` shares, `threshold` of which are
/// required to reconstruct it.
///
/// Validates `threshold <= total_shares <= cfg.max_share_index`,
/// `threshold >= 1`, and that `secret.len()` is one of the allowed
/// sizes, before doing any cryptographic work. After generating shares,
/// reconstructs the secret from the first `threshold` of them as a
/// self-test; an `InternalFailure` here indicates a bug in this crate,
/// never a caller error.
pub fn split<R: RngCore + CryptoRng>(
	cfg: &SharingConfig,
	secret: &[u8],
	threshold: u8,
	total_shares: u8,
	mode: Mode,
	rng: &mut R,
) -> Result<(Vec<Share>, SharingSession), Error> {
	if !crate::config::ALLOWED_BYTE_LENGTHS.contains(&(secret.len() as u8)) {
		return Err(ErrorKind::InvalidSize(format!(
			"{} is not an allowed secret length in bytes",
			secret.len()
		)))?;
	}
	if threshold == 0 {
		return Err(ErrorKind::InvalidSize(
			"threshold must be at least 1".into(),
		))?;
	}
	if total_shares < threshold {
		return Err(ErrorKind::InvalidSize(format!(
			"total shares {} is less than threshold {}",
			total_shares, threshold
		)))?;
	}
	if total_shares == 0 || total_shares > cfg.max_share_index {
		return Err(ErrorKind::InvalidShareIndex(total_shares as u16))?;
	}

	trace!(
		"splitting {}-byte secret into {} shares, threshold {}",
		secret.len(),
		total_shares,
		threshold
	);

	let session_id = match &mode {
		Mode::Random => None,
		Mode::Deterministic { session_id } => Some(session_id.clone()),
	};

	// One coefficient row per polynomial degree 1..threshold, each a
	// full secret.len()-byte sequence; row[k] is the degree-th
	// coefficient for byte position k's polynomial.
	let rows: Vec<Vec<u8>> = match &mode {
		Mode::Random => (1..threshold)
			.map(|_| crate::util::fill_vec_rand(rng, secret.len()))
			.collect(),
		Mode::Deterministic { session_id } => {
			coefficient::derive_all_rows(cfg, secret, threshold, session_id)
		}
	};

	// One polynomial per byte position, built by gathering that
	// position's byte out of every coefficient row.
	let polys: Vec<Poly> = secret
		.iter()
		.enumerate()
		.map(|(k, &byte)| {
			let higher: Vec<u8> = rows.iter().map(|row| row[k]).collect();
			Poly::with_constant_term(byte, &higher)
		})
		.collect();

	let shares: Vec<Share> = (1..=total_shares)
		.map(|index| {
			let x = Gf256::from_byte(index);
			let value: Vec<u8> = polys.iter().map(|p| p.evaluate_at(x).to_byte()).collect();
			Share::new(index, value)
		})
		.collect();

	self_test(threshold, secret, &shares)?;

	debug!("generated {} shares, threshold {}", shares.len(), threshold);

	Ok((
		shares,
		SharingSession {
			threshold,
			total_shares,
			session_id,
		},
	))
}

fn self_test(threshold: u8, secret: &[u8], shares: &[Share]) -> Result<(), Error> {
	let subset = &shares[..threshold as usize];
	let xs: Vec<u8> = subset.iter().map(|s| s.index()).collect();
	let basis = LagrangeBasis::new(&xs)?;

	let reconstructed: Vec<u8> = (0..secret.len())
		.map(|i| {
			let ys: Vec<u8> = subset.iter().map(|s| s.value()[i]).collect();
			basis.reconstruct(&ys)
		})
		.collect();

	if reconstructed != secret {
		return Err(ErrorKind::InternalFailure(
			"generated shares did not reconstruct the original secret".into(),
		))?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::OsRng;

	#[test]
	fn random_mode_produces_reconstructable_shares() {
		let cfg = SharingConfig::default();
		let secret = vec![42u8; 16];
		let mut rng = OsRng;
		let (shares, session) =
			split(&cfg, &secret, 3, 5, Mode::Random, &mut rng).unwrap();
		assert_eq!(shares.len(), 5);
		assert_eq!(session.threshold, 3);
		assert_eq!(session.total_shares, 5);
		assert!(session.session_id.is_none());
	}

	#[test]
	fn deterministic_mode_is_repeatable() {
		let cfg = SharingConfig::default();
		let secret = vec![7u8; 16];
		let mut rng = OsRng;
		let mode_a = || Mode::Deterministic {
			session_id: "session-x".to_string(),
		};
		let (shares_a, _) = split(&cfg, &secret, 2, 3, mode_a(), &mut rng).unwrap();
		let (shares_b, _) = split(&cfg, &secret, 2, 3, mode_a(), &mut rng).unwrap();
		for (a, b) in shares_a.iter().zip(shares_b.iter()) {
			assert_eq!(a.value(), b.value());
		}
	}

	#[test]
	fn deterministic_mode_differs_by_session_id() {
		let cfg = SharingConfig::default();
		let secret = vec![7u8; 16];
		let mut rng = OsRng;
		let (shares_a, _) = split(
			&cfg,
			&secret,
			2,
			3,
			Mode::Deterministic {
				session_id: "session-a".to_string(),
			},
			&mut rng,
		)
		.unwrap();
		let (shares_b, _) = split(
			&cfg,
			&secret,
			2,
			3,
			Mode::Deterministic {
				session_id: "session-b".to_string(),
			},
			&mut rng,
		)
		.unwrap();
		assert_ne!(shares_a[0].value(), shares_b[0].value());
	}

	#[test]
	fn rejects_threshold_above_total() {
		let cfg = SharingConfig::default();
		let secret = vec![1u8; 16];
		let mut rng = OsRng;
		assert!(split(&cfg, &secret, 5, 3, Mode::Random, &mut rng).is_err());
	}

	#[test]
	fn rejects_disallowed_secret_length() {
		let cfg = SharingConfig::default();
		let secret = vec![1u8; 17];
		let mut rng = OsRng;
		assert!(split(&cfg, &secret, 2, 3, Mode::Random, &mut rng).is_err());
	}

	#[test]
	fn degenerate_threshold_one_every_share_reconstructs_alone() {
		let cfg = SharingConfig::default();
		let secret = vec![9u8; 16];
		let mut rng = OsRng;
		let (shares, _) = split(&cfg, &secret, 1, 4, Mode::Random, &mut rng).unwrap();
		for share in &shares {
			assert_eq!(share.value(), secret.as_slice());
		}
	}
}
