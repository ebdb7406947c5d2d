// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Deterministic polynomial coefficient derivation: an HMAC-SHA256 keyed
//! by the secret itself, so that "deterministic mode" sharing can
//! regenerate the exact same shares for the same secret, threshold,
//! share index and session id without storing the coefficients
//! anywhere.
//!
//! A coefficient row c_j is a full secret-length byte sequence, one
//! byte per polynomial (i.e. per secret byte position), not a single
//! byte reused everywhere. One HMAC call produces the whole row: its
//! first `secret.len()` output bytes are c_j directly. The label,
//! threshold byte, share-index byte and session id are fed into the MAC
//! in that order, each as its own `update` call, so the byte boundaries
//! between them can never be ambiguous regardless of their lengths.

use crate::config::SharingConfig;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Derives the full coefficient row c_j (one byte per secret byte
/// position) for polynomial degree index `j` (j >= 1; j == 0 is the
/// secret itself and is never derived here) of the threshold-`t`
/// sharing of `secret`, under `session_id`.
///
/// Returns the first `secret.len()` bytes of HMAC-SHA256(secret, label
/// || t || j || session_id).
pub fn derive_row(cfg: &SharingConfig, secret: &[u8], t: u8, j: u8, session_id: &str) -> Vec<u8> {
	let mut mac =
		HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
	mac.update(cfg.coefficient_label);
	mac.update(&[t]);
	mac.update(&[j]);
	mac.update(session_id.as_bytes());
	let result = mac.finalize().into_bytes();
	result[..secret.len()].to_vec()
}

/// Derives all `t - 1` non-constant coefficient rows for a degree-`(t -
/// 1)` polynomial set over `secret`, in order of ascending degree
/// (index 1..t). `rows[i][k]` is the degree-`(i + 1)` coefficient of
/// the polynomial for secret byte position `k`.
pub fn derive_all_rows(cfg: &SharingConfig, secret: &[u8], t: u8, session_id: &str) -> Vec<Vec<u8>> {
	(1..t)
		.map(|j| derive_row(cfg, secret, t, j, session_id))
		.collect()
}
