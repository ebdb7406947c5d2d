// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Threshold secret sharing for BIP-39-style mnemonic phrases.
//!
//! A secret is split into `n` share mnemonics, `t` of which are
//! required to recover it, via Shamir's scheme over GF(256). Each share
//! is itself encoded the same way a regular BIP-39 mnemonic is: 11-bit
//! word groups plus a SHA-256 checksum, so a share can be written down,
//! checked, and typed back in with the same tooling as any other
//! mnemonic.
//!
//! ```
//! use threshold_mnemonic::{sharing, recovery, config::SharingConfig};
//! use threshold_mnemonic::sharing::Mode;
//! use rand::rngs::OsRng;
//!
//! let cfg = SharingConfig::default();
//! let secret = vec![0u8; 16];
//! let mut rng = OsRng;
//! let (shares, session) = sharing::split(&cfg, &secret, 3, 5, Mode::Random, &mut rng).unwrap();
//! let recovered = recovery::recover(&cfg, session.threshold, &shares[0..3], None).unwrap();
//! assert_eq!(recovered, secret);
//! ```

#[macro_use]
extern crate lazy_static;

pub mod coefficient;
pub mod commitment;
pub mod config;
pub mod entropy;
pub mod error;
pub mod field;
pub mod mnemonic;
pub mod recovery;
pub mod share;
pub mod sharing;
mod util;
pub mod wordlist;

pub use crate::commitment::Commitment;
pub use crate::config::SharingConfig;
pub use crate::error::{Error, ErrorKind};
pub use crate::mnemonic::Mnemonic;
pub use crate::share::{Share, SharingSession};
