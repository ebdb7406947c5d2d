// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Bidirectional conversion between byte sequences and mnemonic phrases:
//! 11 bits per word, a trailing SHA-256-derived checksum, and the fixed
//! 2048-word English list.

use crate::config::{self, ALLOWED_BYTE_LENGTHS};
use crate::error::{Error, ErrorKind};
use crate::util::bits::{self, BitString};
use crate::wordlist::{WORDLIST, WORD_INDEX};

use sha2::{Digest, Sha256};

/// A decoded mnemonic: its word indices (each 0..2047) in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
	indices: Vec<u16>,
}

impl Mnemonic {
	/// Number of words.
	pub fn word_count(&self) -> usize {
		self.indices.len()
	}

	/// The word indices, in order.
	pub fn indices(&self) -> &[u16] {
		&self.indices
	}

	/// Renders the mnemonic as lowercase words separated by single
	/// spaces.
	pub fn phrase(&self) -> String {
		self.indices
			.iter()
			.map(|&i| WORDLIST[i as usize])
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Builds a `Mnemonic` from word indices without validating a
	/// checksum; used by the entropy encoders, which produce bits to be
	/// checksummed by `encode`, and by tests. `indices.len()` must be one
	/// of the five allowed word counts and every index must be < 2048.
	pub fn from_indices(indices: Vec<u16>) -> Result<Mnemonic, Error> {
		if config::byte_length_for_word_count(indices.len()).is_none() {
			return Err(ErrorKind::InvalidSize(format!(
				"{} is not an allowed mnemonic word count",
				indices.len()
			)))?;
		}
		for &i in &indices {
			if i as usize >= WORDLIST.len() {
				return Err(ErrorKind::InvalidWordlist(format!(
					"word index {} out of range",
					i
				)))?;
			}
		}
		Ok(Mnemonic { indices })
	}

	/// Parses a phrase into word indices, accepting any run of Unicode
	/// whitespace between words and trimming surrounding whitespace.
	/// Non-ASCII or unrecognized words are rejected.
	pub fn parse(phrase: &str) -> Result<Mnemonic, Error> {
		let words: Vec<&str> = phrase.split_whitespace().collect();
		if config::byte_length_for_word_count(words.len()).is_none() {
			return Err(ErrorKind::InvalidSize(format!(
				"{} is not an allowed mnemonic word count",
				words.len()
			)))?;
		}
		let mut indices = Vec::with_capacity(words.len());
		for word in words {
			if !word.is_ascii() {
				return Err(ErrorKind::InvalidWordlist(word.to_string()))?;
			}
			let lower = word.to_ascii_lowercase();
			match WORD_INDEX.get(lower.as_str()) {
				Some(&i) => indices.push(i),
				None => return Err(ErrorKind::InvalidWordlist(word.to_string()))?,
			}
		}
		Ok(Mnemonic { indices })
	}

	/// Encodes a raw byte sequence into a mnemonic: appends the leading
	/// checksum bits of SHA-256(bytes) and splits the result into 11-bit
	/// word groups.
	pub fn encode(raw: &[u8]) -> Result<Mnemonic, Error> {
		let b = raw.len();
		if !ALLOWED_BYTE_LENGTHS.contains(&(b as u8)) {
			return Err(ErrorKind::InvalidSize(format!(
				"{} is not an allowed secret length in bytes",
				b
			)))?;
		}
		let checksum_bits = config::checksum_bits_for_byte_length(b).unwrap();

		let hash = Sha256::digest(raw);
		let hash_bits = BitString::from_slice(&hash);

		let mut packed = BitString::from_slice(raw);
		packed.extend_from_bitslice(&hash_bits[0..checksum_bits]);

		let indices: Vec<u16> = bits::read_uint_chunks(&packed, 11)
			.into_iter()
			.map(|v| v as u16)
			.collect();

		Mnemonic::from_indices(indices)
	}

	/// Decodes the mnemonic back to its raw payload bytes, verifying the
	/// embedded checksum. Returns `ChecksumMismatch` if the checksum bits
	/// disagree with the recomputed SHA-256 digest.
	pub fn decode(&self) -> Result<Vec<u8>, Error> {
		let w = self.indices.len();
		let b = config::byte_length_for_word_count(w).ok_or_else(|| {
			ErrorKind::InvalidSize(format!("{} is not an allowed mnemonic word count", w))
		})? as usize;
		let checksum_bits = config::checksum_bits_for_byte_length(b).unwrap();

		let mut packed = BitString::new();
		for &idx in &self.indices {
			bits::push_uint(&mut packed, u64::from(idx), 11);
		}

		let raw = bits::read_bytes(&packed, b);
		let claimed_checksum = &packed[8 * b..8 * b + checksum_bits];

		let hash = Sha256::digest(&raw);
		let hash_bits = BitString::from_slice(&hash);
		if claimed_checksum != &hash_bits[0..checksum_bits] {
			return Err(ErrorKind::ChecksumMismatch)?;
		}

		Ok(raw)
	}
}

impl std::fmt::Display for Mnemonic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.phrase())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use quickcheck::*;

	#[test]
	fn from_indices_renders_words_from_the_list() {
		let indices: Vec<u16> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
		let mn = Mnemonic::from_indices(indices.clone()).unwrap();
		let expected: Vec<&str> = indices.iter().map(|&i| WORDLIST[i as usize]).collect();
		assert_eq!(mn.phrase(), expected.join(" "));
		assert_eq!(mn.word_count(), 12);
	}

	#[test]
	fn round_trip_all_lengths() {
		for &b in &ALLOWED_BYTE_LENGTHS {
			let raw: Vec<u8> = (0..b).collect();
			let mn = Mnemonic::encode(&raw).unwrap();
			assert_eq!(mn.decode().unwrap(), raw);
			let reparsed = Mnemonic::parse(&mn.phrase()).unwrap();
			assert_eq!(reparsed.decode().unwrap(), raw);
		}
	}

	#[test]
	fn flipped_bit_breaks_checksum_or_lookup() {
		let raw = vec![0u8; 16];
		let mn = Mnemonic::encode(&raw).unwrap();
		let mut indices = mn.indices().to_vec();
		indices[0] ^= 1;
		let flipped = Mnemonic::from_indices(indices).unwrap();
		assert!(flipped.decode().is_err());
	}

	#[test]
	fn rejects_unknown_word() {
		let phrase = "abandon ".repeat(11) + "notaword";
		assert!(Mnemonic::parse(&phrase).is_err());
	}

	#[test]
	fn rejects_non_ascii_word() {
		let phrase = "abandon ".repeat(11) + "café";
		assert!(Mnemonic::parse(&phrase).is_err());
	}

	#[test]
	fn accepts_irregular_whitespace() {
		let raw = vec![1u8; 16];
		let mn = Mnemonic::encode(&raw).unwrap();
		let spaced = format!("  {}  ", mn.phrase().replace(' ', "\t \n"));
		let reparsed = Mnemonic::parse(&spaced).unwrap();
		assert_eq!(reparsed.decode().unwrap(), raw);
	}

	quickcheck! {
		fn round_trip_arbitrary_16_byte(raw: Vec<u8>) -> TestResult {
			if raw.len() != 16 {
				return TestResult::discard();
			}
			let mn = match Mnemonic::encode(&raw) {
				Ok(m) => m,
				Err(_) => return TestResult::failed(),
			};
			TestResult::from_bool(mn.decode().unwrap() == raw)
		}
	}
}
