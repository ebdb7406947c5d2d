// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Configuration for the secret sharing engine.
//! Changing these values changes compatibility with the standardized
//! mnemonic and sharing format, so they are kept as plain data rather
//! than literals scattered through the implementation.

/// Allowed secret/share lengths, in bytes.
pub const ALLOWED_BYTE_LENGTHS: [u8; 5] = [16, 20, 24, 28, 32];

/// Allowed mnemonic lengths, in words. `ALLOWED_WORD_COUNTS[i]` encodes
/// `ALLOWED_BYTE_LENGTHS[i]` bytes.
pub const ALLOWED_WORD_COUNTS: [u8; 5] = [12, 15, 18, 21, 24];

/// Allowed entropy-encoder output lengths, in bits.
pub const ALLOWED_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Config struct holding every constant the specification pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingConfig {
	/// Bits contributed by each mnemonic word (2^11 = 2048-word radix).
	pub word_radix_bits: u8,
	/// Number of words in the wordlist (2^word_radix_bits).
	pub word_radix: u16,
	/// Highest share index allowed (exclusive of the reserved value 0).
	pub max_share_index: u8,
	/// Minimum entropy, in bits, an entropy encoder will accept.
	pub min_entropy_bits: usize,
	/// ASCII label used for domain separation in the coefficient deriver's
	/// HMAC input.
	pub coefficient_label: &'static [u8],
	/// Two-byte separator placed between a share's decimal index and its
	/// mnemonic words when computing a commitment.
	pub commitment_separator: &'static str,
}

impl Default for SharingConfig {
	fn default() -> Self {
		SharingConfig {
			word_radix_bits: 11,
			word_radix: 2048,
			max_share_index: 255,
			min_entropy_bits: 128,
			coefficient_label: b"secret-sharing-coefficient",
			commitment_separator: ": ",
		}
	}
}

impl SharingConfig {
	/// Just use defaults for now
	pub fn new() -> Self {
		SharingConfig {
			..Default::default()
		}
	}
}

/// Returns the word count for a given secret byte length, or `None` if the
/// length isn't one of the five allowed sizes.
pub fn word_count_for_byte_length(b: usize) -> Option<u8> {
	ALLOWED_BYTE_LENGTHS
		.iter()
		.position(|&len| len as usize == b)
		.map(|i| ALLOWED_WORD_COUNTS[i])
}

/// Returns the byte length for a given mnemonic word count, or `None` if
/// the count isn't one of the five allowed sizes.
pub fn byte_length_for_word_count(w: usize) -> Option<u8> {
	ALLOWED_WORD_COUNTS
		.iter()
		.position(|&count| count as usize == w)
		.map(|i| ALLOWED_BYTE_LENGTHS[i])
}

/// Checksum bit count for a given secret byte length (b/4 bits, one
/// checksum bit per four secret bits). Returns `None` for disallowed
/// lengths.
pub fn checksum_bits_for_byte_length(b: usize) -> Option<usize> {
	if ALLOWED_BYTE_LENGTHS.iter().any(|&len| len as usize == b) {
		Some(b / 4)
	} else {
		None
	}
}
