// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! Encoders that turn non-byte entropy sources into a bit string of one
//! of the five allowed lengths: hex digits, dice rolls, drawn playing
//! cards, and raw word indices.
//!
//! Dice rolls and card draws come from alphabets whose size isn't a
//! power of two (6 faces, a shrinking deck of up to 52 cards), so a
//! sequence of them doesn't correspond to a whole number of bits. Both
//! are accumulated as one arbitrary-precision integer over the
//! sequence's value space (`num-bigint`). Every encoder keeps the
//! low-order `target_bits` bits of its accumulated value and drops any
//! excess from the top ("left-trim", in the reference tool's own
//! terms) rather than scaling or rounding, the same rule applied to
//! trimming an over-long input down to 256 bits, applied uniformly to
//! the smaller canonical sizes too.
//!
//! `select_target_bits` picks the canonical entropy length from how
//! many bits an input naturally supplies: the largest of the five
//! canonical mnemonic entropy lengths that doesn't exceed it.

use crate::config::{ALLOWED_ENTROPY_BITS, SharingConfig};
use crate::error::{Error, ErrorKind};
use crate::mnemonic::Mnemonic;
use crate::util::bits::{self, BitString};

use num_bigint::BigUint;

fn check_target_bits(target_bits: usize) -> Result<(), Error> {
	if ALLOWED_ENTROPY_BITS.contains(&target_bits) {
		Ok(())
	} else {
		Err(ErrorKind::InvalidSize(format!(
			"{} is not an allowed entropy length in bits",
			target_bits
		)))?
	}
}

/// Picks the largest allowed mnemonic entropy length (128/160/192/224/256)
/// not exceeding `derived_bits`, the amount of entropy an input naturally
/// supplies. Errors with `InsufficientEntropy` if even 128 bits isn't
/// met.
pub fn select_target_bits(derived_bits: usize) -> Result<usize, Error> {
	ALLOWED_ENTROPY_BITS
		.iter()
		.rev()
		.find(|&&len| len <= derived_bits)
		.copied()
		.ok_or_else(|| ErrorKind::InsufficientEntropy(derived_bits).into())
}

/// Strips whitespace and the `-`/`:` separators a hex entropy string may
/// be grouped with.
fn strip_hex_separators(hex_str: &str) -> String {
	hex_str
		.chars()
		.filter(|c| !c.is_whitespace() && *c != '-' && *c != ':')
		.collect()
}

/// Bits of entropy a hex string naturally supplies once whitespace and
/// separators are stripped: four per remaining digit.
pub fn hex_derived_bits(hex_str: &str) -> usize {
	strip_hex_separators(hex_str).len() * 4
}

/// Bits of entropy `num_rolls` six-sided dice naturally supply:
/// `floor(log2(6^num_rolls))`.
pub fn dice_derived_bits(num_rolls: usize) -> usize {
	let space = BigUint::from(6u32).pow(num_rolls as u32);
	space.bits() as usize - 1
}

/// Bits of entropy `num_draws` cards drawn without replacement from a
/// 52-card deck naturally supply: `floor(log2(52!/(52-num_draws)!))`.
pub fn cards_derived_bits(num_draws: usize) -> usize {
	let mut space = BigUint::from(1u32);
	for i in 0..num_draws {
		space *= BigUint::from((52 - i) as u32);
	}
	space.bits() as usize - 1
}

/// Bits of entropy `num_indices` word indices of `radix_bits` each
/// naturally supply.
pub fn word_indices_derived_bits(num_indices: usize, radix_bits: u8) -> usize {
	num_indices * radix_bits as usize
}

/// Decodes a hex string into `target_bits` bits, stripping whitespace
/// and `-`/`:` separators first. The cleaned string must have exactly
/// `target_bits / 4` hex digits; hex input carries its entropy exactly,
/// so there's nothing to truncate once the length matches.
pub fn from_hex(hex_str: &str, target_bits: usize) -> Result<Vec<u8>, Error> {
	check_target_bits(target_bits)?;
	let cleaned = strip_hex_separators(hex_str);
	let expected_digits = target_bits / 4;
	if cleaned.len() != expected_digits {
		return Err(ErrorKind::InvalidEntropyInput(format!(
			"expected {} hex digits for {} bits, got {}",
			expected_digits,
			target_bits,
			cleaned.len()
		)))?;
	}
	hex::decode(&cleaned).map_err(|e| ErrorKind::InvalidEntropyInput(e.to_string()).into())
}

/// Decodes a sequence of die faces (each `1..=6`) into `target_bits`
/// bits of entropy, keeping the low-order (least significant) bits of
/// the rolls' accumulated base-6 value and dropping any excess from
/// the top.
pub fn from_dice(rolls: &[u8], target_bits: usize) -> Result<Vec<u8>, Error> {
	check_target_bits(target_bits)?;
	for &roll in rolls {
		if roll < 1 || roll > 6 {
			return Err(ErrorKind::InvalidEntropyInput(format!(
				"die face {} is not in 1..=6",
				roll
			)))?;
		}
	}

	let mut value = BigUint::from(0u32);
	let mut space = BigUint::from(1u32);
	let six = BigUint::from(6u32);
	for &roll in rolls {
		value = value * &six + BigUint::from(u32::from(roll - 1));
		space *= &six;
	}

	truncate_to_bits(value, &space, target_bits)
}

/// Decodes a sequence of drawn playing cards (each card identified by
/// its position, `0..52`, in a fixed initial deck order, drawn without
/// replacement so the alphabet shrinks by one each draw) into
/// `target_bits` bits of entropy.
pub fn from_cards(draws: &[u8], target_bits: usize) -> Result<Vec<u8>, Error> {
	check_target_bits(target_bits)?;
	if draws.len() > 52 {
		return Err(ErrorKind::InvalidEntropyInput(
			"more than 52 cards drawn".into(),
		))?;
	}
	let mut remaining: Vec<u8> = (0..52).collect();
	let mut value = BigUint::from(0u32);
	let mut space = BigUint::from(1u32);

	for &card in draws {
		let pos = remaining
			.iter()
			.position(|&c| c == card)
			.ok_or_else(|| ErrorKind::InvalidEntropyInput(format!(
				"card {} drawn twice or out of range",
				card
			)))?;
		value = value * BigUint::from(remaining.len() as u32) + BigUint::from(pos as u32);
		space *= BigUint::from(remaining.len() as u32);
		remaining.remove(pos);
	}

	truncate_to_bits(value, &space, target_bits)
}

/// Decodes raw word indices (each `0..radix`, typically wordlist
/// positions used purely as a numeric entropy source rather than as a
/// mnemonic) into `target_bits` bits, concatenating each index's
/// `radix_bits`-bit representation and truncating to length.
pub fn from_word_indices(indices: &[u16], radix_bits: u8, target_bits: usize) -> Result<Vec<u8>, Error> {
	check_target_bits(target_bits)?;
	let radix = 1u32 << radix_bits;
	for &i in indices {
		if u32::from(i) >= radix {
			return Err(ErrorKind::InvalidEntropyInput(format!(
				"index {} out of range for a {}-bit radix",
				i, radix_bits
			)))?;
		}
	}

	let mut packed = BitString::new();
	for &i in indices {
		bits::push_uint(&mut packed, u64::from(i), radix_bits);
	}

	if packed.len() < target_bits {
		return Err(ErrorKind::InsufficientEntropy(packed.len()))?;
	}
	let start = packed.len() - target_bits;
	Ok(bits::read_bytes(&packed[start..], target_bits / 8))
}

/// Keeps the low-order `target_bits` bits of `value`, which is known to
/// range over `[0, space)`, dropping any excess from the top
/// ("left-trim"). Errors if `space` isn't large enough to guarantee
/// `target_bits` of entropy.
fn truncate_to_bits(value: BigUint, space: &BigUint, target_bits: usize) -> Result<Vec<u8>, Error> {
	let available_bits = space.bits() as usize - 1;
	if available_bits < target_bits {
		return Err(ErrorKind::InsufficientEntropy(available_bits))?;
	}

	let mask = (BigUint::from(1u32) << target_bits) - BigUint::from(1u32);
	let truncated = value & mask;

	let target_bytes = target_bits / 8;
	let mut out_bytes = truncated.to_bytes_be();
	debug_assert!(out_bytes.len() <= target_bytes);
	while out_bytes.len() < target_bytes {
		out_bytes.insert(0, 0);
	}

	Ok(out_bytes)
}

/// A tagged variant over the four entropy input kinds the `encode`
/// operation accepts: a per-kind function behind a single dispatch
/// point rather than a trait object, since each kind's error reporting
/// stays specific to its own token format.
pub enum Input<'a> {
	/// A hex string, grouped with optional whitespace/`-`/`:` separators.
	Hex(&'a str),
	/// A sequence of six-sided die faces, each `1..=6`.
	Dice(&'a [u8]),
	/// A sequence of drawn playing cards, each `0..52` identifying a
	/// position in a fixed initial deck order, drawn without
	/// replacement.
	Cards(&'a [u8]),
	/// Raw word indices, each `0..2048`, used purely as a numeric
	/// entropy source.
	WordIndices(&'a [u16]),
}

impl Input<'_> {
	fn derived_bits(&self, cfg: &SharingConfig) -> usize {
		match self {
			Input::Hex(s) => hex_derived_bits(s),
			Input::Dice(d) => dice_derived_bits(d.len()),
			Input::Cards(c) => cards_derived_bits(c.len()),
			Input::WordIndices(w) => word_indices_derived_bits(w.len(), cfg.word_radix_bits),
		}
	}

	fn into_bits(self, cfg: &SharingConfig, target_bits: usize) -> Result<Vec<u8>, Error> {
		match self {
			Input::Hex(s) => from_hex(s, target_bits),
			Input::Dice(d) => from_dice(d, target_bits),
			Input::Cards(c) => from_cards(c, target_bits),
			Input::WordIndices(w) => from_word_indices(w, cfg.word_radix_bits, target_bits),
		}
	}
}

/// The `encode` operation: turns one of the four entropy input kinds
/// into a mnemonic, picking the canonical entropy length automatically
/// from how much entropy the input supplies (via `select_target_bits`)
/// rather than requiring the caller to compute it.
pub fn encode_mnemonic(cfg: &SharingConfig, input: Input) -> Result<Mnemonic, Error> {
	let target_bits = select_target_bits(input.derived_bits(cfg))?;
	let raw = input.into_bits(cfg, target_bits)?;
	Mnemonic::encode(&raw)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_round_trips_exact_length() {
		let hex_str = "00".repeat(16);
		let bytes = from_hex(&hex_str, 128).unwrap();
		assert_eq!(bytes, vec![0u8; 16]);
	}

	#[test]
	fn hex_rejects_wrong_length() {
		assert!(from_hex("00", 128).is_err());
	}

	#[test]
	fn dice_needs_enough_rolls_for_128_bits() {
		// log2(6) ~= 2.585 bits/roll; 128 bits needs at least 50 rolls.
		let rolls = vec![3u8; 49];
		assert!(from_dice(&rolls, 128).is_err());

		let rolls = vec![3u8; 60];
		assert!(from_dice(&rolls, 128).is_ok());
	}

	#[test]
	fn dice_rejects_invalid_face() {
		assert!(from_dice(&[0, 1, 2], 128).is_err());
		assert!(from_dice(&[1, 7, 2], 128).is_err());
	}

	#[test]
	fn dice_output_has_correct_byte_length() {
		let rolls = vec![6u8; 60];
		let bytes = from_dice(&rolls, 128).unwrap();
		assert_eq!(bytes.len(), 16);
	}

	#[test]
	fn cards_reject_duplicate_draw() {
		assert!(from_cards(&[5, 5], 128).is_err());
	}

	#[test]
	fn cards_need_enough_draws_for_128_bits() {
		// log2(52!/(52-n)!) grows by a bit under 5.7 bits per draw early on;
		// 128 bits needs at least ~23 draws.
		let few: Vec<u8> = (0..20).collect();
		assert!(from_cards(&few, 128).is_err());

		let many: Vec<u8> = (0..30).collect();
		assert!(from_cards(&many, 128).is_ok());
	}

	#[test]
	fn word_indices_pack_and_truncate() {
		let indices = vec![0u16; 12];
		let bytes = from_word_indices(&indices, 11, 128).unwrap();
		assert_eq!(bytes.len(), 16);
	}

	#[test]
	fn word_indices_reject_out_of_range() {
		assert!(from_word_indices(&[2048], 11, 128).is_err());
	}

	#[test]
	fn word_indices_reject_insufficient_entropy() {
		let indices = vec![0u16; 5];
		assert!(from_word_indices(&indices, 11, 128).is_err());
	}

	#[test]
	fn word_indices_truncation_keeps_trailing_indices() {
		// 13 indices of 11 bits is 143 derived bits; trimming to 128 bits
		// should drop the first 15 bits (the leading part of index 0),
		// not the last 15, so the output is driven by the later indices.
		let mut indices = vec![0u16; 13];
		indices[12] = 0x7FF;
		let with_tail_set = from_word_indices(&indices, 11, 128).unwrap();

		indices[12] = 0;
		indices[0] = 0x7FF;
		let with_head_set = from_word_indices(&indices, 11, 128).unwrap();

		assert_ne!(with_tail_set, with_head_set);
		assert_eq!(with_head_set, vec![0u8; 16]);
	}

	#[test]
	fn hex_strips_whitespace_and_separators() {
		let grouped = "dead-beef:cafe 1234 dead-beef:cafe 1234";
		let plain: String = grouped.chars().filter(|c| c.is_ascii_hexdigit()).collect();
		assert_eq!(
			from_hex(grouped, 128).unwrap(),
			from_hex(&plain, 128).unwrap()
		);
	}

	#[test]
	fn select_target_bits_picks_largest_not_exceeding() {
		assert_eq!(select_target_bits(128).unwrap(), 128);
		assert_eq!(select_target_bits(143).unwrap(), 128);
		assert_eq!(select_target_bits(160).unwrap(), 160);
		assert_eq!(select_target_bits(255).unwrap(), 224);
		assert_eq!(select_target_bits(256).unwrap(), 256);
		assert_eq!(select_target_bits(1000).unwrap(), 256);
		assert!(select_target_bits(127).is_err());
	}

	#[test]
	fn encode_mnemonic_picks_length_from_input_size() {
		let cfg = SharingConfig::default();
		let hex_str = "00".repeat(16);
		let mn = encode_mnemonic(&cfg, Input::Hex(&hex_str)).unwrap();
		assert_eq!(mn.word_count(), 12);

		let rolls = vec![3u8; 60];
		let mn = encode_mnemonic(&cfg, Input::Dice(&rolls)).unwrap();
		assert_eq!(mn.word_count(), 12);

		let indices = vec![0u16; 24];
		let mn = encode_mnemonic(&cfg, Input::WordIndices(&indices)).unwrap();
		assert_eq!(mn.word_count(), 24);
	}

	#[test]
	fn encode_mnemonic_rejects_insufficient_entropy() {
		let cfg = SharingConfig::default();
		assert!(encode_mnemonic(&cfg, Input::Hex("00")).is_err());
	}

	#[test]
	fn derived_bits_helpers_match_expectations() {
		assert_eq!(hex_derived_bits("dead-beef:1234"), 48);
		assert_eq!(word_indices_derived_bits(12, 11), 132);
		// 60 dice rolls of a 6-sided die: floor(60*log2(6)) = 155
		assert_eq!(dice_derived_bits(60), 155);
		// 30 cards drawn without replacement: floor(log2(52!/(22)!))
		assert_eq!(cards_derived_bits(30), 155);
	}
}
