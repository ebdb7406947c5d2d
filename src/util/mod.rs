// Copyright 2019 The Grin Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small shared utilities: bit-string packing and a convenience random
//! fill for callers that don't want to manage their own RNG.

pub mod bits;

use rand::{CryptoRng, RngCore};

/// Fills a fresh `n`-byte vec from `rng`. The sharing engine takes an RNG
/// by parameter rather than reaching for a thread-local one, so tests can
/// inject a deterministic or seeded source (see `SharingConfig` and the
/// `Mode` type in the `sharing` module).
pub fn fill_vec_rand<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Vec<u8> {
	let mut v = vec![0u8; n];
	rng.fill_bytes(&mut v);
	v
}
