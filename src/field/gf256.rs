// Derived from RustySecrets Project at
// https://github.com/SpinResearch/RustySecrets.git
//
// BSD 3-Clause License
//
// Copyright (c) 2016-2018, Spin Research
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// * Neither the name of the copyright holder nor the names of its
//   contributors may be used to endorse or promote products derived from
//   this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
//

//
// Modifications Copyright 2019 The Grin Developers
//

//! This module provides the Gf256 type, representing elements of the
//! 256-element finite field GF(2^8) reduced by x^8 + x^4 + x^3 + x + 1
//! (0x11B). Every operation here is table-driven: both the table lookup
//! and the exponent arithmetic around it are branch-free in the operand
//! values, which keeps the field arithmetic free of secret-dependent
//! control flow.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone)]
pub struct Tables {
	pub exp: [u8; 255],
	pub log: [u8; 256],
}

impl PartialEq for Tables {
	fn eq(&self, other: &Tables) -> bool {
		self.exp[..] == other.exp[..] && self.log[..] == other.log[..]
	}
}

impl fmt::Debug for Tables {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let _ = writeln!(f, "exp: (");
		for i in 0..255 {
			let _ = write!(f, "{}, ", self.exp[i]);
		}
		let _ = writeln!(f, ")");
		let _ = writeln!(f, "log: (");
		for i in 0..256 {
			let _ = write!(f, "{}, ", self.log[i]);
		}
		writeln!(f, ")")
	}
}

impl Tables {
	/// Generates a table of discrete logarithms and exponents in GF(256)
	/// using the polynomial x + 1 as the generator.
	pub fn generate() -> Tables {
		let mut tabs = Tables {
			exp: [0; 255],
			log: [0; 256],
		};

		let mut tmp: u16 = 1;
		for power in 0..255usize {
			tabs.exp[power] = tmp as u8;
			tabs.log[tmp as usize] = power as u8;
			// Multiply poly by the polynomial x + 1
			tmp = (tmp << 1) ^ tmp;
			// Reduce poly by x^8 + x^4 + x^3 + x + 1
			if (tmp & 0x100) > 0 {
				tmp ^= 0x11B;
			}
		}
		tabs
	}
}

lazy_static! {
	/// Static reference to the generated log/antilog tables.
	pub static ref TABLES: Tables = Tables::generate();
}

fn get_tables() -> &'static Tables {
	&TABLES
}

/// Type for elements of a finite field with 256 elements
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct Gf256 {
	pub poly: u8,
}

impl Gf256 {
	/// returns the additive neutral element of the field
	#[inline]
	pub fn zero() -> Gf256 {
		Gf256 { poly: 0 }
	}
	/// returns the multiplicative neutral element of the field
	#[inline]
	pub fn one() -> Gf256 {
		Gf256 { poly: 1 }
	}
	#[inline]
	pub fn from_byte(b: u8) -> Gf256 {
		Gf256 { poly: b }
	}
	#[inline]
	pub fn to_byte(self) -> u8 {
		self.poly
	}
	pub fn exp(power: u8) -> Gf256 {
		let tabs = get_tables();
		Gf256::from_byte(tabs.exp[power as usize])
	}
	pub fn log(self) -> Option<u8> {
		if self.poly == 0 {
			None
		} else {
			let tabs = get_tables();
			Some(tabs.log[self.poly as usize])
		}
	}
	pub fn pow(mut self, mut exp: u8) -> Gf256 {
		let mut acc = Self::one();

		while exp > 1 {
			if (exp & 1) == 1 {
				acc *= self;
			}
			exp /= 2;
			self *= self;
		}

		if exp == 1 {
			acc *= self;
		}

		acc
	}

	/// The multiplicative inverse, computed as `a^254` per Fermat's
	/// little theorem (`a^255 == a` for all nonzero `a` in this field, so
	/// `a^254` is `a`'s inverse). Returns `None` for zero, which has no
	/// inverse; callers must never request the inverse of a difference
	/// between two share indices, since distinct indices guarantee a
	/// nonzero difference.
	pub fn inverse(self) -> Option<Gf256> {
		if self.poly == 0 {
			None
		} else {
			Some(self.pow(254))
		}
	}
}

impl Add<Gf256> for Gf256 {
	type Output = Gf256;
	#[inline]
	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(self, rhs: Gf256) -> Gf256 {
		Gf256::from_byte(self.poly ^ rhs.poly)
	}
}

impl AddAssign<Gf256> for Gf256 {
	#[inline]
	fn add_assign(&mut self, rhs: Gf256) {
		*self = *self + rhs;
	}
}

impl Sub<Gf256> for Gf256 {
	type Output = Gf256;
	#[inline]
	#[allow(clippy::suspicious_arithmetic_impl)]
	fn sub(self, rhs: Gf256) -> Gf256 {
		Gf256::from_byte(self.poly ^ rhs.poly)
	}
}

impl SubAssign<Gf256> for Gf256 {
	#[inline]
	fn sub_assign(&mut self, rhs: Gf256) {
		*self = *self - rhs;
	}
}

impl Mul<Gf256> for Gf256 {
	type Output = Gf256;
	fn mul(self, rhs: Gf256) -> Gf256 {
		if let (Some(l1), Some(l2)) = (self.log(), rhs.log()) {
			let tmp = (u16::from(l1) + u16::from(l2)) % 255;
			Gf256::exp(tmp as u8)
		} else {
			Gf256 { poly: 0 }
		}
	}
}

impl MulAssign<Gf256> for Gf256 {
	fn mul_assign(&mut self, rhs: Gf256) {
		*self = *self * rhs;
	}
}

impl Div<Gf256> for Gf256 {
	type Output = Gf256;
	fn div(self, rhs: Gf256) -> Gf256 {
		let l2 = rhs.log().expect("division by zero");
		if let Some(l1) = self.log() {
			let tmp = (u16::from(l1) + 255 - u16::from(l2)) % 255;
			Gf256::exp(tmp as u8)
		} else {
			Gf256 { poly: 0 }
		}
	}
}

impl DivAssign<Gf256> for Gf256 {
	fn div_assign(&mut self, rhs: Gf256) {
		*self = *self / rhs;
	}
}

impl Neg for Gf256 {
	type Output = Gf256;
	fn neg(self) -> Gf256 {
		// addition and subtraction are both XOR, so -a == a
		Gf256::zero() - self
	}
}

#[macro_export]
#[doc(hidden)]
macro_rules! gf256 {
	($e:expr) => {
		Gf256::from_byte($e)
	};
}
