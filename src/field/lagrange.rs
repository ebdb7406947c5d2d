// Derived from RustySecrets Project at
// https://github.com/SpinResearch/RustySecrets.git (BSD-3-Clause)
// Modifications Copyright 2019 The Grin Developers

//! Lagrange interpolation over GF(256).
//!
//! `LagrangeBasis` implements the secret-reconstruction formula
//! directly: the basis values `L_j(0) = prod_{m != j} x_m * (x_m - x_j)^-1`
//! depend only on the share x-coordinates, so they're computed once per
//! reconstruction and reused across every byte position of the secret.
//! `interpolate` is the more general form (the full interpolated
//! polynomial, not just its value at zero), used by the sharing engine's
//! self-test to confirm a generated share set actually reconstructs.

use crate::error::{Error, ErrorKind};
use crate::field::gf256::Gf256;
use crate::field::poly::Poly;

/// Precomputed Lagrange basis values evaluated at x=0, one per share index
/// in the reconstruction set.
pub struct LagrangeBasis {
	weights: Vec<Gf256>,
}

impl LagrangeBasis {
	/// Computes `L_j(0)` for each `x_j` in `xs`. `xs` must be nonzero and
	/// pairwise distinct; callers (the recovery engine) are responsible
	/// for having already checked this, since distinct share indices
	/// guarantee it.
	pub fn new(xs: &[u8]) -> Result<LagrangeBasis, Error> {
		let x: Vec<Gf256> = xs.iter().map(|&b| Gf256::from_byte(b)).collect();
		let mut weights = Vec::with_capacity(x.len());
		for (j, &xj) in x.iter().enumerate() {
			let mut num = Gf256::one();
			let mut denom = Gf256::one();
			for (m, &xm) in x.iter().enumerate() {
				if m == j {
					continue;
				}
				num *= xm;
				let diff = xm - xj;
				let inv = diff.inverse().ok_or_else(|| {
					ErrorKind::InternalFailure("duplicate share index during interpolation".into())
				})?;
				denom *= inv;
			}
			weights.push(num * denom);
		}
		Ok(LagrangeBasis { weights })
	}

	/// Reconstructs `f(0)` given the `y` value at each `x_j` passed to
	/// `new`, in the same order.
	pub fn reconstruct(&self, ys: &[u8]) -> u8 {
		let mut acc = Gf256::zero();
		for (&w, &y) in self.weights.iter().zip(ys.iter()) {
			acc += w * Gf256::from_byte(y);
		}
		acc.to_byte()
	}
}

/// Computes the coefficients of the polynomial interpolated through
/// `points`, in ascending order of degree.
pub fn interpolate(points: &[(Gf256, Gf256)]) -> Poly {
	let len = points.len();
	let mut poly = vec![Gf256::zero(); len];

	for &(x, y) in points {
		let mut coeffs = vec![Gf256::zero(); len];
		coeffs[0] = y;

		let mut prod = Gf256::one();
		for &(x1, _) in points {
			if x != x1 {
				prod *= x - x1;

				let mut prec = Gf256::zero();
				coeffs = coeffs
					.into_iter()
					.map(|coeff| {
						let new_coeff = coeff * (-x1) + prec;
						prec = coeff;
						new_coeff
					})
					.collect();
			}
		}

		poly = poly
			.iter()
			.zip(coeffs.iter())
			.map(|(&old_coeff, &add)| old_coeff + add / prod)
			.collect();
	}

	Poly::new(poly)
}

#[cfg(test)]
mod tests {
	use super::*;
	use quickcheck::*;

	#[test]
	fn basis_matches_full_interpolation_at_zero() {
		let points = [(1u8, 10u8), (2, 20), (3, 30)];
		let gpoints: Vec<(Gf256, Gf256)> = points
			.iter()
			.map(|&(x, y)| (Gf256::from_byte(x), Gf256::from_byte(y)))
			.collect();
		let poly = interpolate(&gpoints);
		let via_poly = poly.evaluate_at(Gf256::zero()).to_byte();

		let xs: Vec<u8> = points.iter().map(|&(x, _)| x).collect();
		let ys: Vec<u8> = points.iter().map(|&(_, y)| y).collect();
		let basis = LagrangeBasis::new(&xs).unwrap();
		let via_basis = basis.reconstruct(&ys);

		assert_eq!(via_poly, via_basis);
	}

	quickcheck! {
		fn interpolate_evaluate_at_works(ys: Vec<u8>) -> TestResult {
			if ys.is_empty() || ys.len() > u8::max_value() as usize {
				return TestResult::discard();
			}

			let points: Vec<(Gf256, Gf256)> = ys
				.into_iter()
				.zip(1..=u8::max_value())
				.map(|(y, x)| (Gf256::from_byte(x), Gf256::from_byte(y)))
				.collect();
			let poly = interpolate(&points);

			for &(x, y) in &points {
				if poly.evaluate_at(x) != y {
					return TestResult::failed();
				}
			}

			TestResult::passed()
		}
	}
}
