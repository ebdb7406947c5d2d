// Copyright 2019 The Grin Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Finite-field arithmetic over GF(256) and the Lagrange interpolation
//! built on top of it.

pub mod gf256;
pub mod lagrange;
pub mod poly;

pub use gf256::Gf256;
pub use lagrange::LagrangeBasis;
pub use poly::Poly;
