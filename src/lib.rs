//! A facelet model of the 3x3x3 Rubik's cube together with a CFOP (cross, first two layers,
//! orient last layer, permute last layer) solver.

#![deny(missing_docs)]

pub mod coord;
pub mod cube333;
pub mod error;
pub mod moves;
