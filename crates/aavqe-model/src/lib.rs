//! The two Hamiltonians of the adiabatic schedule.
//!
//! AAVQE morphs an exactly solvable reference Hamiltonian into the problem
//! Hamiltonian:
//!
//! - **Reference**:  H₀ = -Σᵢ Zᵢ  with ground state |0…0⟩ at energy -n
//! - **Problem**:    H₁ = Σᵢ Zᵢ Z₍ᵢ₊₁₎ mod n  +  λ·Σᵢ Xᵢ, the
//!   transverse-field Ising model on a ring
//!
//! and, for an interpolation fraction `s ∈ [0, 1]`:
//!
//!   H(s) = (1-s)·H₀ + s·H₁
//!
//! which equals H₀ exactly at `s = 0` and H₁ exactly at `s = 1`.
//!
//! # Quick start
//!
//! ```rust
//! use aavqe_model::{Hamiltonian, interpolate};
//!
//! let reference = Hamiltonian::reference(2);
//! let problem = Hamiltonian::transverse_ising(2, 1.0);
//! assert_eq!(reference.dim(), 4);
//! assert!((reference.exact_ground_energy() + 2.0).abs() < 1e-10);
//!
//! let halfway = interpolate(&reference, &problem, 0.5);
//! assert_eq!(halfway.dim(), (4, 4));
//! ```

pub mod hamiltonian;
pub mod interpolate;

pub use hamiltonian::{Hamiltonian, Model};
pub use interpolate::interpolate;
