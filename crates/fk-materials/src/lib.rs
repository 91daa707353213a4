//! fk-materials: uniaxial stress-strain laws for fiber analysis.
//!
//! Provides:
//! - `MaterialLaw` trait (strain -> stress, reference strains, plotting domain)
//! - Todeschini unconfined concrete
//! - Mander confined concrete
//! - Bilinear reinforcing steel
//!
//! # Sign convention
//!
//! Strain and stress are compression-positive for every law. Concrete carries
//! no tension; steel is symmetric.
//!
//! # Example
//!
//! ```
//! use fk_core::UnitSystem;
//! use fk_materials::{Bilinear, MaterialLaw, Todeschini};
//!
//! let cover = Todeschini::new(4.0, UnitSystem::Imperial).unwrap();
//! let steel = Bilinear::new(60.0, 29_000.0).unwrap();
//!
//! assert_eq!(cover.stress(0.0), 0.0);
//! assert!((steel.stress(0.01) - 60.0).abs() < 1e-12);
//! ```

pub mod concrete;
pub mod error;
pub mod law;
pub mod steel;

pub use concrete::{CRUSH_RAMP_FRACTION, Mander, Todeschini};
pub use error::{MaterialError, MaterialResult};
pub use law::{MaterialLaw, ReferencePoints};
pub use steel::Bilinear;
