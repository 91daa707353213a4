//! fk-section: fibers, sections, and the rectangular section mesher.
//!
//! A `Section` is an immutable, ordered collection of fibers (concrete
//! patches first, then reinforcing-bar nodes) with its centroid, area and
//! extent along the bending axis computed once at assembly. The bending axis
//! is the horizontal `x` axis: strain varies with `y`.
//!
//! Solvers only see fibers; how they were generated (confined/unconfined
//! split at the cover line, perimeter-only bar groups, rotation) is a
//! builder concern.

pub mod builder;
pub mod error;
pub mod fiber;
pub mod geometry;
pub mod section;
pub mod strain_plane;

pub use builder::{BarGroup, BarLayer, MeshSize, RectangularConfined, SectionBuilder};
pub use error::{SectionError, SectionResult};
pub use fiber::{Fiber, Footprint, NodeFiber, PatchFiber, SharedLaw};
pub use section::Section;
pub use strain_plane::{SectionForces, StrainPlane, section_response, section_response_with};
