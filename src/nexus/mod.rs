//! # NEXUS+ cosmic-web grid access
//!
//! Decoding of the NEXUS+ classification output (`.MMF` files) into an immutable voxel grid.
//!
//! Modules
//! -----------------
//! * [`mmf_reader`](crate::nexus::mmf_reader) – Fixed-layout binary decoder for the MMF byte
//!   stream (header / u16 payload / checksum).
//! * [`voxel_grid`](crate::nexus::voxel_grid) – The decoded G×G×G grid with x-major indexing
//!   and slice extraction.
//! * [`web_class`](crate::nexus::web_class) – The symbolic classification labels
//!   (Void … Node) and their flag mapping.
//!
//! Data Model
//! -----------------
//! * One file holds one cube of side `G` (inferred from the byte length) of unsigned 16-bit
//!   flags, each in `{0, 1, 2, 3, 4}`.
//! * The grid is decoded once and only read afterwards; sharing `&VoxelGrid` across worker
//!   threads is safe.

pub mod mmf_reader;
pub mod voxel_grid;
pub mod web_class;

pub use mmf_reader::{decode_voxels, decode_voxels_with, MmfFormat, NEXUS_MMF};
pub use voxel_grid::VoxelGrid;
pub use web_class::WebClass;
