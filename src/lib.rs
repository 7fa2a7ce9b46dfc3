pub mod constants;
pub mod cosmic_time;
pub mod cross_check;
pub mod halo_catalog;
pub mod haloweb_errors;
pub mod integrate;
pub mod nexus;
pub mod spatial;

pub use cosmic_time::{cosmic_time, Cosmology};
pub use cross_check::{class_histogram, classify_haloes, ClassifiedHalo};
pub use halo_catalog::{Halo, HaloCatalog};
pub use haloweb_errors::HaloWebError;
pub use nexus::{decode_voxels, VoxelGrid, WebClass};
