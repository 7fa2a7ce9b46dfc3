//! # Halo / cosmic-web cross-referencing
//!
//! The composition point of the crate: every halo position is mapped to a voxel index
//! ([`spatial`](crate::spatial)), the index is bounds-checked against the decoded grid, and
//! the stored flag is translated to its symbolic [`WebClass`](crate::nexus::WebClass).
//!
//! An index outside `[0, G)` on any axis is a hard error carrying the offending coordinate
//! and the computed index: it means the halo lies outside the classified volume or the box
//! length and grid resolution disagree, and it must surface to the caller rather than be
//! clamped or wrapped.
//!
//! Classification is a pure function of the grid and the catalog; repeated runs over the same
//! inputs yield identical labels, and independent catalogs may be processed in parallel
//! against one shared `&VoxelGrid`.

use crate::constants::Mpc;
use crate::halo_catalog::{Halo, HaloCatalog};
use crate::haloweb_errors::HaloWebError;
use crate::nexus::{VoxelGrid, WebClass};
use crate::spatial::map_to_voxel;

/// A halo record augmented with its cosmic-web classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedHalo {
    pub halo: Halo,
    pub web_class: WebClass,
}

/// Attach a [`WebClass`] to every halo of the catalog.
///
/// Arguments
/// ---------------
/// * `grid`: the decoded NEXUS+ grid, shared read-only
/// * `catalog`: present-epoch halo records
/// * `box_length`: comoving box side in Mpc/h, the unit system of the halo positions
///
/// Return
/// ----------
/// * one [`ClassifiedHalo`] per input halo, in catalog order
///
/// Errors
/// ----------
/// * [`HaloWebError::VoxelIndexOutOfRange`] when a mapped index leaves `[0, G)` on any axis
/// * [`HaloWebError::UnknownWebClass`] when a looked-up flag is outside the label set
pub fn classify_haloes(
    grid: &VoxelGrid,
    catalog: &HaloCatalog,
    box_length: Mpc,
) -> Result<Vec<ClassifiedHalo>, HaloWebError> {
    catalog
        .haloes
        .iter()
        .map(|halo| {
            let web_class = classify_position(grid, halo, box_length)?;
            Ok(ClassifiedHalo {
                halo: halo.clone(),
                web_class,
            })
        })
        .collect()
}

fn classify_position(
    grid: &VoxelGrid,
    halo: &Halo,
    box_length: Mpc,
) -> Result<WebClass, HaloWebError> {
    let position = halo.position();
    let index = map_to_voxel(&position, grid.grid_size(), box_length);

    // Negative components wrap to huge values under the cast and fail the lookup, so both
    // out-of-box directions surface as the same range error, reporting the signed index.
    let voxel = [index.x as usize, index.y as usize, index.z as usize];
    let flag = grid.get(voxel[0], voxel[1], voxel[2]).ok_or_else(|| {
        HaloWebError::VoxelIndexOutOfRange {
            position: [position.x, position.y, position.z],
            index: [index.x, index.y, index.z],
            grid_size: grid.grid_size(),
        }
    })?;
    WebClass::from_flag_at(flag, voxel)
}

/// Per-class halo counts, indexed by flag value (the histogram the reporting layer renders).
pub fn class_histogram(classified: &[ClassifiedHalo]) -> [usize; WebClass::COUNT] {
    let mut counts = [0usize; WebClass::COUNT];
    for entry in classified {
        counts[entry.web_class.flag() as usize] += 1;
    }
    counts
}
