use camino::Utf8Path;

use crate::haloweb_errors::HaloWebError;
use crate::nexus::mmf_reader::decode_voxels;

/// A decoded NEXUS+ classification cube.
///
/// Flags are stored flat in C order with the x axis as the outermost (slowest) dimension:
/// voxel `(i, j, k)` lives at `(i·G + j)·G + k`. The grid is immutable after decode and can be
/// shared read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    grid_size: usize,
    voxels: Vec<u16>,
}

impl VoxelGrid {
    /// Invariant: `voxels.len() == grid_size³`, enforced by the decoder.
    pub(crate) fn new(grid_size: usize, voxels: Vec<u16>) -> Self {
        debug_assert_eq!(voxels.len(), grid_size * grid_size * grid_size);
        VoxelGrid { grid_size, voxels }
    }

    /// Decode a grid from an MMF file on disk.
    ///
    /// Thin convenience over [`decode_voxels`]; the byte acquisition is the only I/O this
    /// module performs.
    pub fn from_mmf_file(path: &Utf8Path) -> Result<Self, HaloWebError> {
        let bytes = std::fs::read(path)?;
        decode_voxels(&bytes)
    }

    /// Side length G of the cube.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Total number of voxels, G³.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Raw flag at `(i, j, k)`, or `None` when any index is outside `[0, G)`.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<u16> {
        let g = self.grid_size;
        if i >= g || j >= g || k >= g {
            return None;
        }
        Some(self.voxels[(i * g + j) * g + k])
    }

    /// The G×G slice at fixed `x = i`, row-major in `(j, k)`.
    ///
    /// This is the plane the external visualisation layer renders; `None` when `i >= G`.
    pub fn slice(&self, i: usize) -> Option<&[u16]> {
        let g = self.grid_size;
        if i >= g {
            return None;
        }
        let plane = g * g;
        Some(&self.voxels[i * plane..(i + 1) * plane])
    }

    /// Occurrences of each raw flag value `0..=4`; flags outside the label set are counted in
    /// the returned `other` bucket.
    pub fn flag_counts(&self) -> ([usize; 5], usize) {
        let mut counts = [0usize; 5];
        let mut other = 0usize;
        for &flag in &self.voxels {
            match counts.get_mut(flag as usize) {
                Some(slot) => *slot += 1,
                None => other += 1,
            }
        }
        (counts, other)
    }
}

#[cfg(test)]
mod voxel_grid_test {
    use super::*;

    fn sequential_grid(g: usize) -> VoxelGrid {
        let voxels: Vec<u16> = (0..g * g * g).map(|v| (v % 5) as u16).collect();
        VoxelGrid::new(g, voxels)
    }

    #[test]
    fn test_x_major_indexing() {
        let grid = sequential_grid(4);
        // Flat offset of (i, j, k) is (i*4 + j)*4 + k.
        assert_eq!(grid.get(0, 0, 0), Some(0));
        assert_eq!(grid.get(0, 0, 3), Some(3));
        assert_eq!(grid.get(0, 1, 0), Some((4 % 5) as u16));
        assert_eq!(grid.get(1, 0, 0), Some((16 % 5) as u16));
        assert_eq!(grid.get(3, 3, 3), Some((63 % 5) as u16));
    }

    #[test]
    fn test_out_of_range_lookup_is_none() {
        let grid = sequential_grid(4);
        assert_eq!(grid.get(4, 0, 0), None);
        assert_eq!(grid.get(0, 4, 0), None);
        assert_eq!(grid.get(0, 0, 4), None);
    }

    #[test]
    fn test_slice_is_the_x_plane() {
        let grid = sequential_grid(3);
        let plane = grid.slice(1).unwrap();
        assert_eq!(plane.len(), 9);
        for j in 0..3 {
            for k in 0..3 {
                assert_eq!(plane[j * 3 + k], grid.get(1, j, k).unwrap());
            }
        }
        assert!(grid.slice(3).is_none());
    }

    #[test]
    fn test_flag_counts() {
        let grid = VoxelGrid::new(2, vec![0, 0, 1, 2, 3, 4, 4, 9]);
        let (counts, other) = grid.flag_counts();
        assert_eq!(counts, [2, 1, 1, 1, 2]);
        assert_eq!(other, 1);
    }
}
