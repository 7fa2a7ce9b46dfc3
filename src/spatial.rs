//! # Comoving position → voxel index mapping
//!
//! Converts floating-point comoving coordinates (Mpc/h) into integer voxel indices for a grid
//! of a given resolution covering a cubic box. The mapping truncates toward zero and performs
//! **no** bounds clamping and **no** periodic wraparound: a coordinate at or beyond the box
//! length yields an index at or beyond the grid size, which the cross-referencing layer must
//! reject rather than silently wrap. Negative coordinates are undefined input.

use nalgebra::Vector3;

use crate::constants::Mpc;

/// Comoving side length of one voxel for the given grid resolution and box size.
pub fn cell_size(grid_size: usize, box_length: Mpc) -> Mpc {
    box_length / grid_size as f64
}

/// Map one comoving position to its voxel index triple.
///
/// Indices are `floor(coordinate / cell_size)` for the assumed domain `[0, box_length)`;
/// they are returned as `i64` so that out-of-box positions remain representable for error
/// reporting instead of wrapping.
pub fn map_to_voxel(position: &Vector3<f64>, grid_size: usize, box_length: Mpc) -> Vector3<i64> {
    let cell = cell_size(grid_size, box_length);
    position.map(|coordinate| (coordinate / cell) as i64)
}

/// Component-wise [`map_to_voxel`] over a set of positions.
pub fn map_positions(
    positions: &[Vector3<f64>],
    grid_size: usize,
    box_length: Mpc,
) -> Vec<Vector3<i64>> {
    positions
        .iter()
        .map(|position| map_to_voxel(position, grid_size, box_length))
        .collect()
}

#[cfg(test)]
mod spatial_test {
    use super::*;
    use crate::constants::DEFAULT_BOX_LENGTH;

    #[test]
    fn test_origin_maps_to_first_voxel() {
        let index = map_to_voxel(&Vector3::new(0.0, 0.0, 0.0), 10, DEFAULT_BOX_LENGTH);
        assert_eq!(index, Vector3::new(0, 0, 0));
    }

    #[test]
    fn test_last_cell_before_the_box_edge() {
        let index = map_to_voxel(&Vector3::new(70.39, 0.0, 0.0), 10, DEFAULT_BOX_LENGTH);
        assert_eq!(index, Vector3::new(9, 0, 0));
    }

    #[test]
    fn test_box_edge_maps_out_of_range() {
        // 70.4 sits exactly on the far face: index == grid_size, to be rejected downstream.
        let index = map_to_voxel(&Vector3::new(70.4, 0.0, 0.0), 10, DEFAULT_BOX_LENGTH);
        assert_eq!(index.x, 10);
    }

    #[test]
    fn test_interior_cells() {
        use approx::assert_relative_eq;
        // cell_size = 7.04 up to rounding; interior coordinates land in the expected cells.
        let cell = cell_size(10, DEFAULT_BOX_LENGTH);
        assert_relative_eq!(cell, 7.04, max_relative = 1e-15);
        let index = map_to_voxel(&Vector3::new(3.5, 10.0, 65.0), 10, DEFAULT_BOX_LENGTH);
        assert_eq!(index, Vector3::new(0, 1, 9));
    }

    #[test]
    fn test_map_positions_component_wise() {
        let positions = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(40.0, 7.5, 70.39),
        ];
        let indices = map_positions(&positions, 10, DEFAULT_BOX_LENGTH);
        assert_eq!(indices[0], Vector3::new(0, 0, 0));
        assert_eq!(indices[1], Vector3::new(5, 1, 9));
    }
}
