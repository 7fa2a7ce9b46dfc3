use haloweb::constants::{DEFAULT_BOX_LENGTH, MMF_FOOTER_BYTES, MMF_HEADER_BYTES};
use haloweb::{class_histogram, classify_haloes, decode_voxels, Halo, HaloCatalog, HaloWebError, WebClass};

/// Assemble a complete MMF byte stream around the given flags: zeroed header, little-endian
/// u16 payload, zeroed checksum.
fn encode_mmf(flags: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0u8; MMF_HEADER_BYTES];
    for flag in flags {
        bytes.extend_from_slice(&flag.to_le_bytes());
    }
    bytes.extend_from_slice(&[0u8; MMF_FOOTER_BYTES]);
    bytes
}

fn halo_at(x: f64, y: f64, z: f64, mass: f64) -> Halo {
    Halo {
        position_x: x,
        position_y: y,
        position_z: z,
        mass,
        v_circ: None,
    }
}

#[test]
fn test_decode_and_classify_end_to_end() {
    // 4×4×4 cube, flags cycling 0..=4 in flat C order.
    let flags: Vec<u16> = (0..64).map(|v| v % 5).collect();
    let grid = decode_voxels(&encode_mmf(&flags)).unwrap();
    assert_eq!(grid.grid_size(), 4);

    // cell_size = 17.6; a position at (x, y, z) falls in voxel (x/17.6, y/17.6, z/17.6).
    let catalog = HaloCatalog::from_haloes(vec![
        halo_at(1.0, 1.0, 1.0, 5e13),   // voxel (0,0,0), flat 0  → flag 0, Void
        halo_at(1.0, 1.0, 20.0, 4e13),  // voxel (0,0,1), flat 1  → flag 1, Undefined
        halo_at(1.0, 20.0, 1.0, 3e13),  // voxel (0,1,0), flat 4  → flag 4, Node
        halo_at(20.0, 1.0, 1.0, 2e13),  // voxel (1,0,0), flat 16 → flag 1, Undefined
        halo_at(60.0, 60.0, 60.0, 1e13), // voxel (3,3,3), flat 63 → flag 3, Filament
    ]);

    let classified = classify_haloes(&grid, &catalog, DEFAULT_BOX_LENGTH).unwrap();
    let classes: Vec<WebClass> = classified.iter().map(|c| c.web_class).collect();
    assert_eq!(
        classes,
        [
            WebClass::Void,
            WebClass::Undefined,
            WebClass::Node,
            WebClass::Undefined,
            WebClass::Filament
        ]
    );
    assert_eq!(class_histogram(&classified), [1, 2, 0, 1, 1]);

    // Same grid, same catalog: identical labels on a second run.
    let second = classify_haloes(&grid, &catalog, DEFAULT_BOX_LENGTH).unwrap();
    assert_eq!(classified, second);
}

#[test]
fn test_most_massive_selection_before_classification() {
    let flags: Vec<u16> = vec![2; 8]; // 2×2×2 cube, everything is Wall
    let grid = decode_voxels(&encode_mmf(&flags)).unwrap();

    let catalog = HaloCatalog::from_haloes(vec![
        halo_at(1.0, 1.0, 1.0, 1e12),
        halo_at(40.0, 40.0, 40.0, 9e14),
        halo_at(10.0, 10.0, 10.0, 3e13),
    ]);
    let top = catalog.most_massive(2);
    let classified = classify_haloes(&grid, &top, DEFAULT_BOX_LENGTH).unwrap();

    assert_eq!(classified.len(), 2);
    assert_eq!(classified[0].halo.mass, 9e14);
    assert_eq!(classified[1].halo.mass, 3e13);
    assert!(classified.iter().all(|c| c.web_class == WebClass::Wall));
}

#[test]
fn test_halo_outside_classified_volume_fails_loudly() {
    let flags: Vec<u16> = vec![0; 8];
    let grid = decode_voxels(&encode_mmf(&flags)).unwrap();
    let catalog = HaloCatalog::from_haloes(vec![halo_at(0.0, DEFAULT_BOX_LENGTH, 0.0, 1e12)]);

    match classify_haloes(&grid, &catalog, DEFAULT_BOX_LENGTH) {
        Err(HaloWebError::VoxelIndexOutOfRange {
            position,
            index,
            grid_size,
        }) => {
            assert_eq!(position[1], DEFAULT_BOX_LENGTH);
            assert_eq!(index[1], 2);
            assert_eq!(grid_size, 2);
        }
        other => panic!("expected VoxelIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_malformed_buffers_are_rejected() {
    // One flag short of a 3³ cube.
    let flags: Vec<u16> = vec![0; 26];
    assert_eq!(
        decode_voxels(&encode_mmf(&flags)),
        Err(HaloWebError::PayloadNotCubic { elements: 26 })
    );

    // One byte short of a whole flag.
    let mut bytes = encode_mmf(&vec![0u16; 27]);
    bytes.pop();
    assert!(matches!(
        decode_voxels(&bytes),
        Err(HaloWebError::RaggedMmfPayload { .. })
    ));
}
