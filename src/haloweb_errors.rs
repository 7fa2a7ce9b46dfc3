use thiserror::Error;

/// Crate-wide error type.
///
/// Every failure mode of the core is a deterministic function of its input: there are no
/// transient errors and nothing is retried internally. All variants propagate to the caller
/// unmodified.
#[derive(Error, Debug)]
pub enum HaloWebError {
    #[error("Invalid redshift {0}: must be strictly greater than -1")]
    InvalidRedshift(f64),

    #[error("Invalid integration bounds: lower bound {lower} exceeds upper bound {upper}")]
    InvalidIntegrationBounds { lower: f64, upper: f64 },

    #[error("Invalid panel count {0}: at least one Simpson panel is required")]
    InvalidPanelCount(usize),

    #[error("Truncated MMF buffer: {len} bytes, header and checksum alone take {min_len}")]
    TruncatedMmfBuffer { len: usize, min_len: usize },

    #[error("MMF payload of {elements} voxel flags is not a perfect cube")]
    PayloadNotCubic { elements: usize },

    #[error("MMF payload of {payload_bytes} bytes is not a whole number of {element_bytes}-byte flags")]
    RaggedMmfPayload {
        payload_bytes: usize,
        element_bytes: usize,
    },

    #[error(
        "Voxel index {index:?} out of range for a {grid_size}³ grid, \
         mapped from position {position:?} Mpc/h; \
         check the box length against the grid resolution"
    )]
    VoxelIndexOutOfRange {
        position: [f64; 3],
        index: [i64; 3],
        grid_size: usize,
    },

    #[error("Unknown NEXUS+ flag {flag} at voxel {index:?}")]
    UnknownWebClass { flag: u16, index: [usize; 3] },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Halo table parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PartialEq for HaloWebError {
    fn eq(&self, other: &Self) -> bool {
        use HaloWebError::*;
        match (self, other) {
            (InvalidRedshift(a), InvalidRedshift(b)) => a == b,
            (
                InvalidIntegrationBounds { lower: a, upper: b },
                InvalidIntegrationBounds { lower: c, upper: d },
            ) => a == c && b == d,
            (InvalidPanelCount(a), InvalidPanelCount(b)) => a == b,
            (
                TruncatedMmfBuffer { len: a, min_len: b },
                TruncatedMmfBuffer { len: c, min_len: d },
            ) => a == c && b == d,
            (PayloadNotCubic { elements: a }, PayloadNotCubic { elements: b }) => a == b,
            (
                RaggedMmfPayload {
                    payload_bytes: a,
                    element_bytes: b,
                },
                RaggedMmfPayload {
                    payload_bytes: c,
                    element_bytes: d,
                },
            ) => a == c && b == d,
            (
                VoxelIndexOutOfRange {
                    position: p1,
                    index: i1,
                    grid_size: g1,
                },
                VoxelIndexOutOfRange {
                    position: p2,
                    index: i2,
                    grid_size: g2,
                },
            ) => p1 == p2 && i1 == i2 && g1 == g2,
            (
                UnknownWebClass { flag: f1, index: i1 },
                UnknownWebClass { flag: f2, index: i2 },
            ) => f1 == f2 && i1 == i2,

            // Wrapped errors are not comparable: equality holds on matching variants
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
