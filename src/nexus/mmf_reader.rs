//! Fixed-layout binary decoder for NEXUS+ `.MMF` grid files.
//!
//! An MMF file is a flat byte stream: a 1048-byte header, then G³ unsigned 16-bit
//! little-endian voxel flags in C order, then an 8-byte checksum. The grid side G is not
//! written anywhere — it is solved from the byte length, and a buffer whose payload is not an
//! exact cube of flags is rejected as malformed. Decoding is pure: the same bytes always
//! produce the same grid.

use nom::{bytes::complete::take, IResult};

use crate::constants::{MMF_ELEMENT_BYTES, MMF_FOOTER_BYTES, MMF_HEADER_BYTES};
use crate::haloweb_errors::HaloWebError;
use crate::nexus::voxel_grid::VoxelGrid;

/// Byte layout of one grid-file format.
///
/// The sizes are hard constants of each format, not negotiated; new grid formats are added as
/// new descriptor instances rather than by editing the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmfFormat {
    /// Leading header size in bytes
    pub header_bytes: usize,
    /// Trailing checksum size in bytes
    pub footer_bytes: usize,
    /// Width of one voxel flag in bytes
    pub element_bytes: usize,
}

/// The NEXUS+ all-clean MMF layout.
pub const NEXUS_MMF: MmfFormat = MmfFormat {
    header_bytes: MMF_HEADER_BYTES,
    footer_bytes: MMF_FOOTER_BYTES,
    element_bytes: MMF_ELEMENT_BYTES,
};

impl MmfFormat {
    /// Bytes taken by header and checksum alone.
    pub fn envelope_bytes(&self) -> usize {
        self.header_bytes + self.footer_bytes
    }
}

/// Integer cube root of an exact cube, `None` for anything else.
fn exact_cube_root(elements: usize) -> Option<usize> {
    // cbrt of an exact cube can land a hair under the integer, so round then verify.
    let g = (elements as f64).cbrt().round() as usize;
    (g * g * g == elements).then_some(g)
}

/// Split the stream into header / payload / checksum, returning the payload.
fn payload_section<'a>(
    input: &'a [u8],
    format: &MmfFormat,
    payload_bytes: usize,
) -> IResult<&'a [u8], &'a [u8]> {
    let (input, _header) = take(format.header_bytes)(input)?;
    let (input, payload) = take(payload_bytes)(input)?;
    let (input, _checksum) = take(format.footer_bytes)(input)?;
    Ok((input, payload))
}

/// Decode a NEXUS+ MMF byte buffer into a voxel grid.
///
/// Arguments
/// ---------------
/// * `bytes`: the complete file content, header and checksum included
///
/// Return
/// ----------
/// * the decoded G×G×G [`VoxelGrid`], with G inferred from the buffer length
///
/// Errors
/// ----------
/// * [`HaloWebError::TruncatedMmfBuffer`] when the buffer cannot even hold the envelope
/// * [`HaloWebError::RaggedMmfPayload`] when the payload is not a whole number of flags
/// * [`HaloWebError::PayloadNotCubic`] when the flag count is not a perfect cube
pub fn decode_voxels(bytes: &[u8]) -> Result<VoxelGrid, HaloWebError> {
    decode_voxels_with(bytes, &NEXUS_MMF)
}

/// [`decode_voxels`] against an explicit format descriptor.
pub fn decode_voxels_with(bytes: &[u8], format: &MmfFormat) -> Result<VoxelGrid, HaloWebError> {
    debug_assert_eq!(format.element_bytes, MMF_ELEMENT_BYTES);

    let min_len = format.envelope_bytes();
    if bytes.len() < min_len {
        return Err(HaloWebError::TruncatedMmfBuffer {
            len: bytes.len(),
            min_len,
        });
    }

    let payload_bytes = bytes.len() - min_len;
    if payload_bytes % format.element_bytes != 0 {
        return Err(HaloWebError::RaggedMmfPayload {
            payload_bytes,
            element_bytes: format.element_bytes,
        });
    }

    let elements = payload_bytes / format.element_bytes;
    let grid_size =
        exact_cube_root(elements).ok_or(HaloWebError::PayloadNotCubic { elements })?;

    // Length was validated above, so the section split cannot come up short.
    let (_, payload) = payload_section(bytes, format, payload_bytes)
        .map_err(|_| HaloWebError::TruncatedMmfBuffer {
            len: bytes.len(),
            min_len,
        })?;

    let voxels: Vec<u16> = payload
        .chunks_exact(format.element_bytes)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(VoxelGrid::new(grid_size, voxels))
}
