//! Per-version/per-level tables: error-correction level, symbol version,
//! block layout and alignment-pattern positions.

use crate::error::{QrError, QrResult};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum EccLevel {
    L,
    M,
    Q,
    H,
}

impl EccLevel {
    pub fn from_str(s: &str) -> QrResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QrError::InvalidEccLevel),
        }
    }

    // The per-version tables below are laid out with this scrambled index,
    // inherited from the reference encoder this crate's data format is
    // interoperable with. Do not "fix" this to a natural L,M,Q,H order: it
    // would silently transpose every table lookup.
    pub(crate) fn table_index(self) -> usize {
        match self {
            Self::M => 0,
            Self::L => 1,
            Self::H => 2,
            Self::Q => 3,
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Version(u8);

impl Version {
    pub fn new(v: usize) -> QrResult<Self> {
        if (1..=40).contains(&v) {
            Ok(Self(v as u8))
        } else {
            Err(QrError::InvalidVersion)
        }
    }

    pub fn value(self) -> usize {
        self.0 as usize
    }

    /// Symbol width/height in modules: N = 4*version + 17.
    pub fn width(self) -> usize {
        4 * self.value() + 17
    }

    pub fn alignment_centers(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.value() - 1]
    }

    pub(crate) fn entry(self) -> &'static VersionEntry {
        &VERSION_TABLE[self.value() - 1]
    }

    /// ECC codewords per block, for the given level.
    pub fn ecc_per_block(self, ecl: EccLevel) -> usize {
        self.entry().ecc_per_block[ecl.table_index()]
    }

    /// Number of error-correction blocks, for the given level.
    pub fn num_blocks(self, ecl: EccLevel) -> usize {
        self.entry().num_blocks[ecl.table_index()]
    }
}

#[derive(Copy, Clone)]
pub(crate) struct VersionEntry {
    pub ecc_per_block: [usize; 4],
    pub num_blocks: [usize; 4],
}

// Global constants
//------------------------------------------------------------------------------

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// Row order is [table_index 0, 1, 2, 3] i.e. [M, L, H, Q] per
// `EccLevel::table_index`, matching the layout of the reference tables
// this crate's output is interoperable with.
static VERSION_TABLE: [VersionEntry; 40] = [
    VersionEntry { ecc_per_block: [ 10, 7, 17, 13 ], num_blocks: [ 1, 1, 1, 1 ] },
    VersionEntry { ecc_per_block: [ 16, 10, 28, 22 ], num_blocks: [ 1, 1, 1, 1 ] },
    VersionEntry { ecc_per_block: [ 26, 15, 22, 18 ], num_blocks: [ 1, 1, 2, 2 ] },
    VersionEntry { ecc_per_block: [ 18, 20, 16, 26 ], num_blocks: [ 2, 1, 4, 2 ] },
    VersionEntry { ecc_per_block: [ 24, 26, 22, 18 ], num_blocks: [ 2, 1, 4, 4 ] },
    VersionEntry { ecc_per_block: [ 16, 18, 28, 24 ], num_blocks: [ 4, 2, 4, 4 ] },
    VersionEntry { ecc_per_block: [ 18, 20, 26, 18 ], num_blocks: [ 4, 2, 5, 6 ] },
    VersionEntry { ecc_per_block: [ 22, 24, 26, 22 ], num_blocks: [ 4, 2, 6, 6 ] },
    VersionEntry { ecc_per_block: [ 22, 30, 24, 20 ], num_blocks: [ 5, 2, 8, 8 ] },
    VersionEntry { ecc_per_block: [ 26, 18, 28, 24 ], num_blocks: [ 5, 4, 8, 8 ] },
    VersionEntry { ecc_per_block: [ 30, 20, 24, 28 ], num_blocks: [ 5, 4, 11, 8 ] },
    VersionEntry { ecc_per_block: [ 22, 24, 28, 26 ], num_blocks: [ 8, 4, 11, 10 ] },
    VersionEntry { ecc_per_block: [ 22, 26, 22, 24 ], num_blocks: [ 9, 4, 16, 12 ] },
    VersionEntry { ecc_per_block: [ 24, 30, 24, 20 ], num_blocks: [ 9, 4, 16, 16 ] },
    VersionEntry { ecc_per_block: [ 24, 22, 24, 30 ], num_blocks: [ 10, 6, 18, 12 ] },
    VersionEntry { ecc_per_block: [ 28, 24, 30, 24 ], num_blocks: [ 10, 6, 16, 17 ] },
    VersionEntry { ecc_per_block: [ 28, 28, 28, 28 ], num_blocks: [ 11, 6, 19, 16 ] },
    VersionEntry { ecc_per_block: [ 26, 30, 28, 28 ], num_blocks: [ 13, 6, 21, 18 ] },
    VersionEntry { ecc_per_block: [ 26, 28, 26, 26 ], num_blocks: [ 14, 7, 25, 21 ] },
    VersionEntry { ecc_per_block: [ 26, 28, 28, 30 ], num_blocks: [ 16, 8, 25, 20 ] },
    VersionEntry { ecc_per_block: [ 26, 28, 30, 28 ], num_blocks: [ 17, 8, 25, 23 ] },
    VersionEntry { ecc_per_block: [ 28, 28, 24, 30 ], num_blocks: [ 17, 9, 34, 23 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 18, 9, 30, 25 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 20, 10, 32, 27 ] },
    VersionEntry { ecc_per_block: [ 28, 26, 30, 30 ], num_blocks: [ 21, 12, 35, 29 ] },
    VersionEntry { ecc_per_block: [ 28, 28, 30, 28 ], num_blocks: [ 23, 12, 37, 34 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 25, 12, 40, 34 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 26, 13, 42, 35 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 28, 14, 45, 38 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 29, 15, 48, 40 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 31, 16, 51, 43 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 33, 17, 54, 45 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 35, 18, 57, 48 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 37, 19, 60, 51 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 38, 19, 63, 53 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 40, 20, 66, 56 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 43, 21, 70, 59 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 45, 22, 74, 62 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 47, 24, 77, 65 ] },
    VersionEntry { ecc_per_block: [ 28, 30, 30, 30 ], num_blocks: [ 49, 25, 81, 68 ] },
];
