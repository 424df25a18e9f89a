//! The public builder: resolves options, runs the encode/ECC/matrix
//! pipeline, and returns the finished module matrix.

use crate::codec::{self, Mode};
use crate::config::{self, QrData};
use crate::ec;
use crate::error::QrResult;
use crate::mask;
use crate::matrix::Matrix;
use crate::metadata::{EccLevel, Version};

pub struct QrBuilder {
    data: QrData,
    ecl: Option<EccLevel>,
    mode: Option<Mode>,
    version: Option<Version>,
    mask: Option<u8>,
}

pub struct QrCode {
    version: Version,
    ecl: EccLevel,
    mask: u8,
    matrix: Vec<Vec<u8>>,
}

impl QrCode {
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ecl(&self) -> EccLevel {
        self.ecl
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// The final N×N matrix, row-major, 1 = dark module.
    pub fn modules(&self) -> &[Vec<u8>] {
        &self.matrix
    }
}

impl QrBuilder {
    pub fn new(data: QrData) -> Self {
        Self { data, ecl: None, mode: None, version: None, mask: None }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(QrData::Text(text.into()))
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(QrData::Bytes(bytes.into()))
    }

    pub fn ec_level(&mut self, ecl: EccLevel) -> &mut Self {
        self.ecl = Some(ecl);
        self
    }

    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn mask(&mut self, mask: u8) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn build(&mut self) -> QrResult<QrCode> {
        println!("\nConstructing QR code...");

        let data = std::mem::replace(&mut self.data, QrData::Bytes(Vec::new()));
        let cfg = config::resolve(data, self.ecl, self.mode, self.version, self.mask)?;

        println!(
            "Resolved mode={:?} version={} ecl={:?}",
            cfg.mode,
            cfg.version.value(),
            cfg.ecl
        );

        println!("Encoding payload...");
        let data_codewords =
            codec::encode(cfg.mode, &cfg.payload, cfg.char_count, cfg.version, cfg.ecl);

        println!("Computing error correction and interleaving...");
        let codewords = ec::augment(&data_codewords, cfg.version, cfg.ecl);

        println!("Stamping functional patterns...");
        let mut matrix = Matrix::build_skeleton(cfg.version);

        println!("Placing data in zig-zag order...");
        matrix.place_data(&codewords);

        let ecc_index = cfg.ecl.table_index();
        let chosen_mask = match cfg.mask {
            Some(m) => {
                println!("Applying fixed mask {m}...");
                mask::apply_fixed_mask(&mut matrix, ecc_index, m);
                m
            }
            None => {
                println!("Selecting best mask...");
                mask::select_and_apply_best_mask(&mut matrix, ecc_index)
            }
        };
        println!("Done, mask {chosen_mask} selected.");

        Ok(QrCode { version: cfg.version, ecl: cfg.ecl, mask: chosen_mask, matrix: matrix.into_rows() })
    }
}
