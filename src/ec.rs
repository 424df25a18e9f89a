//! Reed–Solomon error-correction codeword computation and the
//! data/ECC interleaving that produces the final transmission-order
//! codeword stream.

use crate::gf::gf_tables;
use crate::metadata::{EccLevel, Version};

/// Computes the ECC codewords for a single data block using the
/// degree-`ecc_len` generator polynomial.
pub(crate) fn ecc_for_block(data: &[u8], ecc_len: usize) -> Vec<u8> {
    let gf = gf_tables();
    let gen = crate::gf::generator_polynomial(ecc_len);

    let mut remainder = data.to_vec();
    remainder.resize(data.len() + ecc_len, 0);

    for i in 0..data.len() {
        let lead = remainder[i];
        if lead == 0 {
            continue;
        }
        let q = gf.log(lead);
        for (j, &g) in gen.iter().enumerate() {
            remainder[i + 1 + j] ^= gf.exp((q + g as usize) % 255);
        }
    }

    remainder.split_off(data.len())
}

/// Splits `data` into `nblocks` blocks per the standard's base/pivot rule:
/// the first `pivot` blocks get `base` codewords, the rest get `base + 1`.
pub(crate) fn blockify(data: &[u8], nblocks: usize) -> Vec<&[u8]> {
    let len = data.len();
    let base = len / nblocks;
    let pivot = nblocks - (len % nblocks);

    let mut blocks = Vec::with_capacity(nblocks);
    let mut offset = 0;
    for j in 0..nblocks {
        let block_len = if j < pivot { base } else { base + 1 };
        blocks.push(&data[offset..offset + block_len]);
        offset += block_len;
    }
    blocks
}

/// Computes per-block ECC and interleaves data and ECC codewords into the
/// final transmission-order stream.
pub(crate) fn augment(data: &[u8], version: Version, ecl: EccLevel) -> Vec<u8> {
    let nblocks = version.num_blocks(ecl);
    let ecc_len = version.ecc_per_block(ecl);

    let data_blocks = blockify(data, nblocks);
    let ecc_blocks: Vec<Vec<u8>> =
        data_blocks.iter().map(|b| ecc_for_block(b, ecc_len)).collect();

    let base = data.len() / nblocks;
    let pivot = nblocks - (data.len() % nblocks);

    let mut out = Vec::with_capacity(data.len() + nblocks * ecc_len);

    for i in 0..base {
        for block in &data_blocks {
            out.push(block[i]);
        }
    }
    for block in &data_blocks[pivot..] {
        out.push(block[base]);
    }
    for i in 0..ecc_len {
        for block in &ecc_blocks {
            out.push(block[i]);
        }
    }

    out
}

#[cfg(test)]
mod ec_tests {
    use super::*;

    #[test]
    fn test_ecc_for_block_matches_known_vector() {
        let data = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let ecc = ecc_for_block(data, 10);
        assert_eq!(&*ecc, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_blockify_even_split() {
        let data: Vec<u8> = (0..16u8).collect();
        let blocks = blockify(&data, 4);
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|b| b.len() == 4));
    }

    #[test]
    fn test_blockify_uneven_split() {
        let data: Vec<u8> = (0..19u8).collect();
        let blocks = blockify(&data, 4);
        assert_eq!(blocks.iter().map(|b| b.len()).collect::<Vec<_>>(), vec![4, 5, 5, 5]);
    }

    #[test]
    fn test_augment_length() {
        let version = Version::new(5).unwrap();
        let ecl = EccLevel::Q;
        // Version 5-Q: 4 blocks of 18 data codewords each, 18 ecc per block.
        let data: Vec<u8> = (0..72u8).collect();
        let out = augment(&data, version, ecl);
        assert_eq!(out.len(), 72 + 4 * 18);
    }

    #[test]
    fn test_divisible_by_generator() {
        // (data || ecc) as a polynomial must be divisible by the
        // generator: reducing it in place (no extra zero-padding, since
        // the ecc codewords already occupy those degree slots) leaves a
        // zero remainder.
        let data = b"CUF\x86W&U\xc2w2\x06\x12\x06g&";
        let ecc_len = 18;
        let ecc = ecc_for_block(data, ecc_len);
        let gf = gf_tables();
        let gen = crate::gf::generator_polynomial(ecc_len);

        let mut combined = data.to_vec();
        combined.extend_from_slice(&ecc);

        for i in 0..data.len() {
            let lead = combined[i];
            if lead == 0 {
                continue;
            }
            let q = gf.log(lead);
            for (j, &g) in gen.iter().enumerate() {
                combined[i + 1 + j] ^= gf.exp((q + g as usize) % 255);
            }
        }

        assert!(combined[data.len()..].iter().all(|&b| b == 0));
    }
}
