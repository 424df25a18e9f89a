//! GF(2^8) log/antilog tables and the Reed–Solomon generator polynomials,
//! computed once and shared immutably for the lifetime of the process.

use std::sync::OnceLock;

const FIELD_SIZE: usize = 256;
const REDUCING_POLY: u16 = 0x11D;

pub(crate) struct GfTables {
    /// MAP[i] = alpha^i, for i in 0..255.
    pub map: [u8; 255],
    /// INVMAP[v] = the exponent i such that MAP[i] == v, for v in 1..=255.
    /// INVMAP[0] is unused; callers must never look up a zero value.
    pub invmap: [u8; 256],
}

impl GfTables {
    fn build() -> Self {
        let mut map = [0u8; 255];
        let mut invmap = [0u8; 256];

        let mut v: u16 = 1;
        for i in 0..255 {
            map[i] = v as u8;
            invmap[v as usize] = i as u8;
            v <<= 1;
            if v >= FIELD_SIZE as u16 {
                v ^= REDUCING_POLY;
            }
        }

        Self { map, invmap }
    }

    pub(crate) fn exp(&self, i: usize) -> u8 {
        self.map[i % 255]
    }

    pub(crate) fn log(&self, v: u8) -> usize {
        debug_assert!(v != 0, "log of zero is undefined in GF(2^8)");
        self.invmap[v as usize] as usize
    }

    pub(crate) fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            0
        } else {
            self.exp(self.log(a) + self.log(b))
        }
    }
}

static GF_TABLES: OnceLock<GfTables> = OnceLock::new();

pub(crate) fn gf_tables() -> &'static GfTables {
    GF_TABLES.get_or_init(GfTables::build)
}

/// Generator polynomials GenPoly[0..=30], coefficients stored as exponents
/// to alpha, leading coefficient (always alpha^0 = 1) omitted. GenPoly[0]
/// is empty. Degree 30 is the largest `ecc_per_block` reaches (e.g.
/// version 40 at level L).
static GENERATOR_POLYNOMIALS: OnceLock<Vec<Vec<u8>>> = OnceLock::new();

pub(crate) fn generator_polynomial(degree: usize) -> &'static [u8] {
    let table = GENERATOR_POLYNOMIALS.get_or_init(build_generator_polynomials);
    &table[degree]
}

fn build_generator_polynomials() -> Vec<Vec<u8>> {
    let gf = gf_tables();
    let mut polys: Vec<Vec<u8>> = Vec::with_capacity(31);
    polys.push(Vec::new());

    // Coefficients of the running monic polynomial, value domain, highest
    // degree first; coeffs[0] is always 1. Multiplying by (x - alpha^i)
    // (same as x + alpha^i in characteristic 2) grows the degree by one
    // each step; GenPoly[k] is the log-domain form with the leading 1
    // dropped, matching JIS X 0510:2004 Appendix A.
    let mut coeffs: Vec<u8> = vec![1];
    for i in 0..30 {
        let root = gf.exp(i);
        let mut next = vec![0u8; coeffs.len() + 1];
        for (j, &c) in coeffs.iter().enumerate() {
            next[j] ^= c;
            next[j + 1] ^= gf.mul(c, root);
        }
        coeffs = next;
        polys.push(coeffs[1..].iter().map(|&v| gf.log(v) as u8).collect());
    }

    polys
}

#[cfg(test)]
mod gf_tests {
    use super::*;

    #[test]
    fn test_map_invmap_roundtrip() {
        let gf = gf_tables();
        for v in 1u16..=255 {
            let e = gf.log(v as u8);
            assert_eq!(gf.exp(e) as u16, v);
        }
    }

    #[test]
    fn test_map_is_full_nonzero_cycle() {
        let gf = gf_tables();
        assert_eq!(gf.exp(0), 1);
        assert_eq!(gf.exp(255), gf.exp(0));
    }

    #[test]
    fn test_genpoly_degree_lengths() {
        for k in 0..=30 {
            assert_eq!(generator_polynomial(k).len(), k);
        }
    }

    #[test]
    fn test_genpoly_1_is_alpha_0() {
        // (x - alpha^0), stored coefficient is alpha^0 = exponent 0.
        assert_eq!(generator_polynomial(1), &[0]);
    }
}
