//! Deterministic test inputs.
//!
//! Every entry is drawn from uniform (0, 1), real and imaginary parts alike, so a seed
//! reproduces a case exactly. Structured helpers shift the diagonal past the Gershgorin
//! bound, which makes the band, packed and dense Hermitian matrices positive definite.
//! Every off-diagonal magnitude is below `√2`, so a row with `r` of them needs a shift
//! above `r·√2`; dense and packed rows have `n - 1`, so `n` suffices.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Uniform;

use crate::flags::Uplo;
use crate::scalar::{RealScalar, Scalar};

pub struct Generator {
    rng: ChaCha8Rng,
    unit: Uniform<f64>,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Generator {
            rng: ChaCha8Rng::seed_from_u64(seed),
            unit: Uniform::new(0.0, 1.0),
        }
    }

    pub fn scalar<T: Scalar>(&mut self) -> T {
        let re = T::Real::from_f64(self.rng.sample(self.unit));
        if T::IS_COMPLEX {
            let im = T::Real::from_f64(self.rng.sample(self.unit));
            T::from_parts(re, im)
        } else {
            T::from_real(re)
        }
    }

    pub fn fill<T: Scalar>(&mut self, buf: &mut [T]) {
        for x in buf.iter_mut() {
            *x = self.scalar();
        }
    }

    pub fn vec<T: Scalar>(&mut self, len: usize) -> Vec<T> {
        let mut out = vec![T::zero(); len];
        self.fill(&mut out);
        out
    }
}

/// `value` rounded up to a multiple of `align`.
pub fn roundup(value: i64, align: i64) -> i64 {
    if align <= 1 {
        return value;
    }
    (value + align - 1) / align * align
}

/// Leading dimension for `rows` rows: at least one, padded to `align`.
pub fn leading_dim(rows: i64, align: i64) -> i64 {
    roundup(rows.max(1), align)
}

/// Offset of element `(i, j)` (0-based, inside the stored triangle) in packed storage.
pub fn packed_index(uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    match uplo {
        Uplo::Upper => i + j * (j + 1) / 2,
        Uplo::Lower => i + j * (2 * n - j - 1) / 2,
    }
}

fn shift_diagonal<T: Scalar>(x: &mut T, shift: f64) {
    *x = T::from_real(x.re() + T::Real::from_f64(shift));
}

/// Diagonal shift that makes a Hermitian band matrix with `kd` off-diagonals strictly
/// diagonally dominant: `n + 2·min(kd, n - 1)·√2`.
pub fn band_shift(n: usize, kd: usize) -> f64 {
    let width = kd.min(n.saturating_sub(1));
    n as f64 + 2.0 * width as f64 * std::f64::consts::SQRT_2
}

/// Shift the diagonal of a band matrix stored with `kd` off-diagonals by
/// [`band_shift`].
pub fn make_band_dominant<T: Scalar>(uplo: Uplo, n: usize, kd: usize, ab: &mut [T], ldab: usize) {
    let row = match uplo {
        Uplo::Upper => kd,
        Uplo::Lower => 0,
    };
    let shift = band_shift(n, kd);
    for j in 0..n {
        shift_diagonal(&mut ab[row + j * ldab], shift);
    }
}

/// Add `n` to the diagonal of a packed triangle.
pub fn make_packed_dominant<T: Scalar>(uplo: Uplo, n: usize, ap: &mut [T]) {
    for i in 0..n {
        shift_diagonal(&mut ap[packed_index(uplo, n, i, i)], n as f64);
    }
}

/// Add `n` to the diagonal of a dense matrix.
pub fn make_dense_dominant<T: Scalar>(n: usize, a: &mut [T], lda: usize) {
    for i in 0..n {
        shift_diagonal(&mut a[i + i * lda], n as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<c64> = Generator::new(7).vec(16);
        let b: Vec<c64> = Generator::new(7).vec(16);
        assert_eq!(a, b);
        assert!(a.iter().all(|z| (0.0..1.0).contains(&z.re) && (0.0..1.0).contains(&z.im)));
    }

    #[test]
    fn roundup_pads_to_alignment() {
        assert_eq!(roundup(10, 1), 10);
        assert_eq!(roundup(10, 8), 16);
        assert_eq!(roundup(16, 8), 16);
        assert_eq!(leading_dim(0, 4), 4);
    }

    #[test]
    fn packed_diagonal_offsets() {
        let n = 4;
        let upper: Vec<usize> = (0..n).map(|i| packed_index(Uplo::Upper, n, i, i)).collect();
        let lower: Vec<usize> = (0..n).map(|i| packed_index(Uplo::Lower, n, i, i)).collect();
        assert_eq!(upper, vec![0, 2, 5, 9]);
        assert_eq!(lower, vec![0, 4, 7, 9]);
        assert_eq!(packed_index(Uplo::Upper, n, 1, 3), 7);
        assert_eq!(packed_index(Uplo::Lower, n, 3, 1), 6);
    }

    #[test]
    fn wide_band_on_small_matrix_is_still_dominant() {
        // kd far above n: each row carries n - 1 off-diagonals of magnitude up to √2
        let (n, kd) = (4, 12);
        let ldab = kd + 1;
        let mut ab: Vec<c64> = Generator::new(5).vec(ldab * n);
        make_band_dominant(Uplo::Lower, n, kd, &mut ab, ldab);
        let at = |i: usize, j: usize| ab[(i.max(j) - i.min(j)) + i.min(j) * ldab];
        for r in 0..n {
            let off: f64 = (0..n).filter(|&c| c != r).map(|c| at(r, c).norm()).sum();
            assert_eq!(at(r, r).im, 0.0);
            assert!(at(r, r).re > off, "row {}: {} <= {}", r, at(r, r).re, off);
        }
        assert_eq!(band_shift(1, 12), 1.0);
        assert!(band_shift(4, 12) > 2.0 * 3.0 * std::f64::consts::SQRT_2);
    }

    #[test]
    fn dominance_makes_diagonal_real() {
        let mut ap: Vec<c64> = Generator::new(1).vec(6);
        make_packed_dominant(Uplo::Lower, 3, &mut ap);
        for i in [0, 3, 5] {
            assert_eq!(ap[i].im, 0.0);
            assert!(ap[i].re >= 3.0);
        }
    }
}
