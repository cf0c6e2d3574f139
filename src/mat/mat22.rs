use bytemuck::{Pod, TransparentWrapper, Zeroable};

use crate::Mat22Error;

use super::index::{check_col, check_offset, check_row, MatIndex, OutOfBoundsError};

/// 2x2 matrix, stored column-major
///
/// | offset | element      |
/// |--------|--------------|
/// | 0      | (row 0, col 0) |
/// | 1      | (row 1, col 0) |
/// | 2      | (row 0, col 1) |
/// | 3      | (row 1, col 1) |
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, TransparentWrapper)]
pub struct Mat22(pub [f32; 4]);

impl Default for Mat22 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 4]> for Mat22 {
    fn from(value: [f32; 4]) -> Self {
        Self(value)
    }
}

impl From<Mat22> for [f32; 4] {
    fn from(value: Mat22) -> Self {
        value.0
    }
}

/// Copy from a flat buffer, which must hold exactly 4 elements
impl TryFrom<&[f32]> for Mat22 {
    type Error = Mat22Error;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        Mat22::from_slice(value).copied()
    }
}

impl AsRef<[f32; 4]> for Mat22 {
    fn as_ref(&self) -> &[f32; 4] {
        &self.0
    }
}

impl AsMut<[f32; 4]> for Mat22 {
    fn as_mut(&mut self) -> &mut [f32; 4] {
        &mut self.0
    }
}

#[cfg(any(test, feature="approx"))]
impl float_cmp::ApproxEq for Mat22 {
    type Margin = float_cmp::F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        <&[f32] as float_cmp::ApproxEq>::approx_eq(&self.0, &other.0, margin)
    }
}

fn bad_length(actual: usize) -> Mat22Error {
    log::debug!("Rejected buffer of length {actual} as a 2x2 matrix");
    Mat22Error::BadLength { actual, expected: Mat22::LEN }
}

impl Mat22 {
    pub const ROWS: usize = 2;
    pub const COLS: usize = 2;
    /// Number of elements
    pub const LEN: usize = Self::ROWS * Self::COLS;

    /// Create from optional values, defaulting to identity
    pub const fn create(values: Option<[f32; 4]>) -> Self {
        match values {
            Some(values) => Self::of(values),
            None => Self::identity(),
        }
    }

    /// Create from column-major array
    pub const fn of(v: [f32; 4]) -> Self {
        Self(v)
    }

    /// Create matrix with all zeroes
    pub const fn zeroes() -> Self {
        Self([0.; 4])
    }

    /// Create an identity matrix
    pub const fn identity() -> Self {
        Self([
            1., 0.,
            0., 1.,
        ])
    }

    /// View a flat buffer as a matrix
    pub fn from_slice(data: &[f32]) -> Result<&Self, Mat22Error> {
        let data: &[f32; 4] = data.try_into()
            .map_err(|_| bad_length(data.len()))?;
        Ok(Self::wrap_ref(data))
    }

    /// View a flat buffer as a matrix, so operations write through to it
    pub fn from_slice_mut(data: &mut [f32]) -> Result<&mut Self, Mat22Error> {
        let len = data.len();
        let data: &mut [f32; 4] = data.try_into()
            .map_err(|_| bad_length(len))?;
        Ok(Self::wrap_mut(data))
    }

    pub const fn data(&self) -> &[f32] {
        &self.0
    }

    /// Raw column-major bytes, in native endianness
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Overwrite every element with those of `src`
    pub fn copy(&mut self, src: &Mat22) -> &mut Self {
        self.0 = src.0;
        self
    }

    /// Set every element to zero
    pub fn zero(&mut self) -> &mut Self {
        self.0 = [0.; 4];
        self
    }

    /// Reset to identity
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Set element at flat offset `i`
    pub fn set(&mut self, i: usize, value: f32) -> Result<&mut Self, OutOfBoundsError> {
        let i = check_offset(i)?;
        self.0[i] = value;
        Ok(self)
    }

    /// Get element at flat offset `i`
    pub fn get(&self, i: usize) -> Result<f32, OutOfBoundsError> {
        Ok(self.0[check_offset(i)?])
    }

    pub fn set_value(&mut self, row: usize, col: usize, value: f32) -> Result<&mut Self, OutOfBoundsError> {
        let offset = MatIndex::new(row, col).offset()?;
        self.0[offset] = value;
        Ok(self)
    }

    pub fn get_value(&self, row: usize, col: usize) -> Result<f32, OutOfBoundsError> {
        let offset = MatIndex::new(row, col).offset()?;
        Ok(self.0[offset])
    }

    pub fn set_row(&mut self, row: usize, values: [f32; 2]) -> Result<&mut Self, OutOfBoundsError> {
        let row = check_row(row)?;
        self.0[row] = values[0];
        self.0[row + 2] = values[1];
        Ok(self)
    }

    pub fn set_col(&mut self, col: usize, values: [f32; 2]) -> Result<&mut Self, OutOfBoundsError> {
        let col = check_col(col)?;
        self.0[2*col] = values[0];
        self.0[2*col + 1] = values[1];
        Ok(self)
    }

    /// Copy of the `row`-th row
    pub fn get_row(&self, row: usize) -> Result<[f32; 2], OutOfBoundsError> {
        let mut out = [0.; 2];
        self.get_row_into(row, &mut out)?;
        Ok(out)
    }

    /// Write the `row`-th row into `out`
    pub fn get_row_into<'a>(&self, row: usize, out: &'a mut [f32; 2]) -> Result<&'a mut [f32; 2], OutOfBoundsError> {
        let row = check_row(row)?;
        out[0] = self.0[row];
        out[1] = self.0[row + 2];
        Ok(out)
    }

    /// Copy of the `col`-th column
    pub fn get_col(&self, col: usize) -> Result<[f32; 2], OutOfBoundsError> {
        let mut out = [0.; 2];
        self.get_col_into(col, &mut out)?;
        Ok(out)
    }

    /// Write the `col`-th column into `out`
    pub fn get_col_into<'a>(&self, col: usize, out: &'a mut [f32; 2]) -> Result<&'a mut [f32; 2], OutOfBoundsError> {
        let col = check_col(col)?;
        out[0] = self.0[2*col];
        out[1] = self.0[2*col + 1];
        Ok(out)
    }

    /// Store `a + b`
    pub fn sum(&mut self, a: &Mat22, b: &Mat22) -> &mut Self {
        self.0 = [
            a.0[0] + b.0[0],
            a.0[1] + b.0[1],
            a.0[2] + b.0[2],
            a.0[3] + b.0[3],
        ];
        self
    }

    /// Store `a - b`
    pub fn diff(&mut self, a: &Mat22, b: &Mat22) -> &mut Self {
        self.0 = [
            a.0[0] - b.0[0],
            a.0[1] - b.0[1],
            a.0[2] - b.0[2],
            a.0[3] - b.0[3],
        ];
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, m: &Mat22) -> &mut Self {
        self.0[0] += m.0[0];
        self.0[1] += m.0[1];
        self.0[2] += m.0[2];
        self.0[3] += m.0[3];
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(&mut self, m: &Mat22) -> &mut Self {
        self.0[0] -= m.0[0];
        self.0[1] -= m.0[1];
        self.0[2] -= m.0[2];
        self.0[3] -= m.0[3];
        self
    }

    /// Store the matrix product `a·b`
    ///
    /// `self` can't alias either operand; both are read in full before writing.
    pub fn prod(&mut self, a: &Mat22, b: &Mat22) -> &mut Self {
        let [a00, a10, a01, a11] = a.0;
        let [b00, b10, b01, b11] = b.0;

        self.0 = [
            a00*b00 + a01*b10,
            a10*b00 + a11*b10,
            a00*b01 + a01*b11,
            a10*b01 + a11*b11,
        ];
        self
    }

    /// Matrix product `self·rhs`, as a new matrix
    pub fn matmul(&self, rhs: &Mat22) -> Self {
        let mut res = Self::zeroes();
        res.prod(self, rhs);
        res
    }

    /// In-place matrix product `self = self·m`
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&mut self, m: &Mat22) -> &mut Self {
        let lhs = *self;
        self.prod(&lhs, m)
    }

    /// Multiply column 0 by `v[0]` and column 1 by `v[1]`
    pub fn scale(&mut self, v: [f32; 2]) -> &mut Self {
        self.0[0] *= v[0];
        self.0[1] *= v[0];

        self.0[2] *= v[1];
        self.0[3] *= v[1];
        self
    }

    /// Multiply every element by `scalar`
    pub fn scale_uniform(&mut self, scalar: f32) -> &mut Self {
        for e in self.0.iter_mut() {
            *e *= scalar;
        }
        self
    }

    /// In-place transpose
    pub fn transpose(&mut self) -> &mut Self {
        self.0.swap(1, 2); // (1, 0) <-> (0, 1)
        self
    }

    pub const fn transposed(&self) -> Self {
        Self([
            self.0[0], self.0[2],
            self.0[1], self.0[3],
        ])
    }

    /// Compute matrix determinant
    pub fn det(&self) -> f32 {
        self.0[0] * self.0[3] - self.0[2] * self.0[1]
    }

    /// Matrix inverse
    ///
    /// Returns None if this matrix is not invertible, or if its inverse
    /// isn't representable as finite `f32`s
    pub fn inv(&self) -> Option<Mat22> {
        let det = self.det();
        if det == 0. || !det.is_finite() {
            log::trace!("Singular matrix {:?} has no inverse", self.0);
            return None;
        }

        // Divide directly: 1/det overflows for subnormal det, and 0 * inf is NaN
        let res = Self::of([
             self.0[3] / det, -self.0[1] / det,
            -self.0[2] / det,  self.0[0] / det,
        ]);
        if !res.0.iter().all(|e| e.is_finite()) {
            log::trace!("Inverse of {:?} overflows", self.0);
            return None;
        }
        Some(res)
    }
}
