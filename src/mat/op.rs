//! Only the assigning operators are implemented. A by-value `Add`/`Sub`/`Mul`
//! impl would shadow the chaining [Mat22::add], [Mat22::sub] and [Mat22::mul]
//! during method resolution.
use std::ops::{AddAssign, Index, IndexMut, MulAssign, Neg, SubAssign};

use super::{Mat22, MatIndex};

impl Index<usize> for Mat22 {
    type Output = f32;

    fn index(&self, offset: usize) -> &Self::Output {
        &self.0[offset]
    }
}

impl IndexMut<usize> for Mat22 {
    fn index_mut(&mut self, offset: usize) -> &mut Self::Output {
        &mut self.0[offset]
    }
}

impl Index<(usize, usize)> for Mat22 {
    type Output = f32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let index = MatIndex::from(index);
        assert!(index.is_valid(), "Index {index:?} out of bounds");
        &self.0[index.offset_unchecked()]
    }
}

impl IndexMut<(usize, usize)> for Mat22 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let index = MatIndex::from(index);
        assert!(index.is_valid(), "Index {index:?} out of bounds");
        &mut self.0[index.offset_unchecked()]
    }
}

impl AddAssign<&Mat22> for Mat22 {
    fn add_assign(&mut self, rhs: &Mat22) {
        Mat22::add(self, rhs);
    }
}

impl SubAssign<&Mat22> for Mat22 {
    fn sub_assign(&mut self, rhs: &Mat22) {
        Mat22::sub(self, rhs);
    }
}

/// Matrix product, `self = self·rhs`
impl MulAssign<&Mat22> for Mat22 {
    fn mul_assign(&mut self, rhs: &Mat22) {
        Mat22::mul(self, rhs);
    }
}

impl MulAssign<f32> for Mat22 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_uniform(rhs);
    }
}

impl Neg for Mat22 {
    type Output = Mat22;

    fn neg(self) -> Self::Output {
        Self([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }
}

#[cfg(test)]
mod test {
    use crate::Mat22;

    #[test]
    fn index_row_col() {
        let mut m = Mat22::of([1., 2., 3., 4.]);
        assert_eq!(m[(0, 1)], 3.);
        assert_eq!(m[(1, 0)], 2.);
        assert_eq!(m[3], 4.);

        m[(1, 1)] = 9.;
        m[0] = 5.;
        assert_eq!(m.0, [5., 2., 3., 9.]);
    }

    #[test]
    #[should_panic]
    fn index_row_out_of_bounds() {
        let m = Mat22::identity();
        let _value: f32 = m[(2, 0)];
    }

    #[test]
    #[should_panic]
    fn index_col_out_of_bounds() {
        let mut m = Mat22::identity();
        m[(1, 2)] = 1.;
    }

    #[test]
    #[should_panic]
    fn index_offset_out_of_bounds() {
        let m = Mat22::identity();
        let _value: f32 = m[4];
    }

    #[test]
    fn assign_ops() {
        let a = Mat22::of([1., 2., 3., 4.]);
        let mut m = Mat22::identity();
        m += &a;
        assert_eq!(m.0, [2., 2., 3., 5.]);
        m -= &a;
        assert_eq!(m, Mat22::identity());

        m *= &a;
        assert_eq!(m, a);
        m *= 2.;
        assert_eq!(m.0, [2., 4., 6., 8.]);
        assert_eq!((-m).0, [-2., -4., -6., -8.]);
    }

    #[test]
    fn inherent_methods_still_chain() {
        let a = Mat22::of([1., 2., 3., 4.]);
        let mut m = Mat22::zeroes();
        m.add(&a).add(&a).sub(&a).mul(&Mat22::identity());
        assert_eq!(m, a);
    }
}
