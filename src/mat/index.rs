use thiserror::Error;

use super::Mat22;

/// Index into a [Mat22]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatIndex {
	pub row: usize,
	pub col: usize,
}

impl MatIndex {
	pub const fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}

	/// Check if this index addresses an element of a 2x2 matrix
	#[inline]
	pub const fn is_valid(&self) -> bool {
		self.row < Mat22::ROWS && self.col < Mat22::COLS
	}

	/// Column-major offset (`row + 2*col`), without checking bounds
	#[inline(always)]
	pub const fn offset_unchecked(self) -> usize {
		self.row + Mat22::ROWS * self.col
	}

	/// Column-major offset (`row + 2*col`)
	#[inline]
	pub fn offset(self) -> Result<usize, OutOfBoundsError> {
		check_row(self.row)?;
		check_col(self.col)?;
		Ok(self.offset_unchecked())
	}
}

impl From<(usize, usize)> for MatIndex {
	fn from(value: (usize, usize)) -> Self {
		let (row, col) = value;
		Self {
			row,
			col,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OutOfBoundsError {
	#[error("Offset out of bounds (actual: {0}, length: 4)")]
	Offset(usize),
	#[error("Row out of bounds (actual: {0}, rows: 2)")]
	Row(usize),
	#[error("Column out of bounds (actual: {0}, cols: 2)")]
	Col(usize),
}

#[inline]
pub(super) fn check_offset(offset: usize) -> Result<usize, OutOfBoundsError> {
	if offset < Mat22::LEN {
		Ok(offset)
	} else {
		Err(OutOfBoundsError::Offset(offset))
	}
}

#[inline]
pub(super) fn check_row(row: usize) -> Result<usize, OutOfBoundsError> {
	if row < Mat22::ROWS {
		Ok(row)
	} else {
		Err(OutOfBoundsError::Row(row))
	}
}

#[inline]
pub(super) fn check_col(col: usize) -> Result<usize, OutOfBoundsError> {
	if col < Mat22::COLS {
		Ok(col)
	} else {
		Err(OutOfBoundsError::Col(col))
	}
}

#[cfg(test)]
mod test {
	use super::{MatIndex, OutOfBoundsError};

	#[test]
	fn column_major_offsets() {
		assert_eq!(MatIndex::new(0, 0).offset(), Ok(0));
		assert_eq!(MatIndex::new(1, 0).offset(), Ok(1));
		assert_eq!(MatIndex::new(0, 1).offset(), Ok(2));
		assert_eq!(MatIndex::new(1, 1).offset(), Ok(3));
	}

	#[test]
	fn valid_iff_offset_ok() {
		for row in 0..4 {
			for col in 0..4 {
				let index = MatIndex::from((row, col));
				assert_eq!(index.is_valid(), index.offset().is_ok());
			}
		}
	}

	#[test]
	fn out_of_bounds() {
		assert_eq!(MatIndex::new(2, 0).offset(), Err(OutOfBoundsError::Row(2)));
		assert_eq!(MatIndex::new(0, 5).offset(), Err(OutOfBoundsError::Col(5)));
		assert!(!MatIndex::new(1, 2).is_valid());
	}
}
