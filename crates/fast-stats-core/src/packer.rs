//! Column packer: gathers one row of a lane group into a [`Lane`]
//!
//! Lane `k` of a packed value always holds column `k` of the group. The
//! packer builds the lane from a plain array in column order, so no load
//! order of the underlying vector type can leak into the results.

use crate::error::{Error, Result};
use crate::lane::Lane;
use std::marker::PhantomData;

/// Borrowed view over exactly `L::WIDTH` equal-length columns
#[derive(Debug)]
pub struct ColumnPacker<'a, L: Lane, C> {
    columns: &'a [C],
    rows: usize,
    _lane: PhantomData<L>,
}

impl<'a, L, C> ColumnPacker<'a, L, C>
where
    L: Lane,
    C: AsRef<[L::Element]>,
{
    /// Create a packer over one lane group
    ///
    /// Fails when the group does not hold exactly one column per lane or the
    /// columns differ in length.
    pub fn new(columns: &'a [C]) -> Result<Self> {
        let lanes = L::WIDTH.lanes();
        if columns.len() != lanes {
            return Err(Error::size_mismatch(lanes, columns.len(), "lane group"));
        }

        let rows = columns[0].as_ref().len();
        for (column, values) in columns.iter().enumerate().skip(1) {
            let actual = values.as_ref().len();
            if actual != rows {
                return Err(Error::RaggedColumns {
                    column,
                    expected: rows,
                    actual,
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            _lane: PhantomData,
        })
    }

    /// Number of rows shared by every column in the group
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Pack row `row` of every column into one lane
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`
    #[inline]
    pub fn pack(&self, row: usize) -> L {
        let mut values = L::Array::default();
        for (slot, column) in values.as_mut().iter_mut().zip(self.columns) {
            *slot = column.as_ref()[row];
        }
        L::from_array(values)
    }

    /// Checked variant of [`pack`](Self::pack)
    pub fn try_pack(&self, row: usize) -> Result<L> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        Ok(self.pack(row))
    }

    /// Packed lanes for every row, in row order
    pub fn lanes(&self) -> impl Iterator<Item = L> + '_ {
        (0..self.rows).map(move |row| self.pack(row))
    }
}
