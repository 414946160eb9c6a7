//! A fixed-size set of grid cells using const generics.
//!
//! An `N×N` grid is packed into an unsigned integer `T`, bit index
//! `row * N + col`. The crate works with `BitGrid<u128, 10>` (see
//! [`CellGrid`](crate::config::CellGrid)); smaller instantiations are handy
//! in tests. `N * N` must not exceed the bit width of `T`.
//!
//! Unlike a plain bitboard this type has set semantics: out-of-range
//! coordinates are never members, and inserting one is a rejected no-op.
//! Iteration is in ascending bit order, which makes [`BitGrid::choose`] a
//! uniform draw over an ordered snapshot, reproducible under a seeded
//! generator.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr};

use num_traits::{PrimInt, Unsigned};
use rand::Rng;

use crate::common::Coord;

/// A set of cells on an N×N grid, stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Number of cells on the grid (`N * N`).
    const CELL_COUNT: usize = N * N;

    #[inline]
    fn all_bits() -> T {
        if Self::CELL_COUNT == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELL_COUNT) - T::one()
        }
    }

    #[inline]
    fn bit_index(coord: Coord) -> Option<usize> {
        let (row, col) = coord;
        if row < N && col < N {
            Some(row * N + col)
        } else {
            None
        }
    }

    /// The empty set.
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// The set containing every cell of the grid.
    #[inline]
    pub fn full() -> Self {
        BitGrid { bits: Self::all_bits() }
    }

    /// All cells of row `row`, or the empty set if `row` is out of range.
    pub fn row(row: usize) -> Self {
        let mut grid = Self::new();
        for col in 0..N {
            grid.insert((row, col));
        }
        grid
    }

    /// All cells of column `col`, or the empty set if `col` is out of range.
    pub fn column(col: usize) -> Self {
        let mut grid = Self::new();
        for row in 0..N {
            grid.insert((row, col));
        }
        grid
    }

    /// The checkerboard subset of cells where `row + col` is even.
    pub fn even_parity() -> Self {
        let mut grid = Self::new();
        for row in 0..N {
            for col in 0..N {
                if (row + col) % 2 == 0 {
                    grid.insert((row, col));
                }
            }
        }
        grid
    }

    /// Membership test. Out-of-range coordinates are never members.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::bit_index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add a cell. Returns `true` if the cell was newly inserted; inserting
    /// an out-of-range coordinate is rejected and returns `false`.
    #[inline]
    pub fn insert(&mut self, coord: Coord) -> bool {
        match Self::bit_index(coord) {
            Some(idx) => {
                let bit = T::one() << idx;
                let fresh = (self.bits & bit).is_zero();
                self.bits = self.bits | bit;
                fresh
            }
            None => false,
        }
    }

    /// Remove a cell. Returns `true` if the cell was present.
    #[inline]
    pub fn remove(&mut self, coord: Coord) -> bool {
        match Self::bit_index(coord) {
            Some(idx) => {
                let bit = T::one() << idx;
                let present = !(self.bits & bit).is_zero();
                self.bits = self.bits & !bit;
                present
            }
            None => false,
        }
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` when the set holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// The first cell in ascending order.
    pub fn first(&self) -> Option<Coord> {
        self.iter().next()
    }

    /// The `k`-th cell (zero-based) in ascending order.
    pub fn nth(&self, k: usize) -> Option<Coord> {
        self.iter().nth(k)
    }

    /// Iterator over the cells of the set in ascending order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells { grid: *self, idx: 0 }
    }

    /// Draw a cell uniformly at random. The draw is rank-select over the
    /// ordered snapshot of the set, so a seeded generator reproduces it.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        match self.len() {
            0 => None,
            len => self.nth(rng.random_range(0..len)),
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitAnd for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        BitGrid { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> BitOr for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        BitGrid { bits: self.bits | rhs.bits }
    }
}

impl<T, const N: usize> FromIterator<Coord> for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Collect in-range cells into a set; out-of-range cells are dropped.
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut grid = Self::new();
        for coord in iter {
            grid.insert(coord);
        }
        grid
    }
}

/// Iterator over the cells of a [`BitGrid`] in ascending order.
pub struct Cells<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    grid: BitGrid<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < BitGrid::<T, N>::CELL_COUNT {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", N)?;
        for row in 0..N {
            for col in 0..N {
                let cell = if self.contains((row, col)) { '#' } else { '.' };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
