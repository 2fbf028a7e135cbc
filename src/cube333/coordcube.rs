//! The coordinates the two-phase solver indexes its tables with.
//!
//! Normal coordinates (corner/edge orientation, corner permutation, the three
//! sorted slice coordinates) are ranked directly from the cube state. Meta
//! coordinates (edge permutation, the unsorted and permutation parts of the
//! UD-slice) are pure arithmetic over already-computed normal coordinates and
//! never look at the cube itself.

use super::{CornerTwist, CubieCube, Edge, EdgeFlip, Slice};
use crate::coord::{Coordinate, FromCoordinate};

use thiserror::Error;

/// A binomial coefficient by the direct formula `n(n-1)...(n-k+1) / k!`.
/// Exact for the small arguments used here (n <= 12), and 0 whenever `k > n`.
fn binom(n: u32, k: u32) -> u32 {
    if k > n {
        return 0;
    }
    let num: u32 = (n - k + 1..=n).product();
    let denom: u32 = (1..=k).product();
    num / denom
}

/// Read the first `COUNT - 1` orientation digits as a base-`STATES` number,
/// most significant first. The last digit is dropped since the orientation
/// sum invariant determines it.
fn to_o_coord<const COUNT: usize, const STATES: u16>(arr: &[u8; COUNT]) -> u16 {
    arr[..COUNT - 1]
        .iter()
        .fold(0, |acc, &i| (acc * STATES) + i as u16)
}

/// The lexicographic rank of a permutation of `0..COUNT`. Each position
/// contributes the number of later positions holding a smaller value, scaled
/// by the factorial of the suffix length.
fn to_p_coord<const COUNT: usize>(arr: &[u8; COUNT]) -> u32 {
    let mut rank = 0;
    let mut factorial = 1;
    for i in (0..COUNT).rev() {
        let lower = arr[i + 1..].iter().filter(|&&x| x < arr[i]).count() as u32;
        rank += lower * factorial;
        factorial *= (COUNT - i) as u32;
    }
    rank
}

/// The sorted coordinate of one slice: `24 * position_rank + order_rank`,
/// where the position rank counts (combinatorially) which four positions the
/// slice's edges occupy and the order rank is the lexicographic rank of their
/// order among themselves.
fn slice_sorted(ep: &[Edge; 12], slice: Slice) -> u16 {
    // Scan positions from highest to lowest, ranking the occupied positions
    // and recording the slice edges in the order we meet them.
    let mut pos_rank = 0;
    let mut remaining = 4u32;
    let mut order = [0u8; 4];

    for n in (0..12).rev() {
        let edge = ep[n];
        if edge.slice() == slice {
            pos_rank += binom(n as u32, remaining);
            remaining -= 1;
            order[3 - remaining as usize] = edge as u8;
        }
    }

    // Rank the recorded order: later-larger counts scaled by factorials.
    let mut order_rank = 0;
    let mut factorial = 1;
    for i in (0..4).rev() {
        let higher = order[i + 1..].iter().filter(|&&x| x > order[i]).count() as u32;
        order_rank += higher * factorial;
        factorial *= (4 - i) as u32;
    }

    (24 * pos_rank + order_rank) as u16
}

/// The corner orientation coordinate, in `0..2187`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct COCoord(u16);

/// The edge orientation coordinate, in `0..2048`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct EOCoord(u16);

/// The corner permutation coordinate, in `0..40320`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct CPCoord(u16);

/// The sorted UD-slice coordinate, in `0..11880`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct UDSortedCoord(u16);

/// The sorted RL-slice coordinate, in `0..11880`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct RLSortedCoord(u16);

/// The sorted FB-slice coordinate, in `0..11880`.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct FBSortedCoord(u16);

/// The edge permutation coordinate. Once the four UD-slice edges sit in the
/// UD slice this is in `0..40320` and determines the positions of the other
/// eight edges.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct EPCoord(u32);

/// The unsorted UD-slice coordinate, in `0..495`: which four positions the
/// UD-slice edges occupy, ignoring their order.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct UDSliceCoord(u16);

/// The UD-slice permutation coordinate, in `0..24`: the order of the UD-slice
/// edges among the positions they occupy.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct UDPermCoord(u16);

impl Coordinate<CubieCube> for COCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        COCoord(to_o_coord::<8, 3>(&puzzle.co.map(|n| n as u8)))
    }

    fn count() -> usize {
        // 3^7
        2187
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        COCoord(n as u16)
    }
}

impl FromCoordinate<COCoord> for CubieCube {
    fn set_coord(&mut self, coord: COCoord) {
        let mut last = CornerTwist::Oriented;
        let mut n = coord.0;

        for i in (0..7).rev() {
            self.co[i] = match n % 3 {
                0 => CornerTwist::Oriented,
                1 => {
                    last = last.anticlockwise();
                    CornerTwist::Clockwise
                }
                2 => {
                    last = last.clockwise();
                    CornerTwist::AntiClockwise
                }
                _ => unreachable!(),
            };
            n /= 3;
        }

        self.co[7] = last;
    }
}

impl Coordinate<CubieCube> for EOCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        EOCoord(to_o_coord::<12, 2>(&puzzle.eo.map(|n| n as u8)))
    }

    fn count() -> usize {
        // 2^11
        2048
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        EOCoord(n as u16)
    }
}

impl FromCoordinate<EOCoord> for CubieCube {
    fn set_coord(&mut self, coord: EOCoord) {
        let mut last = EdgeFlip::Oriented;
        let mut n = coord.0;

        for i in (0..11).rev() {
            self.eo[i] = match n % 2 {
                0 => EdgeFlip::Oriented,
                1 => {
                    last = last.flip();
                    EdgeFlip::Flipped
                }
                _ => unreachable!(),
            };
            n /= 2;
        }

        self.eo[11] = last;
    }
}

impl Coordinate<CubieCube> for CPCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        CPCoord(to_p_coord::<8>(&puzzle.cp.map(|n| n as u8)) as u16)
    }

    fn count() -> usize {
        40320
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        CPCoord(n as u16)
    }
}

impl Coordinate<CubieCube> for UDSortedCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        UDSortedCoord(slice_sorted(&puzzle.ep, Slice::UD))
    }

    fn solved(self) -> bool {
        // The UD-slice edges are numbered last, so the solved position rank
        // is the largest one: 24 * 494.
        self.0 == 11856
    }

    fn count() -> usize {
        11880
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        UDSortedCoord(n as u16)
    }
}

impl Coordinate<CubieCube> for RLSortedCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        RLSortedCoord(slice_sorted(&puzzle.ep, Slice::RL))
    }

    fn count() -> usize {
        11880
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        RLSortedCoord(n as u16)
    }
}

impl Coordinate<CubieCube> for FBSortedCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        FBSortedCoord(slice_sorted(&puzzle.ep, Slice::FB))
    }

    fn solved(self) -> bool {
        self.0 == 1656
    }

    fn count() -> usize {
        11880
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        FBSortedCoord(n as u16)
    }
}

impl EPCoord {
    /// Compose the edge permutation coordinate from the two sorted slice
    /// coordinates: `24 * rl + fb % 24`. The RL part carries both which
    /// positions the RL edges occupy and their order; only the order of the
    /// FB edges is still missing, which is the low 24 of the FB coordinate.
    pub fn from_slices(rl: RLSortedCoord, fb: FBSortedCoord) -> EPCoord {
        EPCoord(24 * rl.0 as u32 + fb.0 as u32 % 24)
    }
}

impl Coordinate<CubieCube> for EPCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        EPCoord::from_slices(
            RLSortedCoord::from_puzzle(puzzle),
            FBSortedCoord::from_puzzle(puzzle),
        )
    }

    fn count() -> usize {
        40320
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        EPCoord(n as u32)
    }
}

impl UDSliceCoord {
    /// Drop the order information from the sorted UD-slice coordinate,
    /// leaving only the choice of occupied positions.
    pub fn from_sorted(ud: UDSortedCoord) -> UDSliceCoord {
        UDSliceCoord(ud.0 / 24)
    }
}

impl Coordinate<CubieCube> for UDSliceCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        UDSliceCoord::from_sorted(UDSortedCoord::from_puzzle(puzzle))
    }

    fn solved(self) -> bool {
        self.0 == 494
    }

    fn count() -> usize {
        495
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        UDSliceCoord(n as u16)
    }
}

impl UDPermCoord {
    /// Keep only the order information from the sorted UD-slice coordinate.
    pub fn from_sorted(ud: UDSortedCoord) -> UDPermCoord {
        UDPermCoord(ud.0 % 24)
    }
}

impl Coordinate<CubieCube> for UDPermCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        UDPermCoord::from_sorted(UDSortedCoord::from_puzzle(puzzle))
    }

    fn count() -> usize {
        24
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        UDPermCoord(n as u16)
    }
}

/// The coordinate tuple the two-phase solver works on: phase 1 uses
/// (`co`, `eo`, `ud_slice`), phase 2 uses (`cp`, `ep`, `ud_perm`).
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct CoordCube {
    /// Corner orientation coordinate.
    pub co: COCoord,
    /// Edge orientation coordinate.
    pub eo: EOCoord,
    /// Corner permutation coordinate.
    pub cp: CPCoord,
    /// Edge permutation coordinate.
    pub ep: EPCoord,
    /// Unsorted UD-slice coordinate.
    pub ud_slice: UDSliceCoord,
    /// UD-slice permutation coordinate.
    pub ud_perm: UDPermCoord,
}

impl CoordCube {
    /// The coordinates of the solved cube. Note that the unsorted UD-slice
    /// coordinate of the solved cube is 494, not 0.
    pub const SOLVED: Self = CoordCube {
        co: COCoord(0),
        eo: EOCoord(0),
        cp: CPCoord(0),
        ep: EPCoord(0),
        ud_slice: UDSliceCoord(494),
        ud_perm: UDPermCoord(0),
    };
}

/// Error for when converting from a `CubieCube` to a `CoordCube`.
/// Raised when the cube is in an illegal state caused by an edge flip, a
/// corner twist, or permutation parity.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("a cube was in an illegal state")]
pub struct CubieToCoordError {
    /// The edge flip coset we are in.
    pub eo: EdgeFlip,
    /// The corner twist coset we are in.
    pub co: CornerTwist,
    /// Whether we have permutation parity or not.
    pub perm: bool,
}

impl TryInto<CoordCube> for CubieCube {
    type Error = CubieToCoordError;

    fn try_into(self) -> Result<CoordCube, CubieToCoordError> {
        self.to_coord()
    }
}

impl CubieCube {
    /// Tries to convert a `CubieCube` to a `CoordCube`, rejecting states that
    /// violate the twist, flip or permutation parity invariants.
    pub fn to_coord(&self) -> Result<CoordCube, CubieToCoordError> {
        if self.illegal() {
            return Err(CubieToCoordError {
                eo: self.eo_parity(),
                co: self.co_parity(),
                perm: self.perm_parity(),
            });
        }

        let ud_sorted = UDSortedCoord::from_puzzle(self);

        Ok(CoordCube {
            co: COCoord::from_puzzle(self),
            eo: EOCoord::from_puzzle(self),
            cp: CPCoord::from_puzzle(self),
            ep: EPCoord::from_puzzle(self),
            ud_slice: UDSliceCoord::from_sorted(ud_sorted),
            ud_perm: UDPermCoord::from_sorted(ud_sorted),
        })
    }
}
