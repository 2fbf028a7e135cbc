//! The 3x3x3 Rubik's cube at the cubie level: piece identifiers, orientation
//! states and the `CubieCube` value type, plus the face-turn engine
//! ([`moves`]) and the two-phase coordinate extractors ([`coordcube`]).

pub mod coordcube;
pub mod moves;

use crate::error::TryFromIntToEnumError;

/// The eight corner positions, named by their home location. The discriminant
/// doubles as the array index into [`CubieCube::cp`] and [`CubieCube::co`],
/// and as the cubie identity when solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Corner {
    URF = 0,
    UFL = 1,
    ULB = 2,
    UBR = 3,
    DFR = 4,
    DLF = 5,
    DBL = 6,
    DRB = 7,
}

impl TryFrom<u8> for Corner {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(match n {
            0 => Corner::URF,
            1 => Corner::UFL,
            2 => Corner::ULB,
            3 => Corner::UBR,
            4 => Corner::DFR,
            5 => Corner::DLF,
            6 => Corner::DBL,
            7 => Corner::DRB,
            _ => return Err(TryFromIntToEnumError::OutOfBounds),
        })
    }
}

/// The twelve edge positions, named by their home location. Edges are
/// numbered slice by slice (RL ring, then FB ring, then the UD ring last), so
/// that the permutation coordinates of the solved cube all come out as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Edge {
    UF = 0,
    UB = 1,
    DB = 2,
    DF = 3,
    UR = 4,
    UL = 5,
    DL = 6,
    DR = 7,
    FR = 8,
    FL = 9,
    BL = 10,
    BR = 11,
}

impl TryFrom<u8> for Edge {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(match n {
            0 => Edge::UF,
            1 => Edge::UB,
            2 => Edge::DB,
            3 => Edge::DF,
            4 => Edge::UR,
            5 => Edge::UL,
            6 => Edge::DL,
            7 => Edge::DR,
            8 => Edge::FR,
            9 => Edge::FL,
            10 => Edge::BL,
            11 => Edge::BR,
            _ => return Err(TryFromIntToEnumError::OutOfBounds),
        })
    }
}

/// The three equatorial edge rings, each holding four edges. A slice is named
/// by the pair of faces it sits between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    /// The ring between the U and D faces (FR, FL, BL, BR).
    UD,
    /// The ring between the R and L faces (UF, UB, DB, DF).
    RL,
    /// The ring between the F and B faces (UR, UL, DL, DR).
    FB,
}

impl Edge {
    /// The slice this edge belongs to when solved.
    pub fn slice(self) -> Slice {
        match self {
            Edge::UF | Edge::UB | Edge::DB | Edge::DF => Slice::RL,
            Edge::UR | Edge::UL | Edge::DL | Edge::DR => Slice::FB,
            Edge::FR | Edge::FL | Edge::BL | Edge::BR => Slice::UD,
        }
    }
}

/// The twist state of a corner cubie, relative to the U/D axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CornerTwist {
    /// The corner is not twisted.
    #[default]
    Oriented = 0,
    /// The corner is twisted clockwise.
    Clockwise = 1,
    /// The corner is twisted anticlockwise.
    AntiClockwise = 2,
}

impl CornerTwist {
    /// Compose two twists (addition mod 3).
    pub fn twist_by(self, other: CornerTwist) -> CornerTwist {
        match (self as u8 + other as u8) % 3 {
            0 => CornerTwist::Oriented,
            1 => CornerTwist::Clockwise,
            _ => CornerTwist::AntiClockwise,
        }
    }

    /// Twist one step clockwise.
    pub fn clockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::Clockwise)
    }

    /// Twist one step anticlockwise.
    pub fn anticlockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::AntiClockwise)
    }
}

impl TryFrom<u8> for CornerTwist {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(CornerTwist::Oriented),
            1 => Ok(CornerTwist::Clockwise),
            2 => Ok(CornerTwist::AntiClockwise),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

/// The flip state of an edge cubie, relative to the F/B axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeFlip {
    /// The edge is not flipped.
    #[default]
    Oriented = 0,
    /// The edge is flipped.
    Flipped = 1,
}

impl EdgeFlip {
    /// Compose two flips (addition mod 2).
    pub fn flip_by(self, other: EdgeFlip) -> EdgeFlip {
        if self == other {
            EdgeFlip::Oriented
        } else {
            EdgeFlip::Flipped
        }
    }

    /// Flip the edge.
    pub fn flip(self) -> EdgeFlip {
        self.flip_by(EdgeFlip::Flipped)
    }
}

impl TryFrom<u8> for EdgeFlip {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(EdgeFlip::Oriented),
            1 => Ok(EdgeFlip::Flipped),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

/// A cube state at the cubie level. `cp[i]` is the corner cubie occupying
/// position `i` and `co[i]` is the twist of that cubie; likewise `ep`/`eo`
/// for edges.
///
/// This is a plain value type. Moves never mutate a cube in place, they
/// return a fresh one. The constructors do not check that the permutations
/// are bijections or that the orientation/parity invariants hold; we trust
/// the caller, and [`CubieCube::to_coord`] is the place where illegal states
/// get rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    /// Which corner cubie sits at each corner position.
    pub cp: [Corner; 8],
    /// The twist of the cubie at each corner position.
    pub co: [CornerTwist; 8],
    /// Which edge cubie sits at each edge position.
    pub ep: [Edge; 12],
    /// The flip of the cubie at each edge position.
    pub eo: [EdgeFlip; 12],
}

impl CubieCube {
    /// The solved cube: identity permutations, no twists, no flips.
    pub const SOLVED: Self = CubieCube {
        cp: [
            Corner::URF,
            Corner::UFL,
            Corner::ULB,
            Corner::UBR,
            Corner::DFR,
            Corner::DLF,
            Corner::DBL,
            Corner::DRB,
        ],
        co: [CornerTwist::Oriented; 8],
        ep: [
            Edge::UF,
            Edge::UB,
            Edge::DB,
            Edge::DF,
            Edge::UR,
            Edge::UL,
            Edge::DL,
            Edge::DR,
            Edge::FR,
            Edge::FL,
            Edge::BL,
            Edge::BR,
        ],
        eo: [EdgeFlip::Oriented; 12],
    };

    /// Construct a cube from explicit piece arrays. No validation is done.
    pub fn new(
        cp: [Corner; 8],
        co: [CornerTwist; 8],
        ep: [Edge; 12],
        eo: [EdgeFlip; 12],
    ) -> CubieCube {
        CubieCube { cp, co, ep, eo }
    }

    /// Construct a cube from raw integer arrays, failing if any entry is out
    /// of range for its piece type. Bijectivity and parity are still not
    /// checked.
    pub fn from_arrays(
        cp: [u8; 8],
        co: [u8; 8],
        ep: [u8; 12],
        eo: [u8; 12],
    ) -> Result<CubieCube, TryFromIntToEnumError> {
        let mut cube = CubieCube::SOLVED;
        for i in 0..8 {
            cube.cp[i] = cp[i].try_into()?;
            cube.co[i] = co[i].try_into()?;
        }
        for i in 0..12 {
            cube.ep[i] = ep[i].try_into()?;
            cube.eo[i] = eo[i].try_into()?;
        }
        Ok(cube)
    }

    /// The total corner twist of the cube. `Oriented` for any reachable state.
    pub fn co_parity(&self) -> CornerTwist {
        self.co
            .iter()
            .fold(CornerTwist::Oriented, |acc, &t| acc.twist_by(t))
    }

    /// The total edge flip of the cube. `Oriented` for any reachable state.
    pub fn eo_parity(&self) -> EdgeFlip {
        self.eo
            .iter()
            .fold(EdgeFlip::Oriented, |acc, &f| acc.flip_by(f))
    }

    /// Whether the corner and edge permutations have differing parity. False
    /// for any reachable state, since a face turn is a 4-cycle on both.
    pub fn perm_parity(&self) -> bool {
        permutation_parity(&self.cp.map(|c| c as u8)) != permutation_parity(&self.ep.map(|e| e as u8))
    }

    /// Whether the cube violates any of the twist, flip or permutation parity
    /// invariants, i.e. is unreachable from the solved state.
    pub fn illegal(&self) -> bool {
        self.co_parity() != CornerTwist::Oriented
            || self.eo_parity() != EdgeFlip::Oriented
            || self.perm_parity()
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        CubieCube::SOLVED
    }
}

/// Parity of a permutation as its inversion count mod 2.
fn permutation_parity<const N: usize>(arr: &[u8; N]) -> bool {
    let mut inversions = 0;
    for i in 0..N {
        inversions += arr[i + 1..].iter().filter(|&&x| x < arr[i]).count();
    }
    inversions % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_identity() {
        let cube = CubieCube::SOLVED;
        for (i, &c) in cube.cp.iter().enumerate() {
            assert_eq!(c as usize, i);
        }
        for (i, &e) in cube.ep.iter().enumerate() {
            assert_eq!(e as usize, i);
        }
        assert!(!cube.illegal());
    }

    #[test]
    fn from_arrays_roundtrip() {
        let cube = CubieCube::from_arrays(
            [0, 1, 2, 3, 4, 5, 6, 7],
            [0; 8],
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            [0; 12],
        )
        .unwrap();
        assert_eq!(cube, CubieCube::SOLVED);
    }

    #[test]
    fn from_arrays_out_of_range() {
        assert_eq!(
            CubieCube::from_arrays(
                [0, 1, 2, 3, 4, 5, 6, 8],
                [0; 8],
                [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
                [0; 12],
            ),
            Err(TryFromIntToEnumError::OutOfBounds)
        );
        assert_eq!(
            CubieCube::from_arrays(
                [0, 1, 2, 3, 4, 5, 6, 7],
                [3, 0, 0, 0, 0, 0, 0, 0],
                [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
                [0; 12],
            ),
            Err(TryFromIntToEnumError::OutOfBounds)
        );
    }

    #[test]
    fn parity_checks() {
        let mut twist = CubieCube::SOLVED;
        twist.co[4] = CornerTwist::Clockwise;
        assert_eq!(twist.co_parity(), CornerTwist::Clockwise);
        assert!(twist.illegal());

        let mut flip = CubieCube::SOLVED;
        flip.eo[2] = EdgeFlip::Flipped;
        assert_eq!(flip.eo_parity(), EdgeFlip::Flipped);
        assert!(flip.illegal());

        let mut swap = CubieCube::SOLVED;
        swap.ep.swap(0, 1);
        assert!(swap.perm_parity());
        swap.cp.swap(0, 1);
        assert!(!swap.illegal());
    }
}
