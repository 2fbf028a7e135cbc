//! Face turns for the 3x3x3. A move names one of the six faces and a turn
//! amount; applying one permutes the four corners and four edges around that
//! face and adjusts their orientations by fixed per-face deltas.

use super::{Corner, CornerTwist, CubieCube, Edge, EdgeFlip};
use crate::error::TryFromIntToEnumError;
use crate::mv;
use crate::moves::{Cancellation, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U = 0,
    /// Left
    L = 1,
    /// Front
    F = 2,
    /// Right
    R = 3,
    /// Back
    B = 4,
    /// Down
    D = 5,
}

/// How far a face is turned, in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Turn {
    /// A quarter turn clockwise.
    Clockwise = 1,
    /// A half turn.
    Half = 2,
    /// A quarter turn anticlockwise.
    AntiClockwise = 3,
}

impl Turn {
    /// The number of clockwise quarter turns this turn amounts to.
    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    /// The turn undoing this one.
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::AntiClockwise,
            Turn::Half => Turn::Half,
            Turn::AntiClockwise => Turn::Clockwise,
        }
    }
}

/// A face turn. `Face` and `Turn` are both closed enums, so the 18 legal
/// moves are the only values this type can hold; there is no invalid move to
/// guard against at application time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub face: Face,
    pub turn: Turn,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Move333 {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face == b.face {
            match (self.turn.quarter_turns() + b.turn.quarter_turns()) % 4 {
                0 => Cancellation::NoMove,
                1 => Cancellation::OneMove(mv!(face self.face, Turn::Clockwise)),
                2 => Cancellation::OneMove(mv!(face self.face, Turn::Half)),
                _ => Cancellation::OneMove(mv!(face self.face, Turn::AntiClockwise)),
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{:?}", self.face),
            Turn::Half => write!(f, "{:?}2", self.face),
            Turn::AntiClockwise => write!(f, "{:?}'", self.face),
        }
    }
}

/// Create a move from a face name and a quarter-turn count, e.g. `mv!(R, 1)`
/// for R, `mv!(R, 2)` for R2 and `mv!(R, 3)` for R'.
#[macro_export]
macro_rules! mv {
    (face $face:expr, $turn:expr) => {
        $crate::cube333::moves::Move333 {
            face: $face,
            turn: $turn,
        }
    };
    ($face:ident, 1) => {
        $crate::mv!(
            face $crate::cube333::moves::Face::$face,
            $crate::cube333::moves::Turn::Clockwise
        )
    };
    ($face:ident, 2) => {
        $crate::mv!(
            face $crate::cube333::moves::Face::$face,
            $crate::cube333::moves::Turn::Half
        )
    };
    ($face:ident, 3) => {
        $crate::mv!(
            face $crate::cube333::moves::Face::$face,
            $crate::cube333::moves::Turn::AntiClockwise
        )
    };
}

/// A trait to classify a type as a move generator. A move generator is a set
/// of moves used to expand states during search; the index of a move in
/// `MOVE_LIST` is the index the external move tables use for it.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves. The index of a move in this list will be the same index used
    /// when accessing the move table.
    const MOVE_LIST: &'static [Move333];
}

/// Type for Half Turn Metric
pub struct Htm;

impl MoveGenerator for Htm {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(U, 1),
        mv!(L, 1),
        mv!(F, 1),
        mv!(R, 1),
        mv!(B, 1),
        mv!(D, 1),
        mv!(U, 2),
        mv!(L, 2),
        mv!(F, 2),
        mv!(R, 2),
        mv!(B, 2),
        mv!(D, 2),
        mv!(U, 3),
        mv!(L, 3),
        mv!(F, 3),
        mv!(R, 3),
        mv!(B, 3),
        mv!(D, 3),
    ];
}

impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        (mv.turn.quarter_turns() - 1) * 6 + mv.face as usize
    }
}

impl TryFrom<usize> for Move333 {
    type Error = TryFromIntToEnumError;

    /// Look a move up by its table index. Indices outside `0..18` are not
    /// moves and are reported as an error rather than mapped to anything.
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Htm::MOVE_LIST
            .get(n)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// The pieces a face turn cycles and the orientation deltas it applies.
///
/// `corners`/`edges` list the four affected positions in the cyclic order a
/// clockwise quarter turn moves them. `twists`/`flips` give the orientation
/// change a piece picks up when it moves one step along the cycle from that
/// position. U and D touch no orientations, L and R twist corners only, F and
/// B twist corners and flip edges.
struct FaceCycle {
    corners: [Corner; 4],
    edges: [Edge; 4],
    twists: [CornerTwist; 4],
    flips: [EdgeFlip; 4],
}

const NO_TWIST: [CornerTwist; 4] = [CornerTwist::Oriented; 4];
const NO_FLIP: [EdgeFlip; 4] = [EdgeFlip::Oriented; 4];
const ALL_FLIP: [EdgeFlip; 4] = [EdgeFlip::Flipped; 4];

/// Indexed by `Face as usize`.
const FACE_CYCLES: [FaceCycle; 6] = [
    // U
    FaceCycle {
        corners: [Corner::URF, Corner::UFL, Corner::ULB, Corner::UBR],
        edges: [Edge::UF, Edge::UL, Edge::UB, Edge::UR],
        twists: NO_TWIST,
        flips: NO_FLIP,
    },
    // L
    FaceCycle {
        corners: [Corner::UFL, Corner::DLF, Corner::DBL, Corner::ULB],
        edges: [Edge::UL, Edge::FL, Edge::DL, Edge::BL],
        twists: [
            CornerTwist::AntiClockwise,
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
            CornerTwist::Clockwise,
        ],
        flips: NO_FLIP,
    },
    // F
    FaceCycle {
        corners: [Corner::URF, Corner::DFR, Corner::DLF, Corner::UFL],
        edges: [Edge::UF, Edge::FR, Edge::DF, Edge::FL],
        twists: [
            CornerTwist::AntiClockwise,
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
            CornerTwist::Clockwise,
        ],
        flips: ALL_FLIP,
    },
    // R
    FaceCycle {
        corners: [Corner::URF, Corner::UBR, Corner::DRB, Corner::DFR],
        edges: [Edge::UR, Edge::BR, Edge::DR, Edge::FR],
        twists: [
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
        ],
        flips: NO_FLIP,
    },
    // B
    FaceCycle {
        corners: [Corner::UBR, Corner::ULB, Corner::DBL, Corner::DRB],
        edges: [Edge::UB, Edge::BL, Edge::DB, Edge::BR],
        twists: [
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
        ],
        flips: ALL_FLIP,
    },
    // D
    FaceCycle {
        corners: [Corner::DFR, Corner::DRB, Corner::DBL, Corner::DLF],
        edges: [Edge::DF, Edge::DR, Edge::DB, Edge::DL],
        twists: NO_TWIST,
        flips: NO_FLIP,
    },
];

impl CubieCube {
    /// Apply an algorithm to a cube.
    pub fn make_moves(self, mvs: MoveSequence<Move333>) -> CubieCube {
        mvs.0.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move to a cube, returning the new state. The input cube is a
    /// value and stays untouched.
    ///
    /// A piece at step `i` of the face cycle moves to step `(i + t) % 4`
    /// where `t` is the quarter-turn count, picking up the orientation deltas
    /// of every step it passes through.
    pub fn make_move(self, mv: Move333) -> CubieCube {
        let cycle = &FACE_CYCLES[mv.face as usize];
        let t = mv.turn.quarter_turns();

        let mut next = self;

        for i in 0..4 {
            let from = cycle.corners[i] as usize;
            let to = cycle.corners[(i + t) % 4] as usize;
            let twist = (0..t).fold(CornerTwist::Oriented, |acc, j| {
                acc.twist_by(cycle.twists[(i + j) % 4])
            });
            next.cp[to] = self.cp[from];
            next.co[to] = self.co[from].twist_by(twist);
        }

        for i in 0..4 {
            let from = cycle.edges[i] as usize;
            let to = cycle.edges[(i + t) % 4] as usize;
            let flip = (0..t).fold(EdgeFlip::Oriented, |acc, j| {
                acc.flip_by(cycle.flips[(i + j) % 4])
            });
            next.ep[to] = self.ep[from];
            next.eo[to] = self.eo[from].flip_by(flip);
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    use proptest::collection::vec;
    use proptest::prelude::*;

    const FACES: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    fn scrambled(mvs: Vec<Move333>) -> CubieCube {
        mvs.into_iter()
            .fold(CubieCube::SOLVED, |c, m| c.make_move(m))
    }

    #[test]
    fn four_quarter_turns_is_identity() {
        for face in FACES {
            let mut cube = CubieCube::SOLVED.make_move(mv!(B, 1)).make_move(mv!(U, 2));
            let start = cube;
            for _ in 0..4 {
                cube = cube.make_move(mv!(face face, Turn::Clockwise));
            }
            assert_eq!(cube, start, "{face:?}4 should be the identity");
        }
    }

    #[test]
    fn half_turn_twice_is_identity() {
        for face in FACES {
            let cube = CubieCube::SOLVED.make_move(mv!(R, 1)).make_move(mv!(F, 3));
            let m = mv!(face face, Turn::Half);
            assert_eq!(cube.make_move(m).make_move(m), cube);
        }
    }

    #[test]
    fn u_then_u_prime_is_identity() {
        assert_eq!(
            CubieCube::SOLVED.make_move(mv!(U, 1)).make_move(mv!(U, 3)),
            CubieCube::SOLVED
        );
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = MoveSequence(vec![mv!(R, 1), mv!(U, 1), mv!(R, 3), mv!(U, 3)]);
        let mut cube = CubieCube::SOLVED;
        for _ in 0..6 {
            cube = cube.make_moves(sexy.clone());
        }
        assert_eq!(cube, CubieCube::SOLVED);
    }

    #[test]
    fn move_index_roundtrip() {
        for (i, &m) in Htm::MOVE_LIST.iter().enumerate() {
            assert_eq!(usize::from(m), i);
            assert_eq!(Move333::try_from(i), Ok(m));
        }
        assert_eq!(
            Move333::try_from(Htm::SIZE),
            Err(crate::error::TryFromIntToEnumError::OutOfBounds)
        );
    }

    proptest! {
        #[test]
        fn turn_amount_decomposes_into_quarters(
            mvs in vec(any::<Move333>(), 0..30),
            face in any::<Face>(),
            turn in any::<Turn>(),
        ) {
            let cube = scrambled(mvs);
            let quartered = (0..turn.quarter_turns())
                .fold(cube, |c, _| c.make_move(mv!(face face, Turn::Clockwise)));
            assert_eq!(cube.make_move(mv!(face face, turn)), quartered);
        }

        #[test]
        fn move_then_inverse_is_identity(mvs in vec(any::<Move333>(), 0..30), m in any::<Move333>()) {
            let cube = scrambled(mvs);
            assert_eq!(cube.make_move(m).make_move(m.inverse()), cube);
            assert_eq!(cube.make_move(m.inverse()).make_move(m), cube);
        }

        #[test]
        fn sequence_then_inverse_is_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cube = CubieCube::SOLVED.make_moves(mvs.clone()).make_moves(mvs.inverse());
            assert_eq!(cube, CubieCube::SOLVED);
        }

        #[test]
        fn cancel_preserves_state(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            assert!(cancelled.len() <= mvs.len());
            assert_eq!(CubieCube::SOLVED.make_moves(mvs), CubieCube::SOLVED.make_moves(cancelled));
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.cancel();
            assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn cancelled_inverse_pair_is_empty(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.cancel();
            assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn moves_preserve_legality(mvs in vec(any::<Move333>(), 0..30)) {
            assert!(!scrambled(mvs).illegal());
        }
    }
}
