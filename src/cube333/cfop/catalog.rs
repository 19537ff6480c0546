//! The last layer case tables.
//!
//! OLL templates are written most significant bit first, so `0b011_110_001` reads the `Top` face
//! row by row from its back left corner, and a side template such as `0b110` reads that face's top
//! row from left to right. A set bit is a sticker that shows the `Top` colour.
//!
//! PLL templates name, for each side's top row, which side's colour each sticker must show. The
//! letters only have to agree with each other, not with the actual centres, so every case is
//! recognised regardless of how the last layer is turned relative to the rest of the cube.

/// An OLL case as written in the table.
pub(super) struct OllCase {
    pub name: &'static str,
    pub top: u16,
    /// Front, right, back, left
    pub sides: [u8; 4],
    pub algorithm: &'static str,
}

/// A PLL case as written in the table.
pub(super) struct PllCase {
    pub name: &'static str,
    /// Front, right, back, left
    pub sides: [&'static str; 4],
    pub algorithm: &'static str,
}

const fn oll(name: &'static str, top: u16, sides: [u8; 4], algorithm: &'static str) -> OllCase {
    OllCase {
        name,
        top,
        sides,
        algorithm,
    }
}

const fn pll(name: &'static str, sides: [&'static str; 4], algorithm: &'static str) -> PllCase {
    PllCase {
        name,
        sides,
        algorithm,
    }
}

#[rustfmt::skip]
pub(super) const OLL_CASES: [OllCase; 57] = [
    oll("OLL 01", 0b000_010_000, [0b010, 0b111, 0b010, 0b111], "R U2 R2 F R F' U2 R' F R F'"),
    oll("OLL 02", 0b000_010_000, [0b010, 0b110, 0b111, 0b011], "r U r' U2 r U2 R' U2 R U' r'"),
    oll("OLL 03", 0b000_010_100, [0b011, 0b011, 0b011, 0b010], "r' R2 U R' U r U2 r' U M'"),
    oll("OLL 04", 0b000_010_001, [0b110, 0b010, 0b110, 0b110], "M U' r U2 r' U' R U' R' M'"),
    oll("OLL 05", 0b110_110_000, [0b011, 0b011, 0b000, 0b001], "l' U2 L U L' U l"),
    oll("OLL 06", 0b011_011_000, [0b110, 0b100, 0b000, 0b110], "r U2 R' U' R U' r'"),
    oll("OLL 07", 0b010_110_100, [0b011, 0b011, 0b001, 0b000], "r U R' U R U2 r'"),
    oll("OLL 08", 0b010_011_001, [0b110, 0b000, 0b100, 0b110], "l' U' L U' L' U2 l"),
    oll("OLL 09", 0b010_110_001, [0b110, 0b010, 0b100, 0b100], "R U R' U' R' F R2 U R' U' F'"),
    oll("OLL 10", 0b001_110_010, [0b001, 0b010, 0b011, 0b001], "R U R' U R' F R F' R U2 R'"),
    oll("OLL 11", 0b011_110_000, [0b011, 0b010, 0b001, 0b001], "r U R' U R' F R F' R U2 r'"),
    oll("OLL 12", 0b110_011_000, [0b110, 0b100, 0b100, 0b010], "M' R' U' R U' R' U2 R U' R r'"),
    oll("OLL 13", 0b000_111_100, [0b011, 0b001, 0b011, 0b000], "F U R U' R2 F' R U R U' R'"),
    oll("OLL 14", 0b000_111_001, [0b110, 0b000, 0b110, 0b100], "R' F R U R' F' R F U' F'"),
    oll("OLL 15", 0b100_111_000, [0b011, 0b001, 0b010, 0b001], "l' U' l L' U' L U l' U l"),
    oll("OLL 16", 0b001_111_000, [0b110, 0b100, 0b010, 0b100], "r U r' R U R' U' r U' r'"),
    oll("OLL 17", 0b100_010_001, [0b110, 0b011, 0b010, 0b010], "F R' F' R2 r' U R U' R' U' M'"),
    oll("OLL 18", 0b101_010_000, [0b111, 0b010, 0b010, 0b010], "r U R' U R U2 r2 U' R U' R' U2 r"),
    oll("OLL 19", 0b101_010_000, [0b010, 0b110, 0b010, 0b011], "r' R U R U R' U' M' R' F R F'"),
    oll("OLL 20", 0b101_010_101, [0b010, 0b010, 0b010, 0b010], "r U R' U' M2 U R U' R' U' M'"),
    oll("OLL 21", 0b010_111_010, [0b101, 0b000, 0b101, 0b000], "R U2 R' U' R U R' U' R U' R'"),
    oll("OLL 22", 0b010_111_010, [0b001, 0b000, 0b100, 0b101], "R U2 R2 U' R2 U' R2 U2 R"),
    oll("OLL 23", 0b010_111_111, [0b000, 0b000, 0b101, 0b000], "R2 D' R U2 R' D R U2 R"),
    oll("OLL 24", 0b011_111_011, [0b100, 0b000, 0b001, 0b000], "r U R' U' r' F R F'"),
    oll("OLL 25", 0b011_111_110, [0b001, 0b000, 0b000, 0b100], "F' r U R' U' r' F R"),
    oll("OLL 26", 0b011_111_010, [0b100, 0b100, 0b000, 0b100], "R U2 R' U' R U' R'"),
    oll("OLL 27", 0b010_111_110, [0b001, 0b001, 0b001, 0b000], "R U R' U R U2 R'"),
    oll("OLL 28", 0b111_110_101, [0b010, 0b010, 0b000, 0b000], "r U R' U' r' R U R U' R'"),
    oll("OLL 29", 0b011_110_001, [0b110, 0b010, 0b001, 0b000], "R U R' U' R U' R' F' U' F R U R'"),
    oll("OLL 30", 0b010_110_101, [0b010, 0b011, 0b000, 0b100], "F R' F R2 U' R' U' R U R' F2"),
    oll("OLL 31", 0b011_011_001, [0b110, 0b000, 0b001, 0b010], "R' U' F U R U' R' F' R"),
    oll("OLL 32", 0b110_110_100, [0b011, 0b010, 0b100, 0b000], "L U F' U' L' U L F L'"),
    oll("OLL 33", 0b001_111_001, [0b110, 0b000, 0b011, 0b000], "R U R' U' R' F R F'"),
    oll("OLL 34", 0b000_111_101, [0b010, 0b001, 0b010, 0b100], "R U R2 U' R' F R U R U' F'"),
    oll("OLL 35", 0b100_011_011, [0b100, 0b001, 0b010, 0b010], "R U2 R2 F R F' R U2 R'"),
    oll("OLL 36", 0b110_011_001, [0b010, 0b000, 0b100, 0b011], "L' U' L U' L' U L U L F' L' F"),
    oll("OLL 37", 0b110_110_001, [0b110, 0b011, 0b000, 0b000], "F R' F' R U R U' R'"),
    oll("OLL 38", 0b011_110_100, [0b010, 0b110, 0b001, 0b000], "R U R' U R U' R' U' R' F R F'"),
    oll("OLL 39", 0b001_111_100, [0b010, 0b100, 0b011, 0b000], "L F' L' U' L U F U' L'"),
    oll("OLL 40", 0b100_111_001, [0b010, 0b000, 0b110, 0b001], "R' F R U R' U' F' U R"),
    oll("OLL 41", 0b010_110_101, [0b010, 0b010, 0b101, 0b000], "R U R' U R U2 R' F R U R' U' F'"),
    oll("OLL 42", 0b101_110_010, [0b101, 0b010, 0b010, 0b000], "R' U' R U' R' U2 R F R U R' U' F'"),
    oll("OLL 43", 0b011_011_001, [0b010, 0b000, 0b000, 0b111], "F' U' L' U L F"),
    oll("OLL 44", 0b110_110_100, [0b010, 0b111, 0b000, 0b000], "F U R U' R' F'"),
    oll("OLL 45", 0b001_111_001, [0b010, 0b000, 0b010, 0b101], "F R U R' U' F'"),
    oll("OLL 46", 0b110_010_110, [0b000, 0b111, 0b000, 0b010], "R' U' R' F R F' U R"),
    oll("OLL 47", 0b010_011_000, [0b110, 0b101, 0b001, 0b010], "R' U' R' F R F' R' F R F' U R"),
    oll("OLL 48", 0b010_110_000, [0b011, 0b010, 0b100, 0b101], "F R U R' U' R U R' U' F'"),
    oll("OLL 49", 0b010_011_000, [0b011, 0b000, 0b100, 0b111], "r U' r2 U r2 U r2 U' r"),
    oll("OLL 50", 0b000_011_010, [0b001, 0b000, 0b110, 0b111], "r' U r2 U' r2 U' r2 U r'"),
    oll("OLL 51", 0b000_111_000, [0b110, 0b101, 0b011, 0b000], "F U R U' R' U R U' R' F'"),
    oll("OLL 52", 0b010_010_010, [0b100, 0b111, 0b001, 0b010], "R U R' U R U' B U' B' R'"),
    oll("OLL 53", 0b010_011_000, [0b111, 0b000, 0b101, 0b010], "l' U2 L U L' U' L U L' U l"),
    oll("OLL 54", 0b010_110_000, [0b111, 0b010, 0b101, 0b000], "r U2 R' U' R U R' U' R U' r'"),
    oll("OLL 55", 0b000_111_000, [0b111, 0b000, 0b111, 0b000], "R' F R U R U' R2 F' R2 U' R' U R U R'"),
    oll("OLL 56", 0b000_111_000, [0b010, 0b101, 0b010, 0b101], "r' U' r U' R' U R U' R' U R r' U r"),
    oll("OLL 57", 0b101_111_101, [0b010, 0b000, 0b010, 0b000], "R U R' U' M' U R U' r'"),
];

// Aa, Ab, Ja, E and V are usually written ending in a rotated grip; the trailing rotation puts the
// cube back the way it started.
#[rustfmt::skip]
pub(super) const PLL_CASES: [PllCase; 21] = [
    pll("Aa", ["LFF", "RRL", "FBR", "BLB"], "x L2 D2 L' U' L D2 L' U L' x'"),
    pll("Ab", ["RFB", "LRR", "BBL", "FLF"], "x' L2 D2 L U L' D2 L U' L x"),
    pll("F", ["FBR", "BRF", "RFB", "LLL"], "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R"),
    pll("Ga", ["FRR", "BLF", "RFB", "LBL"], "R2 U R' U R' U' R U' R2 U' D R' U R D'"),
    pll("Gb", ["FBR", "BFF", "RLB", "LRL"], "R' U' R U D' R2 U R' U R U' R U' R2 D"),
    pll("Gc", ["FBR", "BLF", "RRB", "LFL"], "R2 U' R U' R U R' U R2 U D' R U' R' D"),
    pll("Gd", ["FLR", "BBF", "RFB", "LRL"], "R U R' U' D R2 U' R U' R' U R' U R2 D'"),
    pll("Ja", ["FFR", "BBF", "RRB", "LLL"], "x R2 F R F' R U2 r' U r U2 x'"),
    pll("Jb", ["LFF", "RLL", "FRR", "BBB"], "R U R' F' R U R' U' R' F R2 U' R'"),
    pll("Ra", ["LLF", "RFL", "FBR", "BRB"], "R U' R' U' R U R D R' U' R D' R' U2 R'"),
    pll("Rb", ["RFB", "LBR", "BLL", "FRF"], "R2 F R U R U' R' F' R U2 R' U2 R"),
    pll("T", ["FFR", "BLF", "RBB", "LRL"], "R U R' U' R' F R2 U' R' U' R U R' F'"),
    pll("E", ["LFR", "BRF", "RBL", "FLB"], "x' L' U L D' L' U' L D L' U' L D' L' U L D x"),
    pll("Na", ["BFF", "RLL", "FBB", "LRR"], "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'"),
    pll("Nb", ["FFB", "LLR", "BBF", "RRL"], "R' U R U' R' F' U' F R U R' F R' F' R U' R"),
    pll("V", ["FFB", "LBR", "BRF", "RLL"], "R' U R' U' y R' F' R2 U' R' U R' F R F y'"),
    pll("Y", ["FFB", "LRR", "BLF", "RBL"], "F R U' R' U' R U R' F' R U R' U' R' F R F'"),
    pll("H", ["FBF", "RLR", "BFB", "LRL"], "M2 U M2 U2 M2 U M2"),
    pll("Ua", ["FRF", "RLR", "BBB", "LFL"], "M2 U M U2 M' U M2"),
    pll("Ub", ["FLF", "RFR", "BBB", "LRL"], "M2 U' M U2 M' U' M2"),
    pll("Z", ["LBL", "FRF", "RFR", "BLB"], "M' U M2 U M2 U M' U2 M2"),
];

/// Where the corner of an F2L pair is once it has been staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CornerAt {
    /// Above its slot, in the front right corner of the top layer
    Up,
    /// In its slot
    Down,
}

/// Where the edge of an F2L pair is once it has been staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EdgeAt {
    UB,
    UL,
    UR,
    UF,
    /// In its slot
    FR,
}

/// Which centre a sticker matches: the front, the right, or the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shows {
    Front,
    Right,
    Bottom,
}

/// An F2L case: where the pair is, what the front or top sticker of each piece shows, and the
/// algorithm that inserts it into the front right slot.
pub(super) struct F2lCase {
    pub name: &'static str,
    pub corner: CornerAt,
    pub edge: EdgeAt,
    /// The edge sticker on the top face, or on the front face when the edge is in its slot
    pub edge_shows: Shows,
    /// The corner sticker on the front face
    pub corner_shows: Shows,
    pub algorithm: &'static str,
}

const fn f2l(
    name: &'static str,
    corner: CornerAt,
    edge: EdgeAt,
    edge_shows: Shows,
    corner_shows: Shows,
    algorithm: &'static str,
) -> F2lCase {
    F2lCase {
        name,
        corner,
        edge,
        edge_shows,
        corner_shows,
        algorithm,
    }
}

use CornerAt::{Down, Up};
use EdgeAt::{FR, UB, UF, UL, UR};
use Shows::{Bottom, Front, Right};

// Algorithms that need a y' or d to reach their slot end with a y to undo it.
#[rustfmt::skip]
pub(super) const F2L_CASES: [F2lCase; 41] = [
    f2l("Basic right", Up, UR, Front, Bottom, "U (R U' R')"),
    f2l("Basic front", Up, UF, Right, Front, "y' U' (R' U R) y"),
    f2l("Basic left", Up, UL, Right, Bottom, "y' (R' U' R) y"),
    f2l("Basic top", Up, UB, Front, Front, "(R U R')"),
    f2l("C1-1", Up, UB, Right, Bottom, "U' (R U' R' U) y' (R' U' R) y"),
    f2l("C1-2", Up, UL, Front, Front, "U' (R U R' U) (R U R')"),
    f2l("C1-3", Up, UR, Right, Bottom, "U' (R U2 R') d (R' U' R) y"),
    f2l("C1-4", Up, UF, Front, Front, "R' U2 R2 U R2 U R"),
    f2l("C1-5", Up, UF, Right, Bottom, "y' U (R' U R U') (R' U' R) y"),
    f2l("C1-6", Up, UR, Front, Front, "U' (R U' R' U) (R U R')"),
    f2l("C2-1", Up, UB, Front, Bottom, "(U' R U R') U2 (R U' R')"),
    f2l("C2-2", Up, UL, Right, Front, "d (R' U' R) U2 (R' U R) y"),
    f2l("C2-3", Up, UL, Front, Bottom, "U' (R U2 R') U2 (R U' R')"),
    f2l("C2-4", Up, UB, Right, Front, "d (R' U2 R) U2 (R' U R) y"),
    f2l("C3-1", Up, UB, Front, Right, "U (R U2 R') U (R U' R')"),
    f2l("C3-2", Up, UL, Right, Right, "y' U' (R' U2 R) U' (R' U R) y"),
    f2l("C3-3", Up, UL, Front, Right, "(R U' R') U2 (R U R')"),
    f2l("C3-4", Up, UB, Right, Right, "y' U2 (R' U' R) U' (R' U R) y"),
    f2l("IC1", Up, UF, Front, Bottom, "y' (R' U R) U2 y (R U R')"),
    f2l("IC2", Up, UR, Right, Front, "U F (R U R' U') F' (U R U' R')"),
    f2l("IC3", Up, UR, Front, Right, "(R U2 R') U' (R U R')"),
    f2l("IC4", Up, UF, Right, Right, "y' (R' U2 R) U (R' U' R) y"),
    f2l("IC5", Up, UF, Front, Right, "U (R U' R' U') (R U' R' U) (R U' R')"),
    f2l("IC6", Up, UR, Right, Right, "y' U' (R' U R U) (R' U R U') (R' U R) y"),
    f2l("CP1", Down, UR, Front, Front, "R' F' R U (R U' R') F"),
    f2l("CP2", Down, UF, Right, Front, "U (R U' R') U' (F' U F)"),
    f2l("CP3", Down, UR, Front, Bottom, "(R U' R' U) (R U' R')"),
    f2l("CP4", Down, UF, Right, Right, "y' (R' U R U') (R' U R) y"),
    f2l("CP5", Down, UF, Right, Bottom, "y' (R' U' R U) (R' U' R) y"),
    f2l("CP6", Down, UR, Front, Right, "(R U R' U') (R U R')"),
    f2l("EP1", Up, FR, Right, Right, "(R U' R' U) y' (R' U R) y"),
    f2l("EP2", Up, FR, Front, Right, "(U R U' R') (U R U' R') (U R U' R')"),
    f2l("EP3", Up, FR, Front, Bottom, "(U' R U' R') U2 (R U' R')"),
    f2l("EP4", Up, FR, Front, Front, "U (R U R') U2 (R U R')"),
    f2l("EP5", Up, FR, Right, Bottom, "(U' R U R') U y' (R' U' R) y"),
    f2l("EP6", Up, FR, Right, Front, "U (F' U' F) U' (R U R')"),
    f2l("BP2", Down, FR, Right, Front, "(R U' R') d (R' U2 R) U2 (R' U R) y"),
    f2l("BP3", Down, FR, Front, Bottom, "(R U' R' U') R U R' U2 (R U' R')"),
    f2l("BP4", Down, FR, Front, Right, "(R U' R' U) (R U2 R') U (R U' R')"),
    f2l("BP5", Down, FR, Right, Bottom, "(F' U F) U2 (R U R' U) (R U' R')"),
    f2l("BP6", Down, FR, Right, Right, "(R U R' U') (R U' R') U2 y' (R' U' R) y"),
];
