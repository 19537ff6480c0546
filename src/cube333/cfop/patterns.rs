//! Recognising last layer cases and running their algorithms.

use super::catalog::{OLL_CASES, PLL_CASES};
use crate::cube333::move_list::MoveList;
use crate::cube333::moves::{parse_moves, Move333, Move333Type};
use crate::cube333::{Color, Cube, Face};
use crate::moves::MoveSequence;
use crate::mv;

use log::{debug, trace};
use std::sync::OnceLock;

/// A last layer case that can be recognised on a cube with solved first two layers.
pub(super) trait Pattern {
    /// Whether the cube's last layer, as it stands, is this case.
    fn check_match(&self, cube: &Cube) -> bool;

    fn name(&self) -> &'static str;

    fn moves(&self) -> &MoveSequence<Move333>;
}

/// An orientation case: which last layer stickers show the `Top` colour.
pub(super) struct OllPattern {
    name: &'static str,
    top: u16,
    sides: [u8; 4],
    moves: MoveSequence<Move333>,
}

/// A permutation case: which side's colour each side sticker of the last layer shows. Symbols
/// are indices into `"FRBL"`.
pub(super) struct PllPattern {
    name: &'static str,
    sides: [[usize; 3]; 4],
    moves: MoveSequence<Move333>,
}

impl Pattern for OllPattern {
    fn check_match(&self, cube: &Cube) -> bool {
        let top = cube.color_of_face(Face::Top);

        let top_matches = (0..9).all(|i| {
            let want = self.top >> (8 - i) & 1 == 1;
            (cube.get(Face::Top, i % 3, i / 3) == top) == want
        });

        top_matches
            && Face::SIDES.iter().zip(self.sides).all(|(&face, bits)| {
                (0..3).all(|x| {
                    let want = bits >> (2 - x) & 1 == 1;
                    (cube.get(face, x, 0) == top) == want
                })
            })
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn moves(&self) -> &MoveSequence<Move333> {
        &self.moves
    }
}

impl Pattern for PllPattern {
    fn check_match(&self, cube: &Cube) -> bool {
        // symbols are bound to colours as they are first seen
        let mut bound: [Option<Color>; 4] = [None; 4];
        for (&face, symbols) in Face::SIDES.iter().zip(&self.sides) {
            for (x, &symbol) in symbols.iter().enumerate() {
                let seen = cube.get(face, x, 0);
                match bound[symbol] {
                    Some(color) if color != seen => return false,
                    Some(_) => {}
                    None => bound[symbol] = Some(seen),
                }
            }
        }
        true
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn moves(&self) -> &MoveSequence<Move333> {
        &self.moves
    }
}

pub(super) fn algorithm(name: &str, notation: &str) -> MoveSequence<Move333> {
    match parse_moves(notation) {
        Ok(moves) => moves,
        Err(e) => panic!("algorithm for {name} is malformed: {e}"),
    }
}

fn symbols(name: &str, template: &str) -> [usize; 3] {
    let mut out = [0; 3];
    let mut chars = template.chars();
    for slot in &mut out {
        *slot = chars
            .next()
            .and_then(|c| "FRBL".find(c))
            .unwrap_or_else(|| panic!("template {template:?} for {name} is malformed"));
    }
    out
}

/// Every OLL case, parsed on first use.
pub(super) fn oll_patterns() -> &'static [OllPattern] {
    static PATTERNS: OnceLock<Vec<OllPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        OLL_CASES
            .iter()
            .map(|case| OllPattern {
                name: case.name,
                top: case.top,
                sides: case.sides,
                moves: algorithm(case.name, case.algorithm),
            })
            .collect()
    })
}

/// Every PLL case, parsed on first use.
pub(super) fn pll_patterns() -> &'static [PllPattern] {
    static PATTERNS: OnceLock<Vec<PllPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PLL_CASES
            .iter()
            .map(|case| PllPattern {
                name: case.name,
                sides: case.sides.map(|s| symbols(case.name, s)),
                moves: algorithm(case.name, case.algorithm),
            })
            .collect()
    })
}

/// Look for a case under each of the four turns of the top layer, and run the first one found.
/// Returns whether a case was found. Nothing is left pending either way.
pub(super) fn find_and_execute<P: Pattern>(list: &mut MoveList<'_>, patterns: &[P]) -> bool {
    let probes = [None, Some(mv!(U, 1)), Some(mv!(U, 3)), Some(mv!(U, 2))];
    for probe in probes {
        if let Some(m) = probe {
            list.push_move(m);
        }
        if let Some(pattern) = patterns.iter().find(|p| p.check_match(list.cube())) {
            match probe {
                Some(m) => debug!("{} after {m}", pattern.name()),
                None => debug!("{}", pattern.name()),
            }
            list.push_moves(&pattern.moves().0);
            list.accept_pending();
            return true;
        }
        trace!("no case after {probe:?}");
        list.reject_pending();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{CornerPosition, EdgePosition, FacePosition};

    use std::collections::BTreeSet;

    /// Whether the bottom two layers match their centres.
    fn first_two_layers_solved(cube: &Cube) -> bool {
        let bottom = cube.color_of_face(Face::Bottom);
        cube.face(Face::Bottom).iter().all(|&c| c == bottom)
            && Face::SIDES.iter().all(|&face| {
                let center = cube.color_of_face(face);
                (0..3).all(|x| (1..3).all(|y| cube.get(face, x, y) == center))
            })
    }

    fn centres(cube: &Cube) -> [Color; 6] {
        Face::ALL.map(|f| cube.color_of_face(f))
    }

    #[test]
    fn oll_patterns_have_nine_bits() {
        assert_eq!(oll_patterns().len(), 57);
        for p in oll_patterns() {
            let oriented =
                p.top.count_ones() + p.sides.iter().map(|s| s.count_ones()).sum::<u32>();
            assert_eq!(oriented, 9, "{}", p.name);
            // the centre is always oriented
            assert_eq!(p.top >> 4 & 1, 1, "{}", p.name);
        }
    }

    #[test]
    fn pll_templates_use_side_symbols() {
        assert_eq!(pll_patterns().len(), 21);
        for p in pll_patterns() {
            let mut counts = [0; 4];
            for &symbol in p.sides.iter().flatten() {
                counts[symbol] += 1;
            }
            assert_eq!(counts, [3; 4], "{}", p.name);
        }
    }

    #[test]
    fn algorithms_keep_orientation() {
        let all = oll_patterns()
            .iter()
            .map(|p| (p.name, &p.moves))
            .chain(pll_patterns().iter().map(|p| (p.name, &p.moves)));
        for (name, moves) in all {
            let cube = Cube::new().make_moves(moves.clone());
            assert_eq!(centres(&cube), centres(&Cube::SOLVED), "{name}");
        }
    }

    #[test]
    fn oll_cases_are_recognised() {
        for p in oll_patterns() {
            let cube = Cube::new().make_moves(p.moves.clone().inverse());
            assert!(first_two_layers_solved(&cube), "{}", p.name);
            assert!(p.check_match(&cube), "{}", p.name);
        }
    }

    #[test]
    fn pll_cases_are_recognised() {
        for p in pll_patterns() {
            let cube = Cube::new().make_moves(p.moves.clone().inverse());
            assert!(first_two_layers_solved(&cube), "{}", p.name);
            assert!(p.check_match(&cube), "{}", p.name);
            assert!(cube.face(Face::Top).iter().all(|&c| c == Color::Yellow));
            assert!(cube.make_moves(p.moves.clone()).is_solved(), "{}", p.name);
        }
    }

    /// The names of every pattern that matches under any of the four turns of the top layer.
    fn matching_names<P: Pattern>(cube: &Cube, patterns: &[P]) -> BTreeSet<&'static str> {
        let mut cube = cube.clone();
        let mut names = BTreeSet::new();
        for _ in 0..4 {
            names.extend(
                patterns
                    .iter()
                    .filter(|p| p.check_match(&cube))
                    .map(|p| p.name()),
            );
            cube.apply_move(mv!(U, 1));
        }
        names
    }

    #[test]
    fn exactly_one_case_matches() {
        for p in oll_patterns() {
            let mut cube = Cube::new().make_moves(p.moves.clone().inverse());
            for _ in 0..4 {
                let names = matching_names(&cube, oll_patterns());
                assert_eq!(names.into_iter().collect::<Vec<_>>(), vec![p.name], "{}", p.name);
                cube.apply_move(mv!(U, 1));
            }
        }
        for p in pll_patterns() {
            let cube = Cube::new().make_moves(p.moves.clone().inverse());
            let names = matching_names(&cube, pll_patterns());
            assert_eq!(names.into_iter().collect::<Vec<_>>(), vec![p.name], "{}", p.name);
        }
    }

    #[test]
    fn solved_last_layer_matches_only_trivially() {
        let cube = Cube::new();
        // every sticker is oriented, which no OLL case describes
        assert!(oll_patterns().iter().all(|p| !p.check_match(&cube)));
        for &edge in EdgePosition::ALL {
            assert_eq!(cube.edge_color(Face::Top, edge), Color::Yellow);
        }
        for &corner in CornerPosition::ALL {
            assert_eq!(cube.corner_color(Face::Top, corner), Color::Yellow);
        }
    }

    #[test]
    fn probing_finds_turned_cases() {
        let sune = oll_patterns()
            .iter()
            .find(|p| p.name == "OLL 27")
            .unwrap();
        let mut cube = Cube::new()
            .make_moves(sune.moves.clone().inverse())
            .make_move(mv!(U, 1));

        let mut list = MoveList::new(&mut cube);
        assert!(find_and_execute(&mut list, oll_patterns()));
        assert_eq!(list.pending_len(), 0);
        assert!(!list.moves().is_empty());
        assert!(list.cube().face(Face::Top).iter().all(|&c| c == Color::Yellow));
    }

    #[test]
    fn nothing_found_leaves_the_cube() {
        // a lone twisted corner is not an orientation case
        let mut cube = Cube::new();
        cube.set(Face::Top, 2, 2, Color::Green);
        cube.set(Face::Front, 2, 0, Color::Orange);
        cube.set(Face::Right, 0, 0, Color::Yellow);
        assert_eq!(
            cube.corner_colors(Face::Top, CornerPosition::BottomRight),
            [Color::Green, Color::Yellow, Color::Orange]
        );
        let before = cube.clone();

        let mut list = MoveList::new(&mut cube);
        assert!(!find_and_execute(&mut list, oll_patterns()));
        assert_eq!(list.pending_len(), 0);
        assert!(list.into_moves().is_empty());
        assert_eq!(cube, before);
    }
}
