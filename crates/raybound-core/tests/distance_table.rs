//! Integration tests for the sliding-distance table.
//!
//! Checks the geometric identities the table must satisfy on every square,
//! and that rendering preserves all 512 values.

use raybound_core::{Direction, Format, MAX_SLIDING_DISTANCE, Square, generate, render};

/// Helper: pull every decimal number out of a rendered literal.
fn numbers(text: &str) -> Vec<u8> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect()
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[test]
fn opposite_orthogonals_sum_to_seven() {
    for sq in Square::all() {
        let row = MAX_SLIDING_DISTANCE.row(sq);
        assert_eq!(
            row[Direction::North.index()] + row[Direction::South.index()],
            7,
            "north + south on {sq}"
        );
        assert_eq!(
            row[Direction::West.index()] + row[Direction::East.index()],
            7,
            "west + east on {sq}"
        );
    }
}

#[test]
fn diagonal_is_min_of_components() {
    for sq in Square::all() {
        for dir in Direction::DIAGONAL {
            let (vertical, horizontal) = dir.components().unwrap();
            let expected = MAX_SLIDING_DISTANCE
                .distance(sq, vertical)
                .min(MAX_SLIDING_DISTANCE.distance(sq, horizontal));
            assert_eq!(
                MAX_SLIDING_DISTANCE.distance(sq, dir),
                expected,
                "{dir} on {sq}"
            );
        }
    }
}

#[test]
fn values_stay_in_range() {
    for row in MAX_SLIDING_DISTANCE.rows() {
        assert!(row.iter().all(|&d| d <= 7));
    }
    assert_eq!(MAX_SLIDING_DISTANCE.rows().len(), 64);
}

#[test]
fn corners_have_two_empty_orthogonals() {
    for sq in Square::CORNERS {
        let empty = Direction::ORTHOGONAL
            .iter()
            .filter(|&&dir| MAX_SLIDING_DISTANCE.distance(sq, dir) == 0)
            .count();
        assert_eq!(empty, 2, "corner {sq}");
        // Exactly one diagonal crosses the board from a corner.
        let open: Vec<u8> = Direction::DIAGONAL
            .iter()
            .map(|&dir| MAX_SLIDING_DISTANCE.distance(sq, dir))
            .filter(|&d| d != 0)
            .collect();
        assert_eq!(open, [7], "corner {sq}");
    }
}

#[test]
fn center_squares_reach_at_most_four() {
    for sq in [Square::D4, Square::E4, Square::D5, Square::E5] {
        let row = MAX_SLIDING_DISTANCE.row(sq);
        assert_eq!(*row.iter().max().unwrap(), 4, "{sq}");
        assert_eq!(*row.iter().min().unwrap(), 3, "{sq}");
    }
}

#[test]
fn named_rows() {
    assert_eq!(MAX_SLIDING_DISTANCE.row(Square::A1), &[0, 7, 0, 7, 0, 0, 0, 7]);
    assert_eq!(MAX_SLIDING_DISTANCE.row(Square::H8), &[7, 0, 7, 0, 7, 0, 0, 0]);
    assert_eq!(MAX_SLIDING_DISTANCE.row(Square::D4), &[3, 4, 3, 4, 3, 3, 3, 4]);
}

#[test]
fn generator_is_pure() {
    let first = generate();
    let second = generate();
    assert_eq!(first, second);
    assert_eq!(first.as_array(), MAX_SLIDING_DISTANCE.as_array());
}

// ── Rays ──────────────────────────────────────────────────────────────────────

#[test]
fn rays_never_wrap() {
    for sq in Square::all() {
        for dir in Direction::ALL {
            let mut prev = sq;
            let mut steps = 0u8;
            for next in MAX_SLIDING_DISTANCE.ray(sq, dir) {
                let dr = next.rank().index().abs_diff(prev.rank().index());
                let df = next.file().index().abs_diff(prev.file().index());
                assert!(dr <= 1 && df <= 1, "{dir} from {sq} jumped {prev} -> {next}");
                assert_eq!(
                    (dr == 1 && df == 1),
                    dir.is_diagonal(),
                    "{dir} from {sq} took a wrong-shaped step"
                );
                prev = next;
                steps += 1;
            }
            assert_eq!(steps, MAX_SLIDING_DISTANCE.distance(sq, dir), "{dir} from {sq}");
            // The last square of the ray has nowhere further to go.
            assert_eq!(MAX_SLIDING_DISTANCE.distance(prev, dir), 0, "{dir} from {sq}");
        }
    }
}

#[test]
fn rook_and_bishop_mobility_on_empty_board() {
    for sq in Square::all() {
        let rook: usize = Direction::ORTHOGONAL
            .iter()
            .map(|&dir| MAX_SLIDING_DISTANCE.ray(sq, dir).len())
            .sum();
        assert_eq!(rook, 14, "rook on {sq}");
    }
    let bishop: usize = Direction::DIAGONAL
        .iter()
        .map(|&dir| MAX_SLIDING_DISTANCE.ray(Square::D4, dir).len())
        .sum();
    assert_eq!(bishop, 13);
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn braces_preserve_every_value() {
    let text = render(&MAX_SLIDING_DISTANCE, Format::Braces);
    let flat: Vec<u8> = MAX_SLIDING_DISTANCE.rows().flatten().copied().collect();
    assert_eq!(numbers(&text), flat);
}

#[test]
fn declaration_formats_wrap_the_same_values() {
    let flat: Vec<u8> = MAX_SLIDING_DISTANCE.rows().flatten().copied().collect();

    let cpp = render(&MAX_SLIDING_DISTANCE, Format::Cpp);
    let braces_start = cpp.find('=').unwrap();
    assert_eq!(numbers(&cpp[braces_start..]), flat);

    let rust = render(&MAX_SLIDING_DISTANCE, Format::Rust);
    let literal_start = rust.find('=').unwrap();
    assert_eq!(numbers(&rust[literal_start..]), flat);
}
