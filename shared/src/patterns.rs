//! Named seed patterns as `(delta row, delta column)` offsets from the
//! grid center.

pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(isize, isize)],
}

/// A single live cell at the center; the fallback for unknown names.
const DOT: &[(isize, isize)] = &[(0, 0)];

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "R-pentomino",
        offsets: &[(0, 0), (0, -1), (-1, 0), (1, 0), (-1, 1)],
    },
    Pattern {
        name: "Acorn",
        offsets: &[(0, 1), (0, 2), (0, -4), (0, -3), (-2, -3), (-1, -1)],
    },
    Pattern {
        name: "Rabbits",
        offsets: &[
            (-1, 1), (-1, 2), (0, 2), (-1, 3),
            (0, -1), (1, -2), (0, -2), (0, -3), (-1, -3),
        ],
    },
];

/// Offsets for `name`, or the single-center-cell fallback when the name
/// is not a known pattern.
pub fn lookup(name: &str) -> &'static [(isize, isize)] {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name == name)
        .map_or(DOT, |pattern| pattern.offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_their_own_offsets() {
        assert_eq!(lookup("R-pentomino").len(), 5);
        assert_eq!(lookup("Acorn").len(), 6);
        assert_eq!(lookup("Rabbits").len(), 9);
    }

    #[test]
    fn unknown_names_fall_back_to_the_center_dot() {
        assert_eq!(lookup("no-such-pattern"), &[(0, 0)]);
        assert_eq!(lookup(""), &[(0, 0)]);
    }

    #[test]
    fn acorn_does_not_bleed_into_rabbits() {
        let acorn = lookup("Acorn");
        assert!(!acorn.contains(&(-1, 1)));
        assert!(!acorn.contains(&(1, -2)));
        assert!(!acorn.contains(&(-1, -3)));
    }
}
