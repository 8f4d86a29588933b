//! Step vectors for leaper offsets and sliding rays.

/// A (Δrank, Δfile) step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_rank: i8,
    pub d_file: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    /// Rook rays.
    pub const ORTHOGONALS: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// Bishop rays.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// Queen rays and king steps: orthogonals first, then diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// The eight knight jumps.
    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(1, 2),
        Direction::new(1, -2),
        Direction::new(-1, 2),
        Direction::new(-1, -2),
        Direction::new(-2, 1),
        Direction::new(-2, -1),
    ];

    #[inline]
    pub const fn new(d_rank: i8, d_file: i8) -> Direction {
        Direction { d_rank, d_file }
    }

    /// `true` when both components are non-zero.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_rank != 0 && self.d_file != 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Direction;

    #[test]
    fn all_is_orthogonals_then_diagonals() {
        let (orth, diag) = Direction::ALL.split_at(4);
        assert_eq!(orth, Direction::ORTHOGONALS);
        assert_eq!(diag, Direction::DIAGONALS);
        assert!(orth.iter().all(|d| !d.is_diagonal()));
        assert!(diag.iter().all(|d| d.is_diagonal()));
    }

    #[test]
    fn knight_jumps_are_distinct_l_shapes() {
        let unique: HashSet<_> = Direction::KNIGHT_JUMPS.iter().collect();
        assert_eq!(unique.len(), 8);
        for d in Direction::KNIGHT_JUMPS {
            let mut parts = [d.d_rank.abs(), d.d_file.abs()];
            parts.sort();
            assert_eq!(parts, [1, 2], "{d:?} is not a knight jump");
        }
    }
}
