use crate::grid::Position;

fn deltas(from: Position, to: Position) -> (usize, usize) {
    (from.x.abs_diff(to.x), from.y.abs_diff(to.y))
}

/// `|dx| + |dy|`. Exact lower bound for 4-connected unit-cost moves.
pub fn manhattan(from: Position, to: Position) -> f64 {
    let (dx, dy) = deltas(from, to);
    (dx + dy) as f64
}

/// Euclidean distance plus half the Manhattan distance.
///
/// Overestimates the remaining cost whenever `dx + dy > 0`, so searches
/// ordered by it can return longer paths than A*.
pub fn taylor(from: Position, to: Position) -> f64 {
    let (dx, dy) = deltas(from, to);
    let (dx, dy) = (dx as f64, dy as f64);
    (dx * dx + dy * dy).sqrt() + (dx + dy) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 1);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(manhattan(b, a), 7.0);
        assert_eq!(manhattan(a, a), 0.0);
    }

    #[test]
    fn taylor_matches_closed_form() {
        let a = Position::new(0, 0);
        assert_eq!(taylor(a, Position::new(3, 4)), 5.0 + 3.5);
        assert_eq!(taylor(a, a), 0.0);
    }

    #[test]
    fn taylor_overestimates_straight_lines() {
        let a = Position::new(0, 0);
        let b = Position::new(6, 0);
        assert!(taylor(a, b) > manhattan(a, b));
    }
}
