use std::ops::{Add, Sub};

/// A cell coordinate, `x` selects the row and `y` the column.
///
/// Ordering is lexicographic on `(x, y)`. Arithmetic wraps at the edge of
/// `i64`, so cells on opposite edges of the domain are neighbors and the
/// universe closes into a torus of side 2^64.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

// wrapping keeps translation total at the edge of the i64 domain
impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(1, -2) + pos!(3, 4), pos!(4, 2));
    assert_eq!(pos!(1, -2) - pos!(3, 4), pos!(-2, -6));
    assert_eq!(pos!(i64::MAX, 0) + pos!(1, 0), pos!(i64::MIN, 0));
}

#[test]
fn test_pos_ordering() {
    let mut list = vec![pos!(1, 0), pos!(0, 5), pos!(0, -1), pos!(-3, 9)];
    list.sort();
    assert_eq!(list, vec![pos!(-3, 9), pos!(0, -1), pos!(0, 5), pos!(1, 0)]);
}
