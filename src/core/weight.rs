//! Edge weight abstraction used by the distance-accumulating algorithms.

use std::{cmp::Ordering, fmt, ops::Add, str::FromStr};

/// An edge value that supports the arithmetic and ordering required by the
/// shortest-path, spanning-tree and flow algorithms.
///
/// The trait supplies the "infinity sentinel" ([`Weight::inf`], the maximum
/// representable value by default) standing for "no finite distance found",
/// because the value types have no built-in notion of infinity. Overflow of
/// weight accumulation is not detected; callers are expected to keep distances
/// below the sentinel.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    fn zero() -> Self;
    fn inf() -> Self;

    /// Returns `true` if the type cannot represent negative values.
    ///
    /// For unsigned types this allows the algorithms to skip negative-weight
    /// validation entirely, as the implementation is a constant boolean in
    /// practice.
    fn is_unsigned() -> bool;
}

/// The edge value of an unweighted graph.
///
/// A zero-size marker that deliberately does not implement [`Weight`], so that
/// algorithms which accumulate distances or capacities cannot be invoked on an
/// unweighted graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Unweight;

impl fmt::Display for Unweight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_")
    }
}

impl FromStr for Unweight {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_" => Ok(Unweight),
            _ => Err(()),
        }
    }
}

/// A value paired with a weight, ordered by the weight alone.
///
/// Used to key vertices or edges by their tentative distance in priority
/// queues without the weight ordering being confused by the payload.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);
