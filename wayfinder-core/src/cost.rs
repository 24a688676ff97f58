//! Cost algebra shared by every shortest-path engine
//!
//! A [`Cost`] is either a finite accumulated weight or "not reached yet".
//! Relaxation code never special-cases unreachability: it adds and compares
//! costs and lets [`Cost::Infinite`] absorb everything.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Numeric edge weight.
///
/// Implemented for every type that has a zero, addition, subtraction and an
/// ordering, so all primitive integers and floats qualify. Subtraction is
/// only used by Johnson's reweighting step.
pub trait Weight: Copy + PartialOrd + Zero + Sub<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Zero + Sub<Output = T> + Debug {}

/// Accumulated path cost, either finite or unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cost<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Cost<W> {
    /// `Finite(zero)`, the cost of the empty path.
    #[must_use]
    pub fn zero() -> Self {
        Cost::Finite(W::zero())
    }

    #[must_use]
    pub const fn infinite() -> Self {
        Cost::Infinite
    }

    pub const fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub const fn is_infinite(&self) -> bool {
        matches!(self, Cost::Infinite)
    }

    /// The finite weight, or `None` when unreachable.
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(w),
            Cost::Infinite => None,
        }
    }

    /// Total order used by the priority queues.
    ///
    /// Incomparable finite weights (NaN) are treated as equal instead of
    /// panicking.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Strict improvement test used by every relaxation step.
    pub fn improves_on(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Less
    }
}

impl<W: Weight> Default for Cost<W> {
    fn default() -> Self {
        Cost::Infinite
    }
}

impl<W> From<W> for Cost<W> {
    fn from(weight: W) -> Self {
        Cost::Finite(weight)
    }
}

impl<W: Weight> Add for Cost<W> {
    type Output = Cost<W>;

    fn add(self, rhs: Cost<W>) -> Self::Output {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Infinite,
        }
    }
}

impl<W: Weight> Add<W> for Cost<W> {
    type Output = Cost<W>;

    fn add(self, rhs: W) -> Self::Output {
        self + Cost::Finite(rhs)
    }
}

impl<W: PartialOrd> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            (Cost::Finite(_), Cost::Infinite) => Some(Ordering::Less),
            (Cost::Infinite, Cost::Finite(_)) => Some(Ordering::Greater),
            (Cost::Infinite, Cost::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: Ord> Ord for Cost<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.cmp(b),
            (Cost::Finite(_), Cost::Infinite) => Ordering::Less,
            (Cost::Infinite, Cost::Finite(_)) => Ordering::Greater,
            (Cost::Infinite, Cost::Infinite) => Ordering::Equal,
        }
    }
}

impl<W: Display> Display for Cost<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(w) => write!(f, "{w}"),
            Cost::Infinite => f.write_str("inf"),
        }
    }
}
