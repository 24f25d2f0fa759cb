//! Row patterns and the wiring rule for each row-to-row transition.
//!
//! A pattern lists row sizes from the top of the pyramid down. Each pair of
//! consecutive rows is one `Transition`, which decides which cards of the
//! lower (child) row rest on each card of the upper (parent) row.
//!
//! | Transition | Row sizes      | Parent `p` rests under |
//! |------------|----------------|------------------------|
//! | `Expand`   | `n -> n + 1`   | `p`, `p + 1`           |
//! | `Contract` | `n -> n - 1`   | `p - 1`, `p`           |
//! | `Pinch`    | `2n -> n`      | `p / 2`                |
//! | `Spread`   | `n -> 2n`      | `2p`, `2p + 1`         |
//!
//! Out-of-range columns are clipped. Ascending pyramids use only `Expand`,
//! descending ones only `Contract`, and an hourglass is
//! `Expand* Pinch Spread Contract*`.

use serde::{Deserialize, Serialize};

use crate::cards::Era;
use crate::error::{DraftError, Result};

/// One of the three supported pyramid topologies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PyramidShape {
    Ascending,
    Descending,
    Hourglass,
}

/// Wiring rule between two consecutive rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    Expand,
    Contract,
    Pinch,
    Spread,
}

impl Transition {
    fn classify(parent_len: usize, child_len: usize) -> Option<Self> {
        if child_len == parent_len + 1 {
            Some(Transition::Expand)
        } else if child_len + 1 == parent_len {
            Some(Transition::Contract)
        } else if child_len * 2 == parent_len {
            Some(Transition::Pinch)
        } else if parent_len * 2 == child_len {
            Some(Transition::Spread)
        } else {
            None
        }
    }

    /// Child columns covering the parent at column `parent`, in child
    /// position order. Columns outside `0..child_len` are dropped.
    #[must_use]
    pub fn children_of(self, parent: usize, child_len: usize) -> [Option<usize>; 2] {
        let raw = match self {
            Transition::Expand => [Some(parent), Some(parent + 1)],
            Transition::Contract => [parent.checked_sub(1), Some(parent)],
            Transition::Pinch => [Some(parent / 2), None],
            Transition::Spread => [Some(parent * 2), Some(parent * 2 + 1)],
        };
        raw.map(|c| c.filter(|&c| c < child_len))
    }
}

/// A validated row pattern.
///
/// ```
/// use duel_draft::pyramid::{PyramidShape, RowPattern};
///
/// let hourglass = RowPattern::new(vec![2, 3, 4, 2, 4, 3, 2]).unwrap();
/// assert_eq!(hourglass.shape(), PyramidShape::Hourglass);
/// assert_eq!(hourglass.total(), 20);
///
/// assert!(RowPattern::new(vec![2, 5]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct RowPattern {
    rows: Vec<usize>,
    shape: PyramidShape,
    transitions: Vec<Transition>,
}

impl RowPattern {
    /// Validate and classify a row pattern.
    ///
    /// Fails with `EmptyRowPattern` when there are no rows or a row is
    /// empty, and with `UnsupportedRowPattern` when the rows match none of
    /// the three shapes.
    pub fn new(rows: impl Into<Vec<usize>>) -> Result<Self> {
        let rows = rows.into();
        if rows.is_empty() || rows.contains(&0) {
            return Err(DraftError::EmptyRowPattern);
        }

        let transitions = rows
            .windows(2)
            .map(|w| Transition::classify(w[0], w[1]))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DraftError::UnsupportedRowPattern { rows: rows.clone() })?;

        let shape = classify_shape(&transitions)
            .ok_or_else(|| DraftError::UnsupportedRowPattern { rows: rows.clone() })?;

        Ok(Self {
            rows,
            shape,
            transitions,
        })
    }

    /// The standard pattern of an era.
    #[must_use]
    pub fn for_era(era: Era) -> Self {
        Self::new(era.row_counts()).expect("standard era patterns are valid")
    }

    /// Row sizes, top row first.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the deepest row.
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.rows.len() - 1
    }

    /// Total number of slots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().sum()
    }

    /// Topology of this pattern.
    #[must_use]
    pub fn shape(&self) -> PyramidShape {
        self.shape
    }

    /// Wiring rule between row `i` and row `i + 1`.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

impl TryFrom<Vec<usize>> for RowPattern {
    type Error = DraftError;

    fn try_from(rows: Vec<usize>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<RowPattern> for Vec<usize> {
    fn from(pattern: RowPattern) -> Self {
        pattern.rows
    }
}

fn classify_shape(transitions: &[Transition]) -> Option<PyramidShape> {
    if transitions.iter().all(|&t| t == Transition::Expand) {
        return Some(PyramidShape::Ascending);
    }
    if transitions.iter().all(|&t| t == Transition::Contract) {
        return Some(PyramidShape::Descending);
    }

    let pinch = transitions.iter().position(|&t| t == Transition::Pinch)?;
    let rising = transitions[..pinch].iter().all(|&t| t == Transition::Expand);
    let spread = transitions.get(pinch + 1) == Some(&Transition::Spread);
    let falling = transitions
        .get(pinch + 2..)
        .unwrap_or(&[])
        .iter()
        .all(|&t| t == Transition::Contract);

    (rising && spread && falling).then_some(PyramidShape::Hourglass)
}
