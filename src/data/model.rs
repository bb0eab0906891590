use std::fmt;

// ---------------------------------------------------------------------------
// Record – one line of the input file
// ---------------------------------------------------------------------------

/// A single `(x, y)` pair. `x` is the bar position, `y` its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub x: i64,
    pub y: i64,
}

impl Record {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All records of one file in file order, stored as two parallel columns.
///
/// The columns are private so they can only grow together, which keeps
/// `xs().len() == ys().len()` true for every value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    xs: Vec<i64>,
    ys: Vec<i64>,
}

impl Dataset {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.xs.push(record.x);
        self.ys.push(record.y);
    }

    /// Bar positions, in file order.
    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    /// Bar heights, in file order.
    pub fn ys(&self) -> &[i64] {
        &self.ys
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Smallest and largest bar height, `None` for an empty dataset.
    pub fn y_range(&self) -> Option<(i64, i64)> {
        let min = self.ys.iter().copied().min()?;
        let max = self.ys.iter().copied().max()?;
        Some((min, max))
    }
}
