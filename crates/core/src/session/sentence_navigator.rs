/// Cursor over a fixed, non-circular sequence of target sentences.
///
/// Moving past either end is ignored rather than reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceNavigator {
    index: usize,
    len: usize,
}

impl SentenceNavigator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Returns whether the index moved.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves by `delta` positions, or not at all if that would leave the range.
    pub fn step(&mut self, delta: isize) -> bool {
        let target = self.index as isize + delta;
        if delta == 0 || target < 0 || target >= self.len as isize {
            return false;
        }
        self.index = target as usize;
        true
    }

    /// Counter label, e.g. `"2 / 5"`.
    pub fn position(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}
