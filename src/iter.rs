//! Detached iteration over container contents

/// A single-pass iterator over a copy of a container's elements.
///
/// The snapshot owns its values, so later mutation of the source container is
/// not visible through it. [`Snapshot::restart`] rewinds the cursor over the
/// same copied values.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    values: Vec<T>,
    cursor: usize,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Rewinds the cursor to the first element.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Returns the elements not yet consumed.
    pub fn remaining(&self) -> &[T] {
        &self.values[self.cursor..]
    }

    /// Consumes the snapshot, returning every copied element.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.values.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.values.len() - self.cursor;
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for Snapshot<T> {}
