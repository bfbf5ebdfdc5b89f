//! Utility functions for containers
//!
//! This module provides the shared debug rendering used by every container's
//! `fmt::Debug` implementation.

use std::fmt;

use crate::common::Capacity;

/// Writes `Name[capacity=C, size=S, values=[v1, v2 →]]`.
///
/// Values are written in the order the iterator yields them, which is the
/// container's removal order.
pub(crate) fn debug_container<'a, T, I>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    capacity: Capacity,
    size: usize,
    values: I,
) -> fmt::Result
where
    T: fmt::Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "{}[capacity={}, size={}, values=[", name, capacity, size)?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:?}", value)?;
    }
    f.write_str(" →]]")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Render<'a>(&'a [i32], Capacity);

    impl fmt::Debug for Render<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            debug_container(f, "Render", self.1, self.0.len(), self.0)
        }
    }

    #[test]
    fn test_debug_container_format() {
        assert_eq!(
            format!("{:?}", Render(&[1, 2, 3], Capacity::Bounded(5))),
            "Render[capacity=5, size=3, values=[1, 2, 3 →]]"
        );
        assert_eq!(
            format!("{:?}", Render(&[], Capacity::Unbounded)),
            "Render[capacity=unbounded, size=0, values=[ →]]"
        );
    }
}
