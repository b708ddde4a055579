//! Coordinate structure used to reference specific locations within parser input
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A [Coords] represents a single location within the parser input
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coords {
    /// The absolute byte offset from the start of the input
    pub absolute: usize,
    /// The line position, starting at 1
    pub line: usize,
    /// The column position (in bytes), starting at 1
    pub column: usize,
}

impl Coords {
    /// Compute the full set of coordinates for a byte offset within `bytes`. Offsets beyond the
    /// end of the input are clamped to the end. Only ever called on the error path, so a linear
    /// scan of the prefix is fine.
    pub fn locate(bytes: &[u8], offset: usize) -> Self {
        let absolute = offset.min(bytes.len());
        let prefix = &bytes[..absolute];
        let line = prefix.iter().filter(|b| **b == b'\n').count() + 1;
        let column = match prefix.iter().rposition(|b| *b == b'\n') {
            Some(nl) => absolute - nl,
            None => absolute + 1,
        };
        Coords {
            absolute,
            line,
            column,
        }
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[abs: {}, line: {}, column: {}]",
            self.absolute, self.line, self.column
        )
    }
}

impl Default for Coords {
    /// The default set of coordinates are positioned at the start of the first row
    fn default() -> Self {
        Coords {
            absolute: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Eq for Coords {}

impl PartialOrd<Self> for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::Coords;

    #[test]
    fn should_locate_start_of_input() {
        assert_eq!(Coords::locate(b"{}", 0), Coords::default());
    }

    #[test]
    fn should_track_lines_and_columns() {
        let input = b"{\n  \"a\": x\n}";
        let coords = Coords::locate(input, 9);
        assert_eq!(coords.absolute, 9);
        assert_eq!(coords.line, 2);
        assert_eq!(coords.column, 8);
    }

    #[test]
    fn should_clamp_offsets_past_the_end() {
        let coords = Coords::locate(b"[1,", 10);
        assert_eq!(coords.absolute, 3);
        assert_eq!(coords.column, 4);
    }

    #[test]
    fn should_order_by_absolute_position() {
        let input = b"[\n1,\n2]";
        assert!(Coords::locate(input, 1) < Coords::locate(input, 5));
    }
}
