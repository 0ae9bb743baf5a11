//! Text rendering of a list.
//!
//! Every entry point produces the same text: `[` + elements joined by
//! `", "` + `]`, with no trailing newline. An empty list renders as `[]`.

use std::fmt;
use std::io::{self, Write};

use crate::list::ListArray;

impl ListArray {
    /// Write the rendering of this list to `out`.
    pub fn display_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Write the rendering of this list to standard output.
    pub fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.display_to(&mut lock)?;
        lock.flush()
    }
}

impl fmt::Display for ListArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.live().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(elem)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_brackets() {
        assert_eq!(ListArray::new().to_string(), "[]");
    }

    #[test]
    fn single_element_has_no_separator() {
        let list: ListArray = ["solo"].into_iter().collect();
        assert_eq!(list.to_string(), "[solo]");
    }

    #[test]
    fn display_to_matches_display_impl() {
        let mut list = ListArray::with_capacity(2);
        list.push_back("a");
        list.push_back("b");
        list.push_front("c");

        let mut sink = Vec::new();
        list.display_to(&mut sink).unwrap();
        assert_eq!(sink, b"[c, a, b]");
        assert_eq!(format!("{list}"), "[c, a, b]");
    }

    #[test]
    fn elements_are_written_verbatim() {
        let list: ListArray = ["has, comma", "", "[x]"].into_iter().collect();
        assert_eq!(list.to_string(), "[has, comma, , [x]]");
    }

    #[test]
    fn display_to_stdout_succeeds() {
        let list: ListArray = ["out"].into_iter().collect();
        assert!(list.display().is_ok());
    }
}
