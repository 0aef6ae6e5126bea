use std::{
    convert::From,
    default::Default,
    fs::File,
    io::{
        self,
        BufRead,
        BufReader,
    },
    path::{
        Path,
        PathBuf,
    },
};

use crate::{
    Line,
};

const UNTITLED: &str = "untitled.txt";


// The document: an ordered list of rows plus the file metadata.
// Every public constructor leaves at least one row in the list, an
// empty document is a single empty row.
#[derive(Debug)]
pub struct Buffer {
    lines: Vec<Line>,
    filename: Option<PathBuf>,
    modified: bool,
}

impl Buffer {
    pub fn new() -> Buffer {
        let mut ret = Buffer::default();
        ret.insert_line(0, "");

        ret
    }

    // opens the file at path; a file that does not exist is an empty
    // document, not an error
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Buffer> {
        let path = path.as_ref();

        let mut ret = match File::open(path) {
            Ok(f) => Buffer::from_reader(BufReader::new(f))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Buffer::new(),
            Err(err) => return Err(err),
        };

        ret.filename = Some(path.to_path_buf());

        Ok(ret)
    }

    // reads rows from r, stripping one trailing \n or \r per row but
    // never both
    pub fn from_reader<R: BufRead>(mut r: R) -> io::Result<Buffer> {
        let mut ret = Buffer::default();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            if r.read_until(b'\n', &mut raw)? == 0 {
                break;
            }

            if matches!(raw.last(), Some(&(b'\n' | b'\r'))) {
                raw.pop();
            }

            let at = ret.lines.len();
            ret.insert_line(at, raw.clone());
        }

        if ret.lines.is_empty() {
            ret.insert_line(0, "");
        }

        Ok(ret)
    }

    pub fn collate<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        for line in self.lines.iter() {
            // TODO pick line ending
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }

        Ok(())
    }

    // writes every row to the current filename, defaulting to
    // untitled.txt for a document that never had a name; the modified
    // flag only clears once the write went through
    pub fn save(&mut self) -> io::Result<()> {
        let path = self.filename.get_or_insert_with(|| PathBuf::from(UNTITLED));

        let mut f = File::create(path.as_path())?;
        self.collate(&mut f)?;

        self.modified = false;
        Ok(())
    }

    // number of rows, at least one for any document built through the
    // public constructors
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, at: usize) -> Option<&Line> {
        self.lines.get(at)
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename<P: Into<PathBuf>>(&mut self, path: P) {
        self.filename = Some(path.into());
    }

    pub fn modified(&self) -> bool {
        self.modified
    }

    // inserts a new row at the index, shifting the rest down; out of
    // range requests are dropped
    pub fn insert_line<L: Into<Line>>(&mut self, at: usize, text: L) {
        if at > self.lines.len() {
            return;
        }

        self.lines.insert(at, text.into());
        self.modified = true;
    }

    // removes the row at the index, shifting the rest up; the last
    // remaining row is replaced by an empty one instead of leaving
    // the document with no rows
    pub fn delete_line(&mut self, at: usize) {
        if at >= self.lines.len() {
            return;
        }

        self.lines.remove(at);
        self.modified = true;

        if self.lines.is_empty() {
            self.insert_line(0, "");
        }
    }

    // splices one byte into the row, clamping the column; returns the
    // column after the insertion, or None for a row out of range
    pub fn insert_char(&mut self, row: usize, col: usize, b: u8) -> Option<usize> {
        let line = self.lines.get_mut(row)?;
        let ret = line.insert_col(col, b);
        self.modified = true;

        Some(ret)
    }

    // removes the byte at (row, col) if there is one
    pub fn remove_char(&mut self, row: usize, col: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            line.remove_col(col);
            self.modified = true;
        }
    }

    // merges the row into the one above it and returns the upper
    // row's length from before the merge; None leaves the document
    // untouched
    pub fn join_up(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }

        let line = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let ret = prev.len();
        prev.join(&line);
        self.modified = true;

        Some(ret)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer{
            lines: Vec::new(),
            filename: None,
            modified: false,
        }
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        let mut ret = Buffer::default();
        for line in s.lines() {
            let at = ret.lines.len();
            ret.insert_line(at, line);
        }

        if ret.lines.is_empty() {
            ret.insert_line(0, "");
        }

        ret
    }
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(buf: &Buffer) -> Vec<String> {
        (0..buf.len())
            .map(|i| buf.line(i).map(Line::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn empty_stream_loads_as_one_empty_line() {
        let buf = Buffer::from_reader(Cursor::new(b"")).unwrap();

        assert_eq!(buf.len(), 1);
        assert_eq!(lines(&buf), vec![""]);
    }

    #[test]
    fn from_reader_strips_one_terminator_per_line() {
        let buf = Buffer::from_reader(Cursor::new(b"abc\n\nde")).unwrap();
        assert_eq!(lines(&buf), vec!["abc", "", "de"]);

        // a CRLF line keeps its carriage return, only one byte is
        // stripped
        let buf = Buffer::from_reader(Cursor::new(b"abc\r\nde\n")).unwrap();
        assert_eq!(lines(&buf), vec!["abc\r", "de"]);
    }

    #[test]
    fn loading_marks_the_document_modified() {
        let buf = Buffer::from_reader(Cursor::new(b"abc\n")).unwrap();
        assert!(buf.modified());

        assert!(Buffer::new().modified());
    }

    #[test]
    fn collate_terminates_every_line() {
        let buf = Buffer::from("abc\n\nde");

        let mut out = Vec::new();
        buf.collate(&mut out).unwrap();
        assert_eq!(out, b"abc\n\nde\n");
    }

    #[test]
    fn insert_line_shifts_down_and_bounds_checks() {
        let mut buf = Buffer::from("a\nc");
        buf.insert_line(1, "b");
        assert_eq!(lines(&buf), vec!["a", "b", "c"]);

        buf.insert_line(3, "d");
        assert_eq!(lines(&buf), vec!["a", "b", "c", "d"]);

        buf.insert_line(9, "x");
        assert_eq!(lines(&buf), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn delete_line_never_empties_the_document() {
        let mut buf = Buffer::from("a\nb");

        buf.delete_line(1);
        assert_eq!(lines(&buf), vec!["a"]);

        buf.delete_line(0);
        assert_eq!(lines(&buf), vec![""]);

        buf.delete_line(0);
        assert_eq!(lines(&buf), vec![""]);

        buf.delete_line(5);
        assert_eq!(lines(&buf), vec![""]);
    }

    #[test]
    fn insert_char_out_of_range_row_is_noop() {
        let mut buf = Buffer::from("ab");

        assert_eq!(buf.insert_char(1, 0, b'x'), None);
        assert_eq!(lines(&buf), vec!["ab"]);

        assert_eq!(buf.insert_char(0, 1, b'x'), Some(2));
        assert_eq!(lines(&buf), vec!["axb"]);
    }

    #[test]
    fn join_up_returns_the_pre_merge_length() {
        let mut buf = Buffer::from("ab\ncd");

        assert_eq!(buf.join_up(0), None);
        assert_eq!(buf.join_up(2), None);

        assert_eq!(buf.join_up(1), Some(2));
        assert_eq!(lines(&buf), vec!["abcd"]);
    }
}
