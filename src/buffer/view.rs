use std::{
    borrow::Cow,
};

use crate::{
    Buffer,
    Line,
    Renderer,
    Result,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

// The logical cursor plus the window of the document it sits in. The
// window never moves on its own, scroll() drags it by the minimal
// amount needed to keep the cursor inside.
#[derive(Debug)]
pub struct View {
    // cursor, row indexes the document and col indexes bytes of the
    // current row
    row: usize,
    col: usize,

    // top left document cell currently on screen
    top_line: usize,
    left_col: usize,

    // fixed text area size, set once from the terminal
    height: usize,
    width: usize,
}

impl View {
    pub fn new(height: usize, width: usize) -> Self {
        View{
            row: 0,
            col: 0,
            top_line: 0,
            left_col: 0,
            height: height.max(1),
            width: width.max(1),
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn line_len(&self, buf: &Buffer, row: usize) -> usize {
        buf.line(row).map_or(0, Line::len)
    }

    fn clamp_col(&mut self, buf: &Buffer) {
        let len = self.line_len(buf, self.row);
        if self.col > len {
            self.col = len;
        }
    }

    // one cursor step; vertical moves clamp the column to the target
    // row, horizontal moves wrap at row boundaries
    pub fn move_cursor(&mut self, buf: &Buffer, dir: Direction) {
        match dir {
            Direction::Up => {
                if self.row > 0 {
                    self.row -= 1;
                }
                self.clamp_col(buf);
            },
            Direction::Down => {
                if self.row + 1 < buf.len() {
                    self.row += 1;
                }
                self.clamp_col(buf);
            },
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.line_len(buf, self.row);
                }
            },
            Direction::Right => {
                if self.col < self.line_len(buf, self.row) {
                    self.col += 1;
                } else if self.row + 1 < buf.len() {
                    self.row += 1;
                    self.col = 0;
                }
            },
        }
    }

    pub fn insert_char(&mut self, buf: &mut Buffer, b: u8) {
        if let Some(col) = buf.insert_char(self.row, self.col, b) {
            self.col = col;
        }
    }

    // backspace; at column 0 the row merges into the one above and
    // the cursor lands on the seam
    pub fn delete_char(&mut self, buf: &mut Buffer) {
        if self.row >= buf.len() {
            return;
        }

        if self.col > 0 {
            buf.remove_char(self.row, self.col - 1);
            self.col -= 1;
        } else if self.row > 0 {
            if let Some(seam) = buf.join_up(self.row) {
                self.row -= 1;
                self.col = seam;
            }
        }
    }

    // enter does not split the row: inside the document it only steps
    // down, on the last row it appends a fresh empty row and moves to
    // its start
    pub fn insert_newline(&mut self, buf: &mut Buffer) {
        if self.row + 1 < buf.len() {
            self.row += 1;
            self.clamp_col(buf);
        } else {
            let at = buf.len();
            buf.insert_line(at, "");
            self.row += 1;
            self.col = 0;
        }
    }

    // drags the window so the cursor is inside it again, moving each
    // edge only by the delta needed
    pub fn scroll(&mut self) {
        if self.row < self.top_line {
            self.top_line = self.row;
        }
        if self.row >= self.top_line + self.height {
            self.top_line = self.row - self.height + 1;
        }

        if self.col < self.left_col {
            self.left_col = self.col;
        }
        if self.col >= self.left_col + self.width {
            self.left_col = self.col - self.width + 1;
        }
    }

    // the document slice shown on screen row y, blank past the end of
    // the document
    pub fn visible_row<'a>(&self, buf: &'a Buffer, y: usize) -> Cow<'a, str> {
        let bytes = buf
            .line(self.top_line + y)
            .map_or(&[] as &[u8], |line| line.window(self.left_col, self.width));

        String::from_utf8_lossy(bytes)
    }

    // screen cell of the cursor, in range once scroll() ran
    pub fn screen_cursor(&self) -> (usize, usize) {
        (self.col - self.left_col, self.row - self.top_line)
    }

    pub fn render<R: Renderer>(&self, buf: &Buffer, r: &mut R) -> Result<()> {
        for y in 0..self.height {
            r.set_xy(0, y)?;
            r.write(&self.visible_row(buf, y))?;
        }

        Ok(())
    }
}
