use std::{
    path::PathBuf,
};

use termion::{
    event::Key,
};

use crate::{
    Buffer,
    Direction,
    Renderer,
    Result,
    View,
};

// rows below the text area: status bar, message line, help line
const STATUS_ROWS: usize = 3;

const HELP_MSG: &str = "HELP: Ctrl+O = Save | Ctrl+X = Exit";
const HELP_LINE: &str = "^X Exit  ^O Save";
const MSG_LOAD_FAILED: &str = "Error opening file.";
const MSG_SAVED: &str = "File saved successfully!";
const MSG_SAVE_FAILED: &str = "Error: Cannot open file for writing!";
const MSG_CONFIRM_EXIT: &str =
    "File modified. Ctrl+O to save, Ctrl+X to exit without saving.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Continue,
    Quit,
}

// One editing session: the document, the cursor window into it, the
// last status message and the exit confirmation state, driven one key
// at a time by the surrounding loop.
pub struct Session {
    buf: Buffer,
    view: View,
    status: String,

    // armed by the first exit key on an unsaved document; the next
    // key either confirms or is swallowed
    pending_exit: bool,
}

impl Session {
    pub fn new(path: Option<PathBuf>, screen_rows: usize, screen_cols: usize) -> Session {
        let height = screen_rows.saturating_sub(STATUS_ROWS);
        let view = View::new(height, screen_cols);

        let (buf, status) = match path {
            Some(path) => match Buffer::open(&path) {
                Ok(buf) => {
                    log::info!("opened {} ({} lines)", path.display(), buf.len());
                    (buf, HELP_MSG.to_string())
                },
                Err(err) => {
                    log::warn!("could not read {}: {}", path.display(), err);
                    let mut buf = Buffer::new();
                    buf.set_filename(path);
                    (buf, MSG_LOAD_FAILED.to_string())
                },
            },
            None => (Buffer::new(), HELP_MSG.to_string()),
        };

        Session{
            buf,
            view,
            status,
            pending_exit: false,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    pub fn status(&self) -> &str {
        self.status.as_str()
    }

    pub fn handle_key(&mut self, key: Key) -> Outcome {
        if self.pending_exit {
            self.pending_exit = false;
            if key == Key::Ctrl('x') {
                return Outcome::Quit;
            }

            // anything else cancels the exit, and the key is
            // swallowed even if it was a command
            return Outcome::Continue;
        }

        match key {
            Key::Ctrl('x') => {
                if self.buf.modified() {
                    self.pending_exit = true;
                    self.status = MSG_CONFIRM_EXIT.to_string();
                    Outcome::Continue
                } else {
                    Outcome::Quit
                }
            },
            Key::Ctrl('o') => {
                self.save();
                Outcome::Continue
            },
            Key::Up => {
                self.view.move_cursor(&self.buf, Direction::Up);
                Outcome::Continue
            },
            Key::Down => {
                self.view.move_cursor(&self.buf, Direction::Down);
                Outcome::Continue
            },
            Key::Left => {
                self.view.move_cursor(&self.buf, Direction::Left);
                Outcome::Continue
            },
            Key::Right => {
                self.view.move_cursor(&self.buf, Direction::Right);
                Outcome::Continue
            },
            Key::Backspace => {
                self.view.delete_char(&mut self.buf);
                Outcome::Continue
            },
            Key::Char('\n') | Key::Char('\r') => {
                self.view.insert_newline(&mut self.buf);
                Outcome::Continue
            },
            Key::Char(c) if c.is_ascii_graphic() || c == ' ' => {
                self.view.insert_char(&mut self.buf, c as u8);
                Outcome::Continue
            },
            _ => Outcome::Continue,
        }
    }

    fn save(&mut self) {
        match self.buf.save() {
            Ok(()) => {
                if let Some(path) = self.buf.filename() {
                    log::info!("saved {} ({} lines)", path.display(), self.buf.len());
                }
                self.status = MSG_SAVED.to_string();
            },
            Err(err) => {
                log::error!("save failed: {}", err);
                self.status = MSG_SAVE_FAILED.to_string();
            },
        }
    }

    pub fn render<R: Renderer>(&mut self, r: &mut R) -> Result<()> {
        self.view.scroll();

        r.clear()?;
        self.view.render(&self.buf, r)?;
        self.draw_status_bar(r)?;
        self.draw_message(r)?;

        let (x, y) = self.view.screen_cursor();
        r.set_xy(x, y)?;

        r.flush()
    }

    fn draw_status_bar<R: Renderer>(&self, r: &mut R) -> Result<()> {
        let name = self
            .buf
            .filename()
            .map_or("(No Name)".to_string(), |p| p.display().to_string());
        let flag = if self.buf.modified() { "(modified)" } else { "" };

        let width = r.width();
        let mut bar = format!("File: {} {}", name, flag);
        bar.truncate(width);
        let bar = format!("{:<width$}", bar, width = width);

        r.set_xy(0, self.view.height())?;
        r.write_inverted(&bar)?;

        Ok(())
    }

    fn draw_message<R: Renderer>(&self, r: &mut R) -> Result<()> {
        let width = r.width();

        let mut msg = self.status.clone();
        msg.truncate(width);
        r.set_xy(0, self.view.height() + 1)?;
        r.write(&msg)?;

        let mut help = HELP_LINE.to_string();
        help.truncate(width);
        r.set_xy(0, self.view.height() + 2)?;
        r.write(&help)?;

        Ok(())
    }
}
