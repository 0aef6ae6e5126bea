use std::{
    io::{
        self,
        Write,
    },
};

use termion::{
    raw::IntoRawMode,
};


use crate::{
    Error,
    Renderer,
    Result,
};



pub struct TerminalRenderer{
    stdout: termion::raw::RawTerminal<io::Stdout>,
    height: u16,
    width: u16,

    // cursor, 1 based like the terminal wants it
    cx: u16,
    cy: u16,
}


impl std::fmt::Debug for TerminalRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalRenderer")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("cx", &self.cx)
            .field("cy", &self.cy)
            .finish()
    }
}

impl TerminalRenderer {
    pub fn new(stdout: io::Stdout, h: Option<usize>, w: Option<usize>) ->
        Result<TerminalRenderer> {

        let (tw, th) = termion::terminal_size()
            .map(|(x, y)| (x as usize, y as usize))?;

        let height = h.unwrap_or(th);

        if height > th {
            return Err(Error::InvalidRendererSize(height))
        }

        let width = w.unwrap_or(tw);

        if width > tw {
            return Err(Error::InvalidRendererSize(width))
        }

        let mut stdout = stdout.into_raw_mode()?;
        write!(stdout, "{}", termion::clear::All)?;

        let mut ret = TerminalRenderer{
            stdout,
            height: height as u16,
            width: width as u16,
            cx: 1,
            cy: 1,
        };

        ret.goto()?;

        Ok(ret)
    }

    fn goto(&mut self) -> Result<()> {
        write!(self.stdout, "{}",
               termion::cursor::Goto(
                   self.cx,
                   self.cy,
                   )
               )?;
        Ok(())
    }

    fn checked_coord(n: usize) -> Result<u16> {
        n.checked_add(1)
            .and_then(|nn| {
                if nn < u16::MAX.into() {
                    Some(nn as u16)
                } else {
                    None
                }
            })
            .ok_or(Error::InvalidCursorSize(n))
    }
}

impl Renderer for TerminalRenderer {
    fn height(&self) -> usize {
        self.height as usize
    }

    fn width(&self) -> usize {
        self.width as usize
    }

    fn clear(&mut self) -> Result<()> {
        write!(self.stdout, "{}", termion::clear::All)?;
        Ok(())
    }

    fn set_xy(&mut self, x: usize, y: usize) -> Result<()> {
        self.cx = Self::checked_coord(x)?;
        self.cy = Self::checked_coord(y)?;

        self.goto()
    }

    fn write(&mut self, s: &str) -> Result<()> {
        write!(self.stdout, "{}", s)?;
        self.cx = self.cx.saturating_add(s.len() as u16);

        Ok(())
    }

    fn write_inverted(&mut self, s: &str) -> Result<()> {
        write!(self.stdout, "{}{}{}",
               termion::style::Invert,
               s,
               termion::style::NoInvert,
               )?;
        self.cx = self.cx.saturating_add(s.len() as u16);

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;

        Ok(())
    }
}
