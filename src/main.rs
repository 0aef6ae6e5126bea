use std::{
    fs::File,
    io,
    path::{
        Path,
        PathBuf,
    },
};

use clap::Parser;
use log::LevelFilter;
use simplelog::{
    Config,
    WriteLogger,
};
use termion::{
    input::TermRead,
};

use rano::{
    Outcome,
    Renderer,
    Result,
    Session,
    TerminalRenderer,
};

/// A small nano-like terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "rano", version, about)]
struct Args {
    /// File to edit; omit it to start with an empty document.
    file: Option<PathBuf>,

    /// Write a debug log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref());

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut r = TerminalRenderer::new(stdout, None, None)?;
    let mut session = Session::new(args.file, r.height(), r.width());

    session.render(&mut r)?;

    for key in stdin.keys() {
        match session.handle_key(key?) {
            Outcome::Quit => break,
            Outcome::Continue => {},
        }

        session.render(&mut r)?;
    }

    Ok(())
}

// the terminal owns stdout, so logging goes to a file and only when
// asked for
fn init_logging(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };

    if let Ok(f) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), f);
    }
}
