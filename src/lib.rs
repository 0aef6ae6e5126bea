mod error;
pub use error::{
    Error,
    Result,
};

mod renderer;
pub use renderer::{
    Renderer,
    TerminalRenderer,
};

mod buffer;
pub use buffer::{
    Buffer,
    Direction,
    Line,
    View,
};

mod session;
pub use session::{
    Outcome,
    Session,
};
