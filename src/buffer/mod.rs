mod view;
pub use view::{
    Direction,
    View,
};

mod buffer;
pub use buffer::Buffer;

mod line;
pub use line::Line;
