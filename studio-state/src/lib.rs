pub mod content;
pub mod misc;
pub mod model;
pub mod util;
