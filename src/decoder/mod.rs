mod accumulator;
mod decoder;
mod line;
mod record;
mod session;

pub use accumulator::Accumulator;
pub use decoder::{Parser, DEFAULT_MEASUREMENT};
pub use session::Session;
