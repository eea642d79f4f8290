mod decode;
mod model;

pub use decode::{parse_event_line, DecodeError, TestEventStream};
pub use model::{Action, TestEvent};
