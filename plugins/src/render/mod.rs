mod emoji;
mod plain;

use std::error::Error;

pub use emoji::EmojiRenderer;
pub use plain::PlainRenderer;

/// `outer: inner: innermost`, for one-line error reports.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
