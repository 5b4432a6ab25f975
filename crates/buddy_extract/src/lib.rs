//! buddy-extract — pull a single usable code block out of a model reply.
//!
//! Model output arrives as markdown; the editor wants raw source. [`extract`]
//! selects the first fenced block matching the requested [`Language`] and
//! returns its trimmed body, falling back to the whole (trimmed) text when no
//! fences are present at all.

mod extract;
mod language;

pub use extract::extract;
pub use language::Language;
