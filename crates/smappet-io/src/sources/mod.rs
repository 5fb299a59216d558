//! Concrete input sources.
//!
//! | source            | available when               |
//! |-------------------|------------------------------|
//! | [`ArgSource`]     | the argument was given       |
//! | [`FileSource`]    | the path argument was given  |
//! | [`StdinSource`]   | stdin is piped               |
//! | [`ClipboardSource`] | the clipboard holds text   |
//! | [`PromptSource`]  | stdin is a terminal          |

mod arg;
mod clipboard;
mod file;
mod prompt;
mod stdin;

pub use arg::ArgSource;
pub use clipboard::ClipboardSource;
pub use file::FileSource;
pub use prompt::{MockTerminal, PromptSource, RealTerminal, Terminal};
pub use stdin::StdinSource;

/// Blank text counts as no input. With `trim` the surrounding whitespace is
/// dropped, otherwise the text is kept byte for byte.
pub(crate) fn normalize(text: String, trim: bool) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else if trim {
        Some(text.trim().to_string())
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn blank_is_none() {
        assert_eq!(normalize(" \n\t".into(), true), None);
        assert_eq!(normalize(String::new(), false), None);
    }

    #[test]
    fn trim_or_keep() {
        assert_eq!(normalize("  a b \n".into(), true).as_deref(), Some("a b"));
        assert_eq!(normalize("  a b \n".into(), false).as_deref(), Some("  a b \n"));
    }
}
