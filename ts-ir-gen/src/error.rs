use std::path::PathBuf;
use swc_common::{sync::Lrc, SourceMap, Spanned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The declaration source could not be parsed.
    #[error("{file}:{line}:{column}: {msg}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        msg: String,
    },
    #[error("failed to read {}: {error}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl Error {
    pub(crate) fn from_parse_error(
        source_map: &Lrc<SourceMap>,
        file: &str,
        error: &swc_ecma_parser::error::Error,
    ) -> Error {
        let loc = source_map.lookup_char_pos(error.span().lo);
        Error::ParseError {
            file: file.to_string(),
            line: loc.line,
            column: loc.col_display + 1,
            msg: error.kind().msg().to_string(),
        }
    }

    pub fn with_path_and_io_error<P: Into<PathBuf>>(path: P, error: std::io::Error) -> Error {
        Error::IoError {
            path: path.into(),
            error,
        }
    }
}
