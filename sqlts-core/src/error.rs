use miette::{Diagnostic, NamedSource, SourceSpan};
use sqlts_ir::{Command, wire::WireError};
use thiserror::Error;

/// Result type for sqlts operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The plugin options do not select a usable driver.
    Configuration,
    /// The request or its options could not be decoded.
    MalformedInput,
    /// A query asks for something the selected driver cannot generate.
    UnsupportedOperation,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no driver configured")]
    #[diagnostic(
        code(sqlts::missing_driver),
        help(
            "set `driver` in the plugin options to one of: pg, postgres, mysql2, better-sqlite3, turso"
        )
    )]
    MissingDriver,

    #[error("unknown driver '{name}'")]
    #[diagnostic(
        code(sqlts::unknown_driver),
        help("supported drivers are: pg, postgres, mysql2, better-sqlite3, turso")
    )]
    UnknownDriver { name: String },

    #[error("plugin options are not valid UTF-8")]
    #[diagnostic(code(sqlts::invalid_options))]
    OptionsEncoding {
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to parse plugin options")]
    #[diagnostic(code(sqlts::invalid_options))]
    OptionsParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode generate request")]
    #[diagnostic(
        code(sqlts::malformed_request),
        help("sqlts expects a sqlc `GenerateRequest` protobuf message on its input")
    )]
    Decode {
        #[source]
        source: WireError,
    },

    #[error("driver '{driver}' does not support {command} (query '{query}')")]
    #[diagnostic(
        code(sqlts::unsupported_operation),
        help("use a driver that exposes the last inserted id, such as mysql2 or turso")
    )]
    UnsupportedOperation {
        driver: String,
        command: Command,
        query: String,
    },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingDriver | Error::UnknownDriver { .. } => ErrorKind::Configuration,
            Error::OptionsEncoding { .. } | Error::OptionsParse { .. } | Error::Decode { .. } => {
                ErrorKind::MalformedInput
            }
            Error::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
        }
    }

    /// Create an options parse error with source context
    pub fn options_parse(source: serde_json::Error, src: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from(o..o));
        Box::new(Error::OptionsParse {
            src: NamedSource::new("plugin options", src.to_string()),
            span,
            source,
        })
    }

    /// Create an unsupported operation error
    pub fn unsupported(
        driver: impl Into<String>,
        command: Command,
        query: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::UnsupportedOperation {
            driver: driver.into(),
            command,
            query: query.into(),
        })
    }
}

impl From<WireError> for Box<Error> {
    fn from(source: WireError) -> Self {
        Box::new(Error::Decode { source })
    }
}

/// Convert a 1-based line and column into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::MissingDriver.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::UnknownDriver {
                name: "sqlite".into()
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::unsupported("pg", Command::ExecLastId, "InsertAuthor").kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn test_unsupported_message() {
        let err = Error::unsupported("pg", Command::ExecLastId, "InsertAuthor");
        assert_eq!(
            err.to_string(),
            "driver 'pg' does not support :execlastid (query 'InsertAuthor')"
        );
    }

    #[test]
    fn test_options_parse_has_span() {
        let src = "{\n  \"driver\": pg\n}";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::options_parse(source, src);
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        match *err {
            Error::OptionsParse { span: Some(span), .. } => {
                assert!((2..=16).contains(&span.offset()));
            }
            other => panic!("expected OptionsParse with span, got {other:?}"),
        }
    }

    #[test]
    fn test_offset_of() {
        assert_eq!(offset_of("abc\ndef", 2, 2), Some(5));
        assert_eq!(offset_of("abc", 1, 1), Some(0));
        assert_eq!(offset_of("abc", 0, 0), None);
    }
}
