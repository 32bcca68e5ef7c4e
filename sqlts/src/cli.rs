use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use sqlts_ir::wire;

use crate::{
    io,
    reports::{PreviewReport, Report, TerminalOutput},
};

/// Extension trait for exiting on generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sqlts_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sqlts")]
#[command(version)]
#[command(about = "Generate TypeScript query clients from sqlc requests")]
pub(crate) struct Cli {
    /// Read the request from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the response to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The request is JSON instead of protobuf
    #[arg(long)]
    json: bool,

    /// Print the generated files instead of writing a response
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let bytes = io::read_input(self.input.as_deref())?;
        let request = if self.json {
            io::request_from_json(&bytes)?
        } else {
            io::request_from_protobuf(&bytes).unwrap_or_exit()
        };
        tracing::debug!(
            queries = request.queries.len(),
            options = request.plugin_options.len(),
            "decoded request"
        );

        let response = sqlts_typescript::generate(&request).unwrap_or_exit();

        if self.dry_run {
            PreviewReport::new(&response).render(&mut TerminalOutput::new());
            return Ok(());
        }

        io::write_output(self.output.as_deref(), &wire::encode_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let cli = Cli::try_parse_from(["sqlts"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.json);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "sqlts",
            "--input",
            "req.json",
            "-o",
            "resp.bin",
            "--json",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("req.json")));
        assert_eq!(cli.output, Some(PathBuf::from("resp.bin")));
        assert!(cli.json);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["sqlts", "--driver", "pg"]).is_err());
    }
}
