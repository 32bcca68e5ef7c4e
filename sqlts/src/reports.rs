//! Human-readable reports for dry runs.

use sqlts_ir::GenerateResponse;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a plain line.
    fn line(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Every generated file followed by a summary.
pub struct PreviewReport<'a> {
    response: &'a GenerateResponse,
}

impl<'a> PreviewReport<'a> {
    pub fn new(response: &'a GenerateResponse) -> Self {
        Self { response }
    }
}

impl Report for PreviewReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.response.files {
            out.divider(&file.name);
            out.preformatted(&file.text());
        }

        out.divider("Summary");
        let count = self.response.files.len();
        let noun = if count == 1 { "file" } else { "files" };
        out.line(&format!("{} {} would be generated", count, noun));
    }
}

#[cfg(test)]
mod tests {
    use sqlts_ir::GeneratedFile;

    use super::*;

    #[derive(Default)]
    struct BufferOutput(String);

    impl Output for BufferOutput {
        fn divider(&mut self, label: &str) {
            self.0.push_str(&format!("-- {} --\n", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push_str(text);
        }

        fn line(&mut self, text: &str) {
            self.0.push_str(text);
            self.0.push('\n');
        }
    }

    #[test]
    fn test_preview_lists_files_then_summary() {
        let response = GenerateResponse {
            files: vec![
                GeneratedFile::new("a_sql.ts", "// a\n"),
                GeneratedFile::new("b_sql.ts", "// b\n"),
            ],
        };
        let mut out = BufferOutput::default();
        PreviewReport::new(&response).render(&mut out);
        assert_eq!(
            out.0,
            "-- a_sql.ts --\n// a\n-- b_sql.ts --\n// b\n-- Summary --\n2 files would be generated\n"
        );
    }

    #[test]
    fn test_preview_singular_summary() {
        let response = GenerateResponse {
            files: vec![GeneratedFile::new("q_sql.ts", "")],
        };
        let mut out = BufferOutput::default();
        PreviewReport::new(&response).render(&mut out);
        assert!(out.0.ends_with("1 file would be generated\n"));
    }
}
