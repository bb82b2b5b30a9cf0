//! # LaTeX Documents
//!
//! Wraps a TikZ picture in a standalone LaTeX document, writes it to disk and
//! optionally runs a LaTeX compiler over it.
//!
//! ## Usage
//!
//! ```no_run
//! use ean13_tikz::latex::{self, LatexDocument};
//! use ean13_tikz::render::TikzPicture;
//! use ean13_tikz::symbology::Ean13;
//!
//! let code = Ean13::new("978272349971")?;
//! let body = TikzPicture::new(&code).caption(true).render();
//!
//! let path = LatexDocument::new(body).write_to("ean13.tex")?;
//! latex::compile(&path, latex::DEFAULT_COMPILER)?;
//! # Ok::<(), ean13_tikz::Ean13Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Ean13Error;

/// Compiler used when none is given.
pub const DEFAULT_COMPILER: &str = "pdflatex";

/// Lines of compiler output kept in error messages.
const ERROR_TAIL_LINES: usize = 15;

/// A complete LaTeX document around one TikZ picture.
#[derive(Debug, Clone)]
pub struct LatexDocument {
    class: String,
    class_options: String,
    body: String,
}

impl LatexDocument {
    /// `article` class on A4 paper, 11pt.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            class: "article".into(),
            class_options: "a4paper,11pt".into(),
            body: body.into(),
        }
    }

    /// Set the document class (e.g. `standalone`).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the document class options; empty means none.
    pub fn class_options(mut self, options: impl Into<String>) -> Self {
        self.class_options = options.into();
        self
    }

    /// Full document text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 128);
        if self.class_options.is_empty() {
            out.push_str(&format!("\\documentclass{{{}}}\n", self.class));
        } else {
            out.push_str(&format!(
                "\\documentclass[{}]{{{}}}\n",
                self.class_options, self.class
            ));
        }
        out.push_str("\\usepackage{tikz}\n");
        out.push_str("\\begin{document}\n");
        out.push_str(&self.body);
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("\\end{document}\n");
        out
    }

    /// Write the document to `path`, returning the path written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, Ean13Error> {
        let path = path.as_ref();
        fs::write(path, self.render())?;
        tracing::debug!(path = %path.display(), "wrote LaTeX document");
        Ok(path.to_path_buf())
    }
}

/// Run `compiler` on a `.tex` file.
///
/// Output files land next to the source. Fails if the compiler can't be
/// started or exits unsuccessfully.
pub fn compile(path: impl AsRef<Path>, compiler: &str) -> Result<(), Ean13Error> {
    let path = path.as_ref();
    let out_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    tracing::debug!(compiler, path = %path.display(), "running LaTeX compiler");
    let output = Command::new(compiler)
        .arg("-interaction=nonstopmode")
        .arg("-halt-on-error")
        .arg(format!("-output-directory={}", out_dir.display()))
        .arg(path)
        .output()
        .map_err(|e| Ean13Error::Compile(format!("Failed to run '{}': {}", compiler, e)))?;

    tracing::debug!(status = %output.status, "LaTeX compiler finished");
    if output.status.success() {
        return Ok(());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let tail = lines[lines.len().saturating_sub(ERROR_TAIL_LINES)..].join("\n");
    Err(Ean13Error::Compile(format!(
        "'{}' exited with {}:\n{}",
        compiler, output.status, tail
    )))
}
