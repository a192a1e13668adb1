/// Terminal output for finished and failed runs
use crossterm::style::Stylize;
use objrot_core::{Rotation, TranscodeStats};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// Summary of a successful rotation.
#[derive(Debug, Clone)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rotation: Rotation,
    pub stats: TranscodeStats,
}

impl Report {
    /// Print the confirmation. `styled` adds a green check mark and should only
    /// be set when `out` is a terminal.
    pub fn print<W: Write>(&self, out: &mut W, styled: bool) -> io::Result<()> {
        if styled {
            writeln!(out, "{} {}", "✓".green(), self)
        } else {
            writeln!(out, "✓ {}", self)
        }
    }
}

/// Plain, unstyled confirmation text.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rotated {} → {}",
            self.input.display(),
            self.output.display()
        )?;
        writeln!(
            f,
            "  {}° around {}-axis",
            self.rotation.degrees(),
            self.rotation.axis()
        )?;
        write!(
            f,
            "  {} vertices, {} normals",
            self.stats.vertices, self.stats.normals
        )
    }
}

/// Print a one-line diagnostic, with a red `error:` prefix when `styled`.
pub fn print_error<W: Write>(out: &mut W, message: &str, styled: bool) -> io::Result<()> {
    if styled {
        writeln!(out, "{} {}", "error:".red().bold(), message)
    } else {
        writeln!(out, "error: {}", message)
    }
}
