//! Setup banner for Project Office Methodology 3.0.
//!
//! Takes no arguments, prints the repository layout and quick-start steps,
//! and always exits successfully.

use anyhow::Result;
use console::{Emoji, style};
use std::io::{self, Write};

static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");

const RULE_WIDTH: usize = 60;

/// Directories announced by the banner, with their purpose.
const DIRECTORIES: &[(&str, &str)] = &[
    (".github/workflows/", "CI/CD pipelines"),
    ("docs/", "Documentation"),
    ("src/ai_modules/", "AI models"),
    ("src/core/", "Core engine"),
    ("src/tools/", "Dashboard & tools"),
    ("templates/", "Methodology templates"),
    ("examples/", "Sample projects"),
];

const QUICK_START: &[&str] = &[
    "  1. Build the workspace:",
    "     cargo build --release",
    "  2. Run dashboard:",
    "     cargo run --bin methodology-dashboard",
    "  3. Start adding your methodology files",
];

const NEXT_STEPS: &[&str] = &[
    "Add methodology handbook to docs/methodology/",
    "Create AI modules in src/ai_modules/",
    "Add phase templates to templates/phase_templates/",
];

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_banner(&mut out)?;
    out.flush()?;
    Ok(())
}

fn write_banner(out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{}",
        style("PROJECT OFFICE METHODOLOGY 3.0 - SETUP").bold().cyan()
    )?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\n{TARGET}{}", style("Repository Structure Ready!").bold())?;

    writeln!(out, "\n{FOLDER}Directories created:")?;
    for (dir, purpose) in DIRECTORIES {
        writeln!(out, "  • {dir:<22} - {purpose}")?;
    }

    writeln!(out, "\n{ROCKET}Quick Start:")?;
    for line in QUICK_START {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\n{BOOKS}Next Steps:")?;
    for step in NEXT_STEPS {
        writeln!(out, "  • {step}")?;
    }

    writeln!(
        out,
        "\n{CHECK}{}",
        style("Setup complete! Your methodology framework is ready.").green()
    )?;
    writeln!(out, "{rule}")
}
