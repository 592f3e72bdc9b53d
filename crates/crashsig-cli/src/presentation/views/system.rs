use std::fmt;

use crate::presentation::view_models::{GuidanceViewModel, ViewMode};

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    mode: ViewMode,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        writeln!(f, "crashsig: crash signature triage")?;
        writeln!(f)?;
        writeln!(f, "Data directory: {}", d.data_dir)?;

        if !d.db_exists {
            writeln!(f, "No database yet. Add a signature to get started:")?;
            writeln!(f)?;
            writeln!(
                f,
                "  crashsig signature new --signature '<json>' --short-description '<text>'"
            )?;
            return Ok(());
        }

        writeln!(f, "Signatures:          {}", d.signature_count)?;
        writeln!(f, "Unbucketed crashes:  {}", d.unbucketed_crash_count)?;

        if self.mode == ViewMode::Minimal {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Common commands:")?;
        writeln!(f, "  crashsig signature list          unreported signatures")?;
        writeln!(f, "  crashsig signature list --all    every signature")?;
        writeln!(f, "  crashsig crash list              crashes without a signature")?;
        writeln!(f, "  crashsig serve                   browse in a web browser")?;
        Ok(())
    }
}
