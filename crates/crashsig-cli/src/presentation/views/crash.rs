use std::fmt;

use crate::presentation::formatters::text::{quality, truncate};
use crate::presentation::view_models::{CrashActionViewModel, CrashListViewModel, ViewMode};

pub struct CrashListView<'a> {
    data: &'a CrashListViewModel,
    mode: ViewMode,
}

impl<'a> CrashListView<'a> {
    pub fn new(data: &'a CrashListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for crash in &self.data.crashes {
            writeln!(f, "{}", crash.id)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        writeln!(f, "{} unbucketed crash entries.", self.data.total)?;
        if self.data.crashes.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<8} {:<20} {:<16} {:<10} {:<8} {:<8} SIGNATURE",
            "ID", "CREATED", "PRODUCT", "PLATFORM", "OS", "QUALITY"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for crash in &self.data.crashes {
            let product = match &crash.version {
                Some(version) => format!("{} {}", crash.product, version),
                None => crash.product.clone(),
            };
            let signature = if verbose {
                crash.short_signature.clone()
            } else {
                truncate(&crash.short_signature, 40)
            };
            writeln!(
                f,
                "{:<8} {:<20} {:<16} {:<10} {:<8} {:<8} {}",
                crash.id,
                crash.created,
                truncate(&product, 16),
                crash.platform,
                crash.os,
                quality(crash.testcase_quality),
                signature
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CrashListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact | ViewMode::Standard => self.render_standard(f, false),
            ViewMode::Verbose => self.render_standard(f, true),
        }
    }
}

pub struct CrashActionView<'a> {
    data: &'a CrashActionViewModel,
    mode: ViewMode,
}

impl<'a> CrashActionView<'a> {
    pub fn new(data: &'a CrashActionViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for CrashActionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.id);
        }

        let verb = if self.data.created { "added" } else { "updated" };
        match self.data.bucket {
            Some(bucket) => writeln!(f, "Crash {} {} (signature {})", self.data.id, verb, bucket),
            None => writeln!(f, "Crash {} {} (unbucketed)", self.data.id, verb),
        }
    }
}
