use std::fmt;

use crate::presentation::view_models::{ProviderEntryViewModel, ProviderListViewModel, ViewMode};

pub struct ProviderListView<'a> {
    data: &'a ProviderListViewModel,
    mode: ViewMode,
}

impl<'a> ProviderListView<'a> {
    pub fn new(data: &'a ProviderListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ProviderListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.providers.is_empty() && self.mode != ViewMode::Minimal {
            return writeln!(f, "No bug providers registered.");
        }

        for provider in &self.data.providers {
            write!(f, "{}", ProviderEntryView::new(provider, self.mode))?;
        }
        Ok(())
    }
}

pub struct ProviderEntryView<'a> {
    data: &'a ProviderEntryViewModel,
    mode: ViewMode,
}

impl<'a> ProviderEntryView<'a> {
    pub fn new(data: &'a ProviderEntryViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ProviderEntryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.data;
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", p.hostname),
            ViewMode::Compact => writeln!(f, "{} {}", p.id, p.hostname),
            ViewMode::Standard | ViewMode::Verbose => {
                write!(f, "{:<4} {:<30} {}", p.id, p.hostname, p.url_template)?;
                if !p.template_ok {
                    write!(f, "  (no %s placeholder)")?;
                }
                writeln!(f)?;
                if self.mode == ViewMode::Verbose {
                    writeln!(f, "     class: {}", p.classname)?;
                }
                Ok(())
            }
        }
    }
}
