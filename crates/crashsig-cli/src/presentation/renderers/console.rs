use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateHtml, OutputFormat, ViewMode};

pub struct ConsoleRenderer {
    format: OutputFormat,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self { format, view_mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateHtml,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Html => {
                println!("{}", result.content.create_html()?);
            }
            OutputFormat::Text => {
                if self.view_mode != ViewMode::Minimal
                    && let Some(badge) = &result.badge
                {
                    println!("{} {}", badge.icon(), badge.label.bold());
                    println!();
                }

                print!("{}", result.content.create_view(self.view_mode));

                if self.view_mode != ViewMode::Minimal && !result.suggestions.is_empty() {
                    println!("\n{}", "💡 Tips:".yellow().bold());
                    for tip in &result.suggestions {
                        print!("  • {}", tip.description);
                        if let Some(cmd) = &tip.command {
                            print!(": {}", cmd.cyan());
                        }
                        println!();
                    }
                }
            }
        }

        Ok(())
    }
}
