// Print the seeded catalog without entering the shell

use std::io::{self, Write};

use registrar_config::AppConfig;
use registrar_core::Course;

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;
use crate::seed::build_registry;

/// List courses in catalog order, as text or JSON
pub struct CatalogCommand {
    config: AppConfig,
    no_seed: bool,
    json: bool,
}

impl CatalogCommand {
    pub fn new(config: AppConfig, no_seed: bool, json: bool) -> Self {
        Self {
            config,
            no_seed,
            json,
        }
    }

    /// Render to any writer
    pub fn write_to<W: Write>(&self, out: &mut W, style: OutputStyle) -> CliResult<()> {
        let registry = build_registry(&self.config, self.no_seed)?;
        let courses: Vec<&Course> = registry.courses_forward().collect();

        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&courses)?)?;
            return Ok(());
        }

        writeln!(out, "{}", style.section("Course Catalog"))?;
        if courses.is_empty() {
            writeln!(out, "{}", style.muted("(no courses)"))?;
        }
        for course in courses {
            writeln!(out, "{}", course)?;
        }
        Ok(())
    }
}

impl Command for CatalogCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::for_terminal(self.config.shell.colors);
        self.write_to(&mut io::stdout().lock(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(command: &CatalogCommand) -> String {
        let mut out = Vec::new();
        command.write_to(&mut out, OutputStyle::plain()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_catalog() {
        let output = render(&CatalogCommand::new(AppConfig::default(), false, false));
        assert_eq!(
            output,
            "--- Course Catalog ---\n\
             [CS101] Introduction to CS (Cr: 3) Seats: 0/5\n\
             [CS102] Data Structures (Cr: 4) Seats: 0/1\n"
        );
    }

    #[test]
    fn test_json_catalog() {
        let output = render(&CatalogCommand::new(AppConfig::default(), false, true));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], "CS101");
        assert_eq!(value[1]["capacity"], 1);
        assert_eq!(value[1]["enrolled_count"], 0);
    }

    #[test]
    fn test_no_seed_catalog_is_empty() {
        let output = render(&CatalogCommand::new(AppConfig::default(), true, false));
        assert!(output.contains("(no courses)"));
    }
}
