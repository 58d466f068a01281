//! Content validation report.

use anyhow::{Result, bail};
use clap::Parser;
use combat_content::validate_content;

use super::ContentArgs;

/// Load content and report every validation error
#[derive(Parser)]
pub struct Validate {}

impl Validate {
    pub fn execute(self, content: &ContentArgs) -> Result<()> {
        let config = content.load_config()?;
        let factory = content.factory();
        let skills = factory.load_skills()?;
        let classes = factory.load_classes()?;
        let bosses = factory.load_bosses()?;

        let errors = validate_content(&skills, &classes, &bosses, &config);
        if !errors.is_empty() {
            for error in &errors {
                println!("error: {error}");
            }
            bail!("{} content error(s)", errors.len());
        }

        println!(
            "ok: {} skills, {} classes, {} bosses",
            skills.len(),
            classes.len(),
            bosses.len()
        );
        Ok(())
    }
}
