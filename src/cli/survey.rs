//! Collecting the name and index type for a new ADR directory

use crate::models::IndexType;
use crate::Result;
use anyhow::Context;
use dialoguer::{Input, Select};

/// Settings for a newly initialized ADR directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub index_type: IndexType,
}

impl Configuration {
    /// Names are stored lower-cased
    pub fn new(name: &str, index_type: IndexType) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            index_type,
        }
    }
}

/// Source of a [`Configuration`]
pub trait Survey {
    fn ask(&self) -> Result<Configuration>;
}

/// Asks on the terminal
pub struct InteractiveSurvey;

impl Survey for InteractiveSurvey {
    fn ask(&self) -> Result<Configuration> {
        let name: String = Input::new()
            .with_prompt("What should we name this dir?")
            .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
                if input.trim().is_empty() {
                    Err("a name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .context("asking survey")?;

        let options: Vec<&str> = IndexType::ALL.iter().map(IndexType::as_str).collect();
        let selection = Select::new()
            .with_prompt("Choose an index type")
            .items(&options)
            .default(0)
            .interact()
            .context("asking survey")?;

        Ok(Configuration::new(&name, IndexType::ALL[selection]))
    }
}

/// Answers given up front on the command line
pub struct FixedSurvey(pub Configuration);

impl Survey for FixedSurvey {
    fn ask(&self) -> Result<Configuration> {
        Ok(self.0.clone())
    }
}
