//! Cleaning recipes loaded from TOML.
//!
//! A recipe lists cleaning steps and export settings so the same cleaning
//! can be repeated on new files:
//!
//! ```toml
//! steps = [
//!     { op = "standardize" },
//!     { op = "fill", method = "median" },
//!     { op = "select", columns = ["name", "age"] },
//! ]
//!
//! [export]
//! format = "excel"
//! output_dir = "cleaned"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sweep_model::FileFormat;
use sweep_transform::CleaningOp;

/// Steps and export settings read from a recipe file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Recipe {
    pub steps: Vec<CleaningOp>,
    pub export: ExportSettings,
}

/// Export section of a recipe. Unset fields fall back to command-line
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    pub format: Option<FileFormat>,
    pub rename: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Recipe {
    /// Reads and parses a recipe file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read recipe {}", path.display()))?;
        let recipe = Self::parse(&contents)
            .with_context(|| format!("parse recipe {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            steps = recipe.steps.len(),
            "loaded recipe"
        );
        Ok(recipe)
    }

    /// Parses recipe text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_transform::FillMethod;

    #[test]
    fn test_parse_full_recipe() {
        let recipe = Recipe::parse(
            r#"
            steps = [{ op = "dedupe" }, { op = "fill", method = "mode" }]

            [export]
            format = "excel"
            rename = "clean"
            "#,
        )
        .unwrap();

        assert_eq!(
            recipe.steps,
            vec![
                CleaningOp::Dedupe,
                CleaningOp::Fill {
                    method: FillMethod::Mode
                }
            ]
        );
        assert_eq!(recipe.export.format, Some(FileFormat::Excel));
        assert_eq!(recipe.export.rename.as_deref(), Some("clean"));
        assert_eq!(recipe.export.output_dir, None);
    }

    #[test]
    fn test_empty_recipe_is_default() {
        assert_eq!(Recipe::parse("").unwrap(), Recipe::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Recipe::parse("stepz = []").is_err());
        assert!(Recipe::parse(r#"steps = [{ op = "shuffle" }]"#).is_err());
    }
}
