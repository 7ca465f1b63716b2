//! Character sheet loading.

use std::path::Path;

use talents_core::Character;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Reads a character snapshot (JSON) from disk.
pub fn load_character(path: &Path) -> CliResult<Character> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::SheetReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_character(path, &contents)
}

pub fn parse_character(path: &Path, contents: &str) -> CliResult<Character> {
    let character: Character =
        serde_json::from_str(contents).map_err(|e| CliError::SheetParseFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!(
        ?path,
        name = %character.name,
        archetype = %character.basic_info.archetype_id,
        skills = character.skills.len(),
        miracles = character.miracles.len(),
        "Loaded character sheet"
    );
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_sheet() {
        let character = parse_character(Path::new("hero.json"), r#"{"name": "Nobody"}"#).unwrap();
        assert_eq!(character.name, "Nobody");
        assert!(character.basic_info.is_custom_archetype());
        assert!(character.miracles.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_character(Path::new("broken.json"), "{ not json").unwrap_err();
        assert!(matches!(err, CliError::SheetParseFailed { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_character(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::SheetReadFailed { .. }));
    }
}
