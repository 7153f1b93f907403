//! Load campaign rule overlays from TOML files

use crate::core::types::Ability;
use crate::tables::rulebook::SettlementEntry;
use std::fs;
use std::path::Path;

/// Additions and replacements parsed from campaign TOML files
#[derive(Debug, Clone, Default)]
pub struct RuleOverlay {
    pub skills: Vec<(String, Ability)>,
    pub settlements: Vec<SettlementEntry>,
}

impl RuleOverlay {
    fn merge(&mut self, other: RuleOverlay) {
        self.skills.extend(other.skills);
        self.settlements.extend(other.settlements);
    }
}

/// Load every overlay file from a campaign directory
///
/// A missing directory is not an error: campaigns without overlays
/// simply play the built-in tables.
pub fn load_overlay_dir(dir: &Path) -> Result<RuleOverlay, String> {
    let mut overlay = RuleOverlay::default();

    if !dir.exists() {
        return Ok(overlay);
    }

    let entries = fs::read_dir(dir).map_err(|e| format!("Failed to read {:?}: {}", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {:?}: {}", dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        overlay.merge(parse_overlay_toml(&content)?);
    }

    Ok(overlay)
}

/// Parse one overlay file
pub fn parse_overlay_toml(content: &str) -> Result<RuleOverlay, String> {
    let toml: toml::Value = content.parse().map_err(|e| format!("Invalid TOML: {}", e))?;

    let mut overlay = RuleOverlay::default();

    if let Some(skills) = toml.get("skills").and_then(|v| v.as_array()) {
        for skill in skills {
            overlay.skills.push(parse_skill(skill)?);
        }
    }

    if let Some(settlements) = toml.get("settlements").and_then(|v| v.as_array()) {
        for settlement in settlements {
            overlay.settlements.push(parse_settlement(settlement)?);
        }
    }

    Ok(overlay)
}

fn parse_skill(value: &toml::Value) -> Result<(String, Ability), String> {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or("skill missing name")?
        .to_string();

    let governs_str = value
        .get("governs")
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("skill '{}' missing governs", name))?;

    let governs = Ability::from_name(governs_str)
        .ok_or_else(|| format!("skill '{}': unknown ability '{}'", name, governs_str))?;

    Ok((name, governs))
}

fn parse_settlement(value: &toml::Value) -> Result<SettlementEntry, String> {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or("settlement missing name")?
        .to_string();

    let native_trait = value
        .get("trait")
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("settlement '{}' missing trait", name))?
        .to_string();

    let skills = value
        .get("skills")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|s| s.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default();

    Ok(SettlementEntry {
        name,
        native_trait,
        skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overlay() {
        let toml_str = r#"
[[skills]]
name = "Tunneler"
governs = "Health"

[[settlements]]
name = "Ferndale"
trait = "Watchful"
skills = ["Tunneler", "Scout"]
"#;
        let overlay = parse_overlay_toml(toml_str).unwrap();

        assert_eq!(overlay.skills.len(), 1);
        assert_eq!(overlay.skills[0].0, "Tunneler");
        assert_eq!(overlay.skills[0].1, Ability::Health);

        assert_eq!(overlay.settlements.len(), 1);
        assert_eq!(overlay.settlements[0].name, "Ferndale");
        assert_eq!(overlay.settlements[0].native_trait, "Watchful");
        assert_eq!(overlay.settlements[0].skills.len(), 2);
    }

    #[test]
    fn test_unknown_ability_rejected() {
        let toml_str = r#"
[[skills]]
name = "Tunneler"
governs = "Luck"
"#;
        assert!(parse_overlay_toml(toml_str).is_err());
    }

    #[test]
    fn test_missing_trait_rejected() {
        let toml_str = r#"
[[settlements]]
name = "Ferndale"
"#;
        assert!(parse_overlay_toml(toml_str).is_err());
    }

    #[test]
    fn test_missing_directory_is_empty_overlay() {
        let overlay = load_overlay_dir(Path::new("no_such_campaign_dir")).unwrap();
        assert!(overlay.skills.is_empty());
        assert!(overlay.settlements.is_empty());
    }
}
