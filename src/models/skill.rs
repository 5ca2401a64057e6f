//! Skill catalog entries.

use serde::{Deserialize, Serialize};

/// A skill definition from `GET /skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub skill_id: String,
    pub name: String,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub cost_type: Option<String>,
    #[serde(default)]
    pub cost_amount: f64,
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default = "default_tier")]
    pub tier_requirement: u32,
    #[serde(default)]
    pub is_silent_art: bool,
    #[serde(default)]
    pub description: String,
}

fn default_tier() -> u32 {
    1
}

impl Skill {
    /// "30 shadow_chi · recarga 2"
    pub fn cost_label(&self) -> String {
        let cost = match &self.cost_type {
            Some(kind) => format!("{} {}", self.cost_amount.round(), kind),
            None => format!("{}", self.cost_amount.round()),
        };
        if self.cooldown > 0 {
            format!("{} · recarga {}", cost, self.cooldown)
        } else {
            cost
        }
    }
}

/// Skills offered in the combat grid when the player has learned none.
pub const DEFAULT_COMBAT_SKILLS: [&str; 2] = ["meteor_soul", "shadowstep"];

/// Combat skill ids for a player: their learned skills, or the defaults.
pub fn combat_skills(learned: &[String]) -> Vec<String> {
    if learned.is_empty() {
        DEFAULT_COMBAT_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        learned.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let json = r#"{"skill_id": "meteor_soul", "name": "Meteor Soul", "element": "fire",
            "cost_type": "yuan_qi", "cost_amount": 30, "cooldown": 2, "tier_requirement": 2,
            "is_silent_art": false, "description": "Um meteoro de alma."}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.cost_label(), "30 yuan_qi · recarga 2");
        assert_eq!(skill.tier_requirement, 2);
    }

    #[test]
    fn test_combat_skills_default() {
        assert_eq!(combat_skills(&[]), vec!["meteor_soul", "shadowstep"]);
        assert_eq!(
            combat_skills(&["silent_strike".to_string()]),
            vec!["silent_strike"]
        );
    }
}
