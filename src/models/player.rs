//! Player character as returned by the backend.

use serde::{Deserialize, Serialize};

use super::tier::tier_name;

/// Full player record.
///
/// Every field has a default so partial `player_state` payloads (and older
/// backends missing newer columns) still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub rank: i64,
    pub xp: f64,

    pub appearance: Option<String>,
    pub constitution_type: String,
    pub origin_location: String,
    pub backstory: Option<String>,
    pub home_location: Option<String>,

    pub cultivation_tier: u32,
    pub can_fly: bool,

    pub quintessential_essence: f64,
    pub max_quintessential_essence: f64,
    pub shadow_chi: f64,
    pub max_shadow_chi: f64,
    pub yuan_qi: f64,
    pub max_yuan_qi: f64,

    pub current_hp: f64,
    pub max_hp: f64,
    pub defense: f64,
    pub speed: f64,
    pub strength: f64,

    pub corruption: f64,
    pub willpower: f64,

    pub gold: i64,
    pub current_location: String,

    pub inventory: Vec<InventoryItem>,
    pub learned_skills: Vec<String>,
    pub kill_count: i64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            rank: 1,
            xp: 0.0,
            appearance: None,
            constitution_type: "Mortal".to_string(),
            origin_location: String::new(),
            backstory: None,
            home_location: None,
            cultivation_tier: 1,
            can_fly: false,
            quintessential_essence: 100.0,
            max_quintessential_essence: 100.0,
            shadow_chi: 100.0,
            max_shadow_chi: 100.0,
            yuan_qi: 100.0,
            max_yuan_qi: 100.0,
            current_hp: 100.0,
            max_hp: 100.0,
            defense: 10.0,
            speed: 10.0,
            strength: 10.0,
            corruption: 0.0,
            willpower: 50.0,
            gold: 100,
            current_location: String::new(),
            inventory: Vec::new(),
            learned_skills: Vec::new(),
            kill_count: 0,
        }
    }
}

/// A labelled `current / max` pool for the HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub label: &'static str,
    pub current: f64,
    pub max: f64,
}

impl Gauge {
    /// Fill ratio clamped to `0.0..=1.0`. A non-positive max reads as empty.
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    /// "87 / 100"
    pub fn label_value(&self) -> String {
        format!("{} / {}", self.current.round(), self.max.round())
    }
}

impl Player {
    /// Placeholder used until the first sheet arrives.
    pub fn placeholder(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn tier_name(&self) -> &'static str {
        tier_name(self.cultivation_tier)
    }

    pub fn hp(&self) -> Gauge {
        Gauge {
            label: "HP",
            current: self.current_hp,
            max: self.max_hp,
        }
    }

    /// HP plus the three cultivation pools, in HUD order.
    pub fn gauges(&self) -> [Gauge; 4] {
        [
            self.hp(),
            Gauge {
                label: "Quintessência",
                current: self.quintessential_essence,
                max: self.max_quintessential_essence,
            },
            Gauge {
                label: "Chi das Sombras",
                current: self.shadow_chi,
                max: self.max_shadow_chi,
            },
            Gauge {
                label: "Yuan Qi",
                current: self.yuan_qi,
                max: self.max_yuan_qi,
            },
        ]
    }

    pub fn location(&self) -> &str {
        if self.current_location.is_empty() {
            "Desconhecido"
        } else {
            &self.current_location
        }
    }
}

/// An inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tier: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub buy_price: Option<i64>,
}

fn default_quantity() -> u32 {
    1
}

impl InventoryItem {
    /// Backend name when present, otherwise `spirit_stone` as "SPIRIT STONE".
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.item_id.replace('_', " ").to_uppercase(),
        }
    }

    /// "Tier 2 | pill | x3"
    pub fn details(&self) -> String {
        let mut parts = Vec::new();
        if let Some(tier) = self.tier {
            parts.push(format!("Tier {}", tier));
        }
        if let Some(category) = &self.category {
            parts.push(category.clone());
        }
        if self.quantity > 1 {
            parts.push(format!("x{}", self.quantity));
        }
        parts.join(" | ")
    }
}
