//! Cultivation tiers.

/// Localized names for tiers 1 through 9.
const TIER_NAMES: [&str; 9] = [
    "Fundação",
    "Despertar",
    "Ascensão",
    "Transcendência",
    "Soberania",
    "Divindade",
    "Imortalidade",
    "Ancestral",
    "Criação",
];

/// Localized name of a cultivation tier, or "Desconhecido" outside 1..=9.
pub fn tier_name(tier: u32) -> &'static str {
    tier.checked_sub(1)
        .and_then(|i| TIER_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Desconhecido")
}

/// "Tier 3 · Ascensão"
pub fn tier_label(tier: u32) -> String {
    format!("Tier {} · {}", tier, tier_name(tier))
}
