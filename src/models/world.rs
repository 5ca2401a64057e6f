//! World clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of `GET /world/time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldTime {
    pub day: u32,
    pub month: u32,
    pub year: i64,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub season: String,
}

impl WorldTime {
    pub fn time_of_day_label(&self) -> &str {
        match self.time_of_day.as_str() {
            "dawn" => "Aurora",
            "morning" => "Manhã",
            "noon" => "Meio-dia",
            "afternoon" => "Tarde",
            "dusk" => "Crepúsculo",
            "evening" => "Anoitecer",
            "night" => "Noite",
            "midnight" => "Meia-noite",
            other => other,
        }
    }

    pub fn season_label(&self) -> &str {
        match self.season.as_str() {
            "Spring" => "Primavera",
            "Summer" => "Verão",
            "Autumn" => "Outono",
            "Winter" => "Inverno",
            other => other,
        }
    }
}

impl fmt::Display for WorldTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dia {}/{}/{} {:02}:{:02} · {} · {}",
            self.day,
            self.month,
            self.year,
            self.hour,
            self.minute,
            self.time_of_day_label(),
            self.season_label()
        )
    }
}

/// Response of `GET /game/current-turn`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    #[serde(default)]
    pub current_turn: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let json = r#"{"datetime": "1024-05-03T08:05:00", "day": 3, "month": 5, "year": 1024,
            "hour": 8, "minute": 5, "time_of_day": "morning", "season": "Spring",
            "timestamp": "1024-05-03T08:05:00"}"#;
        let time: WorldTime = serde_json::from_str(json).unwrap();
        assert_eq!(time.to_string(), "Dia 3/5/1024 08:05 · Manhã · Primavera");
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        let time = WorldTime {
            day: 1,
            month: 1,
            year: 1,
            hour: 0,
            minute: 0,
            time_of_day: "eclipse".to_string(),
            season: "Monsoon".to_string(),
        };
        assert_eq!(time.time_of_day_label(), "eclipse");
        assert_eq!(time.season_label(), "Monsoon");
    }

    #[test]
    fn test_current_turn_missing_field() {
        let turn: CurrentTurn = serde_json::from_str(r#"{"current_date": "x"}"#).unwrap();
        assert_eq!(turn.current_turn, 0);
    }
}
