//! Character creation catalogs and request bodies.

use serde::{Deserialize, Serialize};

/// A body type offered at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constitution {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: &'static str,
    pub description: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub const CONSTITUTIONS: [Constitution; 3] = [
    Constitution {
        id: "mortal",
        name: "Mortal",
        rarity: "Comum",
        description: "Corpo humano comum sem vantagens especiais. Cresce através de esforço puro e técnicas de cultivo.",
        pros: &[
            "Sem restrições",
            "Livre para desenvolver qualquer caminho",
            "Sem desvantagens iniciais",
        ],
        cons: &[
            "Sem bônus especiais",
            "Crescimento mais lento",
            "Requer mais recursos",
        ],
    },
    Constitution {
        id: "godfiend",
        name: "Godfiend",
        rarity: "Lendário",
        description: "Linhagem de sangue divino ou demoníaco. 7 tipos únicos: Black Sand, Eon Sea, Phoenix, etc.",
        pros: &[
            "Crescimento acelerado (+50%)",
            "Habilidades únicas de linhagem",
            "Resistências elementais",
        ],
        cons: &[
            "Atrai inimigos poderosos",
            "Requer mais comida (2x)",
            "Tribulações mais difíceis",
        ],
    },
    Constitution {
        id: "taboo",
        name: "Taboo Body",
        rarity: "Amaldiçoado",
        description: "Corpo amaldiçoado pelo céu. Heavenly Scourge atrai raios durante breakthroughs.",
        pros: &[
            "Poder massivo se sobreviver",
            "Imune a venenos",
            "Mental muito forte",
        ],
        cons: &[
            "Raios atacam durante breakthrough",
            "Rejeitado pela sociedade",
            "Mortalidade alta",
        ],
    },
];

/// A starting location offered at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginLocation {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub danger: &'static str,
}

pub const ORIGINS: [OriginLocation; 5] = [
    OriginLocation {
        id: "floresta_assombrada",
        name: "Floresta Assombrada",
        kind: "wilderness",
        danger: "Médio",
    },
    OriginLocation {
        id: "vila_tranquila",
        name: "Vila Tranquila",
        kind: "settlement",
        danger: "Baixo",
    },
    OriginLocation {
        id: "templo_nuvens",
        name: "Templo das Nuvens",
        kind: "sacred",
        danger: "Baixo",
    },
    OriginLocation {
        id: "cavernas_profundas",
        name: "Cavernas Profundas",
        kind: "dungeon",
        danger: "Alto",
    },
    OriginLocation {
        id: "cidade_imperial",
        name: "Cidade Imperial",
        kind: "settlement",
        danger: "Médio",
    },
];

pub fn find_constitution(id: &str) -> Option<&'static Constitution> {
    CONSTITUTIONS.iter().find(|c| c.id == id)
}

pub fn find_origin(id: &str) -> Option<&'static OriginLocation> {
    ORIGINS.iter().find(|o| o.id == id)
}

/// Questions used when the backend cannot generate Session Zero questions.
pub const FALLBACK_QUESTIONS: [&str; 3] = [
    "Qual foi o momento que definiu sua jornada no cultivo?",
    "Quem foi seu mentor ou inspiração?",
    "Qual é seu maior medo?",
];

/// Body of `POST /character/session-zero`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionZeroRequest {
    pub name: String,
    pub constitution: String,
    pub origin_location: String,
}

/// Response of `POST /character/session-zero`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionZeroQuestions {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// Body of `POST /player/create-full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    pub constitution: String,
    pub origin_location: String,
    pub backstory: String,
    pub session_zero_answers: Vec<String>,
}

/// Body of the quick `POST /player/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}
