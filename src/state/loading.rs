//! Flavor line shown while a turn is resolving.

/// Which situation the loading line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingKind {
    /// Entering the world for the first time in a run.
    Init,
    /// Resting until the next day.
    Sleep,
    /// The previous turn advanced the world clock.
    Dawn,
    /// Any other action.
    Action,
}

const INIT: [&str; 4] = [
    "Despertando as energias do mundo...",
    "Alinhando os meridianos do destino...",
    "O Qi flui através dos reinos...",
    "Ancestrais observam sua jornada...",
];

const SLEEP: [&str; 4] = [
    "As estrelas giram no firmamento...",
    "Sonhos de cultivo permeiam sua mente...",
    "O corpo refina a essência absorvida...",
    "Horas passam como folhas ao vento...",
];

const DAWN: [&str; 4] = [
    "O sol nasce sobre Orbis...",
    "As facções despertam e se movem...",
    "O mundo evolui enquanto você observa...",
    "A aurora traz novos desafios...",
];

const ACTION: [&str; 4] = [
    "Processando o fluxo do destino...",
    "O karma se manifesta...",
    "Consequências se desdobram...",
    "O Dao responde às suas ações...",
];

impl LoadingKind {
    /// Kind for a submitted action.
    pub fn for_action(input: &str, world_ticked: bool) -> Self {
        if world_ticked {
            return LoadingKind::Dawn;
        }
        let input = input.to_lowercase();
        if input.contains("dormir") || input.contains("descansar") {
            LoadingKind::Sleep
        } else {
            LoadingKind::Action
        }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            LoadingKind::Init => &INIT,
            LoadingKind::Sleep => &SLEEP,
            LoadingKind::Dawn => &DAWN,
            LoadingKind::Action => &ACTION,
        }
    }
}

/// Rotates through each kind's messages in order.
#[derive(Debug, Default)]
pub struct LoadingRotation {
    counter: usize,
}

impl LoadingRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next message for `kind`.
    pub fn next(&mut self, kind: LoadingKind) -> &'static str {
        let messages = kind.messages();
        let message = messages[self.counter % messages.len()];
        self.counter = self.counter.wrapping_add(1);
        message
    }
}
