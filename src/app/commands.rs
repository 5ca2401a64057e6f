//! Slash commands typed in the game input.

/// A parsed line of game input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Free text sent to the game master as an action
    Action(String),
    /// `/attack <npc> [skill]`; the skill is an id or a 1-based grid position
    Attack { target: usize, skill: Option<String> },
    /// `/observe <npc>`
    Observe(usize),
    Quests,
    Sheet,
    Inventory,
    Skills,
    Time,
    Logout,
    Help,
    Quit,
    /// A slash command that could not be parsed; the text is the error shown
    Invalid(String),
}

/// Help lines printed by `/help`.
pub const HELP_LINES: [&str; 11] = [
    "Comandos disponíveis:",
    "  /attack <npc> [habilidade]  atacar um NPC da cena (em combate)",
    "  /observe <npc>              observar um NPC da cena",
    "  /quests                     registro de missões",
    "  /sheet                      ficha do cultivador",
    "  /inventory                  inventário",
    "  /skills                     catálogo de habilidades",
    "  /time                       atualizar o relógio do mundo",
    "  /logout                     voltar à seleção de personagem",
    "  /quit                       sair",
    "Qualquer outro texto é enviado como ação.",
];

impl GameCommand {
    /// Parse one submitted line. Returns None for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let Some(rest) = input.strip_prefix('/') else {
            return Some(GameCommand::Action(input.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match name.as_str() {
            "attack" | "atacar" => match args.first().map(|a| parse_position(a)) {
                Some(Some(target)) => GameCommand::Attack {
                    target,
                    skill: args.get(1).map(|s| s.to_string()),
                },
                _ => GameCommand::Invalid("Uso: /attack <npc> [habilidade]".to_string()),
            },
            "observe" | "observar" => match args.first().map(|a| parse_position(a)) {
                Some(Some(position)) => GameCommand::Observe(position),
                _ => GameCommand::Invalid("Uso: /observe <npc>".to_string()),
            },
            "quests" | "missoes" => GameCommand::Quests,
            "sheet" | "ficha" => GameCommand::Sheet,
            "inventory" | "inv" => GameCommand::Inventory,
            "skills" => GameCommand::Skills,
            "time" => GameCommand::Time,
            "logout" => GameCommand::Logout,
            "help" | "ajuda" | "?" => GameCommand::Help,
            "quit" | "exit" | "sair" => GameCommand::Quit,
            other => GameCommand::Invalid(format!(
                "Comando desconhecido: /{}. Digite /help.",
                other
            )),
        };
        Some(command)
    }
}

/// 1-based NPC position; zero is rejected.
fn parse_position(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok().filter(|n| *n > 0)
}
