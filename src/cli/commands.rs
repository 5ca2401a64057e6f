//! One-shot commands that run without the TUI.

use std::io::Write;

use color_eyre::Result;

use crate::api::GameClient;
use crate::models::{tier_name, Player};
use crate::session::SessionContext;

fn player_row(player: &Player, active: bool) -> String {
    format!(
        "{} {:>4}  {}  ({} · {} · {}, {} ouro)",
        if active { "*" } else { " " },
        player.id,
        player.name,
        player.constitution_type,
        tier_name(player.cultivation_tier),
        player.location(),
        player.gold
    )
}

/// Print every character, marking the active one with `*`.
pub async fn list_characters(
    client: &GameClient,
    session: &SessionContext,
    out: &mut impl Write,
) -> Result<()> {
    let players = client.list_players().await?;
    if players.is_empty() {
        writeln!(out, "Nenhum cultivador encontrado.")?;
        return Ok(());
    }
    let active = session.player_id();
    for player in &players {
        writeln!(out, "{}", player_row(player, active == Some(player.id)))?;
    }
    Ok(())
}

/// Delete a character. Deleting the active one also ends the session.
pub async fn delete_character(
    client: &GameClient,
    session: &mut SessionContext,
    player_id: i64,
    out: &mut impl Write,
) -> Result<()> {
    let response = client.delete_player(player_id).await?;
    if session.player_id() == Some(player_id) {
        session.clear()?;
    }
    let message = response
        .message
        .unwrap_or_else(|| format!("Cultivador {} excluído.", player_id));
    writeln!(out, "{}", message)?;
    Ok(())
}

/// Forget the active character.
pub fn logout(session: &mut SessionContext, out: &mut impl Write) -> Result<()> {
    match session.player_name().map(str::to_string) {
        Some(name) => {
            session.clear()?;
            writeln!(out, "Sessão de {} encerrada.", name)?;
        }
        None => writeln!(out, "Nenhum cultivador ativo.")?,
    }
    Ok(())
}
