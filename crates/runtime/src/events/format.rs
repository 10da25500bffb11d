use battle_core::{BattleEvent, BattleEventKind};

/// One-line, human-readable rendering of an event for battle logs.
///
/// State changes are bookkeeping and render as `None`.
pub fn format_event(event: &BattleEvent) -> Option<String> {
    let line = match &event.kind {
        BattleEventKind::BattleStart { player, enemy } => {
            format!("⚔️ Battle started! {player} vs {enemy}")
        }
        BattleEventKind::TurnStart { turn_number, .. } => format!("--- Turn {turn_number} ---"),
        BattleEventKind::Attack { attacker, target } => format!("⚔️ {attacker} attacks {target}!"),
        BattleEventKind::Damage {
            target,
            damage,
            remaining_health,
        } => format!("💥 {target} takes {damage} damage! ({remaining_health} HP)"),
        BattleEventKind::Miss { attacker } => format!("💨 {attacker} missed!"),
        BattleEventKind::Critical { attacker, damage } => {
            format!("🎯 CRITICAL HIT! {attacker} deals {damage} damage!")
        }
        BattleEventKind::Heal { target, amount } => format!("💚 {target} recovers {amount} HP"),
        BattleEventKind::Death { entity } => format!("💀 {entity} has been defeated!"),
        BattleEventKind::Victory { exp_gained } => format!("🎉 Victory! Gained {exp_gained} EXP!"),
        BattleEventKind::Defeat => "😵 Defeat...".to_owned(),
        BattleEventKind::Flee { success: true } => "🏃 Escaped from battle!".to_owned(),
        BattleEventKind::Flee { success: false } => "🏃 Escape failed!".to_owned(),
        BattleEventKind::StateChange { .. } => return None,
        BattleEventKind::Log { message } => message.clone(),
    };
    Some(line)
}
