//! Battle resolution for a single round.

use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::Side;
use crate::core::{Die, RandomSource, Result};
use crate::items::Item;
use crate::rules::Outcome;

/// One side's roll: the raw face, the item used and the compared value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRoll {
    pub raw: u32,
    pub item: Option<String>,
    pub value: u32,
}

impl SideRoll {
    /// Apply `item` (if any) to a raw roll.
    pub fn new(raw: u32, item: Option<&Item>) -> Self {
        match item {
            Some(item) => Self {
                raw,
                item: Some(item.name.clone()),
                value: item.apply(raw),
            },
            None => Self {
                raw,
                item: None,
                value: raw,
            },
        }
    }

    /// Item name for display, `none` if no item was used.
    pub fn item_name(&self) -> &str {
        self.item.as_deref().unwrap_or("none")
    }
}

/// Everything that happened in one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub player: SideRoll,
    pub cpu: SideRoll,
    pub outcome: Outcome,
}

impl BattleReport {
    /// Build a report from two raw rolls and the items each side used.
    pub fn from_rolls(
        player_raw: u32,
        cpu_raw: u32,
        player_item: Option<&Item>,
        cpu_item: Option<&Item>,
    ) -> Self {
        let player = SideRoll::new(player_raw, player_item);
        let cpu = SideRoll::new(cpu_raw, cpu_item);
        let outcome = Outcome::decide(player.value, cpu.value);
        Self { player, cpu, outcome }
    }

    /// Roll for a side.
    pub fn roll(&self, side: Side) -> &SideRoll {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    /// Print both rolls and the round result.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for side in [Side::Player, Side::Cpu] {
            let roll = self.roll(side);
            writeln!(
                out,
                "{}: {} | roll: {}, item: {}",
                side.label(),
                roll.value,
                roll.raw,
                roll.item_name()
            )?;
        }
        writeln!(out, "{}", self.outcome.round_message())?;
        Ok(())
    }
}

/// Roll for the player, then the CPU, and decide the round.
pub fn battle<R: RandomSource + ?Sized>(
    die: Die,
    rng: &mut R,
    player_item: Option<&Item>,
    cpu_item: Option<&Item>,
) -> BattleReport {
    let player_raw = die.roll(rng);
    let cpu_raw = die.roll(rng);
    debug!("raw rolls: player {} cpu {} on {}", player_raw, cpu_raw, die);

    BattleReport::from_rolls(player_raw, cpu_raw, player_item, cpu_item)
}
