//! Item selection at the start of a round.
//!
//! Both pools are listed (the CPU's purely for information), the player
//! types an index, and the CPU picks uniformly among its items plus
//! "no item". Bad input is never an error: it just means no item.

use log::{debug, info};
use std::io::{BufRead, Write};

use super::Side;
use crate::core::{RandomSource, Result};
use crate::items::ItemPool;

/// Indices chosen into each side's pool for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemChoice {
    pub player: Option<usize>,
    pub cpu: Option<usize>,
}

/// Parse a typed index against the player's pool.
///
/// Non-numeric, negative or out-of-range input yields `None`.
pub fn parse_selection(input: &str, pool: &ItemPool) -> Option<usize> {
    let index: usize = input.trim().parse().ok()?;
    (index < pool.len()).then_some(index)
}

/// Pick for the CPU. Every item and "no item" are equally likely.
pub fn cpu_choice<R: RandomSource + ?Sized>(rng: &mut R, pool: &ItemPool) -> Option<usize> {
    let pick = rng.pick(pool.len() + 1);
    (pick < pool.len()).then_some(pick)
}

/// Print a pool listing, or a note that it is empty.
pub fn list_items<W: Write + ?Sized>(out: &mut W, side: Side, pool: &ItemPool) -> Result<()> {
    let (empty, header) = match side {
        Side::Player => ("You have no items available.", "You can use the following items:"),
        Side::Cpu => ("The CPU has no items available.", "The CPU can use the following items:"),
    };

    if pool.is_empty() {
        writeln!(out, "{}", empty)?;
        return Ok(());
    }

    writeln!(out, "{}", header)?;
    for (i, item) in pool.iter().enumerate() {
        writeln!(out, "\t{}. {}: {}", i, item.name, item.description)?;
    }
    Ok(())
}

/// Show both pools, read the player's pick, then roll the CPU's pick.
///
/// No line is read when the player's pool is empty. End of input
/// counts as "no item".
pub fn choose_items<R, I, W>(
    player_pool: &ItemPool,
    cpu_pool: &ItemPool,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<ItemChoice>
where
    R: RandomSource + ?Sized,
    I: BufRead + ?Sized,
    W: Write + ?Sized,
{
    list_items(out, Side::Cpu, cpu_pool)?;
    list_items(out, Side::Player, player_pool)?;

    let player = if player_pool.is_empty() {
        None
    } else {
        write!(out, "Enter the number of the item to use: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed during item selection");
            None
        } else {
            let parsed = parse_selection(&line, player_pool);
            if parsed.is_none() && !line.trim().is_empty() {
                info!("ignoring item selection {:?}", line.trim());
            }
            parsed
        }
    };

    let cpu = cpu_choice(rng, cpu_pool);
    Ok(ItemChoice { player, cpu })
}
