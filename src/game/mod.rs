//! The dice duel itself: item selection, battles and the session loop.

pub mod selection;
pub mod battle;
pub mod session;

pub use selection::{choose_items, cpu_choice, parse_selection, ItemChoice};
pub use battle::{battle, BattleReport, SideRoll};
pub use session::Session;

/// The two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Cpu,
}

impl Side {
    /// Label used at the start of battle lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "You",
            Side::Cpu => "CPU",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
