//! Menu overlay surface
//!
//! The coordinator pushes a fresh model to the overlay at phase transitions
//! instead of relying on reactive bindings; the overlay renders the strings
//! and the visibility flag without further logic.

use crate::sim::{GamePhase, GameState};

/// Fixed menu string pairs and overlay visibility for one phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    pub title: &'static str,
    pub button: &'static str,
    /// Opaque overlay in the menu phases, transparent while running
    pub overlay_visible: bool,
}

/// Menu content for a phase. Changes exactly at the GameOver transition and
/// at restart.
pub fn menu_model(phase: GamePhase) -> MenuModel {
    match phase {
        GamePhase::NotStarted => MenuModel {
            title: "G   A   L   A   X   Y",
            button: "START",
            overlay_visible: true,
        },
        GamePhase::Running => MenuModel {
            title: "G   A   L   A   X   Y",
            button: "START",
            overlay_visible: false,
        },
        GamePhase::GameOver => MenuModel {
            title: "G  A  M  E    O  V  E  R",
            button: "RESTART",
            overlay_visible: true,
        },
    }
}

/// Score line shown above the tunnel
pub fn score_text(state: &GameState) -> String {
    format!("SCORE: {}", state.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_pairs_per_phase() {
        let fresh = menu_model(GamePhase::NotStarted);
        assert_eq!(fresh.button, "START");
        assert!(fresh.overlay_visible);

        assert!(!menu_model(GamePhase::Running).overlay_visible);

        let over = menu_model(GamePhase::GameOver);
        assert_eq!(over.button, "RESTART");
        assert!(over.overlay_visible);
        assert_ne!(over.title, fresh.title);
    }

    #[test]
    fn test_score_text() {
        let state = GameState::new(0);
        assert_eq!(score_text(&state), "SCORE: 0");
    }
}
