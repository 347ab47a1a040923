//! Game state snapshot
//!
//! `GameState` is never edited in place: every transition builds a new value
//! that replaces the old one.

use serde::{Deserialize, Serialize};

use super::catalog::Service;
use super::outcome::Outcome;

/// Status shown while an icon is falling
pub const WAITING_MESSAGE: &str = "Drag the icon onto the role it serves";

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Icon is falling and can be dragged
    Falling,
    /// Outcome on screen, waiting for the next icon
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    score: i64,
    status_message: String,
    popup_message: String,
    paused: bool,
    active_service: Service,
}

impl GameState {
    /// Fresh game with `service` falling
    pub fn new(service: Service) -> Self {
        Self {
            score: 0,
            status_message: WAITING_MESSAGE.to_string(),
            popup_message: String::new(),
            paused: false,
            active_service: service,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn popup_message(&self) -> &str {
        &self.popup_message
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn active_service(&self) -> Service {
        self.active_service
    }

    pub fn phase(&self) -> GamePhase {
        if self.paused {
            GamePhase::Resolved
        } else {
            GamePhase::Falling
        }
    }

    /// Falling → Resolved
    pub fn resolve(&self, outcome: &Outcome) -> Self {
        Self {
            score: self.score + outcome.score_delta(),
            status_message: outcome.status_message(),
            popup_message: outcome.popup_message(),
            paused: true,
            active_service: self.active_service,
        }
    }

    /// Resolved → Falling with a new service
    pub fn resume(&self, next: Service) -> Self {
        Self {
            score: self.score,
            status_message: WAITING_MESSAGE.to_string(),
            popup_message: String::new(),
            paused: false,
            active_service: next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::Role;

    #[test]
    fn test_new_state_is_falling() {
        let state = GameState::new(Service::Vaccination);
        assert_eq!(state.phase(), GamePhase::Falling);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status_message(), WAITING_MESSAGE);
        assert!(state.popup_message().is_empty());
    }

    #[test]
    fn test_resolve_pauses_with_message() {
        let state = GameState::new(Service::Vaccination);
        let outcome = Outcome::Wrong {
            service: Service::Vaccination,
            landed: Role::Adult,
            expected: Some(Role::Infant),
            explanation: "shots".to_string(),
        };
        let resolved = state.resolve(&outcome);
        assert!(resolved.paused());
        assert_eq!(resolved.score(), -1);
        assert!(!resolved.status_message().is_empty());
        assert_eq!(resolved.active_service(), Service::Vaccination);
        // Original snapshot untouched
        assert_eq!(state.score(), 0);
        assert!(!state.paused());
    }

    #[test]
    fn test_score_has_no_floor() {
        let mut state = GameState::new(Service::Playground);
        let outcome = Outcome::Wrong {
            service: Service::Playground,
            landed: Role::Infant,
            expected: Some(Role::Child),
            explanation: String::new(),
        };
        for _ in 0..5 {
            state = state.resolve(&outcome).resume(Service::Playground);
        }
        assert_eq!(state.score(), -5);
    }

    #[test]
    fn test_resume_clears_popup() {
        let state = GameState::new(Service::JobTraining)
            .resolve(&Outcome::Missed {
                service: Service::JobTraining,
            })
            .resume(Service::PublicLibrary);
        assert_eq!(state.phase(), GamePhase::Falling);
        assert!(state.popup_message().is_empty());
        assert_eq!(state.status_message(), WAITING_MESSAGE);
        assert_eq!(state.active_service(), Service::PublicLibrary);
    }
}
