//! Judging a landing against the catalog

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Role, Service};

/// What the controller reports once per falling lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    pub service: Service,
    /// Zone hit, `None` when the icon reached the bottom
    pub role: Option<Role>,
}

/// Scored result of a landing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Correct {
        service: Service,
        role: Role,
        explanation: String,
    },
    Wrong {
        service: Service,
        landed: Role,
        /// `None` when the service has no catalog entry
        expected: Option<Role>,
        explanation: String,
    },
    Missed {
        service: Service,
    },
}

impl Outcome {
    pub fn judge(landing: Landing, catalog: &Catalog) -> Self {
        let Landing { service, role } = landing;
        let Some(landed) = role else {
            return Outcome::Missed { service };
        };

        let expected = catalog.expected_role(service);
        if expected.is_none() {
            log::warn!("No catalog entry for {}, landing cannot match", service);
        }
        let explanation = catalog.explanation(service).to_string();

        if expected == Some(landed) {
            Outcome::Correct {
                service,
                role: landed,
                explanation,
            }
        } else {
            Outcome::Wrong {
                service,
                landed,
                expected,
                explanation,
            }
        }
    }

    pub fn service(&self) -> Service {
        match self {
            Outcome::Correct { service, .. }
            | Outcome::Wrong { service, .. }
            | Outcome::Missed { service } => *service,
        }
    }

    pub fn score_delta(&self) -> i64 {
        match self {
            Outcome::Correct { .. } => 1,
            Outcome::Wrong { .. } => -1,
            Outcome::Missed { .. } => 0,
        }
    }

    pub fn status_message(&self) -> String {
        match self {
            Outcome::Correct { .. } => "Correct! +1 point".to_string(),
            Outcome::Wrong { .. } => "Not quite! -1 point".to_string(),
            Outcome::Missed { .. } => "Missed! The icon reached the bottom".to_string(),
        }
    }

    pub fn popup_message(&self) -> String {
        match self {
            Outcome::Correct { explanation, .. } => explanation.clone(),
            Outcome::Wrong {
                service,
                expected: Some(expected),
                explanation,
                ..
            } => format!("{} belongs to {}. {}", service, expected, explanation),
            Outcome::Wrong {
                service,
                expected: None,
                explanation,
                ..
            } => format!("{} has no matching role. {}", service, explanation),
            Outcome::Missed { service } => {
                format!("{} was not placed on any role this round.", service)
            }
        }
    }
}
