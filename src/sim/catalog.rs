//! Services, roles and the table that pairs them
//!
//! Each service belongs to exactly one role. The table is fixed at compile
//! time but can be replaced through settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Explanation shown when a service has no catalog entry
pub const MISSING_EXPLANATION: &str = "No explanation is configured for this service.";

/// The falling sprite variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Vaccination,
    Playground,
    JobTraining,
    PublicLibrary,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Vaccination,
        Service::Playground,
        Service::JobTraining,
        Service::PublicLibrary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Vaccination => "Vaccination",
            Service::Playground => "Playground",
            Service::JobTraining => "Job Training",
            Service::PublicLibrary => "Public Library",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role zone variants, in collision test order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Infant,
    Child,
    Adult,
    GeneralPublic,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Infant, Role::Child, Role::Adult, Role::GeneralPublic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Infant => "Infant",
            Role::Child => "Child",
            Role::Adult => "Adult",
            Role::GeneralPublic => "General Public",
        }
    }

    /// DOM id suffix for the role's label
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Infant => "infant",
            Role::Child => "child",
            Role::Adult => "adult",
            Role::GeneralPublic => "public",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub service: Service,
    pub role: Role,
    pub explanation: String,
}

/// Service → (expected role, explanation) lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        let entry = |service, role, explanation: &str| CatalogEntry {
            service,
            role,
            explanation: explanation.to_string(),
        };
        Self {
            entries: vec![
                entry(
                    Service::Vaccination,
                    Role::Infant,
                    "Routine vaccinations are scheduled during the first months of life.",
                ),
                entry(
                    Service::Playground,
                    Role::Child,
                    "Playgrounds are built for children to play and grow.",
                ),
                entry(
                    Service::JobTraining,
                    Role::Adult,
                    "Job training programs help adults enter or change careers.",
                ),
                entry(
                    Service::PublicLibrary,
                    Role::GeneralPublic,
                    "Public libraries are open to everyone in the community.",
                ),
            ],
        }
    }
}

impl Catalog {
    /// Build a catalog from explicit entries. Later duplicates are ignored.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|e| e.service == entry.service) {
                log::warn!("Duplicate catalog entry for {} ignored", entry.service);
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn lookup(&self, service: Service) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.service == service)
    }

    /// Role the service belongs to, if mapped
    pub fn expected_role(&self, service: Service) -> Option<Role> {
        self.lookup(service).map(|e| e.role)
    }

    /// Explanation for the service, or the placeholder if unmapped
    pub fn explanation(&self, service: Service) -> &str {
        self.lookup(service)
            .map(|e| e.explanation.as_str())
            .unwrap_or(MISSING_EXPLANATION)
    }
}
