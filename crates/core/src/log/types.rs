use serde::{Deserialize, Serialize};

/// Entity name used in repository errors and HTTP error details.
pub const LOG_ENTITY: &str = "Log";

/// A persisted log entry (the full shape returned by every endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    pub section_number: i64,
    pub contractor_type: String,
    pub objective: String,
}

impl LogEntry {
    /// Builds the full shape from a creation payload and the id storage assigned to it.
    pub fn from_new(id: i64, new: NewLogEntry) -> Self {
        Self {
            id,
            section_number: new.section_number,
            contractor_type: new.contractor_type,
            objective: new.objective,
        }
    }

    /// Overwrites all business fields, keeping the id.
    pub fn apply(&mut self, update: NewLogEntry) {
        self.section_number = update.section_number;
        self.contractor_type = update.contractor_type;
        self.objective = update.objective;
    }
}

/// The creation shape: the business fields of a log entry without its id.
///
/// Used as the request body for both create and update. Every field is
/// required; deserialization fails on a missing field or a wrongly typed one.
/// Empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLogEntry {
    pub section_number: i64,
    pub contractor_type: String,
    pub objective: String,
}

impl NewLogEntry {
    pub fn new(
        section_number: i64,
        contractor_type: impl Into<String>,
        objective: impl Into<String>,
    ) -> Self {
        Self {
            section_number,
            contractor_type: contractor_type.into(),
            objective: objective.into(),
        }
    }
}
