//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created (accounts, transactions, categories)
    Create,
    /// Entity was deleted (categories only)
    Delete,
    /// The whole ledger was replaced from an import payload
    Import,
    /// All data was discarded in favour of the starter ledger
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Account,
    Transaction,
    Category,
    Ledger,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Account => write!(f, "Account"),
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Category => write!(f, "Category"),
            EntityType::Ledger => write!(f, "Ledger"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable description of the entity (e.g., account name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity as recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Free-form detail (e.g. "balance not applied: unknown account")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            after: None,
            note: None,
        }
    }

    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id, entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self::new(Operation::Delete, entity_type, entity_id, entity_name)
    }

    /// Create a new audit entry for a wholesale ledger import
    pub fn import(summary: impl Into<String>) -> Self {
        let mut entry = Self::new(Operation::Import, EntityType::Ledger, "ledger", None);
        entry.note = Some(summary.into());
        entry
    }

    /// Create a new audit entry for a reset to the starter ledger
    pub fn reset(discarded: impl Into<String>) -> Self {
        let mut entry = Self::new(Operation::Reset, EntityType::Ledger, "ledger", None);
        entry.note = Some(format!("discarded {}", discarded.into()));
        entry
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(note) = &self.note {
            output.push_str(&format!("\n  Note: {}", note));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Import.to_string(), "IMPORT");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "Wallet", "balance": 1000});
        let entry = AuditEntry::create(EntityType::Account, "1", Some("Wallet".into()), &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.after, Some(data));
        assert!(entry.note.is_none());
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::delete(EntityType::Category, "expense", Some("Food".into()));
        let text = entry.format_human_readable();
        assert!(text.contains("DELETE Category expense (Food)"));

        let entry = AuditEntry::import("3 accounts, 12 transactions");
        assert!(entry.format_human_readable().contains("Note: 3 accounts, 12 transactions"));
    }

    #[test]
    fn test_optional_fields_skipped() {
        let entry = AuditEntry::delete(EntityType::Category, "income", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("after").is_none());
        assert!(json.get("entity_name").is_none());
    }
}
