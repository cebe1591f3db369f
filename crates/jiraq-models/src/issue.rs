//! The Issue record
//!
//! Maps the remote service's issue JSON payload (key plus a nested
//! `fields` object) and declares which of those fields are queryable,
//! under what remote names, with which operators.
//!
//! The constants in [`fields`] are symbolic query references only: they
//! carry no data and are never read from an `Issue` instance.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use jiraq_jql::ast::Field;
use jiraq_jql::fields::{Capability, FieldSpec, Queryable};

use crate::values::{Component, IssueUser, Priority, Resolution, Status, Version};

/// A ticket as returned by the search endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Issue {
    /// Issue key, e.g. `PROJ-42`
    pub key: String,
    pub fields: IssueFields,
}

/// The payload's nested `fields` object
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFields {
    pub summary: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub resolution: Option<Resolution>,
    pub assignee: Option<IssueUser>,
    pub reporter: Option<IssueUser>,
    pub fix_versions: Vec<Version>,
    pub components: Vec<Component>,
    pub labels: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    #[serde(rename = "duedate")]
    pub due_date: Option<NaiveDate>,
}

impl Issue {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    pub fn is_resolved(&self) -> bool {
        self.fields.resolution.is_some()
    }
}

/// Symbolic query references for issue properties
pub mod fields {
    use super::Field;

    pub const KEY: Field = Field::new("key");
    pub const SUMMARY: Field = Field::new("summary");
    pub const DESCRIPTION: Field = Field::new("description");
    pub const PRIORITY: Field = Field::new("priority");
    pub const STATUS: Field = Field::new("status");
    pub const RESOLUTION: Field = Field::new("resolution");
    pub const ASSIGNEE: Field = Field::new("assignee");
    pub const REPORTER: Field = Field::new("reporter");
    pub const FIX_VERSIONS: Field = Field::new("fix_versions");
    pub const COMPONENTS: Field = Field::new("components");
    pub const LABELS: Field = Field::new("labels");
    pub const CREATED: Field = Field::new("created");
    pub const UPDATED: Field = Field::new("updated");
    pub const DUE_DATE: Field = Field::new("due_date");
}

use Capability::{Changed, Comparable, Contains, Include, Sortable, Was, WasInclude};

/// Queryable-field table for issues: remote names and legal operators.
/// Scanned once by the field registry on first compilation.
static ISSUE_FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec::new("key", "issuekey").with(&[Comparable, Sortable, Include]),
    FieldSpec::new("summary", "summary").with(&[Contains, Sortable]),
    FieldSpec::new("description", "description").with(&[Contains]),
    FieldSpec::new("priority", "priority").with(&[Comparable, Sortable, Include, Was]),
    FieldSpec::new("status", "status")
        .with(&[Comparable, Sortable, Include, Was, WasInclude, Changed]),
    FieldSpec::new("resolution", "resolution").with(&[Comparable, Sortable, Include, Was]),
    FieldSpec::new("assignee", "assignee")
        .with(&[Comparable, Sortable, Include, Was, WasInclude, Changed]),
    FieldSpec::new("reporter", "reporter").with(&[Comparable, Sortable, Include]),
    FieldSpec::new("fix_versions", "fixVersion").with(&[Sortable, Include]),
    FieldSpec::new("components", "component").with(&[Include]),
    FieldSpec::new("labels", "labels").with(&[Comparable, Include]),
    FieldSpec::new("created", "created").with(&[Comparable, Sortable]),
    FieldSpec::new("updated", "updated").with(&[Comparable, Sortable]),
    FieldSpec::new("due_date", "due").with(&[Comparable, Sortable]),
];

impl Queryable for Issue {
    fn entity_name() -> &'static str {
        "issue"
    }

    fn field_specs() -> &'static [FieldSpec] {
        ISSUE_FIELD_SPECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiraq_jql::fields::FieldRegistry;

    #[test]
    fn test_deserialize_issue_payload() {
        let json = r#"{
            "key": "PROJ-42",
            "fields": {
                "summary": "Crash on startup",
                "priority": {"id": "2", "name": "Major"},
                "status": {"name": "Open"},
                "fixVersions": [{"name": "2.1"}],
                "labels": ["regression"],
                "duedate": "2024-06-01"
            }
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.key(), "PROJ-42");
        assert_eq!(issue.summary(), "Crash on startup");
        assert_eq!(issue.fields.priority.as_ref().unwrap().name, "Major");
        assert_eq!(issue.fields.fix_versions[0].name, "2.1");
        assert!(!issue.is_resolved());
    }

    #[test]
    fn test_field_table_remote_names() {
        let table = FieldRegistry::table_for::<Issue>();
        assert_eq!(table.descriptor("key").unwrap().remote_name, "issuekey");
        assert_eq!(
            table.descriptor("fix_versions").unwrap().remote_name,
            "fixVersion"
        );
        assert_eq!(table.descriptor("due_date").unwrap().remote_name, "due");
    }

    #[test]
    fn test_field_table_capabilities() {
        let table = FieldRegistry::table_for::<Issue>();
        let summary = table.descriptor("summary").unwrap();
        assert!(summary.has(Contains));
        assert!(!summary.has(Comparable));

        let status = table.descriptor("status").unwrap();
        assert!(status.has(Was));
        assert!(status.has(Changed));

        let fix_versions = table.descriptor("fix_versions").unwrap();
        assert!(fix_versions.has(Sortable));
        assert!(!fix_versions.has(Comparable));
    }
}
