//! Named value objects
//!
//! Small records referenced by issues (priority, status, users, versions,
//! components, resolutions). In query text they render by their declared
//! name as unquoted named literals, so each converts into
//! [`Literal::Name`].

use jiraq_jql::ops::Literal;
use serde::{Deserialize, Serialize};

macro_rules! named_value {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
        pub struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,
            pub name: String,
        }

        impl $name {
            pub fn named(name: impl Into<String>) -> Self {
                Self {
                    id: None,
                    name: name.into(),
                }
            }
        }

        impl From<&$name> for Literal {
            fn from(value: &$name) -> Self {
                Literal::name(value.name.clone())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

named_value! {
    /// Issue priority (e.g. "Major", "Minor")
    Priority
}

named_value! {
    /// Workflow status (e.g. "Open", "In Progress")
    Status
}

named_value! {
    /// Project version an issue is fixed in or affects
    Version
}

named_value! {
    /// Project component
    Component
}

named_value! {
    /// Resolution reached when an issue was closed
    Resolution
}

/// A user reference as it appears on an issue (assignee, reporter)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUser {
    pub account_id: Option<String>,
    pub display_name: String,
}

impl From<&IssueUser> for Literal {
    fn from(value: &IssueUser) -> Self {
        // Account IDs are the stable query handle; fall back to the
        // display name for servers without them
        match &value.account_id {
            Some(id) => Literal::text(id.clone()),
            None => Literal::name(value.display_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_value_renders_by_name() {
        let priority = Priority::named("Major");
        assert_eq!(Literal::from(&priority).render(), "Major");

        let status = Status::named("In Progress");
        assert_eq!(Literal::from(&status).render(), r#""In Progress""#);
    }

    #[test]
    fn test_user_prefers_account_id() {
        let user = IssueUser {
            account_id: Some("5b10a2844c20165700ede21g".to_string()),
            display_name: "Ada".to_string(),
        };
        assert_eq!(
            Literal::from(&user).render(),
            r#""5b10a2844c20165700ede21g""#
        );

        let bare = IssueUser {
            account_id: None,
            display_name: "ada.lovelace".to_string(),
        };
        assert_eq!(Literal::from(&bare).render(), "ada.lovelace");
    }

    #[test]
    fn test_deserialize_named_value() {
        let version: Version =
            serde_json::from_str(r#"{"id": "10010", "name": "2.1"}"#).unwrap();
        assert_eq!(version.name, "2.1");
        assert_eq!(version.id.as_deref(), Some("10010"));
    }
}
