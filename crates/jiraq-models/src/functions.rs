//! Query-language function markers
//!
//! Zero-argument functions the remote service evaluates itself. Each is a
//! placeholder token in the compiled text — nothing is invoked locally —
//! usable anywhere a literal is, most often inside `in (...)` lists.

use jiraq_jql::ops::Literal;

/// `currentUser()` — the authenticated user
pub const fn current_user() -> Literal {
    Literal::function("currentUser")
}

/// `componentsLeadByUser()` — components the current user leads
pub const fn components_lead_by_user() -> Literal {
    Literal::function("componentsLeadByUser")
}

/// `projectsLeadByUser()` — projects the current user leads
pub const fn projects_lead_by_user() -> Literal {
    Literal::function("projectsLeadByUser")
}

/// `now()` — evaluation time on the server
pub const fn now() -> Literal {
    Literal::function("now")
}

/// `startOfDay()` / `endOfDay()`
pub const fn start_of_day() -> Literal {
    Literal::function("startOfDay")
}

pub const fn end_of_day() -> Literal {
    Literal::function("endOfDay")
}

/// `startOfWeek()` / `endOfWeek()`
pub const fn start_of_week() -> Literal {
    Literal::function("startOfWeek")
}

pub const fn end_of_week() -> Literal {
    Literal::function("endOfWeek")
}

/// `releasedVersions()` / `unreleasedVersions()`
pub const fn released_versions() -> Literal {
    Literal::function("releasedVersions")
}

pub const fn unreleased_versions() -> Literal {
    Literal::function("unreleasedVersions")
}
