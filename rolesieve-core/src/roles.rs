//! roles.rs - Role sets and the inclusion policy.
//!
//! A role set is parsed from the comma-separated annotation carried by a
//! region marker. The empty set is a distinct value meaning "every role", so
//! untagged content and content tagged with `{}` behave the same.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::fmt;

/// The set of roles a region is written for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
    /// The empty role set, which applies to all roles.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parses a comma-separated role list.
    ///
    /// Tokens are trimmed and empty tokens are discarded, so `" qr , ,qd "`
    /// yields `{qd, qr}` and a whitespace-only string yields the empty set.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| Into::<String>::into(s).trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{*}}");
        }
        let joined = self.iter().collect::<Vec<_>>().join(",");
        write!(f, "{{{}}}", joined)
    }
}

/// Decides whether content tagged with `content_roles` survives a pass for `current_role`.
///
/// This is the only inclusion policy in the crate; every region kind routes
/// through it.
pub fn include(content_roles: &RoleSet, current_role: &str) -> bool {
    content_roles.is_empty() || content_roles.contains(current_role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_dedupes() {
        let set = RoleSet::parse(" qr, qd ,qr ");
        assert_eq!(set.len(), 2);
        assert!(set.contains("qr"));
        assert!(set.contains("qd"));
    }

    #[test]
    fn blank_annotation_is_the_empty_set() {
        assert_eq!(RoleSet::parse(""), RoleSet::all());
        assert_eq!(RoleSet::parse("   "), RoleSet::all());
        assert_eq!(RoleSet::parse(" , ,"), RoleSet::all());
        assert!(!RoleSet::parse(" ").contains(""));
    }

    #[test]
    fn empty_set_includes_everyone() {
        assert!(include(&RoleSet::all(), "qr"));
        assert!(include(&RoleSet::all(), "anything"));
    }

    #[test]
    fn membership_decides_inclusion() {
        let set = RoleSet::parse("qr,qd");
        assert!(include(&set, "qr"));
        assert!(include(&set, "qd"));
        assert!(!include(&set, "tech"));
        assert!(!include(&set, "q"));
    }

    #[test]
    fn display_is_sorted() {
        assert_eq!(RoleSet::parse("tech, qr").to_string(), "{qr,tech}");
        assert_eq!(RoleSet::all().to_string(), "{*}");
    }
}
