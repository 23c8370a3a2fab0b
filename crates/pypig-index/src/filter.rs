//! Record filtering by name, version, python version and platform.
//!
//! Unset criteria are no-ops; a record must satisfy every set criterion.
//! Filtering never fails: an empty result is a normal value.

use crate::PackageRecord;

/// Version criterion.
///
/// Ranges compare versions as plain strings, so `"0.5.10"` sorts before
/// `"0.5.2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    Exact(String),
    /// Inclusive `low..=high`.
    Between(String, String),
}

impl VersionRange {
    /// Build from one (exact) or two (range) values; other counts yield `None`.
    pub fn from_values(values: &[String]) -> Option<Self> {
        match values {
            [exact] => Some(VersionRange::Exact(exact.clone())),
            [low, high] => Some(VersionRange::Between(low.clone(), high.clone())),
            _ => None,
        }
    }

    pub fn contains(&self, version: &str) -> bool {
        match self {
            VersionRange::Exact(v) => version == v,
            VersionRange::Between(low, high) => low.as_str() <= version && version <= high.as_str(),
        }
    }
}

/// Convert a python version such as `3.8` to its CPython wheel tag (`cp38`).
///
/// Needs at least `major.minor`, both numeric; further components are ignored.
pub fn cpython_tag(version: &str) -> Option<String> {
    let mut parts = version.split('.');
    let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
        return None;
    };
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(major) || !numeric(minor) {
        return None;
    }
    Some(format!("cp{}{}", major, minor))
}

/// Filter criteria for package records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    pub name: Option<String>,
    pub version: Option<VersionRange>,
    /// CPython tag derived from the requested python version.
    pub python_tag: Option<String>,
    /// Substring of the platform tag; `any` packages always pass.
    pub platform: Option<String>,
}

impl PackageFilter {
    /// Check a single record against every set criterion.
    pub fn matches(&self, record: &PackageRecord) -> bool {
        if let Some(name) = &self.name
            && record.name != *name
        {
            return false;
        }
        if let Some(range) = &self.version
            && !range.contains(&record.version)
        {
            return false;
        }
        if let Some(tag) = &self.python_tag
            && record.python_tag != *tag
        {
            return false;
        }
        if let Some(platform) = &self.platform
            && !(record.is_platform_independent() || record.platform.contains(platform.as_str()))
        {
            return false;
        }
        true
    }

    /// Lazily keep matching records, preserving order.
    pub fn apply<'a, I>(&'a self, records: I) -> impl Iterator<Item = PackageRecord> + 'a
    where
        I: IntoIterator<Item = PackageRecord>,
        I::IntoIter: 'a,
    {
        records.into_iter().filter(move |record| self.matches(record))
    }
}
