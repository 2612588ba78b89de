use crate::error::ChunkError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Include/exclude glob filter over file names. A name passes when it
/// matches at least one include pattern (or no includes were given) and
/// matches no exclude pattern.
#[derive(Debug)]
pub struct NameFilter {
    includes: Option<GlobSet>,
    excludes: Option<GlobSet>,
}

impl NameFilter {
    pub fn new(includes: &[String], excludes: &[String]) -> Result<Self, ChunkError> {
        Ok(NameFilter {
            includes: build_globset(includes)?,
            excludes: build_globset(excludes)?,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        if let Some(inc) = &self.includes {
            if !inc.is_match(name) {
                return false;
            }
        }
        if let Some(exc) = &self.excludes {
            if exc.is_match(name) {
                return false;
            }
        }
        true
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ChunkError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(Some(builder.build()?))
}

/// Splits a comma-separated pattern list, dropping empty segments.
pub fn parse_pattern_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
