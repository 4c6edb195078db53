// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Display metadata for one deployed function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub name: String,
    pub short_sha: String,
    pub git_owner: String,
    #[serde(default)]
    pub git_repo: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deployed_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub invocation_count: u64,
    #[serde(default)]
    pub replicas: u32,
    #[serde(default)]
    pub available_replicas: u32,
}

impl FunctionRecord {
    pub fn row_key(&self) -> RowKey {
        RowKey {
            short_sha: self.short_sha.clone(),
            name: self.name.clone(),
        }
    }

    /// Route of the function detail page under the given dashboard context.
    pub fn route(&self, context_id: &str) -> String {
        format!("/{}/{}", context_id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub short_sha: String,
    pub name: String,
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.short_sha, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    OwnerFilter,
}

impl SettingKey {
    pub const ALL: [Self; 1] = [Self::OwnerFilter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OwnerFilter => crate::FILTER_KEY,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            crate::FILTER_KEY => Some(Self::OwnerFilter),
            _ => None,
        }
    }
}

/// Up to two uppercase initials for the owner avatar column.
///
/// Multi-word owners (`open-faas`, `my_org`) take the first letter of the
/// first two words; single-word owners take their first two characters.
pub fn owner_initials(owner: &str) -> String {
    let words = owner
        .split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();

    let initials: String = match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    initials.to_uppercase()
}
