// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::collections::BTreeSet;

use crate::FunctionRecord;

/// Storage key of the persisted owner filter.
pub const FILTER_KEY: &str = "filter";

/// The active owner filter. Empty means every owner matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OwnerFilter(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    Select(String),
    Clear,
}

impl OwnerFilter {
    pub fn all() -> Self {
        Self(String::new())
    }

    /// Validates a filter restored from storage against the current context.
    ///
    /// A restored value survives only if it names the dashboard being viewed
    /// or one of the caller's known organizations; anything else (including
    /// any value when no org claims are available) collapses to no filter.
    pub fn restore(
        persisted: &str,
        current_context_id: &str,
        known_org_ids: Option<&[String]>,
    ) -> Self {
        if persisted.is_empty() {
            return Self::all();
        }
        if persisted == current_context_id {
            return Self(persisted.to_owned());
        }

        match known_org_ids {
            Some(orgs) if orgs.iter().any(|org| org == persisted) => Self(persisted.to_owned()),
            _ => Self::all(),
        }
    }

    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::Select(owner) => Self(owner),
            FilterAction::Clear => Self::all(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn matches(&self, owner: &str) -> bool {
        self.0.is_empty() || self.0 == owner
    }
}

/// Owners in order of first appearance, each listed once.
pub fn distinct_owners(records: &[FunctionRecord]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .map(|record| record.git_owner.as_str())
        .filter(|owner| seen.insert(*owner))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerMenuEntry {
    Owner { name: String, active: bool },
    Clear,
}

impl OwnerMenuEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::Owner { name, .. } => name.as_str(),
            Self::Clear => "Clear",
        }
    }
}

pub fn owner_menu(filter: &OwnerFilter, records: &[FunctionRecord]) -> Vec<OwnerMenuEntry> {
    let mut entries = distinct_owners(records)
        .into_iter()
        .map(|owner| OwnerMenuEntry::Owner {
            name: owner.to_owned(),
            active: filter.as_str() == owner,
        })
        .collect::<Vec<_>>();
    if filter.is_active() {
        entries.push(OwnerMenuEntry::Clear);
    }
    entries
}

/// Durable home of the owner filter.
pub trait FilterStore {
    fn load_filter(&self) -> Result<Option<String>>;
    fn save_filter(&self, owner: &str) -> Result<()>;
}

impl<T: FilterStore + ?Sized> FilterStore for &T {
    fn load_filter(&self) -> Result<Option<String>> {
        (**self).load_filter()
    }

    fn save_filter(&self, owner: &str) -> Result<()> {
        (**self).save_filter(owner)
    }
}

/// Holds the active owner filter and writes every change through to a
/// [`FilterStore`].
#[derive(Debug)]
pub struct OwnerFilterController<S> {
    store: S,
    filter: OwnerFilter,
}

impl<S: FilterStore> OwnerFilterController<S> {
    /// Restores the persisted filter. Reads once, never writes.
    pub fn initialize(
        store: S,
        current_context_id: &str,
        known_org_ids: Option<&[String]>,
    ) -> Result<Self> {
        let persisted = store.load_filter()?.unwrap_or_default();
        let filter = OwnerFilter::restore(&persisted, current_context_id, known_org_ids);
        if filter.as_str() != persisted {
            tracing::debug!(
                persisted = %persisted,
                context = current_context_id,
                "dropped owner filter outside current context"
            );
        }
        Ok(Self { store, filter })
    }

    pub fn filter(&self) -> &OwnerFilter {
        &self.filter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Selects `owner` and persists it. The in-memory filter changes even
    /// when the write fails.
    pub fn set_filter(&mut self, owner: impl Into<String>) -> Result<()> {
        self.apply(FilterAction::Select(owner.into()))
    }

    pub fn clear_filter(&mut self) -> Result<()> {
        self.apply(FilterAction::Clear)
    }

    pub fn matches(&self, owner: &str) -> bool {
        self.filter.matches(owner)
    }

    pub fn distinct_owners<'a>(&self, records: &'a [FunctionRecord]) -> Vec<&'a str> {
        distinct_owners(records)
    }

    pub fn owner_menu(&self, records: &[FunctionRecord]) -> Vec<OwnerMenuEntry> {
        owner_menu(&self.filter, records)
    }

    fn apply(&mut self, action: FilterAction) -> Result<()> {
        self.filter = std::mem::take(&mut self.filter).apply(action);
        tracing::debug!(owner = self.filter.as_str(), "owner filter changed");
        self.store.save_filter(self.filter.as_str())
    }
}
