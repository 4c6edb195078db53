// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use fnboard_app::{FilterStore, FunctionRecord};
use std::cell::RefCell;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const OWNERS: [&str; 8] = [
    "alexellis",
    "openfaas",
    "acme-labs",
    "burtonr",
    "martindekov",
    "ivanayov",
    "globex",
    "rgee0",
];

const FUNCTION_STEMS: [&str; 16] = [
    "figlet",
    "nodeinfo",
    "markdown",
    "cows",
    "shrink-image",
    "sentiment",
    "qrcode",
    "env",
    "hello",
    "resize",
    "slack-notify",
    "ping",
    "colorise",
    "gif-maker",
    "stats",
    "webhook",
];

const REPO_SUFFIXES: [&str; 5] = ["fn", "functions", "faas", "api", "bot"];
const HEX: &[u8; 16] = b"0123456789abcdef";

// Keeps demo timestamps stable between runs.
const REFERENCE_NOW: OffsetDateTime = datetime!(2026-01-01 00:00:00 UTC);

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

#[derive(Debug, Clone)]
pub struct FunctionFaker {
    rng: DeterministicRng,
}

impl FunctionFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn owner(&mut self) -> &'static str {
        self.pick(&OWNERS)
    }

    pub fn function(&mut self) -> FunctionRecord {
        let owner = self.owner();
        self.function_for_owner(owner)
    }

    pub fn function_for_owner(&mut self, owner: &str) -> FunctionRecord {
        let stem = self.pick(&FUNCTION_STEMS);
        let suffix = self.pick(&REPO_SUFFIXES);
        let replicas = 1 + self.int_n(4) as u32;
        let available_replicas = replicas - self.int_n(replicas as usize + 1) as u32;
        let minutes_ago = i64::try_from(self.int_n(60 * 24 * 90)).unwrap_or(0);

        FunctionRecord {
            name: format!("{owner}-{stem}"),
            short_sha: self.short_sha(),
            git_owner: owner.to_owned(),
            git_repo: format!("{stem}-{suffix}"),
            deployed_at: Some(REFERENCE_NOW - Duration::minutes(minutes_ago)),
            invocation_count: self.int_n(250_000) as u64,
            replicas,
            available_replicas,
        }
    }

    /// `count` records spread over a handful of owners, as the dashboard of
    /// a busy installation would see them.
    pub fn functions(&mut self, count: usize) -> Vec<FunctionRecord> {
        (0..count).map(|_| self.function()).collect()
    }

    fn short_sha(&mut self) -> String {
        (0..7)
            .map(|_| char::from(HEX[self.rng.int_n(HEX.len())]))
            .collect()
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.int_n(items.len())]
    }
}

/// Seeded demo records used by `fnboard --demo`.
pub fn demo_functions() -> Vec<FunctionRecord> {
    FunctionFaker::new(7).functions(24)
}

pub fn owners() -> &'static [&'static str] {
    &OWNERS
}

pub fn reference_now() -> OffsetDateTime {
    REFERENCE_NOW
}

/// Minimal record for tests that only care about identity and owner.
pub fn record(name: &str, short_sha: &str, owner: &str) -> FunctionRecord {
    FunctionRecord {
        name: name.to_owned(),
        short_sha: short_sha.to_owned(),
        git_owner: owner.to_owned(),
        git_repo: format!("{name}-repo"),
        deployed_at: Some(REFERENCE_NOW),
        invocation_count: 0,
        replicas: 1,
        available_replicas: 1,
    }
}

/// In-memory [`FilterStore`] that records every write.
#[derive(Debug, Default)]
pub struct MemoryFilterStore {
    value: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
    fail_writes: bool,
}

impl MemoryFilterStore {
    pub fn holding(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_owned())),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl FilterStore for MemoryFilterStore {
    fn load_filter(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    fn save_filter(&self, owner: &str) -> Result<()> {
        self.writes.borrow_mut().push(owner.to_owned());
        if self.fail_writes {
            bail!("settings database is read-only");
        }
        *self.value.borrow_mut() = Some(owner.to_owned());
        Ok(())
    }
}
