// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod context;
pub mod filter;
pub mod listing;
pub mod model;
pub mod nav;
pub mod state;

pub use context::*;
pub use filter::*;
pub use listing::*;
pub use model::*;
pub use nav::*;
pub use state::*;
