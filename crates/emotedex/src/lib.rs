#![forbid(unsafe_code)]

//! Builds one aggregated `summoner-emotes.json` from the per-locale emote
//! manifests published by the CommunityDragon CDN. Each catalog id keeps a
//! single normalized icon URL and tag list alongside its display name in
//! every locale that ships it.

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod tags;
pub mod util;

pub use cli::{Cli, run, run_from_env};
pub use error::{EmoteError, Result};
