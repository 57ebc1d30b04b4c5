// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sniff - browser, OS, and feature detection for client environment snapshots.
//!
//! Classifies a captured client environment (user-agent and friends, screen
//! metrics, capability probe answers) into three flat records (features,
//! operating system, browser) and derives the presentation markers a
//! consuming UI should toggle.
//!
//! Usage:
//!
//! ```
//! use sniff::detect::Detection;
//! use sniff::env::EnvSnapshot;
//!
//! let env = EnvSnapshot::from_user_agent(
//!     "Mozilla/5.0 (iPhone; CPU iPhone OS 7_1 like Mac OS X) AppleWebKit/537.51.2 \
//!      (KHTML, like Gecko) Version/7.0 Mobile/11D201 Safari/9537.53",
//! );
//! let detection = Detection::capture(&env);
//!
//! assert!(detection.os.ios);
//! assert!(detection.browser.safari);
//! ```
//!
//! Architecture:
//! - `env`: the injected client environment (trait + serializable snapshot)
//! - `detect`: the probe pipeline and the immutable detection records
//! - `classes`: style-class markers derived from a detection
//! - `config`, `cli`: settings file and command-line surface

pub mod classes;
pub mod cli;
pub mod config;
pub mod detect;
pub mod env;
pub mod error;
