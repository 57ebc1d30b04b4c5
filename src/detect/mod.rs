// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability, OS, and browser detection
//!
//! Probes run in a fixed order (features, then OS, then browser) because
//! browser classification reads OS flags. Every probe is an idempotent pure
//! function of the injected environment.

pub mod browser;
pub mod detector;
pub mod device;
pub mod features;
pub mod os;

pub use browser::*;
pub use detector::*;
pub use device::*;
pub use features::*;
pub use os::*;
