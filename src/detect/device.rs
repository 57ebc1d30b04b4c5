// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device classification derived from the flat OS flags

use serde::{Deserialize, Serialize};

use super::os::PlatformInfo;

/// Coarse device class a client falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Desktop or laptop
    Desktop,
    /// Mobile phone
    Phone,
    /// Mobile tablet
    Tablet,
}

impl DeviceClass {
    /// Derive the class from already computed OS flags.
    pub fn from_platform(os: &PlatformInfo) -> Self {
        if os.phone {
            DeviceClass::Phone
        } else if os.tablet {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Whether this class is a mobile device
    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Phone | DeviceClass::Tablet)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Phone => "phone",
            DeviceClass::Tablet => "tablet",
        }
    }
}
