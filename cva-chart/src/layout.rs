//! Device profiles and their layout parameters.
//!
//! Each profile maps to one `Layout` record; nothing else in the crate
//! branches on the profile itself.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sizes and switches for one device profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of the whole-territory and single-province charts
    pub chart_width: u32,
    pub chart_height: u32,
    /// Width of each small chart in the province grid
    pub facet_width: u32,
    pub facet_height: u32,
    pub facet_columns: u32,
    pub facet_label_font_size: u32,
    /// Title size of the single-province chart
    pub title_font_size: u32,
    pub show_single_province: bool,
}

pub const DESKTOP_LAYOUT: Layout = Layout {
    chart_width: 680,
    chart_height: 400,
    facet_width: 300,
    facet_height: 200,
    facet_columns: 2,
    facet_label_font_size: 20,
    title_font_size: 24,
    show_single_province: true,
};

pub const MOBILE_LAYOUT: Layout = Layout {
    chart_width: 320,
    chart_height: 420,
    facet_width: 300,
    facet_height: 240,
    facet_columns: 1,
    facet_label_font_size: 16,
    title_font_size: 20,
    show_single_province: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceProfile {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceProfile {
    pub const ALL: [DeviceProfile; 2] = [DeviceProfile::Mobile, DeviceProfile::Desktop];

    pub fn layout(self) -> &'static Layout {
        match self {
            DeviceProfile::Mobile => &MOBILE_LAYOUT,
            DeviceProfile::Desktop => &DESKTOP_LAYOUT,
        }
    }

    /// Identifier used in flags and form values.
    pub fn key(self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::Desktop => "desktop",
        }
    }

    /// Label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "Móvil",
            DeviceProfile::Desktop => "Escritorio",
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown device profile {0:?} (expected \"mobile\" or \"desktop\")")]
pub struct ProfileParseError(pub String);

impl FromStr for DeviceProfile {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" | "móvil" | "movil" => Ok(DeviceProfile::Mobile),
            "desktop" | "escritorio" => Ok(DeviceProfile::Desktop),
            _ => Err(ProfileParseError(s.to_string())),
        }
    }
}
