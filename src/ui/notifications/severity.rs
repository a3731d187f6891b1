// SPDX-License-Identifier: MPL-2.0
//! Severity levels and their static visual configuration.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Classification of a toast, controlling its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    /// Also the fallback for unrecognized tags.
    #[default]
    Info,
}

/// Visual configuration of a severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub border_color: Color,
    pub icon_color: Color,
    pub progress_color: Color,
    /// SVG path data for the 20x20 icon, drawn with even-odd fill and clip rules.
    pub icon_path: &'static str,
}

const SUCCESS_ICON: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";
const ERROR_ICON: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z";
const WARNING_ICON: &str = "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z";
const INFO_ICON: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z";

/// Path data of the close control's cross.
pub const CLOSE_ICON_PATH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

/// Style table indexed in `Severity::ALL` order.
static STYLES: [ToastStyle; 4] = [
    ToastStyle {
        border_color: palette::GREEN_500,
        icon_color: palette::GREEN_400,
        progress_color: palette::GREEN_500,
        icon_path: SUCCESS_ICON,
    },
    ToastStyle {
        border_color: palette::RED_500,
        icon_color: palette::RED_400,
        progress_color: palette::RED_500,
        icon_path: ERROR_ICON,
    },
    ToastStyle {
        border_color: palette::YELLOW_500,
        icon_color: palette::YELLOW_400,
        progress_color: palette::YELLOW_500,
        icon_path: WARNING_ICON,
    },
    ToastStyle {
        border_color: palette::BLUE_500,
        icon_color: palette::BLUE_400,
        progress_color: palette::BLUE_500,
        icon_path: INFO_ICON,
    },
];

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name. Anything unrecognized resolves to `Info`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Translates a server message level into a severity.
    ///
    /// Levels are `success`, `error`, `warning`, `info` and `debug`; the
    /// last two, like any unknown level, become `Info`.
    #[must_use]
    pub fn from_level(level: &str) -> Self {
        Self::from_tag(level.trim())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the visual configuration for this severity.
    #[must_use]
    pub fn style(self) -> &'static ToastStyle {
        let index = match self {
            Severity::Success => 0,
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
        };
        &STYLES[index]
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        Severity::from_tag(tag)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps icon path data in a standalone 20x20 SVG document.
#[must_use]
pub fn icon_svg(path: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" clip-rule="evenodd" d="{path}"/></svg>"#
    )
}
