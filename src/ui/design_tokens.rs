// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens used by the toast widgets.

## Organization

- **Palette**: Base colors, including the 500/400 shades of each severity
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toasts::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let faded_accent = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::GREEN_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Success (green scale)
    pub const GREEN_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
    pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369);

    // Error (red scale)
    pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);

    // Warning (yellow scale)
    pub const YELLOW_400: Color = Color::from_rgb(0.980, 0.800, 0.082);
    pub const YELLOW_500: Color = Color::from_rgb(0.918, 0.702, 0.031);

    // Info (blue scale)
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Toasts entering or leaving the screen.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PROGRESS_HEIGHT: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Severity accent border of a toast.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_WIDTH > sizing::ICON_MD);

    // Border validation
    assert!(border::WIDTH_MD > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_shades_are_lighter_at_400() {
        let brightness = |c: Color| c.r + c.g + c.b;
        assert!(brightness(palette::GREEN_400) > brightness(palette::GREEN_500));
        assert!(brightness(palette::RED_400) > brightness(palette::RED_500));
        assert!(brightness(palette::YELLOW_400) > brightness(palette::YELLOW_500));
        assert!(brightness(palette::BLUE_400) > brightness(palette::BLUE_500));
    }
}
