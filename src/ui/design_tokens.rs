// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen and style helper.
//!
//! One constant per visual decision, grouped by concern. Components
//! never hard-code a color, size or shadow; they pull the token so the
//! whole application shifts together when a value is tuned.
//!
//! ```
//! use home_iq::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! ```

use iced::Color;

/// Base colors. Grayscale steps darken as the number grows; the brand
/// ramp is an indigo ladder with 500 as the reference tone.
pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.11, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.28, 0.28);
    pub const GRAY_500: Color = Color::from_rgb(0.35, 0.35, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.44, 0.44, 0.44);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.88);

    // Brand (indigo)
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.9);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.2, 0.18);
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.68, 0.18);
    pub const SUCCESS_500: Color = Color::from_rgb(0.22, 0.66, 0.36);
    pub const INFO_500: Color = Color::from_rgb(0.36, 0.56, 0.96);

    /// Amber accent reserved for the energy chart bars.
    pub const ENERGY_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
}

/// Alpha steps layered over base colors.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
}

/// Spacing ladder on an 8px grid; SM is the half-step between grid
/// units that card interiors kept wanting.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Fixed component dimensions.
pub mod sizing {
    pub const DEVICE_CARD_WIDTH: f32 = 250.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DROPDOWN_WIDTH: f32 = 300.0;

    // Energy chart
    pub const CHART_HEIGHT: f32 = 160.0;
    pub const CHART_BAR_WIDTH: f32 = 36.0;
}

/// Font sizes. Three title steps for page and card headings, three
/// body steps for content, one caption step for badges and timestamps.
pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

/// Border widths: hairline separators and the heavier accent stroke
/// toasts and selected cards carry.
pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

/// Corner radii. `FULL` collapses to a pill at any widget size.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

/// Drop shadows, all straight down and black; elevation comes from the
/// offset/blur pair alone.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(2.0, 4.0);
    pub const MD: Shadow = drop(4.0, 8.0);
    pub const LG: Shadow = drop(8.0, 16.0);
}

// The scales must stay ordered; a swapped pair is a build error, not a
// subtle layout bug.
const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_HOVER);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::CHART_HEIGHT > sizing::CHART_BAR_WIDTH);
};
