// SPDX-License-Identifier: MPL-2.0
//! Rasterizes the bundled SVG logo into the window icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Pixel edge of the generated icon.
const ICON_SIZE: u32 = 128;

/// The branding SVG, compiled into the binary so the installed
/// application never looks for asset files on disk.
const LOGO_SVG: &[u8] = include_bytes!("../assets/branding/home_iq.svg");

/// Renders the logo into an RGBA window icon.
///
/// Returns `None` when parsing or rendering fails; the window then
/// keeps the platform default icon.
pub fn window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(LOGO_SVG, &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.take(), ICON_SIZE, ICON_SIZE).ok()
}
