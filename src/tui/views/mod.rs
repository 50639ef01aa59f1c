pub mod confirm;
pub mod details;
pub mod form;
pub mod help;
pub mod list;
pub mod prompt;

use ratatui::layout::Rect;

/// A `height`-row box spanning `percent_x` of `area`, centered in it.
pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
