//! WebView placement inside its parent window.

use wry::dpi::{PhysicalPosition, PhysicalSize, Position, Size};

/// A rect covering the whole client area of a window of the given
/// physical size.
pub fn fill_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: Position::Physical(PhysicalPosition::new(0, 0)),
        size: Size::Physical(PhysicalSize::new(width, height)),
    }
}
