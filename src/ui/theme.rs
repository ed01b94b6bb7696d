use ratatui::style::Color;

pub const ESPRESSO: Color = Color::Rgb(0x1d, 0x18, 0x16);
pub const CREMA: Color = Color::Rgb(0xd8, 0x9b, 0x5f);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x38, 0x34);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0x94, 0x8f);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x33, 0x2a, 0x26);
