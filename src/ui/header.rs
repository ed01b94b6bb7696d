use crate::ui::theme::{CREMA, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use crate::ui::navigation::Screen;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Logo, current screen and the cart badge.
pub struct Header {
    screen: Screen,
    item_count: u32,
    cart_visible: bool,
}

impl Header {
    pub fn new(screen: Screen, item_count: u32, cart_visible: bool) -> Self {
        Self {
            screen,
            item_count,
            cart_visible,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "SURF COFFEE",
                Style::default().fg(CREMA).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(screen_title(self.screen), text_style),
        ];
        if self.cart_visible {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Cart: {}", self.item_count),
                Style::default().fg(STATUS_OK),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::Categories => "Menu",
        Screen::Product => "Product",
        Screen::Cart => "Cart",
        Screen::Orders => "Orders",
    }
}
