use crate::ui::navigation::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    screen: Screen,
}

impl Footer {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(self.screen);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => " ↑↓: Choose │ Enter: Open │ m: Menu │ c: Cart │ o: Orders │ p: Profile │ q: Quit",
        Screen::Categories => " ↑↓: Choose │ Enter: Open │ Esc: Home │ c: Cart │ p: Profile │ q: Quit",
        Screen::Product => " +/-: Quantity │ Enter: Add to cart │ Esc: Back │ c: Cart │ q: Quit",
        Screen::Cart => " Enter: Place order │ Esc: Back │ o: Orders │ q: Quit",
        Screen::Orders => " ↑↓: Scroll │ Esc: Back │ c: Cart │ q: Quit",
    }
}
