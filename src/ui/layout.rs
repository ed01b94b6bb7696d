use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Band reserved for the host header in full-screen mode (may be empty).
    pub band: Rect,
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, top_inset: u16) -> Regions {
    let band_height = top_inset.min(area.height);
    let rest = area.height - band_height;
    let header_height = rest.min(3);
    let footer_height = 3.min(rest.saturating_sub(header_height));
    let band = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: band_height,
    };
    let header = Rect {
        x: area.x,
        y: area.y + band_height,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: header.y + header_height,
        width: area.width,
        height: rest.saturating_sub(header_height + footer_height),
    };
    Regions {
        band,
        header,
        body,
        footer,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn no_inset_means_empty_band() {
        let regions = layout_regions(area(80, 24), 0);
        assert_eq!(regions.band.height, 0);
        assert_eq!(regions.header.y, 0);
        assert_eq!(regions.body.y, 3);
        assert_eq!(regions.body.height, 18);
        assert_eq!(regions.footer.y, 21);
    }

    #[test]
    fn inset_pushes_header_down() {
        let regions = layout_regions(area(80, 24), 2);
        assert_eq!(regions.band.height, 2);
        assert_eq!(regions.header.y, 2);
        assert_eq!(regions.body.y, 5);
        assert_eq!(regions.body.height, 16);
        assert_eq!(regions.footer.y, 21);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let regions = layout_regions(area(10, 4), 6);
        assert_eq!(regions.band.height, 4);
        assert_eq!(regions.header.height, 0);
        assert_eq!(regions.body.height, 0);
        assert_eq!(regions.footer.height, 0);
    }
}
