use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::navigation::Screen;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CREMA, ESPRESSO, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area, app.header_inset());
    let screen = app.current_screen();

    if regions.band.height > 0 {
        frame.render_widget(
            Block::default().style(Style::default().bg(ESPRESSO)),
            regions.band,
        );
    }

    let header = Header::new(screen, app.item_count(), app.cart_visible());
    frame.render_widget(header.widget(), regions.header);

    frame.render_widget(Clear, regions.body);
    // Outgoing and incoming content stay invisible for the whole transition.
    if !app.is_transitioning() {
        let lines = match screen {
            Screen::Home => home_lines(app),
            Screen::Categories => category_lines(app),
            Screen::Product => product_lines(app),
            Screen::Cart => cart_lines(app),
            Screen::Orders => order_lines(app),
        };
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::RIGHT)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                ),
            regions.body,
        );
    }

    let footer = Footer::new(screen);
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    if app.show_profile() {
        draw_profile(frame, app, centered_rect(50, 50, area));
    }
}

fn title(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(CREMA).add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(MUTED_TEXT)))
}

fn list_row(text: String, highlighted: bool) -> Line<'static> {
    let marker = if highlighted { "▸ " } else { "  " };
    let line = Line::from(Span::styled(
        format!("{marker}{text}"),
        Style::default().fg(HEADER_TEXT),
    ));
    if highlighted {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

fn home_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        title(" Welcome to Surf Coffee"),
        muted(" Pick a category, or press m for the whole menu."),
        Line::from(""),
    ];
    for (idx, category) in app.catalog().categories().iter().enumerate() {
        lines.push(list_row(
            format!("{} ({})", category.name, category.products.len()),
            idx == app.cursor(),
        ));
    }
    lines
}

fn category_lines(app: &App) -> Vec<Line<'static>> {
    let selected = app.navigation().selected_category();
    let heading = app
        .catalog()
        .category(selected)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Menu".to_string());
    let mut lines = vec![title(format!(" {heading}")), Line::from("")];
    for (idx, product) in app.listed_products().iter().enumerate() {
        lines.push(list_row(
            format!("{:<20} {:>5} ₽", product.name, product.price),
            idx == app.cursor(),
        ));
    }
    lines
}

fn product_lines(app: &App) -> Vec<Line<'static>> {
    let Some(product) = app.selected_product() else {
        let id = app.navigation().selected_product();
        return vec![title(format!(" {id}")), muted(" Not on the menu today.")];
    };
    let quantity = app.quantity();
    vec![
        title(format!(" {}", product.name)),
        muted(format!(" {}", product.description)),
        Line::from(""),
        Line::from(format!(" Price:     {} ₽", product.price)),
        Line::from(vec![
            Span::raw(" Quantity:  "),
            Span::styled(
                format!("‹ {quantity} ›"),
                Style::default().fg(CREMA).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            " Subtotal:  {} ₽",
            product.price.saturating_mul(quantity)
        )),
        Line::from(""),
        match app.cart().quantity_of(&product.id) {
            Some(in_cart) => muted(format!(" Enter adds to cart ({in_cart} already in cart)")),
            None => muted(" Enter adds to cart"),
        },
    ]
}

fn cart_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![title(" Your cart"), Line::from("")];
    if app.cart().is_empty() {
        lines.push(muted(" Your cart is empty."));
        return lines;
    }
    let catalog = app.catalog();
    for (idx, entry) in app.cart().items().iter().enumerate() {
        let price = catalog
            .product(&entry.product_id)
            .map(|p| p.price)
            .unwrap_or(0);
        lines.push(list_row(
            format!(
                "{:>3} × {:<20} {:>6} ₽",
                entry.quantity,
                catalog.product_name(&entry.product_id),
                price.saturating_mul(entry.quantity)
            ),
            idx == app.cursor(),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Total: {} items, {} ₽", app.item_count(), app.cart_total()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(muted(" Enter places the order"));
    lines
}

fn order_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![title(" Your orders"), Line::from("")];
    if let Some(number) = app.new_order_number() {
        lines.push(Line::from(Span::styled(
            format!(" Order {number} placed. Thank you!"),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    let orders = app.orders();
    if orders.history().is_empty() {
        lines.push(muted(" No orders yet."));
        return lines;
    }
    for (idx, order) in orders.history().iter().enumerate() {
        let mut row = list_row(
            format!(
                "{}  {:>3} items  {:>6} ₽",
                order.number,
                order.item_count(),
                order.total
            ),
            idx == app.cursor(),
        );
        if orders.is_new(&order.number) {
            row = row.style(Style::default().fg(STATUS_OK));
        }
        lines.push(row);
    }
    lines
}

fn draw_profile(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        title(" Profile"),
        Line::from(""),
        Line::from(format!(" Orders this visit: {}", app.orders().history().len())),
        Line::from(format!(" Items in cart:     {}", app.item_count())),
        Line::from(""),
        muted(" h: Home │ c: Cart │ o: Orders │ Esc: Close"),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Profile ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
