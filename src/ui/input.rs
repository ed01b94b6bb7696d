use crate::ui::app::App;
use crate::ui::navigation::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Shopper command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleProfile,
    Home,
    /// Full menu, no category selected.
    Menu,
    Cart,
    Orders,
    Back,
    Up,
    Down,
    Activate,
    More,
    Less,
    AddToCart,
}

pub fn classify_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return Some(Command::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('p') => Command::ToggleProfile,
        KeyCode::Char('h') => Command::Home,
        KeyCode::Char('m') => Command::Menu,
        KeyCode::Char('c') => Command::Cart,
        KeyCode::Char('o') => Command::Orders,
        KeyCode::Char('a') => Command::AddToCart,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Command::More,
        KeyCode::Char('-') | KeyCode::Left => Command::Less,
        KeyCode::Char('k') | KeyCode::Up => Command::Up,
        KeyCode::Char('j') | KeyCode::Down => Command::Down,
        KeyCode::Enter => Command::Activate,
        KeyCode::Esc | KeyCode::Backspace => Command::Back,
        _ => return None,
    };
    Some(command)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if let Some(command) = classify_key(key) {
        apply_command(app, command);
    }
}

pub fn apply_command(app: &mut App, command: Command) {
    if command == Command::Quit {
        app.request_quit();
        return;
    }

    if app.show_profile() {
        match command {
            Command::Back | Command::ToggleProfile => app.close_profile(),
            Command::Home => {
                app.close_profile();
                app.go_home();
            }
            Command::Cart => {
                app.close_profile();
                app.go_to_cart();
            }
            Command::Orders => {
                app.close_profile();
                app.go_to_orders();
            }
            _ => {}
        }
        return;
    }

    match command {
        Command::ToggleProfile => app.toggle_profile(),
        Command::Home => app.go_home(),
        Command::Menu => app.go_to_categories(None),
        Command::Cart => app.go_to_cart(),
        Command::Orders => app.go_to_orders(),
        Command::Up => app.move_cursor(-1),
        Command::Down => app.move_cursor(1),
        Command::Activate => app.activate(),
        Command::Back => back(app),
        Command::More if app.current_screen() == Screen::Product => app.increment_quantity(),
        Command::Less if app.current_screen() == Screen::Product => app.decrement_quantity(),
        Command::AddToCart if app.current_screen() == Screen::Product => {
            app.add_selected_to_cart()
        }
        _ => {}
    }
}

fn back(app: &mut App) {
    match app.current_screen() {
        Screen::Home => {}
        Screen::Categories => app.go_home(),
        Screen::Product => {
            let category = app.navigation().selected_category().to_string();
            app.go_to_categories(Some(&category));
        }
        Screen::Cart | Screen::Orders => app.go_back(),
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navigation::ReturnScreen;
    use crate::ui::test_support::{app, settle};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(classify_key(key), Some(Command::Quit));
    }

    #[test]
    fn plain_c_opens_cart() {
        assert_eq!(classify_key(press(KeyCode::Char('c'))), Some(Command::Cart));
    }

    #[test]
    fn release_events_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(classify_key(key), None);
    }

    #[test]
    fn other_ctrl_chords_are_ignored() {
        let key = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(classify_key(key), None);
    }

    #[test]
    fn escape_and_backspace_go_back() {
        assert_eq!(classify_key(press(KeyCode::Esc)), Some(Command::Back));
        assert_eq!(classify_key(press(KeyCode::Backspace)), Some(Command::Back));
    }

    fn run(app: &mut App, commands: &[Command]) {
        for &command in commands {
            apply_command(app, command);
        }
    }

    /// Home → coffee → americano.
    fn on_americano(app: &mut App) {
        run(app, &[Command::Activate]);
        settle(app);
        run(app, &[Command::Down, Command::Activate]);
        settle(app);
        assert_eq!(app.current_screen(), Screen::Product);
        assert_eq!(app.navigation().selected_product(), "americano");
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        apply_command(&mut app, Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn overlay_home_closes_then_navigates() {
        let mut app = app();
        run(&mut app, &[Command::Cart]);
        settle(&mut app);

        run(&mut app, &[Command::ToggleProfile, Command::Home]);
        assert!(!app.show_profile());
        assert!(app.is_transitioning());
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn overlay_cart_and_orders_close_then_navigate() {
        let mut app = app();
        run(&mut app, &[Command::ToggleProfile, Command::Cart]);
        assert!(!app.show_profile());
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Cart);

        run(&mut app, &[Command::ToggleProfile, Command::Orders]);
        assert!(!app.show_profile());
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Orders);
        assert_eq!(app.navigation().previous(), ReturnScreen::Home);
    }

    #[test]
    fn overlay_swallows_list_commands() {
        let mut app = app();
        run(
            &mut app,
            &[
                Command::ToggleProfile,
                Command::Menu,
                Command::Down,
                Command::Activate,
            ],
        );
        assert!(app.show_profile());
        assert!(!app.is_transitioning());
        assert_eq!(app.cursor(), 0);

        apply_command(&mut app, Command::Back);
        assert!(!app.show_profile());
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn back_from_product_returns_to_sticky_category() {
        let mut app = app();
        on_americano(&mut app);

        apply_command(&mut app, Command::Back);
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Categories);
        assert_eq!(app.navigation().selected_category(), "coffee");
    }

    #[test]
    fn back_from_categories_goes_home_and_is_noop_on_home() {
        let mut app = app();
        apply_command(&mut app, Command::Menu);
        settle(&mut app);
        apply_command(&mut app, Command::Back);
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Home);

        apply_command(&mut app, Command::Back);
        assert!(!app.is_transitioning());
    }

    #[test]
    fn quantity_picker_never_drops_below_one() {
        let mut app = app();
        on_americano(&mut app);
        assert_eq!(app.quantity(), 1);

        run(&mut app, &[Command::Less, Command::Less]);
        assert_eq!(app.quantity(), 1);
        run(&mut app, &[Command::More, Command::More, Command::Less]);
        assert_eq!(app.quantity(), 2);
    }

    #[test]
    fn quantity_keys_ignored_off_product_screen() {
        let mut app = app();
        run(&mut app, &[Command::More, Command::More, Command::AddToCart]);
        assert_eq!(app.quantity(), 1);
        assert!(app.cart().is_empty());
    }

    #[test]
    fn add_to_cart_uses_picked_quantity() {
        let mut app = app();
        on_americano(&mut app);
        run(&mut app, &[Command::More, Command::More, Command::AddToCart]);
        assert_eq!(app.cart().quantity_of("americano"), Some(3));
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Cart);
    }

    #[test]
    fn cursor_clamps_to_list() {
        let mut app = app();
        let categories = app.catalog().categories().len();
        run(&mut app, &[Command::Down; 10]);
        assert_eq!(app.cursor(), categories - 1);
        run(&mut app, &[Command::Up; 10]);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn activate_opens_highlighted_category() {
        let mut app = app();
        run(&mut app, &[Command::Down, Command::Activate]);
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Categories);
        assert_eq!(app.navigation().selected_category(), "drinks");
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn activate_on_cart_places_order() {
        let mut app = app();
        on_americano(&mut app);
        apply_command(&mut app, Command::AddToCart);
        settle(&mut app);

        apply_command(&mut app, Command::Activate);
        assert!(app.cart().is_empty());
        assert_eq!(app.orders().history().len(), 1);
        settle(&mut app);
        assert_eq!(app.current_screen(), Screen::Home);
    }
}
