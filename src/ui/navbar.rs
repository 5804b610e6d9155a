// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with responsive menu and scroll-direction hiding.
//!
//! On wide windows the screen links sit inline next to the brand. At or
//! below [`NARROW_BREAKPOINT`] they collapse into a hamburger menu that
//! closes again when a link is chosen or when a click lands outside it.
//! Scrolling down past [`SCROLL_THRESHOLD`] hides the bar; any upward
//! scroll reveals it.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Window width at or below which the menu collapses into a hamburger.
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Downward scroll distance before the bar hides itself.
pub const SCROLL_THRESHOLD: f32 = 100.0;

/// Navbar state owned by the application.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub menu_open: bool,
    pub hidden: bool,
    last_scroll: f32,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub active: Screen,
    pub narrow: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::CloseMenu => {
            state.menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            state.menu_open = false;
            Event::Navigate(screen)
        }
    }
}

impl State {
    /// Feed the current vertical scroll offset into the hide/reveal machine.
    ///
    /// Scrolling down while past the threshold hides the bar (and folds the
    /// menu); scrolling up reveals it again. Offsets never go below zero so
    /// elastic overscroll cannot wedge the bar hidden.
    pub fn handle_scroll(&mut self, offset: f32) {
        let offset = offset.max(0.0);

        if offset > self.last_scroll && offset > SCROLL_THRESHOLD {
            self.hidden = true;
            self.menu_open = false;
        } else if offset < self.last_scroll {
            self.hidden = false;
        }

        self.last_scroll = offset;
    }
}

/// Whether a window width calls for the collapsed menu.
pub fn is_narrow(width: f32) -> bool {
    width <= NARROW_BREAKPOINT
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD);

    let mut top_row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.narrow {
        top_row = top_row.push(
            button(Text::new("\u{2630}"))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::menu_link(false)),
        );
    } else {
        for screen in Screen::ALL {
            top_row = top_row.push(menu_link(&ctx, screen));
        }
    }

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(top_row)
            .width(Length::Fill)
            .style(styles::container::menu_bar),
    );

    if ctx.narrow && ctx.state.menu_open {
        let mut dropdown = Column::new().spacing(spacing::XXS).padding(spacing::XS);
        for screen in Screen::ALL {
            dropdown = dropdown.push(menu_link(&ctx, screen));
        }
        content = content.push(
            Container::new(dropdown)
                .width(Length::Fill)
                .style(styles::container::menu_bar),
        );
    }

    content.into()
}

fn menu_link<'a>(ctx: &ViewContext<'a>, screen: Screen) -> Element<'a, Message> {
    let label = ctx.i18n.tr(screen.label_key());
    button(Text::new(label))
        .on_press(Message::Navigate(screen))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::menu_link(ctx.active == screen))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn toggle_menu_changes_state() {
        let mut state = State::default();
        let event = update(Message::ToggleMenu, &mut state);
        assert!(state.menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut state);
        assert!(!state.menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut state = State::default();
        update(Message::CloseMenu, &mut state);
        assert!(!state.menu_open);
        update(Message::CloseMenu, &mut state);
        assert!(!state.menu_open);
    }

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut state = State {
            menu_open: true,
            ..State::default()
        };
        let event = update(Message::Navigate(Screen::Contact), &mut state);
        assert!(!state.menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Contact)));
    }

    #[test]
    fn scrolling_down_past_threshold_hides_bar() {
        let mut state = State::default();
        state.handle_scroll(50.0);
        assert!(!state.hidden);

        state.handle_scroll(150.0);
        assert!(state.hidden);
    }

    #[test]
    fn scrolling_down_within_threshold_keeps_bar_visible() {
        let mut state = State::default();
        state.handle_scroll(40.0);
        state.handle_scroll(90.0);
        assert!(!state.hidden);
    }

    #[test]
    fn scrolling_up_reveals_bar() {
        let mut state = State::default();
        state.handle_scroll(300.0);
        assert!(state.hidden);

        state.handle_scroll(250.0);
        assert!(!state.hidden);
    }

    #[test]
    fn hiding_the_bar_folds_the_menu() {
        let mut state = State {
            menu_open: true,
            ..State::default()
        };
        state.handle_scroll(200.0);
        assert!(state.hidden);
        assert!(!state.menu_open);
    }

    #[test]
    fn overscroll_clamps_at_zero() {
        let mut state = State::default();
        state.handle_scroll(300.0);
        state.handle_scroll(-20.0);
        assert!(!state.hidden);

        // A later downward scroll measures from zero, not from -20.
        state.handle_scroll(50.0);
        assert!(!state.hidden);
    }

    #[test]
    fn breakpoint_boundary_is_narrow() {
        assert!(is_narrow(NARROW_BREAKPOINT));
        assert!(is_narrow(480.0));
        assert!(!is_narrow(NARROW_BREAKPOINT + 1.0));
    }

    #[test]
    fn menu_links_cover_every_screen() {
        // The navbar reaches Screen through the crate-public export.
        let screens: Vec<crate::app::Screen> = Screen::ALL.to_vec();
        assert_eq!(screens.len(), Screen::ALL.len());
        for screen in screens {
            assert!(!screen.label_key().is_empty());
        }
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            active: Screen::Gallery,
            narrow: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_narrow_with_menu_open() {
        let i18n = I18n::default();
        let state = State {
            menu_open: true,
            ..State::default()
        };
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            active: Screen::Contact,
            narrow: true,
        };
        let _element = view(ctx);
    }
}
