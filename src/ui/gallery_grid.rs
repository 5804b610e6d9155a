// SPDX-License-Identifier: MPL-2.0
//! Scrollable gallery screen: thumbnail grid plus the room-tour launcher.
//!
//! Clicking a thumbnail asks the application to open that image in the
//! lightbox. Once the visitor has scrolled past [`SCROLL_TOP_VISIBLE_AT`]
//! a floating back-to-top button appears over the grid.

use crate::config::TourEntry;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Scrollbar, Viewport};
use iced::widget::{button, mouse_area, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{alignment, Element, Length};

/// Widget id of the gallery scrollable, used for programmatic scrolling.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

/// Scroll offset past which the back-to-top button shows.
pub const SCROLL_TOP_VISIBLE_AT: f32 = 300.0;

/// Thumbnails per grid row.
const COLUMNS: usize = 3;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [String],
    pub tours: &'a [TourEntry],
    pub scroll_offset: f32,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    OpenImage(usize),
    LaunchTour(usize),
    ScrollToTop,
    Scrolled(Viewport),
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG));

    if ctx.images.is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY));
    } else {
        content = content.push(thumbnail_grid(ctx.images));
    }

    if !ctx.tours.is_empty() {
        content = content
            .push(Text::new(ctx.i18n.tr("gallery-tours-title")).size(typography::TITLE_MD))
            .push(tour_buttons(ctx.tours));
    }

    let scrollable = Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .id(Id::new(SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .direction(iced::widget::scrollable::Direction::Vertical(
        Scrollbar::default(),
    ))
    .on_scroll(Message::Scrolled);

    let mut layers = Stack::new().push(scrollable);

    if ctx.scroll_offset > SCROLL_TOP_VISIBLE_AT {
        let scroll_top = Container::new(
            mouse_area(
                Container::new(
                    Text::new(ctx.i18n.tr("gallery-scroll-top")).size(typography::CAPTION),
                )
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::counter),
            )
            .on_press(Message::ScrollToTop),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG);

        layers = layers.push(scroll_top);
    }

    layers.into()
}

fn thumbnail_grid(images: &[String]) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::MD);

    for (row_index, chunk) in images.chunks(COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (col_index, locator) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;
            let thumbnail = Image::new(Handle::from_path(locator))
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL));

            row = row.push(
                button(thumbnail)
                    .on_press(Message::OpenImage(index))
                    .padding(0)
                    .style(styles::button::thumbnail),
            );
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn tour_buttons(tours: &[TourEntry]) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::MD);

    for (index, tour) in tours.iter().enumerate() {
        row = row.push(
            button(Text::new(tour.label.clone()).size(typography::BODY))
                .on_press(Message::LaunchTour(index))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn tours() -> Vec<TourEntry> {
        vec![TourEntry {
            label: "Suite Panorama".to_string(),
            url: "https://example.com/TOUR_URL".to_string(),
        }]
    }

    #[test]
    fn gallery_view_renders_empty() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            images: &[],
            tours: &[],
            scroll_offset: 0.0,
        };
        let _element = view(ctx);
    }

    #[test]
    fn gallery_view_renders_with_images_and_tours() {
        let i18n = I18n::default();
        let images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let tours = tours();
        let ctx = ViewContext {
            i18n: &i18n,
            images: &images,
            tours: &tours,
            scroll_offset: SCROLL_TOP_VISIBLE_AT + 50.0,
        };
        let _element = view(ctx);
    }
}
