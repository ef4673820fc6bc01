//! Screen views.
//!
//! Each screen is a pure function of app state. No view owns state; all
//! interaction flows back through [`Message`](crate::app::Message).

pub mod results;
pub mod scanning;
pub mod upload;

use iced::alignment::Vertical;
use iced::widget::{column, container, row, space::horizontal as horizontal_space, text};
use iced::{Element, Length};

use crate::app::Message;
use crate::theme::{self, colors, font, spacing};

/// Wrap a screen in the window chrome: nav bar on top, dark background.
pub fn shell(screen: Element<'_, Message>) -> Element<'_, Message> {
    let content = column![
        nav_bar(),
        container(screen)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL),
    ];

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::app_background)
        .into()
}

/// Top navigation bar with branding and the status indicator.
fn nav_bar() -> Element<'static, Message> {
    let brand = row![
        text("VeriScan").size(font::LG).color(colors::TEXT_PRIMARY),
        text("AI").size(font::LG).color(colors::ACCENT),
    ]
    .spacing(spacing::XS);

    let bar = row![
        brand,
        horizontal_space(),
        text("SYSTEM ONLINE").size(font::SMALL).color(colors::SUCCESS),
    ]
    .align_y(Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::XL])
        .style(theme::nav_bar)
        .into()
}
