//! Scanning screen: progress bar and current checkpoint message.

use iced::alignment::Horizontal;
use iced::widget::{column, container, progress_bar, row, space::horizontal as horizontal_space, text};
use iced::{Element, Length};

use veriscan_core::workflow::ScanSession;

use crate::app::Message;
use crate::theme::{self, colors, font, spacing};

pub fn view(session: &ScanSession) -> Element<'_, Message> {
    let header = row![
        row![
            text("Analyzing ").size(font::LG).color(colors::TEXT_PRIMARY),
            text(session.file_name()).size(font::LG).color(colors::ACCENT),
        ],
        horizontal_space(),
        text(format!("{}%", session.progress_percent()))
            .size(font::LG)
            .color(colors::ACCENT),
    ];

    let bar = progress_bar(0.0..=100.0, f32::from(session.progress_percent()))
        .girth(Length::Fixed(8.0))
        .style(theme::scan_progress);

    let status = container(
        text(session.status_message())
            .size(font::NORMAL)
            .color(colors::TEXT_SECONDARY),
    )
    .padding([spacing::SM, spacing::XL])
    .style(theme::pill);

    let content = column![
        header,
        bar,
        container(status).width(Length::Fill).center_x(Length::Fill),
    ]
    .spacing(spacing::LG)
    .width(Length::Fixed(480.0))
    .align_x(Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
