//! Upload screen: headline, drop zone, and feature cards.

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::app::{App, Message};
use crate::theme::{self, colors, font, spacing};

pub fn view(app: &App) -> Element<'_, Message> {
    let headline = column![
        text("Is it Real or Deepfake?")
            .size(font::TITLE)
            .color(colors::TEXT_PRIMARY),
        text(
            "Deploy state-of-the-art forensic AI to analyze video, audio, and imagery \
             for manipulation anomalies, GAN fingerprints, and biological signals."
        )
        .size(font::NORMAL)
        .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM)
    .align_x(Horizontal::Center);

    // Clicking the zone analyzes the demo clip; dropping a file anywhere on
    // the window routes through the same message with the dropped name.
    let drop_zone = button(
        column![
            text("Drop your file here to analyze")
                .size(font::XL)
                .color(colors::TEXT_PRIMARY),
            text("Supports MP4, MOV, WAV, JPG, PNG (Max 500MB)")
                .size(font::SMALL)
                .color(colors::TEXT_MUTED),
        ]
        .spacing(spacing::SM)
        .align_x(Horizontal::Center),
    )
    .on_press(Message::FileSelected(app.demo_file_name.clone()))
    .padding(spacing::XXL)
    .width(Length::Fixed(640.0))
    .style(theme::drop_zone);

    let browse = button(text("Browse Files...").size(font::NORMAL))
        .on_press(Message::BrowseFile)
        .padding([spacing::SM, spacing::XL])
        .style(theme::primary_button);

    let features = row![
        feature_card("Visual Artifacts", "Detects warping & blurring."),
        feature_card("Biological Signals", "Analyzes pulse & blinking."),
        feature_card("Audio Sync", "Checks lip movement mismatch."),
    ]
    .spacing(spacing::MD);

    let content = column![headline, drop_zone, browse, features]
        .spacing(spacing::XL)
        .align_x(Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn feature_card(title: &'static str, description: &'static str) -> Element<'static, Message> {
    container(
        column![
            text(title).size(font::NORMAL).color(colors::TEXT_PRIMARY),
            text(description).size(font::SMALL).color(colors::TEXT_MUTED),
        ]
        .spacing(spacing::XS),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(200.0))
    .style(theme::card)
    .into()
}
