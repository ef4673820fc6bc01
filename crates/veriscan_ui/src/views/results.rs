//! Results dashboard: verdict, detection breakdown, timeline, metadata.

use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, progress_bar, row, scrollable, space::horizontal as horizontal_space,
    text, Row, Space,
};
use iced::{Element, Length};

use veriscan_core::report::{AnalysisReport, DetectionSignal, Severity};

use crate::app::Message;
use crate::theme::{self, colors, font, spacing};

const CHART_HEIGHT: f32 = 96.0;

pub fn view(report: &AnalysisReport) -> Element<'_, Message> {
    let left = column![detection_card(report), timeline_card(report)]
        .spacing(spacing::LG)
        .width(Length::FillPortion(2));

    let right = column![
        verdict_card(report),
        breakdown_card(report),
        metadata_card(report),
    ]
    .spacing(spacing::LG)
    .width(Length::FillPortion(1));

    let body = row![left, right].spacing(spacing::LG);

    let content = column![header(report), body].spacing(spacing::XL);

    scrollable(container(content).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

/// Report title, file identity line, and the action buttons.
fn header(report: &AnalysisReport) -> Element<'_, Message> {
    let meta_line = row![
        text(format!("File: {}", report.file_name))
            .size(font::SMALL)
            .color(colors::TEXT_SECONDARY),
        text(format!("ID: {}", report.report_id))
            .size(font::SMALL)
            .color(colors::TEXT_SECONDARY),
        text(report.scanned_on.clone())
            .size(font::SMALL)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::MD);

    let title = column![
        text("Forensic Analysis Report")
            .size(font::XL)
            .color(colors::TEXT_PRIMARY),
        meta_line,
    ]
    .spacing(spacing::XS);

    let actions = row![
        button(text("Upload New File").size(font::NORMAL))
            .on_press(Message::Reset)
            .padding([spacing::SM, spacing::LG])
            .style(theme::ghost_button),
        button(text("Download PDF Report").size(font::NORMAL))
            .on_press(Message::DownloadReport)
            .padding([spacing::SM, spacing::LG])
            .style(theme::primary_button),
    ]
    .spacing(spacing::SM);

    row![title, horizontal_space(), actions]
        .align_y(Vertical::Center)
        .into()
}

/// Stand-in for the frame viewer: the flagged frame and face-box readout.
fn detection_card(report: &AnalysisReport) -> Element<'_, Message> {
    let flags = row![
        text("DETECTED").size(font::SMALL).color(colors::DANGER),
        text(format!("FRAME: {}", report.flagged_frame))
            .size(font::SMALL)
            .color(colors::TEXT_SECONDARY),
        text(format!("CONFIDENCE: {}%", report.face_confidence))
            .size(font::SMALL)
            .color(colors::DANGER),
    ]
    .spacing(spacing::MD);

    let body = column![
        flags,
        text("Face region flagged for synthetic generation artifacts.")
            .size(font::NORMAL)
            .color(colors::TEXT_SECONDARY),
        text(format!("00:14 / {}", report.metadata.duration))
            .size(font::SMALL)
            .color(colors::TEXT_MUTED),
    ]
    .spacing(spacing::SM);

    card("Detection Overlay", body.into())
}

/// Manipulation-probability bar chart with its legend.
fn timeline_card(report: &AnalysisReport) -> Element<'_, Message> {
    let legend = row![
        text("High").size(font::SMALL).color(colors::DANGER),
        text("Med").size(font::SMALL).color(colors::WARNING),
        text("Safe").size(font::SMALL).color(colors::TEXT_MUTED),
    ]
    .spacing(spacing::SM);

    let bars = Row::with_children(report.timeline.iter().map(|&score| chart_bar(score)))
        .spacing(2)
        .align_y(Vertical::Bottom)
        .width(Length::Fill)
        .height(Length::Fixed(CHART_HEIGHT));

    let body = column![
        row![
            text("Manipulation Probability Timeline")
                .size(font::NORMAL)
                .color(colors::TEXT_PRIMARY),
            horizontal_space(),
            legend,
        ],
        bars,
    ]
    .spacing(spacing::MD);

    container(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

fn chart_bar(score: u8) -> Element<'static, Message> {
    let height = (CHART_HEIGHT * f32::from(score) / 100.0).max(2.0);
    container(Space::new().width(Length::Fill).height(Length::Fixed(height)))
        .width(Length::Fill)
        .style(theme::timeline_bar(Severity::from_score(score)))
        .into()
}

/// Overall verdict with the headline probability.
fn verdict_card(report: &AnalysisReport) -> Element<'_, Message> {
    let verdict_color = if report.is_fake() {
        colors::DANGER
    } else {
        colors::SUCCESS
    };

    let caption = if report.is_fake() {
        "High probability of synthetic media generation detected. Do not trust this file."
    } else {
        "No significant manipulation indicators were found in this file."
    };

    let body = row![
        text(format!("{}%", report.fake_probability))
            .size(font::TITLE)
            .color(verdict_color),
        column![
            text(report.verdict()).size(font::XL).color(verdict_color),
            text(caption).size(font::SMALL).color(colors::TEXT_SECONDARY),
        ]
        .spacing(spacing::XS),
    ]
    .spacing(spacing::LG)
    .align_y(Vertical::Center);

    card("Overall Verdict", body.into())
}

/// Per-signal score rows.
fn breakdown_card(report: &AnalysisReport) -> Element<'_, Message> {
    let rows = column(report.breakdown.iter().map(breakdown_row)).spacing(spacing::MD);
    card("Detection Breakdown", rows.into())
}

fn breakdown_row(signal: &DetectionSignal) -> Element<'static, Message> {
    let severity = signal.severity();

    column![
        row![
            text(signal.label).size(font::NORMAL).color(colors::TEXT_PRIMARY),
            horizontal_space(),
            text(format!("{}%", signal.score))
                .size(font::NORMAL)
                .color(theme::severity_color(severity)),
        ],
        progress_bar(0.0..=100.0, f32::from(signal.score))
            .girth(Length::Fixed(6.0))
            .style(theme::score_bar(severity)),
        text(signal.description)
            .size(font::SMALL)
            .color(colors::TEXT_MUTED),
    ]
    .spacing(spacing::XS)
    .into()
}

/// Container metadata readout.
fn metadata_card(report: &AnalysisReport) -> Element<'_, Message> {
    let body = column![
        metadata_row("Resolution:", report.metadata.resolution),
        metadata_row("Frame Rate:", report.metadata.frame_rate),
        metadata_row("Audio Codec:", report.metadata.audio_codec),
        metadata_row("Duration:", report.metadata.duration),
    ]
    .spacing(spacing::SM);

    card("File Metadata", body.into())
}

fn metadata_row(label: &'static str, value: &'static str) -> Element<'static, Message> {
    row![
        text(label).size(font::SMALL).color(colors::TEXT_SECONDARY),
        horizontal_space(),
        text(value).size(font::SMALL).color(colors::TEXT_PRIMARY),
    ]
    .into()
}

/// Titled card panel.
fn card<'a>(title: &'static str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            text(title).size(font::NORMAL).color(colors::TEXT_SECONDARY),
            body,
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}
