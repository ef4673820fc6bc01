//! Dark palette and widget styles for the VeriScan UI.

use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Theme};

use veriscan_core::report::Severity;

/// Application colors (dark slate theme matching the product mock).
pub mod colors {
    use super::Color;

    /// Window background
    pub const BACKGROUND: Color = Color::from_rgb(0.01, 0.03, 0.09);

    /// Panel/nav background
    pub const SURFACE: Color = Color::from_rgb(0.06, 0.09, 0.16);

    /// Card background
    pub const CARD: Color = Color::from_rgb(0.04, 0.06, 0.12);

    /// Primary accent (blue)
    pub const ACCENT: Color = Color::from_rgb(0.23, 0.51, 0.96);

    /// Primary accent hover
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.15, 0.39, 0.92);

    /// High-severity score color (red)
    pub const DANGER: Color = Color::from_rgb(0.94, 0.27, 0.27);

    /// Medium-severity score color (orange)
    pub const WARNING: Color = Color::from_rgb(0.98, 0.45, 0.09);

    /// Low-severity score color (green)
    pub const SUCCESS: Color = Color::from_rgb(0.13, 0.77, 0.37);

    /// Text primary
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.89, 0.91, 0.94);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.58, 0.64, 0.72);

    /// Text muted
    pub const TEXT_MUTED: Color = Color::from_rgb(0.39, 0.45, 0.55);

    /// Card border
    pub const BORDER: Color = Color::from_rgb(0.12, 0.16, 0.23);

    /// Empty track behind progress and score bars
    pub const TRACK: Color = Color::from_rgb(0.12, 0.16, 0.23);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
    /// Drop-zone padding (48px)
    pub const XXL: f32 = 48.0;
}

/// Font size constants.
pub mod font {
    /// Fine print (12px)
    pub const SMALL: f32 = 12.0;
    /// Body text (14px)
    pub const NORMAL: f32 = 14.0;
    /// Section headers (18px)
    pub const LG: f32 = 18.0;
    /// Card headlines (24px)
    pub const XL: f32 = 24.0;
    /// Upload headline (40px)
    pub const TITLE: f32 = 40.0;
}

/// Color for a severity band.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => colors::DANGER,
        Severity::Medium => colors::WARNING,
        Severity::Low => colors::SUCCESS,
    }
}

/// Root container filling the window.
pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BACKGROUND)),
        text_color: Some(colors::TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Top navigation bar.
pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Bordered card panel.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::CARD)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Rounded status pill shown under the scan progress bar.
pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 24.0.into(),
        },
        ..container::Style::default()
    }
}

/// Filled accent button.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors::ACCENT_HOVER,
        _ => colors::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Bordered neutral button.
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors::SURFACE,
        _ => colors::CARD,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

/// Large clickable drop zone on the upload screen.
pub fn drop_zone(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors::ACCENT,
        _ => colors::BORDER,
    };
    button::Style {
        background: Some(Background::Color(colors::CARD)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 16.0.into(),
        },
        ..button::Style::default()
    }
}

/// Accent-colored scan progress bar.
pub fn scan_progress(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(colors::TRACK),
        bar: Background::Color(colors::ACCENT),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
    }
}

/// Severity-colored score bar for the detection breakdown.
pub fn score_bar(severity: Severity) -> impl Fn(&Theme) -> progress_bar::Style {
    move |_theme| progress_bar::Style {
        background: Background::Color(colors::TRACK),
        bar: Background::Color(severity_color(severity)),
        border: Border {
            radius: 3.0.into(),
            ..Border::default()
        },
    }
}

/// One bar of the manipulation timeline chart.
///
/// Low-probability bars use the neutral track color rather than green,
/// matching the recorded chart styling.
pub fn timeline_bar(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    let color = match severity {
        Severity::Low => colors::TRACK,
        other => severity_color(other),
    };
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 2.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(severity_color(Severity::High), severity_color(Severity::Low));
        assert_ne!(
            severity_color(Severity::High),
            severity_color(Severity::Medium)
        );
    }
}
