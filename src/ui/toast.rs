// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the currently shown alert.
//!
//! The toast is a small card with a severity-colored accent border, a
//! severity glyph, optional title, message text and a dismiss button.
//! The severity-to-color mapping lives here so the core engine stays
//! free of toolkit types.

use crate::alert::{Alert, Severity};
use crate::config::Anchor;
use crate::controller::{Message, PresentationController};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card for an alert.
    pub fn view(alert: &Alert) -> Element<'_, Message> {
        let severity = alert.severity();
        let accent_color = severity_color(severity);

        // Severity glyph in the accent color
        let glyph_widget = Text::new(severity_glyph(severity))
            .size(sizing::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        // Optional title above the message
        let mut text_column = Column::new().spacing(spacing::XXS);
        if let Some(title) = alert.title() {
            text_column = text_column.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        text_column = text_column.push(
            Text::new(alert.message())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

        // Dismiss button (always visible, uses main text color for good contrast)
        let alert_id = alert.id();
        let dismiss_button = button(text("✕").size(typography::BODY))
            .on_press(Message::Dismiss(alert_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [title + message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph_widget).padding(spacing::XXS))
            .push(
                Container::new(text_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        // Toast card with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay for the controller's current alert.
    ///
    /// The overlay fills the window and anchors the toast to the
    /// configured corner; when nothing is showing it collapses to an
    /// empty, zero-sized container.
    pub fn view_overlay(
        controller: &PresentationController,
        anchor: Anchor,
    ) -> Element<'_, Message> {
        match controller.current() {
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            Some(alert) => {
                let (align_x, align_y) = anchor_alignment(anchor);
                Container::new(Self::view(alert))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(align_x)
                    .align_y(align_y)
                    .padding(spacing::MD)
                    .into()
            }
        }
    }
}

/// Returns the accent color for a severity level.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Returns the text glyph shown next to the message.
#[must_use]
pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Error => "⨯",
    }
}

fn anchor_alignment(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    match anchor {
        Anchor::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        Anchor::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Anchor::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Anchor::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
    }
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
///
/// Transparent at rest; hover and press add a gray overlay whose
/// strength comes from the opacity scale.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;

    let (overlay_alpha, text_color) = match status {
        button::Status::Active => (None, base_text),
        button::Status::Hovered => (Some(opacity::OVERLAY_SUBTLE), base_text),
        button::Status::Pressed => (Some(opacity::OVERLAY_MEDIUM), base_text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base_text
            },
        ),
    };

    button::Style {
        background: overlay_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
