// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are drawn from their [`ToastView`]: a card with a
//! severity-colored border, an icon, the message, a dismiss button and,
//! for timed toasts, a progress bar. Views that are entering or leaving
//! are drawn translucent.

use super::manager::Message;
use super::severity::{icon_svg, CLOSE_ICON_PATH};
use super::surface::{Container as ToastContainer, Phase, ToastView};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, progress_bar, svg, text, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(toast: &ToastView) -> Element<'_, Message> {
        let style = toast.style();
        let alpha = phase_alpha(toast.phase());
        let accent_color = with_alpha(style.border_color, alpha);
        let icon_color = with_alpha(style.icon_color, alpha);

        let icon_widget = icon(style.icon_path, icon_color, sizing::ICON_MD);

        // Plain text: markup in the message is shown as-is.
        let message_widget = Text::new(toast.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        let dismiss_button = button(icon(CLOSE_ICON_PATH, palette::GRAY_400, sizing::ICON_SM))
            .on_press(toast.close_message())
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let mut body = Column::new().spacing(spacing::XS).push(content);

        if let Some(remaining) = toast.progress() {
            let bar_color = with_alpha(style.progress_color, alpha);
            body = body.push(
                Container::new(
                    progress_bar(0.0..=100.0, remaining).style(move |theme: &Theme| {
                        progress_bar_style(theme, bar_color)
                    }),
                )
                .height(Length::Fixed(sizing::PROGRESS_HEIGHT)),
            );
        }

        Container::new(body)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every attached view, oldest on top.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay(toasts: &ToastContainer) -> Element<'_, Message> {
        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts.iter().map(Self::view))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn icon<'a>(path: &str, color: Color, size: f32) -> Element<'a, Message> {
    let handle = svg::Handle::from_memory(icon_svg(path).into_bytes());
    svg(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
        .into()
}

/// Entering and leaving toasts are drawn half transparent.
fn phase_alpha(phase: Phase) -> f32 {
    if phase.is_onscreen() {
        opacity::OPAQUE
    } else {
        opacity::OVERLAY_MEDIUM
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
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

fn progress_bar_style(theme: &Theme, bar_color: Color) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(theme.extended_palette().background.weak.color),
        bar: Background::Color(bar_color),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
