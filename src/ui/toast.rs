// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the toasts found in a document body.
//!
//! Each toast element becomes a small card with a type-colored border, its
//! text content shown verbatim, and a dismiss button.

use super::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use super::stylesheet::{Stylesheet, ToastStyle};
use crate::document::{Document, NodeId};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by rendered toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(NodeId),
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view<'a>(id: NodeId, content: &'a str, style: ToastStyle) -> Element<'a, Message> {
        let accent_color = style.accent;

        let message_widget = Text::new(content)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(text("×").size(typography::BODY))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every toast in the document body, in child order.
    ///
    /// Body children without the `toast` class are skipped.
    pub fn view_body<'a>(document: &'a Document, stylesheet: &Stylesheet) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = visible_toasts(document, stylesheet)
            .into_iter()
            .map(|(id, content, style)| Self::view(id, content, style))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        // Bottom-right corner
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Body children that are toasts, with their text and resolved style.
pub fn visible_toasts<'a>(
    document: &'a Document,
    stylesheet: &Stylesheet,
) -> Vec<(NodeId, &'a str, ToastStyle)> {
    document
        .body_children()
        .iter()
        .filter_map(|id| {
            let element = document.element(*id)?;
            let style = stylesheet.resolve(element)?;
            Some((*id, element.text_content(), style))
        })
        .collect()
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
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

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover_background(0.2),
        button::Status::Pressed => hover_background(0.5),
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
