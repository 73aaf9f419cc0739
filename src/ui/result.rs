use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text, Image};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::GeneratedImage;
use crate::Message;

/// Shown while a generation cycle is in flight. There is nothing to
/// press: the cycle cannot be cancelled.
pub fn generating() -> Element<'static, Message> {
    container(
        column![
            text("Processing").size(14),
            text("This can take a few seconds.").size(12).style(text::secondary),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Full-size view of the current result with its prompt caption and
/// the Download / Expand / New / Close controls
pub fn view<'a>(entry: &'a GeneratedImage, handle: Option<&Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Image unavailable").size(14).style(text::secondary).into(),
    };

    let close = row![
        horizontal_space(),
        button(text("Close").size(14))
            .style(button::text)
            .on_press(Message::CloseResult),
    ];

    let caption = column![
        text("Prompt").size(12).style(text::secondary),
        text(format!("\u{201c}{}\u{201d}", entry.prompt)).size(20),
        text(format!(
            "{} \u{00b7} {}",
            entry.style,
            entry.created_at.format("%H:%M UTC")
        ))
        .size(12)
        .style(text::secondary),
    ]
    .spacing(4);

    // Download and Expand are declared controls without backing
    // behavior; they only log for now.
    let actions = row![
        button(text("Download").size(14))
            .style(button::secondary)
            .on_press(Message::Download),
        button(text("Expand").size(14))
            .style(button::secondary)
            .on_press(Message::Expand),
        button(text("+ New").size(14))
            .style(button::text)
            .on_press(Message::CloseResult),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let footer = row![caption, horizontal_space(), actions].spacing(24);

    container(
        column![close, picture, footer]
            .spacing(16)
            .max_width(960)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(24)
    .center_x(Length::Fill)
    .into()
}
