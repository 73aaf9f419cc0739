/// Widget construction for the three screens: the editor, the result
/// view (result.rs) and the gallery overlay (gallery.rs)

pub mod gallery;
pub mod result;

use iced::widget::{button, column, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::{AspectRatio, Style};
use crate::state::session::Session;
use crate::Message;

/// Top bar: brand on the left (returns to the editor), gallery toggle
/// on the right
pub fn navbar(session: &Session) -> Element<'_, Message> {
    let toggle_label = if session.gallery_open() {
        "Close"
    } else {
        "Gallery"
    };

    row![
        button(text("Oneira.").size(22))
            .style(button::text)
            .on_press(Message::CloseResult),
        horizontal_space(),
        button(text(toggle_label).size(14))
            .style(button::text)
            .on_press(Message::ToggleGallery),
    ]
    .align_y(Alignment::Center)
    .padding([12.0, 24.0])
    .into()
}

/// The prompt editor: input, Inspire, style and ratio pickers, the
/// Generate trigger and the error line
pub fn editor(session: &Session) -> Element<'_, Message> {
    let headline = text("Create something new.").size(42);

    let prompt_input = text_input("Describe your vision...", session.prompt())
        .on_input(Message::PromptChanged)
        .on_submit(Message::Generate)
        .padding(16)
        .size(24);

    let inspire = row![
        horizontal_space(),
        button(text("Inspire").size(13))
            .style(button::text)
            .on_press(Message::Inspire),
    ];

    let mut style_pills = row![].spacing(8);
    for style in Style::ALL {
        style_pills = style_pills.push(pill(
            style.label(),
            style == session.style(),
            Message::StyleSelected(style),
        ));
    }

    let mut ratio_pills = row![].spacing(8);
    for ratio in AspectRatio::ALL {
        ratio_pills = ratio_pills.push(pill(
            ratio.api_code(),
            ratio == session.ratio(),
            Message::RatioSelected(ratio),
        ));
    }

    let pickers = row![
        column![section_label("Style"), style_pills].spacing(8),
        horizontal_space(),
        column![section_label("Ratio"), ratio_pills].spacing(8),
    ]
    .spacing(24);

    // The trigger stays disabled on an empty prompt and while a cycle
    // is already in flight.
    let can_generate = !session.prompt().trim().is_empty() && !session.is_generating();
    let generate = row![
        horizontal_space(),
        button(text("Generate Image").size(20))
            .padding([12.0, 24.0])
            .on_press_maybe(can_generate.then_some(Message::Generate)),
    ];

    let mut content = column![headline, prompt_input, inspire, pickers, generate]
        .spacing(20)
        .max_width(760)
        .width(Length::Fill);

    if let Some(message) = session.error() {
        content = content.push(text(message).size(14).style(text::danger));
    }

    column![content]
        .padding(24)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn section_label(label: &str) -> Element<'_, Message> {
    text(label).size(12).style(text::secondary).into()
}

/// Exclusive-choice pill button
fn pill(label: &'static str, selected: bool, on_press: Message) -> Element<'static, Message> {
    let style = if selected {
        button::primary
    } else {
        button::secondary
    };
    button(text(label).size(14))
        .style(style)
        .padding([8.0, 16.0])
        .on_press(on_press)
        .into()
}
