use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, container, scrollable, text, Image};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::session::Session;
use crate::Message;

const THUMB_SIDE: f32 = 180.0;

/// Overlay panel listing every gallery entry as a square thumbnail.
/// Pressing one makes it the current result and closes the panel.
pub fn view<'a>(session: &'a Session, media: &'a HashMap<u64, Handle>) -> Element<'a, Message> {
    let thumbs: Vec<Element<'a, Message>> = session
        .gallery()
        .iter()
        .map(|entry| {
            let content: Element<'a, Message> = match media.get(&entry.id) {
                Some(handle) => Image::new(handle.clone())
                    .width(THUMB_SIDE)
                    .height(THUMB_SIDE)
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => container(text("unavailable").size(12).style(text::secondary))
                    .width(THUMB_SIDE)
                    .height(THUMB_SIDE)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .into(),
            };
            button(content)
                .style(button::text)
                .padding(0)
                .on_press(Message::ViewImage(entry.id))
                .into()
        })
        .collect();

    let grid = Wrap::with_elements(thumbs).spacing(10.0).line_spacing(10.0);

    container(scrollable(grid))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .into()
}
