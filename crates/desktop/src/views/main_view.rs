use iced::widget::{button, column, container, image, row, slider, text, Space};
use iced::{Element, Length, Theme};

use blur_image_core::shared::constants::{MAX_BLUR_RADIUS, MIN_BLUR_RADIUS, PLACEHOLDER_TEXT};

use crate::app::{Message, Preview, Status, PADDING};
use crate::theme::{surface_color, tertiary_color};

pub fn view<'a>(
    preview: &'a Preview,
    display_size: (u32, u32),
    radius: u8,
    loaded: bool,
    status: Option<&'a Status>,
    theme: &Theme,
) -> Element<'a, Message> {
    let label = preview_label(preview, display_size, theme);

    column![
        label,
        radius_row(radius),
        button_row(loaded),
        status_line(status, theme),
    ]
    .spacing(12)
    .padding(PADDING)
    .height(Length::Fill)
    .into()
}

fn preview_label<'a>(
    preview: &'a Preview,
    display_size: (u32, u32),
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);
    let surface = surface_color(theme);

    let content: Element<'a, Message> = match preview {
        Preview::Placeholder => text(PLACEHOLDER_TEXT).size(15).color(tertiary).into(),
        Preview::Picture { handle, .. } => image(handle.clone())
            .width(Length::Fixed(display_size.0 as f32))
            .height(Length::Fixed(display_size.1 as f32))
            .into(),
        Preview::Error(message) => column![
            text("Could not open image").size(18),
            Space::new().height(6),
            text(message.as_str()).size(14).color(tertiary),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            ..container::Style::default()
        })
        .into()
}

fn radius_row<'a>(radius: u8) -> Element<'a, Message> {
    row![
        text("Blur").size(14),
        slider(MIN_BLUR_RADIUS..=MAX_BLUR_RADIUS, radius, Message::RadiusChanged)
            .step(1u8)
            .on_release(Message::RadiusReleased),
        text(radius.to_string()).size(14).width(24),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}

fn button_row<'a>(loaded: bool) -> Element<'a, Message> {
    row![
        action_button("Open image", Some(Message::OpenRequested)),
        action_button("Save image", save_message(loaded)),
    ]
    .spacing(10)
    .into()
}

/// Save is only offered once a picture is loaded.
fn save_message(loaded: bool) -> Option<Message> {
    loaded.then_some(Message::SaveRequested)
}

fn action_button<'a>(label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(text(label).size(15).center().width(Length::Fill))
        .on_press_maybe(on_press)
        .padding([12, 24])
        .width(Length::Fill)
        .style(button::primary)
        .into()
}

fn status_line<'a>(status: Option<&'a Status>, theme: &Theme) -> Element<'a, Message> {
    let line = match status {
        Some(Status::Saved(name)) => text(format!("Saved to {name}"))
            .size(13)
            .color(tertiary_color(theme)),
        Some(Status::Failed(reason)) => text(format!("Save failed: {reason}"))
            .size(13)
            .color(theme.palette().danger),
        None => text("").size(13),
    };
    container(line).height(18).into()
}
