mod app;
mod dialogs;
mod settings;
mod theme;
mod views;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("Blur Image")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: app::WINDOW_SIZE,
            ..Default::default()
        })
        .run()
}
