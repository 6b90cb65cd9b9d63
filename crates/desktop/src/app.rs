use std::path::{Path, PathBuf};

use iced::widget::image;
use iced::{Element, Size, Subscription, Task, Theme};

use blur_image_core::blurring::domain::picture_blurrer::PictureBlurrer;
use blur_image_core::blurring::infrastructure::cpu_gaussian_blurrer::CpuGaussianBlurrer;
use blur_image_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use blur_image_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use blur_image_core::pipeline::blur_image_use_case::BlurImageUseCase;
use blur_image_core::pipeline::image_store::ImageStore;
use blur_image_core::shared::blur_radius::BlurRadius;
use blur_image_core::shared::display_size::fit_within;
use blur_image_core::shared::picture::Picture;

use crate::dialogs;
use crate::settings::Settings;
use crate::theme;
use crate::views;

pub const WINDOW_SIZE: Size = Size::new(1280.0, 720.0);
pub const PADDING: f32 = 16.0;
/// Height taken by the slider row, the button row and the status line.
const CONTROLS_HEIGHT: f32 = 128.0;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    OpenRequested,
    OpenSelected(Option<PathBuf>),
    SaveRequested,
    SaveSelected(Option<PathBuf>),
    RadiusChanged(u8),
    /// Slider released; the preview is recomputed once here, not per drag step.
    RadiusReleased,
    WindowResized(Size),
}

// ---------------------------------------------------------------------------
// Preview / status
// ---------------------------------------------------------------------------

/// What the preview label currently shows.
#[derive(Debug, Clone)]
pub enum Preview {
    Placeholder,
    Picture {
        handle: image::Handle,
        size: (u32, u32),
    },
    Error(String),
}

impl Preview {
    fn from_picture(picture: Picture) -> Self {
        let size = picture.dimensions();
        Preview::Picture {
            handle: image::Handle::from_rgba(size.0, size.1, picture.into_data()),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Saved(String),
    Failed(String),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    settings: Settings,
    theme: Theme,
    store: ImageStore,
    reader: ImageFileReader,
    blurrer: CpuGaussianBlurrer,
    save_use_case: BlurImageUseCase,
    preview: Preview,
    /// Radius the current preview was rendered at.
    previewed_radius: BlurRadius,
    status: Option<Status>,
    window_size: Size,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        log::info!("Starting Blur Image");
        (Self::with_theme(theme::resolve_theme()), Task::none())
    }

    fn with_theme(theme: Theme) -> Self {
        Self {
            settings: Settings::default(),
            theme,
            store: ImageStore::new(),
            reader: ImageFileReader::new(),
            blurrer: CpuGaussianBlurrer::new(),
            save_use_case: BlurImageUseCase::new(
                Box::new(CpuGaussianBlurrer::new()),
                Box::new(ImageFileWriter::new()),
            ),
            preview: Preview::Placeholder,
            previewed_radius: BlurRadius::ZERO,
            status: None,
            window_size: WINDOW_SIZE,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenRequested => {
                return Task::perform(
                    dialogs::pick_image(self.settings.last_directory.clone()),
                    Message::OpenSelected,
                );
            }
            Message::OpenSelected(None) => {
                self.store.cancel_open();
                self.preview = Preview::Placeholder;
                self.previewed_radius = BlurRadius::ZERO;
                self.status = None;
            }
            Message::OpenSelected(Some(path)) => {
                self.settings.remember_directory_of(&path);
                self.status = None;
                self.previewed_radius = BlurRadius::ZERO;
                self.preview = match self.store.open(&self.reader, &path) {
                    Ok(picture) => Preview::from_picture(picture.clone()),
                    Err(e) => Preview::Error(e.to_string()),
                };
            }
            Message::SaveRequested => {
                if !self.store.is_loaded() {
                    return Task::none();
                }
                let file_name = dialogs::suggested_file_name(self.store.source_path());
                return Task::perform(
                    dialogs::save_image(self.settings.last_directory.clone(), file_name),
                    Message::SaveSelected,
                );
            }
            Message::SaveSelected(None) => {}
            Message::SaveSelected(Some(path)) => {
                let path = dialogs::with_default_extension(path);
                self.status = match self.save_use_case.execute(&self.store, &path) {
                    Ok(true) => {
                        self.settings.remember_directory_of(&path);
                        Some(Status::Saved(display_name(&path)))
                    }
                    Ok(false) => None,
                    Err(e) => {
                        log::warn!("Save failed: {e}");
                        Some(Status::Failed(e.to_string()))
                    }
                };
            }
            Message::RadiusChanged(value) => {
                self.store.set_radius(value as i64);
            }
            Message::RadiusReleased => {
                let radius = self.store.radius();
                if radius == self.previewed_radius {
                    return Task::none();
                }
                if let Some(blurred) = self.blurrer.blur_loaded(self.store.picture(), radius) {
                    log::debug!("Preview recomputed at radius {radius}");
                    self.preview = Preview::from_picture(blurred);
                    self.previewed_radius = radius;
                }
            }
            Message::WindowResized(size) => {
                self.window_size = size;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let display_size = match &self.preview {
            Preview::Picture { size, .. } => fit_within(*size, preview_bounds(self.window_size)),
            _ => (0, 0),
        };
        views::main_view::view(
            &self.preview,
            display_size,
            self.store.radius().value(),
            self.store.is_loaded(),
            self.status.as_ref(),
            &self.theme,
        )
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }
}

/// Area available to the preview label inside a window of the given size.
pub fn preview_bounds(window: Size) -> (u32, u32) {
    let width = (window.width - 2.0 * PADDING).max(1.0);
    let height = (window.height - 2.0 * PADDING - CONTROLS_HEIGHT).max(1.0);
    (width as u32, height as u32)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blur_image_core::imaging::domain::image_reader::ImageReader;
    use blur_image_core::imaging::domain::image_writer::ImageWriter;

    fn app() -> App {
        App::with_theme(Theme::Dark)
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for i in 0..width * height {
            let v = (i % 256) as u8;
            data.extend_from_slice(&[v, 255 - v, 90, 255]);
        }
        let picture = Picture::new(data, width, height).unwrap();
        ImageFileWriter::new().write(&path, &picture).unwrap();
        path
    }

    fn open(app: &mut App, path: &Path) {
        let _ = app.update(Message::OpenSelected(Some(path.to_path_buf())));
    }

    fn drag_to(app: &mut App, radius: u8) {
        let _ = app.update(Message::RadiusChanged(radius));
        let _ = app.update(Message::RadiusReleased);
    }

    fn preview_pixels(app: &App) -> Vec<u8> {
        match &app.preview {
            Preview::Picture {
                handle: image::Handle::Rgba { pixels, .. },
                ..
            } => pixels.to_vec(),
            other => panic!("expected rgba preview, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_with_placeholder() {
        let app = app();
        assert!(matches!(app.preview, Preview::Placeholder));
        assert_eq!(app.store.radius(), BlurRadius::ZERO);
        assert_eq!(app.window_size, WINDOW_SIZE);
    }

    #[test]
    fn test_open_valid_image_shows_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 30, 20);
        let mut app = app();

        open(&mut app, &path);

        assert!(matches!(app.preview, Preview::Picture { size: (30, 20), .. }));
        assert!(app.store.is_loaded());
        assert_eq!(
            app.settings.last_directory.as_deref(),
            Some(dir.path())
        );
    }

    #[test]
    fn test_open_resets_radius() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 30, 20);
        let mut app = app();
        open(&mut app, &path);
        let _ = app.update(Message::RadiusChanged(6));

        open(&mut app, &path);

        assert_eq!(app.store.radius(), BlurRadius::ZERO);
    }

    #[test]
    fn test_cancel_open_shows_placeholder_and_unloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 10, 10);
        let mut app = app();
        open(&mut app, &path);

        let _ = app.update(Message::OpenSelected(None));

        assert!(matches!(app.preview, Preview::Placeholder));
        assert!(!app.store.is_loaded());
    }

    #[test]
    fn test_open_nonexistent_shows_error_without_crash() {
        let mut app = app();
        open(&mut app, Path::new("/nonexistent/missing.png"));
        assert!(matches!(app.preview, Preview::Error(_)));
        assert!(!app.store.is_loaded());
    }

    #[test]
    fn test_radius_without_image_forced_to_zero() {
        let mut app = app();
        let _ = app.update(Message::RadiusChanged(7));
        assert_eq!(app.store.radius(), BlurRadius::ZERO);
        assert!(matches!(app.preview, Preview::Placeholder));
    }

    #[test]
    fn test_radius_change_keeps_preview_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 40, 25);
        let mut app = app();
        open(&mut app, &path);

        drag_to(&mut app, 4);

        assert_eq!(app.store.radius().value(), 4);
        assert!(matches!(app.preview, Preview::Picture { size: (40, 25), .. }));
    }

    #[test]
    fn test_save_writes_blurred_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "in.png", 50, 50);
        let output = dir.path().join("out.png");
        let mut app = app();
        open(&mut app, &input);
        let _ = app.update(Message::RadiusChanged(3));

        let _ = app.update(Message::SaveSelected(Some(output.clone())));

        assert!(output.exists());
        assert_eq!(app.status, Some(Status::Saved("out.png".to_string())));
    }

    #[test]
    fn test_save_without_extension_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "in.png", 10, 10);
        let mut app = app();
        open(&mut app, &input);

        let _ = app.update(Message::SaveSelected(Some(dir.path().join("out"))));

        assert!(dir.path().join("out.png").exists());
    }

    #[test]
    fn test_save_without_image_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let mut app = app();

        let _ = app.update(Message::SaveRequested);
        let _ = app.update(Message::SaveSelected(Some(output.clone())));

        assert!(!output.exists());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_save_failure_is_visible() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "in.png", 10, 10);
        let mut app = app();
        open(&mut app, &input);

        let _ = app.update(Message::SaveSelected(Some(dir.path().join("out.bmp"))));

        assert!(matches!(app.status, Some(Status::Failed(_))));
    }

    #[test]
    fn test_preview_matches_saved_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "in.png", 60, 40);
        let output = dir.path().join("out.png");
        let mut app = app();
        open(&mut app, &input);
        drag_to(&mut app, 5);

        let _ = app.update(Message::SaveSelected(Some(output.clone())));

        let saved = ImageFileReader::new().read(&output).unwrap();
        assert_eq!(saved.dimensions(), (60, 40));
        assert_eq!(preview_pixels(&app), saved.data());
    }

    #[test]
    fn test_drag_does_not_recompute_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 20, 20);
        let mut app = app();
        open(&mut app, &path);
        let original = preview_pixels(&app);

        let _ = app.update(Message::RadiusChanged(3));
        let _ = app.update(Message::RadiusChanged(8));

        assert_eq!(app.store.radius().value(), 8);
        assert_eq!(app.previewed_radius, BlurRadius::ZERO);
        assert_eq!(preview_pixels(&app), original);
    }

    #[test]
    fn test_release_recomputes_preview_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 20, 20);
        let mut app = app();
        open(&mut app, &path);
        let original = preview_pixels(&app);

        drag_to(&mut app, 4);

        assert_eq!(app.previewed_radius.value(), 4);
        assert_ne!(preview_pixels(&app), original);
    }

    #[test]
    fn test_release_back_to_zero_restores_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 20, 20);
        let mut app = app();
        open(&mut app, &path);
        let original = preview_pixels(&app);

        drag_to(&mut app, 6);
        drag_to(&mut app, 0);

        assert_eq!(preview_pixels(&app), original);
    }

    #[test]
    fn test_release_without_image_keeps_placeholder() {
        let mut app = app();
        drag_to(&mut app, 5);
        assert!(matches!(app.preview, Preview::Placeholder));
        assert_eq!(app.previewed_radius, BlurRadius::ZERO);
    }

    #[test]
    fn test_dialog_directory_is_session_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 10, 10);
        let mut app = app();
        open(&mut app, &path);
        assert_eq!(app.settings.last_directory.as_deref(), Some(dir.path()));

        let fresh = App::with_theme(Theme::Dark);
        assert!(fresh.settings.last_directory.is_none());
    }

    #[test]
    fn test_theme_is_resolved_once() {
        let app = App::with_theme(Theme::Light);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.theme(), app.theme);
    }

    #[test]
    fn test_preview_bounds_for_default_window() {
        assert_eq!(preview_bounds(WINDOW_SIZE), (1248, 560));
    }

    #[test]
    fn test_preview_bounds_never_zero() {
        assert_eq!(preview_bounds(Size::new(10.0, 10.0)), (1, 1));
    }

    #[test]
    fn test_large_image_display_fits_label() {
        let bounds = preview_bounds(WINDOW_SIZE);
        let (w, h) = fit_within((4000, 3000), bounds);
        assert!(w <= bounds.0 && h <= bounds.1);
        approx::assert_abs_diff_eq!(w as f64 / h as f64, 4.0 / 3.0, epsilon = 0.01);
    }

    #[test]
    fn test_window_resize_tracked() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(800.0, 600.0)));
        assert_eq!(preview_bounds(app.window_size), (768, 440));
    }
}
