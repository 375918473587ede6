use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod compare;
mod config;
mod error;
mod media;
mod state;
mod ui;

use config::Config;
use error::Error;
use media::loader::{self, LoadedImage};
use state::data::{Variant, ViewMode};
use state::session::{CommitOutcome, RequestId, Session};

const TITLE: &str = "A/B Visual Split Comparison Tool";

/// Main application state
struct AbCompare {
    /// Both variant slots, the view mode and the preview handles
    session: Session,
    /// User settings
    config: Config,
    /// Where settings are saved; `None` disables saving
    config_path: Option<PathBuf>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked an upload zone or a Replace button
    PickFile(Variant),
    /// File picker closed, with the chosen path if any
    FilePicked(Variant, Option<PathBuf>),
    /// Background probe finished for the given upload request
    Probed {
        variant: Variant,
        request: RequestId,
        result: Result<LoadedImage, Error>,
    },
    SetViewMode(ViewMode),
    Reset,
}

impl AbCompare {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read settings, using defaults");
            Config::default()
        });
        info!(theme = ?config.theme, "A/B compare initialized");

        (
            Self::with_config(config, config::default_config_path()),
            Task::none(),
        )
    }

    fn with_config(config: Config, config_path: Option<PathBuf>) -> Self {
        AbCompare {
            session: Session::new(),
            config,
            config_path,
            status: "Ready.".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile(variant) => Task::perform(
                media::pick_file(
                    format!("Select Variant {}", variant),
                    self.config.start_directory(),
                ),
                move |path| Message::FilePicked(variant, path),
            ),
            Message::FilePicked(_, None) => Task::none(),
            Message::FilePicked(variant, Some(path)) => {
                let mime = media::mime::mime_for_path(&path);
                if !media::mime::is_image(&mime) {
                    debug!(%variant, path = %path.display(), %mime, "ignoring non-image file");
                    return Task::none();
                }

                if self.config.remember_pick(&path) {
                    self.save_config();
                }

                let request = self.session.begin_upload(variant);
                self.status = format!("Loading Variant {}...", variant);
                Task::perform(loader::probe(path), move |result| Message::Probed {
                    variant,
                    request,
                    result,
                })
            }
            Message::Probed {
                variant,
                request,
                result,
            } => {
                match result {
                    Ok(loaded) => {
                        let name = loaded.file.name.clone();
                        let dimensions = loaded.dimensions;
                        if let CommitOutcome::Committed { replaced } =
                            self.session.commit(variant, request, loaded)
                        {
                            if replaced {
                                debug!(%variant, "released previous preview");
                            }
                            self.status =
                                format!("Loaded Variant {}: {} ({})", variant, name, dimensions);
                        }
                    }
                    Err(e) => {
                        if self.session.fail(variant, request) {
                            warn!(%variant, error = %e, "failed to load variant");
                            self.status = format!("Could not load Variant {}: {}", variant, e);
                        }
                    }
                }
                Task::none()
            }
            Message::SetViewMode(mode) => {
                self.session.set_view_mode(mode);
                Task::none()
            }
            Message::Reset => {
                self.session.reset();
                self.status = "Ready.".to_string();
                Task::none()
            }
        }
    }

    fn save_config(&self) {
        if let Some(path) = &self.config_path {
            if let Err(e) = config::save_to_path(&self.config, path) {
                warn!(path = %path.display(), error = %e, "failed to save settings");
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text(TITLE).size(32),
            text("Upload and compare two design variants to make data-driven decisions")
                .size(16)
                .color(ui::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let mut content: Column<Message> = column![container(header).center_x(Length::Fill)]
            .spacing(24)
            .padding(24)
            .max_width(1280);

        if self.session.is_empty() {
            let slots = row![
                ui::upload::view(&self.session, Variant::A),
                ui::upload::view(&self.session, Variant::B),
            ]
            .spacing(32);
            content = content.push(ui::card("Upload Your Variants".to_string(), None, slots));
        } else {
            content = content.push(self.toolbar());
            content = content.push(match self.session.view_mode() {
                ViewMode::Comparison => ui::comparison::view(&self.session),
                ViewMode::Detailed => ui::detail::view(&self.session),
            });
            if let Some((a, b)) = self.session.both() {
                content = content.push(ui::summary::view(a, b));
            }
        }

        content = content.push(text(&self.status).size(14).color(ui::MUTED));

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    fn toolbar(&self) -> Element<Message> {
        let current = self.session.view_mode();

        row![
            mode_button("Comparison View", ViewMode::Comparison, current),
            mode_button("Detailed View", ViewMode::Detailed, current),
            horizontal_space(),
            button(text("Reset").size(14))
                .style(button::secondary)
                .on_press(Message::Reset),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.theme()
    }
}

fn mode_button<'a>(label: &'a str, mode: ViewMode, current: ViewMode) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if mode == current {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(14))
        .style(style)
        .on_press(Message::SetViewMode(mode))
        .into()
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ab_compare=info")),
        )
        .init();

    iced::application(TITLE, AbCompare::update, AbCompare::view)
        .theme(AbCompare::theme)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(AbCompare::new)
}
