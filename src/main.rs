use std::collections::HashMap;

use iced::widget::column;
use iced::widget::image::Handle;
use iced::{Element, Task, Theme};

// Declare the application modules
mod config;
mod generate;
mod media;
mod state;
mod ui;

use config::Config;
use generate::client::ImagenClient;
use state::data::{AspectRatio, GenerationOutcome, Style};
use state::session::Session;

/// Main application state
struct Oneira {
    /// The per-session studio state machine
    session: Session,
    /// Client for the primary image-generation endpoint
    client: ImagenClient,
    /// Displayable handle per gallery entry id
    media: HashMap<u64, Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Prompt text edited
    PromptChanged(String),
    /// User asked for a random sample prompt
    Inspire,
    /// A style pill was pressed
    StyleSelected(Style),
    /// A ratio pill was pressed
    RatioSelected(AspectRatio),
    /// Generate trigger pressed (or Enter in the prompt input)
    Generate,
    /// The background generation cycle settled
    GenerationFinished(Result<GenerationOutcome, String>),
    /// A gallery thumbnail was pressed
    ViewImage(u64),
    /// Close the result view / brand pressed / "New"
    CloseResult,
    /// Open or close the gallery overlay
    ToggleGallery,
    /// Declared control, no backing behavior yet
    Download,
    /// Declared control, no backing behavior yet
    Expand,
}

impl Oneira {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        let client = ImagenClient::new(&config);
        let session = Session::new();

        let mut media = HashMap::new();
        for entry in session.gallery() {
            if let Some(handle) = media::handle_for(&entry.source) {
                media.insert(entry.id, handle);
            }
        }

        log::info!(
            "studio initialized with {} gallery entries",
            session.gallery().len()
        );

        (
            Oneira {
                session,
                client,
                media,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PromptChanged(prompt) => {
                self.session.set_prompt(prompt);
                Task::none()
            }
            Message::Inspire => {
                self.session.inspire(&mut rand::thread_rng());
                Task::none()
            }
            Message::StyleSelected(style) => {
                self.session.select_style(style);
                Task::none()
            }
            Message::RatioSelected(ratio) => {
                self.session.select_ratio(ratio);
                Task::none()
            }
            Message::Generate => {
                // Refused on an empty prompt or while a cycle is in
                // flight; the trigger is disabled in both cases anyway.
                let Some(snapshot) = self.session.begin_generation() else {
                    return Task::none();
                };
                log::info!("generation started for prompt {:?}", snapshot.prompt);
                let client = self.client.clone();
                Task::perform(generate::run(client, snapshot), Message::GenerationFinished)
            }
            Message::GenerationFinished(Ok(outcome)) => {
                let (id, handle) = {
                    let entry = self.session.complete_generation(outcome);
                    log::info!("generation finished: {}", entry.source.reference());
                    (entry.id, media::handle_for(&entry.source))
                };
                if let Some(handle) = handle {
                    self.media.insert(id, handle);
                }
                Task::none()
            }
            Message::GenerationFinished(Err(message)) => {
                log::error!("generation failed: {message}");
                self.session.fail_generation("Error generating image.".to_string());
                Task::none()
            }
            Message::ViewImage(id) => {
                if !self.session.view_image(id) {
                    log::warn!("ignoring view request for unknown gallery id {id}");
                }
                Task::none()
            }
            Message::CloseResult => {
                self.session.close_result();
                Task::none()
            }
            Message::ToggleGallery => {
                self.session.toggle_gallery();
                Task::none()
            }
            Message::Download => {
                log::debug!("download requested; not implemented");
                Task::none()
            }
            Message::Expand => {
                log::debug!("expand requested; not implemented");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = if self.session.is_generating() {
            ui::result::generating()
        } else if self.session.gallery_open() {
            ui::gallery::view(&self.session, &self.media)
        } else if let Some(entry) = self.session.current() {
            ui::result::view(entry, self.media.get(&entry.id))
        } else {
            ui::editor(&self.session)
        };

        column![ui::navbar(&self.session), body].into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Oneira", Oneira::update, Oneira::view)
        .theme(Oneira::theme)
        .centered()
        .run_with(Oneira::new)
}
