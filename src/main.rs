use iced::time;
use iced::widget::image::Handle;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use image::RgbaImage;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use screen_preview::config::PreviewConfig;
use screen_preview::loader::ThumbnailLoader;
use screen_preview::screen::SystemDisplaySource;
use screen_preview::state::LoadState;
use screen_preview::ui::animation::Transition;
use screen_preview::ui::window::fade_in_color;
use screen_preview::ui::{compose, FrameStyle, ScreenView, WindowShell};

/// Redraw interval while an animation is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Main application state
struct PreviewApp {
    config: PreviewConfig,
    loader: Arc<ThumbnailLoader>,
    style: FrameStyle,
    /// Last state received from the loader
    state: LoadState,
    /// Composite for the current state
    current: RgbaImage,
    /// Composite being faded out while `transition` runs
    previous: Option<RgbaImage>,
    transition: Option<Transition>,
    /// Placeholder glyph fade-out
    glyph_fade: Option<Transition>,
    /// Window fade-in
    window_fade: Transition,
    /// What the screen view currently displays
    frame: Handle,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The loader task finished; carries the state it left behind
    StateChanged(LoadState),
    /// Animation frame
    Tick(Instant),
}

impl PreviewApp {
    /// Create a new instance of the application
    fn new(config: PreviewConfig, shell: &WindowShell) -> (Self, Task<Message>) {
        let source = Arc::new(SystemDisplaySource::from_env());
        let loader = Arc::new(ThumbnailLoader::new(source, &config));
        let style = FrameStyle::from_config(&config);
        let current = compose::render(None, &style);
        let window_fade = shell.show();
        let frame = to_handle(&compose::with_opacity(&current, 0.0));

        info!(
            "Screen preview initialized ({}x{} frame, {}px thumbnail)",
            style.width, style.height, config.target_width
        );

        // The first view is being presented: fire the one-shot load
        let task = Task::perform(activate(Arc::clone(&loader)), Message::StateChanged);

        (
            PreviewApp {
                config,
                loader,
                style,
                state: LoadState::Empty,
                current,
                previous: None,
                transition: None,
                glyph_fade: None,
                window_fade,
                frame,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StateChanged(state) => {
                if state.is_loaded() && !self.state.is_loaded() {
                    let next = compose::render(state.thumbnail(), &self.style);
                    self.previous = Some(std::mem::replace(&mut self.current, next));
                    self.transition = Some(Transition::start(self.config.animation));
                    self.glyph_fade = Some(Transition::start(self.config.fast_animation));
                    self.state = state;
                } else if !state.is_loaded() {
                    let failures = self.loader.diagnostics().snapshot().total_failures();
                    debug!("Desktop image unavailable ({} failures), keeping placeholder", failures);
                }
                self.refresh(Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.refresh(now);
                Task::none()
            }
        }
    }

    /// Recompose the displayed frame for the animations' state at `now`
    fn refresh(&mut self, now: Instant) {
        let blended = match (&self.previous, &self.transition) {
            (Some(previous), Some(transition)) => {
                compose::cross_fade(previous, &self.current, transition.progress_at(now))
            }
            _ => self.current.clone(),
        };

        if self
            .transition
            .is_some_and(|transition| transition.is_finished_at(now))
        {
            self.previous = None;
            self.transition = None;
        }

        let opacity = self.window_fade.progress_at(now);
        self.frame = to_handle(&compose::with_opacity(&blended, opacity));
    }

    fn glyph_opacity(&self, now: Instant) -> f32 {
        match self.glyph_fade {
            Some(fade) => 1.0 - fade.progress_at(now),
            None if self.state.is_loaded() => 0.0,
            None => self.window_fade.progress_at(now),
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        !self.window_fade.is_finished_at(now)
            || self.transition.is_some()
            || self
                .glyph_fade
                .is_some_and(|fade| !fade.is_finished_at(now))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let now = Instant::now();
        let size = Size::new(self.style.width as f32, self.style.height as f32);
        let text_color = fade_in_color(self.theme().palette().text, &self.window_fade, now);

        let preview = ScreenView::new(self.frame.clone(), size)
            .loaded(self.state.is_loaded())
            .placeholder(self.config.placeholder_glyph.as_str(), self.glyph_opacity(now))
            .overlay(
                container(text("Desktop").size(12).color(text_color))
                    .width(Length::Fill)
                    .align_x(Alignment::End),
                self.config.overlay_padding,
            );

        let content = column![preview, text("Screen Preview").size(16).color(text_color)]
            .spacing(20)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_animating(Instant::now()) {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Run the loader's first-activation hook and report the state it produced
async fn activate(loader: Arc<ThumbnailLoader>) -> LoadState {
    let mut updates = loader.subscribe();
    if let Some(task) = loader.on_first_activate() {
        if let Err(err) = task.await {
            warn!("Thumbnail task aborted: {}", err);
        }
    }
    // Bound first so the borrow guard drops before `updates`
    let state = updates.borrow_and_update().clone();
    state
}

fn to_handle(frame: &RgbaImage) -> Handle {
    Handle::from_rgba(frame.width(), frame.height(), frame.as_raw().clone())
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = PreviewConfig::load().unwrap_or_else(|err| {
        warn!("{}, using default preview config", err);
        PreviewConfig::default()
    });

    let shell = WindowShell::from_config(&config);
    shell.request_background_blur();
    let settings = shell.settings();

    iced::application("Screen Preview", PreviewApp::update, PreviewApp::view)
        .subscription(PreviewApp::subscription)
        .theme(PreviewApp::theme)
        .window(settings)
        .centered()
        .run_with(move || PreviewApp::new(config, &shell))
}
