// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one controls instance over a synthetic clip.
//!
//! The `App` struct owns the surface and the controls, routes native events
//! to the controls, feeds surface events back to them, and turns requested
//! effects (native fullscreen) into window tasks.

pub mod clip;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, DEMO_CLIP_DURATION_SECS, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::controls::{
    self, ControlsConfig, FullscreenCapabilities, FullscreenStrategy, LoadOptions,
    VideoTimeControls,
};
use crate::i18n::fluent::I18n;
use clip::SyntheticClip;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Identifier of the demo's surface.
const DEMO_VIDEO_ID: &str = "synthetic-clip";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    clip: SyntheticClip,
    controls: VideoTimeControls,
    window_id: Option<window::Id>,
    /// Number of clips loaded after the first one.
    reloads: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controls", &self.controls.id())
            .field("src", &self.controls.src(&self.clip))
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; the flags are still consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Control options from persisted preferences, overridden by CLI flags.
fn controls_config(flags: &Flags, config: &Config) -> ControlsConfig {
    let mut options = ControlsConfig::new(DEMO_VIDEO_ID).with_preferences(&config.controls);

    if let Some(fps) = flags.fps {
        options.fps = fps;
    }
    options.capture_times.clone_from(&flags.capture_times);
    options.start_time_ms = flags.start_time_ms;
    if flags.no_autoplay {
        options.play_on_load = false;
    }
    if flags.no_loop {
        options.looping = Some(false);
    }
    if flags.fill_screen {
        options.fullscreen = FullscreenCapabilities::unsupported();
    }
    if flags.hide_timestamps {
        options.show_timestamps = false;
    }
    if flags.hide_speed {
        options.show_speed_controls = false;
    }
    if flags.hide_fullscreen {
        options.show_fullscreen_controls = false;
    }
    options.user_agent.clone_from(&flags.user_agent);
    options
}

/// Persisted settings with the preference flags folded in.
///
/// Only flags that describe a lasting preference are kept; clip and
/// capture-time flags stay per run.
#[must_use]
pub fn settings_with_flags(flags: &Flags, config: &Config) -> Config {
    let mut settings = config.clone();
    if flags.lang.is_some() {
        settings.general.language.clone_from(&flags.lang);
    }
    let preferences = &mut settings.controls;
    if flags.fps.is_some() {
        preferences.fps = flags.fps;
    }
    if flags.no_autoplay {
        preferences.play_on_load = Some(false);
    }
    if flags.no_loop {
        preferences.looping = Some(false);
    }
    if flags.hide_timestamps {
        preferences.show_timestamps = Some(false);
    }
    if flags.hide_speed {
        preferences.show_speed_controls = Some(false);
    }
    if flags.hide_fullscreen {
        preferences.show_fullscreen_controls = Some(false);
    }
    settings
}

impl App {
    /// Loads persisted settings and builds the demo.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        });
        if flags.save_settings {
            let settings = settings_with_flags(&flags, &config);
            match config::save(&settings) {
                Ok(()) => tracing::info!("settings saved"),
                Err(err) => tracing::warn!(%err, "failed to save settings"),
            }
        }
        (Self::with_config(flags, &config), Task::none())
    }

    fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        tracing::debug!(locale = %i18n.current_locale(), "interface language resolved");
        let options = controls_config(&flags, config);
        let duration = flags.duration.unwrap_or(DEMO_CLIP_DURATION_SECS);

        let mut clip = SyntheticClip::new(update::clip_source(0), duration, options.fps);
        let controls = VideoTimeControls::new(options, &mut clip);
        clip.set_fps(controls.fps());

        Self {
            i18n,
            clip,
            controls,
            window_id: None,
            reloads: 0,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_clip_subscription(self.clip.needs_clock()),
            self.controls.subscription().map(Message::Controls),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(message) => self.dispatch(message),
            Message::Routed { window, message } => {
                self.window_id = Some(window);
                match message {
                    controls::Message::KeyPressed(ref key) if update::is_next_clip_key(key) => {
                        self.load_next_clip();
                        Task::none()
                    }
                    controls::Message::ViewportResized(size) => {
                        // The clip has no explicit size and fills the window.
                        self.clip.set_rendered_size(size);
                        let task = self.dispatch(message);
                        if self.controls.fullscreen().strategy() == FullscreenStrategy::Native {
                            // The user may have left fullscreen through the window manager.
                            Task::batch([task, update::query_mode(window)])
                        } else {
                            task
                        }
                    }
                    message => self.dispatch(message),
                }
            }
            Message::ClipFrame(now) => {
                self.clip.advance(now);
                self.flush_surface_events();
                Task::none()
            }
            Message::WindowMode(mode) => {
                if self.controls.fullscreen().strategy() != FullscreenStrategy::Native {
                    return Task::none();
                }
                match update::fullscreen_change(mode, self.controls.fullscreen().is_fullscreen()) {
                    Some(message) => {
                        tracing::debug!(?mode, "window mode changed");
                        self.dispatch(message)
                    }
                    None => Task::none(),
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controls: &self.controls,
            clip: &self.clip,
        })
    }

    fn dispatch(&mut self, message: controls::Message) -> Task<Message> {
        let effect = self.controls.update(message, &mut self.clip);
        self.flush_surface_events();
        update::apply_effect(effect, self.window_id)
    }

    /// Forwards events the clip reported to the controls.
    fn flush_surface_events(&mut self) {
        for event in self.clip.take_events() {
            self.controls
                .update(controls::Message::Surface(event), &mut self.clip);
        }
    }

    fn load_next_clip(&mut self) {
        self.reloads += 1;
        let options = LoadOptions::new(update::clip_source(self.reloads));
        self.controls.load_new_video(options, &mut self.clip);
        self.clip.set_fps(self.controls.fps());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Flags::default(), &Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{LoopState, PlayButton, SurfaceEvent, VideoSurface};
    use crate::test_utils::assert_relative_eq;
    use std::time::{Duration, Instant};

    fn app_with(flags: Flags) -> App {
        App::with_config(flags, &Config::default())
    }

    #[test]
    fn first_clock_tick_loads_the_clip() {
        let mut app = App::default();
        assert!(!app.controls.is_loaded());

        let _ = app.update(Message::ClipFrame(Instant::now()));
        assert!(app.controls.is_loaded());
        assert_eq!(app.controls.loop_state(), LoopState::Running);
        assert_eq!(app.controls.num_frames(&app.clip), 240);
    }

    #[test]
    fn flags_override_preferences() {
        let app = app_with(Flags {
            fps: Some(24.0),
            no_autoplay: true,
            no_loop: true,
            fill_screen: true,
            hide_speed: true,
            ..Flags::default()
        });

        assert_relative_eq!(app.controls.fps(), 24.0);
        assert!(!app.controls.play_on_load());
        assert!(!app.clip.is_looping());
        assert_eq!(
            app.controls.fullscreen().strategy(),
            FullscreenStrategy::FillViewport
        );
        assert!(!app.controls.layout().show_speed_controls);
    }

    #[test]
    fn user_agent_flag_picks_the_touch_layout() {
        let app = app_with(Flags {
            user_agent: Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".into()),
            ..Flags::default()
        });
        assert!(app.controls.device().is_mobile());
    }

    #[test]
    fn saved_flags_are_read_back_as_preferences() {
        let flags = Flags {
            lang: Some("fr".into()),
            fps: Some(24.0),
            no_loop: true,
            hide_speed: true,
            duration: Some(5.0),
            ..Flags::default()
        };
        let settings = settings_with_flags(&flags, &Config::default());

        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        config::save_to_path(&settings, &path).expect("failed to save settings");
        let loaded = config::load_from_path(&path).expect("failed to load settings");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.controls.fps, Some(24.0));
        assert_eq!(loaded.controls.looping, Some(false));
        assert_eq!(loaded.controls.show_speed_controls, Some(false));
        assert_eq!(loaded.controls.play_on_load, Some(true));

        // A later run without flags picks the saved preferences up.
        let app = App::with_config(Flags::default(), &loaded);
        assert_relative_eq!(app.controls.fps(), 24.0);
        assert!(!app.clip.is_looping());
        assert!(!app.controls.layout().show_speed_controls);
    }

    #[test]
    fn playback_advances_the_scrubber() {
        let mut app = App::default();
        let start = Instant::now();
        let _ = app.update(Message::ClipFrame(start));
        let _ = app.update(Message::ClipFrame(start + Duration::from_millis(100)));
        let _ = app.update(Message::ClipFrame(start + Duration::from_millis(2100)));
        let _ = app.update(Message::Controls(controls::Message::Tick(
            start + Duration::from_millis(2100),
        )));

        // 2 s at 12 fps; the first tick loads and autoplays, the second
        // anchors the clip clock.
        assert_eq!(app.controls.scrubber().value(), 24);
    }

    #[test]
    fn clicking_the_video_pauses() {
        let mut app = App::default();
        let _ = app.update(Message::ClipFrame(Instant::now()));
        let _ = app.update(Message::Controls(controls::Message::Surface(
            SurfaceEvent::Clicked,
        )));
        assert!(app.clip.is_paused());
        assert_eq!(app.controls.play_button(), PlayButton::Play);
    }

    #[test]
    fn next_clip_key_loads_a_new_source() {
        let mut app = App::default();
        let _ = app.update(Message::ClipFrame(Instant::now()));

        let _ = app.update(Message::Routed {
            window: window::Id::unique(),
            message: controls::Message::KeyPressed(iced::keyboard::Key::Character("n".into())),
        });
        assert_eq!(app.controls.src(&app.clip), "synthetic://pattern/1");
        assert_eq!(app.controls.scrubber().value(), 0);
        assert!(app.window_id.is_some());
    }

    #[test]
    fn window_resize_shows_the_bar_at_window_width() {
        let mut app = App::default();
        let _ = app.update(Message::Routed {
            window: window::Id::unique(),
            message: controls::Message::ViewportResized(iced::Size::new(800.0, 450.0)),
        });
        assert!(app.controls.is_bar_visible());
        assert_eq!(app.controls.bar_width(), Some(800.0));
    }

    #[test]
    fn unchanged_window_mode_keeps_the_fullscreen_flag() {
        let mut app = App::default();
        let _ = app.update(Message::ClipFrame(Instant::now()));
        assert_eq!(
            app.controls.fullscreen().strategy(),
            FullscreenStrategy::Native
        );

        // A mode switch the window manager refused.
        let _ = app.update(Message::WindowMode(window::Mode::Windowed));
        assert!(!app.controls.fullscreen().is_fullscreen());

        let _ = app.update(Message::WindowMode(window::Mode::Fullscreen));
        assert!(app.controls.fullscreen().is_fullscreen());
        let _ = app.update(Message::WindowMode(window::Mode::Fullscreen));
        assert!(app.controls.fullscreen().is_fullscreen());

        // Left through the window manager, reported on the next resize.
        let _ = app.update(Message::WindowMode(window::Mode::Windowed));
        assert!(!app.controls.fullscreen().is_fullscreen());
    }

    #[test]
    fn window_mode_is_ignored_when_filling_the_viewport() {
        let mut app = app_with(Flags {
            fill_screen: true,
            ..Flags::default()
        });
        let _ = app.update(Message::WindowMode(window::Mode::Fullscreen));
        assert!(!app.controls.fullscreen().is_fullscreen());
    }

    #[test]
    fn fill_screen_toggle_needs_no_window() {
        let mut app = app_with(Flags {
            fill_screen: true,
            ..Flags::default()
        });
        let _ = app.update(Message::ClipFrame(Instant::now()));
        let _ = app.update(Message::Routed {
            window: window::Id::unique(),
            message: controls::Message::ViewportResized(iced::Size::new(800.0, 450.0)),
        });
        let _ = app.update(Message::Controls(controls::Message::ToggleFullscreen));
        assert!(app.controls.fullscreen().is_fill_screen());
    }
}
