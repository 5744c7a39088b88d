// SPDX-License-Identifier: MPL-2.0
//! Time slider controls mounted over a host video surface.
//!
//! [`VideoTimeControls`] is an explicit instance handle: the host owns the
//! surface and passes it to every call that reads or changes playback, and
//! routes window, keyboard and surface events to the instance they belong
//! to. Nothing here looks up global state, so several instances can share a
//! window.
//!
//! # Lifecycle
//!
//! 1. [`VideoTimeControls::new`] mounts the controls on the surface.
//! 2. The host forwards [`SurfaceEvent::LoadedData`]; the first one
//!    initializes the scrubber and buttons and starts the update loop.
//! 3. While playing, [`VideoTimeControls::subscription`] ticks the loop,
//!    which keeps the scrubber and capture-time readout in sync.
//! 4. [`VideoTimeControls::dispose`] stops everything.

pub mod capture_time;
pub mod device;
pub mod frame_index;
pub mod fullscreen;
pub mod keyboard;
pub mod layout;
pub mod options;
pub mod scrubber;
pub mod speed;
pub mod surface;
pub mod update_loop;
mod view;

#[cfg(test)]
pub(crate) mod test_surface;

pub use capture_time::CaptureTimes;
pub use device::DeviceClass;
pub use frame_index::FrameRate;
pub use fullscreen::{FullscreenCapabilities, FullscreenRequest, FullscreenState, FullscreenStrategy};
pub use keyboard::{KeyAction, KeysDown};
pub use layout::{ControlsLayout, Placement};
pub use options::{ControlsConfig, LoadOptions};
pub use scrubber::{Scrubber, StepDirection};
pub use speed::{SpeedPreset, SpeedToggle};
pub use surface::{ReadyState, SurfaceEvent, VideoSurface};
pub use update_loop::{FrameClock, FrameClockPreference, LoopState, UpdateLoop};
pub use view::ViewContext;

use crate::config::{DEFAULT_CONTROLS_Z_INDEX, DEFAULT_SLIDER_COLOR};
use crate::ui::styles::slider::parse_color;
use iced::keyboard::Key;
use iced::{Color, Size, Subscription};
use std::time::Instant;

/// Messages handled by [`VideoTimeControls::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Play/pause button pressed.
    TogglePlayback,
    /// Scrubber moved to a frame index (reported as f64 by the slider).
    ///
    /// While the pointer is held this is a drag; otherwise (slider arrow
    /// keys, ctrl+wheel) it is a single step.
    Scrub(f64),
    /// Scrubber released.
    ScrubReleased,
    /// Primary pointer button or finger went down anywhere in the window.
    PointerPressed,
    /// Primary pointer button or finger was lifted.
    PointerReleased,
    /// A speed toggle was pressed.
    SpeedPressed(SpeedPreset),
    /// Fullscreen button pressed.
    ToggleFullscreen,
    /// The host's fullscreen mode changed.
    FullscreenChanged,
    KeyPressed(Key),
    KeyReleased,
    /// The viewport (window) was resized.
    ViewportResized(Size),
    Surface(SurfaceEvent),
    /// Frame clock tick.
    Tick(Instant),
}

/// Side effects the host must carry out after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    EnterFullscreen,
    ExitFullscreen,
}

/// Action currently offered by the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButton {
    Play,
    Pause,
}

impl PlayButton {
    /// Returns the i18n key of the button's tooltip.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PlayButton::Play => "controls-play-tooltip",
            PlayButton::Pause => "controls-pause-tooltip",
        }
    }
}

#[derive(Debug, Clone)]
pub struct VideoTimeControls {
    id: String,
    video_id: String,
    fps: FrameRate,
    play_on_load: bool,
    looping: bool,
    start_dwell: f64,
    end_dwell: f64,
    slider_color: Color,
    device: DeviceClass,
    layout: ControlsLayout,
    loaded_ui: bool,
    play_button: PlayButton,
    scrubber: Scrubber,
    update_loop: UpdateLoop,
    speed: SpeedToggle,
    fullscreen: FullscreenState,
    captures: CaptureTimes,
    capture_label: String,
    keys_down: KeysDown,
    pointer_down: bool,
    bar_visible: bool,
    bar_width: Option<f32>,
    surface_size: Option<Size>,
    viewport: Option<Size>,
    z_index: u32,
    last_tick: Instant,
    disposed: bool,
}

impl VideoTimeControls {
    /// Builds the controls and mounts them on `surface`.
    ///
    /// Mounting applies the loop flag and resumes playback when autoplay is
    /// configured, since re-parenting a live surface can pause it. If the
    /// surface already has data, the first-load initialization runs now
    /// instead of waiting for [`SurfaceEvent::LoadedData`].
    pub fn new<S: VideoSurface + ?Sized>(config: ControlsConfig, surface: &mut S) -> Self {
        let device = config.device_class();
        let strategy = FullscreenStrategy::detect(config.fullscreen);
        let clock = FrameClock::resolve(config.frame_clock, config.display_refresh_available);
        let slider_color = parse_color(&config.slider_color).unwrap_or_else(|| {
            tracing::warn!(color = %config.slider_color, "unknown slider color, using default");
            parse_color(DEFAULT_SLIDER_COLOR).unwrap_or(Color::from_rgb(1.0, 0.0, 0.0))
        });
        let looping = config.looping.unwrap_or(true);

        let mut controls = Self {
            id: config.container_id(),
            video_id: config.video_id.clone(),
            fps: FrameRate::new(config.fps),
            play_on_load: config.play_on_load,
            looping,
            start_dwell: config.start_dwell,
            end_dwell: config.end_dwell,
            slider_color,
            device,
            layout: ControlsLayout::new(&config, device),
            loaded_ui: false,
            play_button: PlayButton::Play,
            scrubber: Scrubber::default(),
            update_loop: UpdateLoop::new(clock),
            speed: SpeedToggle::default(),
            fullscreen: FullscreenState::new(strategy),
            captures: CaptureTimes::new(config.capture_times, config.start_time_ms),
            capture_label: String::new(),
            keys_down: KeysDown::default(),
            pointer_down: false,
            bar_visible: false,
            bar_width: None,
            surface_size: None,
            viewport: None,
            z_index: DEFAULT_CONTROLS_Z_INDEX,
            last_tick: Instant::now(),
            disposed: false,
        };

        surface.set_looping(looping);
        if controls.play_on_load {
            surface.play();
        }

        tracing::info!(
            id = %controls.id,
            video = %controls.video_id,
            fps = controls.fps.value(),
            ?strategy,
            ?clock,
            ?device,
            "controls mounted"
        );

        if surface.ready_state() > ReadyState::HaveCurrentData {
            controls.on_loaded_data(surface);
        }

        controls
    }

    // ---------------------------------------------------------------------
    // Public operations
    // ---------------------------------------------------------------------

    /// Replaces the per-frame capture time labels.
    pub fn set_capture_times(&mut self, capture_times: Vec<String>) {
        self.captures.set_labels(capture_times);
    }

    #[must_use]
    pub fn duration<S: VideoSurface + ?Sized>(&self, surface: &S) -> f64 {
        surface.duration()
    }

    #[must_use]
    pub fn current_time<S: VideoSurface + ?Sized>(&self, surface: &S) -> f64 {
        surface.current_time()
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps.value()
    }

    #[must_use]
    pub fn num_frames<S: VideoSurface + ?Sized>(&self, surface: &S) -> u32 {
        frame_index::frame_count(surface.duration(), self.fps)
    }

    #[must_use]
    pub fn src<'s, S: VideoSurface + ?Sized>(&self, surface: &'s S) -> &'s str {
        surface.src()
    }

    #[must_use]
    pub fn is_paused<S: VideoSurface + ?Sized>(&self, surface: &S) -> bool {
        surface.is_paused()
    }

    /// Switches the surface to a new source and resets the scrubber.
    pub fn load_new_video<S: VideoSurface + ?Sized>(&mut self, options: LoadOptions, surface: &mut S) {
        surface.set_src(&options.src);
        if let Some(fps) = options.fps {
            self.fps = FrameRate::new(fps);
        }

        self.scrubber.set_value(0);

        if let Some(play_on_load) = options.play_on_load {
            self.play_on_load = play_on_load;
        }
        if let Some(looping) = options.looping {
            self.looping = looping;
            surface.set_looping(looping);
        }

        if self.play_on_load {
            surface.load();
        }

        self.captures.reset();
        self.capture_label.clear();
        self.set_initial_button_state();

        tracing::info!(id = %self.id, src = %options.src, fps = self.fps.value(), "new video loaded");
    }

    /// Presses the play/pause button.
    pub fn toggle_play_pause<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) {
        match self.play_button {
            PlayButton::Play => {
                self.play(surface);
            }
            PlayButton::Pause => {
                self.pause(surface);
            }
        }
    }

    /// Starts playback and the update loop. Returns `false` if the button
    /// already showed playback as running.
    pub fn play<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.play_button == PlayButton::Pause {
            return false;
        }
        self.play_button = PlayButton::Pause;
        surface.play();
        self.update_loop.request();
        true
    }

    /// Pauses playback and cancels the update loop. Returns `false` if the
    /// button already showed playback as paused.
    pub fn pause<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.play_button == PlayButton::Play {
            return false;
        }
        self.play_button = PlayButton::Play;
        surface.pause();
        self.update_loop.cancel();
        true
    }

    /// Detaches the controls: cancels the update loop and ignores any
    /// further messages. Returns `false` if already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.disposed = true;
        self.update_loop.cancel();
        self.keys_down.release();
        self.pointer_down = false;
        tracing::debug!(id = %self.id, "controls disposed");
        true
    }

    // ---------------------------------------------------------------------
    // Event handling
    // ---------------------------------------------------------------------

    pub fn update<S: VideoSurface + ?Sized>(&mut self, message: Message, surface: &mut S) -> Effect {
        if self.disposed {
            return Effect::None;
        }

        match message {
            Message::TogglePlayback | Message::Surface(SurfaceEvent::Clicked) => {
                self.toggle_play_pause(surface);
            }
            Message::Scrub(value) => {
                let frame = if value.is_finite() && value > 0.0 {
                    value.round() as u32
                } else {
                    0
                };
                if self.pointer_down {
                    self.scrubber.drag_start(surface);
                    self.scrubber.drag_move(frame, self.fps, surface);
                    self.render_current_time(surface);
                } else {
                    self.step_to_frame(frame, surface);
                }
            }
            Message::ScrubReleased => {
                if self.scrubber.is_dragging() {
                    self.scrubber.drag_stop(surface);
                }
            }
            Message::PointerPressed => self.pointer_down = true,
            Message::PointerReleased => {
                self.pointer_down = false;
                // The slider reports no release for ctrl+click resets.
                if self.scrubber.is_dragging() {
                    self.scrubber.drag_stop(surface);
                }
            }
            Message::SpeedPressed(preset) => {
                let now = Instant::now();
                self.last_tick = now;
                if let Some(rate) = self.speed.press(preset, now) {
                    surface.set_playback_rate(rate);
                }
            }
            Message::ToggleFullscreen => return self.handle_fullscreen(),
            Message::FullscreenChanged => {
                self.z_index = self
                    .fullscreen
                    .on_fullscreen_changed(self.device.is_mobile());
            }
            Message::KeyPressed(key) => self.on_key_pressed(key, surface),
            Message::KeyReleased => self.keys_down.release(),
            Message::ViewportResized(size) => {
                self.viewport = Some(size);
                self.fullscreen
                    .on_viewport_resized(size, self.layout.bar_height);
            }
            Message::Surface(SurfaceEvent::LoadedData) => self.on_loaded_data(surface),
            Message::Surface(SurfaceEvent::Resized(size)) => self.on_surface_resized(Some(size)),
            Message::Tick(now) => {
                self.last_tick = now;
                self.speed.tick(now);
                if self.update_loop.should_update(surface) {
                    self.update_time_controls(surface);
                }
            }
        }

        Effect::None
    }

    /// Tick sources needed right now: the update loop while running, and
    /// the frame clock while a speed toggle animates.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.disposed {
            return Subscription::none();
        }

        let animation = if self.speed.is_animating() && !self.update_loop.is_running() {
            self.update_loop.clock().subscription()
        } else {
            Subscription::none()
        };

        Subscription::batch([self.update_loop.subscription(), animation]).map(Message::Tick)
    }

    fn on_loaded_data<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) {
        if !self.loaded_ui {
            self.init_ui(surface);
        }
        self.scrubber
            .set_max(frame_index::max_frame_index(surface.duration(), self.fps));

        if self.play_on_load && surface.is_paused() {
            if self.play_button == PlayButton::Pause {
                surface.play();
            } else {
                self.toggle_play_pause(surface);
            }
        }

        self.on_surface_resized(self.surface_size);
        self.update_loop.request();
    }

    fn init_ui<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) {
        self.loaded_ui = true;
        self.scrubber
            .set_max(frame_index::max_frame_index(surface.duration(), self.fps));
        self.render_current_time(surface);
        self.set_initial_button_state();

        if !surface.has_explicit_size() {
            self.fullscreen.set_max_size(true);
        }

        tracing::debug!(
            id = %self.id,
            frames = self.scrubber.max().saturating_add(1),
            "controls initialized"
        );
    }

    fn set_initial_button_state(&mut self) {
        self.play_button = if self.play_on_load {
            PlayButton::Pause
        } else {
            PlayButton::Play
        };
    }

    fn on_surface_resized(&mut self, size: Option<Size>) {
        if let Some(size) = size {
            self.surface_size = Some(size);
            self.bar_width = Some(size.width);
        }
        self.bar_visible = true;
    }

    fn on_key_pressed<S: VideoSurface + ?Sized>(&mut self, key: Key, surface: &mut S) {
        match keyboard::action_for(&key) {
            Some(KeyAction::TogglePlayPause) => self.toggle_play_pause(surface),
            Some(KeyAction::Step(direction)) => {
                self.scrubber.set_focused(true);
                let target = self.scrubber.stepped(direction);
                self.step_to_frame(target, surface);
            }
            Some(KeyAction::JumpToStart) => {
                self.pause_for_jump(surface);
                surface.set_current_time(0.0);
                self.update_time_controls(surface);
            }
            Some(KeyAction::JumpToEnd) => {
                self.pause_for_jump(surface);
                surface.set_current_time(surface.duration());
                self.update_time_controls(surface);
            }
            None => {}
        }
        self.keys_down.press(key);
    }

    /// Seeks to `frame` as a complete drag, so playback resumes if it was
    /// running.
    fn step_to_frame<S: VideoSurface + ?Sized>(&mut self, frame: u32, surface: &mut S) {
        if self.scrubber.is_dragging() {
            self.scrubber.drag_move(frame, self.fps, surface);
        } else {
            self.scrubber.drag_start(surface);
            self.scrubber.drag_move(frame, self.fps, surface);
            self.scrubber.drag_stop(surface);
        }
        self.render_current_time(surface);
    }

    fn pause_for_jump<S: VideoSurface + ?Sized>(&mut self, surface: &mut S) {
        if surface.is_paused() {
            return;
        }
        if !self.pause(surface) {
            surface.pause();
        }
    }

    fn handle_fullscreen(&mut self) -> Effect {
        match self
            .fullscreen
            .toggle(self.viewport, self.layout.bar_height)
        {
            FullscreenRequest::Enter => Effect::EnterFullscreen,
            FullscreenRequest::Exit => Effect::ExitFullscreen,
            FullscreenRequest::Handled => {
                tracing::debug!(fill = self.fullscreen.is_fill_screen(), "fill-screen toggled");
                Effect::None
            }
        }
    }

    /// Moves the scrubber to the surface's time and refreshes the readout.
    fn update_time_controls<S: VideoSurface + ?Sized>(&mut self, surface: &S) {
        let frame = frame_index::time_to_frame(surface.current_time(), self.fps, self.scrubber.max());
        self.scrubber.set_value(frame);
        self.render_current_time(surface);
    }

    fn render_current_time<S: VideoSurface + ?Sized>(&mut self, surface: &S) {
        if !self.layout.show_timestamps {
            return;
        }
        let duration = surface::known_duration(surface);
        if let Some(label) =
            self.captures
                .next_label(surface.current_time(), duration, self.scrubber.value())
        {
            self.capture_label = label;
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    #[must_use]
    pub fn play_on_load(&self) -> bool {
        self.play_on_load
    }

    #[must_use]
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Reserved dwell times `(start, end)` in seconds.
    #[must_use]
    pub fn dwell(&self) -> (f64, f64) {
        (self.start_dwell, self.end_dwell)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded_ui
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn play_button(&self) -> PlayButton {
        self.play_button
    }

    #[must_use]
    pub fn scrubber(&self) -> &Scrubber {
        &self.scrubber
    }

    #[must_use]
    pub fn loop_state(&self) -> LoopState {
        self.update_loop.state()
    }

    #[must_use]
    pub fn speed(&self) -> &SpeedToggle {
        &self.speed
    }

    #[must_use]
    pub fn fullscreen(&self) -> &FullscreenState {
        &self.fullscreen
    }

    #[must_use]
    pub fn layout(&self) -> &ControlsLayout {
        &self.layout
    }

    #[must_use]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Capture time currently shown in the readout.
    #[must_use]
    pub fn capture_time_label(&self) -> &str {
        &self.capture_label
    }

    #[must_use]
    pub fn keys_down(&self) -> &[Key] {
        self.keys_down.keys()
    }

    /// Whether the controls bar is shown; hidden until the surface reports
    /// a size or its first data.
    #[must_use]
    pub fn is_bar_visible(&self) -> bool {
        self.bar_visible
    }

    #[must_use]
    pub fn bar_width(&self) -> Option<f32> {
        self.bar_width
    }

    /// Stacking order of the controls bar.
    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[must_use]
    pub fn slider_color(&self) -> Color {
        self.slider_color
    }
}
