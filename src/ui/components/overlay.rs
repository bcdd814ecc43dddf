//! PlayerOverlay - the borderless always-on-top player window
//!
//! Owns the [`Player`] and is the only place it is mutated. Key presses,
//! file drops, OS open-file events and the auto-advance poll all reach it on
//! the UI loop, so playback state never needs a lock.

use gpui::{
    div, point, prelude::*, px, size, App, AsyncApp, Bounds, Context, ExternalPaths, FocusHandle,
    IntoElement, KeyDownEvent, MouseButton, Render, SharedString, Subscription, Timer, WeakEntity,
    Window, WindowBackgroundAppearance, WindowBounds, WindowHandle, WindowKind, WindowOptions,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::status_line::{render_status_line, StatusLineProps};
use crate::actions::take_pending_files;
use crate::audio::RodioOutput;
use crate::core::{command_for_keystroke, Player, PlayerError, PlayerSettings, TickOutcome};
use crate::ui::Theme;

pub struct PlayerOverlay {
    player: Player<RodioOutput>,
    /// Focus handle for receiving key presses
    focus_handle: FocusHandle,
    /// Grab focus on the next render (after creation and after opening a file)
    needs_focus: bool,
    /// Set once the app starts quitting; ends the poll loop
    shutting_down: bool,
    _quit_subscription: Subscription,
}

impl PlayerOverlay {
    pub fn new(cx: &mut Context<Self>, settings: PlayerSettings) -> Self {
        let quit_subscription = cx.on_app_quit(|this: &mut Self, _cx| {
            log::info!("Quitting, stopping playback");
            this.shutting_down = true;
            this.player.shutdown();
            async {}
        });

        Self {
            player: Player::new(RodioOutput::new(), settings),
            focus_handle: cx.focus_handle(),
            needs_focus: true,
            shutting_down: false,
            _quit_subscription: quit_subscription,
        }
    }

    /// Open the overlay window near the top of the primary display
    ///
    /// If `initial_file` is given it is opened exactly like an OS open-file
    /// event. Returns None if the window could not be created.
    pub fn open(cx: &mut App, initial_file: Option<PathBuf>) -> Option<WindowHandle<Self>> {
        let settings = cx.global::<PlayerSettings>().clone();
        let overlay_size = size(px(settings.overlay_width), px(settings.overlay_height));

        let bounds = match cx.primary_display() {
            Some(display) => {
                let screen = display.bounds();
                let x = screen.origin.x + (screen.size.width - overlay_size.width) / 2.0;
                let y = screen.origin.y + px(settings.overlay_top_margin);
                Bounds::new(point(x, y), overlay_size)
            }
            None => Bounds::centered(None, overlay_size, cx),
        };

        let poll_interval = settings.poll_interval;
        let result = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: None,
                focus: true,
                show: true,
                // Floating level, stays above normal windows
                kind: WindowKind::PopUp,
                is_movable: true,
                window_background: WindowBackgroundAppearance::Opaque,
                ..Default::default()
            },
            |_window, cx| {
                cx.new(|cx| {
                    let mut overlay = PlayerOverlay::new(cx, settings);
                    if let Some(path) = initial_file {
                        overlay.open_path(&path, cx);
                    }
                    Self::start_polling(poll_interval, cx);
                    overlay
                })
            },
        );

        match result {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("Could not open overlay window: {}", e);
                None
            }
        }
    }

    /// Handle an open-file event for `path`
    ///
    /// Returns true if the file was opened and is now playing.
    pub fn open_path(&mut self, path: &Path, cx: &mut Context<Self>) -> bool {
        log::info!("Opening {}", path.display());
        match self.player.open_file(path) {
            Ok(()) => {
                self.needs_focus = true;
                cx.activate(true);
                cx.notify();
                true
            }
            Err(e) => {
                report_error(&e);
                false
            }
        }
    }

    /// Map a key press to a transport command and run it
    ///
    /// Returns false for keys the overlay does not handle.
    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) -> bool {
        let keystroke = &event.keystroke;
        let Some(command) = command_for_keystroke(&keystroke.key, keystroke.modifiers.modified())
        else {
            return false;
        };

        if let Err(e) = self.player.apply(command) {
            report_error(&e);
        }
        log::debug!("Key {:?} -> {:?}, now {:?}", keystroke.key, command, self.player.status());
        cx.notify();
        true
    }

    /// One pass of the UI-loop poll: pending open-file events, then auto-advance
    ///
    /// Returns false once the loop should stop.
    fn poll(&mut self, cx: &mut Context<Self>) -> bool {
        if self.shutting_down {
            return false;
        }

        for path in take_pending_files() {
            self.open_path(&path, cx);
        }

        match self.player.tick() {
            Ok(TickOutcome::Idle) => {}
            Ok(outcome) => {
                log::debug!("Auto-advance ({:?})", outcome);
                cx.notify();
            }
            Err(e) => report_error(&e),
        }

        true
    }

    /// Start the fixed-period poll loop on the UI executor
    fn start_polling(poll_interval: Duration, cx: &mut Context<Self>) {
        cx.spawn(move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                loop {
                    Timer::after(poll_interval).await;

                    // Stops when the view is gone or the app is quitting
                    let keep_polling = this
                        .update(&mut async_cx, |this, cx| this.poll(cx))
                        .unwrap_or(false);
                    if !keep_polling {
                        break;
                    }
                }
                log::debug!("Poll loop stopped");
            }
        })
        .detach();
    }
}

/// Log a player error at a level matching its severity
fn report_error(err: &PlayerError) {
    match err {
        e if e.is_benign() => log::debug!("{}", e),
        PlayerError::EngineLoad { .. } => log::error!("{}", err),
        _ => log::warn!("{}", err),
    }
}

impl Render for PlayerOverlay {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.needs_focus {
            self.needs_focus = false;
            self.focus_handle.focus(window);
        }

        let theme = Theme::overlay();
        let settings = self.player.settings();
        let status_line = render_status_line(
            StatusLineProps {
                text: SharedString::from(self.player.status_line().to_string()),
                font_family: settings.font_family,
                font_size: settings.font_size,
            },
            &theme,
        );

        let on_key_down = cx.listener(|this, event: &KeyDownEvent, _window, cx| {
            if this.handle_key(event, cx) {
                cx.stop_propagation();
            }
        });

        // Files dropped on the overlay behave like "Open With"
        let on_external_drop = cx.listener(|this, paths: &ExternalPaths, _window, cx| {
            if let Some(path) = paths.paths().first() {
                this.open_path(path, cx);
            }
        });

        div()
            .key_context("PlayerOverlay")
            .track_focus(&self.focus_handle)
            .on_key_down(on_key_down)
            .on_drop(on_external_drop)
            .drag_over::<ExternalPaths>(move |style, _, _, _| style.bg(theme.drop_highlight))
            // Dragging the background moves the borderless window
            .on_mouse_down(MouseButton::Left, |_event, window, _cx| {
                window.start_window_move();
            })
            .size_full()
            .bg(theme.bg)
            .child(status_line)
    }
}
