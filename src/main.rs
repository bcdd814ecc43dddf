//! MP3 Player - GPUI Application
//!
//! A minimal macOS overlay player: a borderless always-on-top strip that
//! plays the MP3 files of one folder in order, driven from the keyboard.

mod actions;
mod audio;
mod core;
mod logging;
#[cfg(test)]
mod test_fixtures;
mod ui;

use clap::Parser;
use gpui::{App, Application, KeyBinding, Menu, MenuItem};
use std::path::PathBuf;

use actions::{path_from_url, push_pending_file, Quit, ShowLogs};
use crate::core::{PlayerError, PlayerSettings};
use ui::components::PlayerOverlay;

#[derive(Parser, Debug)]
#[command(name = "MP3-Player", about = "Always-on-top overlay MP3 player")]
struct Args {
    /// MP3 file to play; its folder becomes the playlist
    path: Option<PathBuf>,
}

/// Build the application menus
fn build_menus() -> Vec<Menu> {
    vec![Menu {
        name: "MP3 Player".into(),
        items: vec![
            MenuItem::action("Show Logs", ShowLogs),
            MenuItem::separator(),
            MenuItem::action("Quit", Quit),
        ],
    }]
}

fn main() {
    logging::init_logging();
    let args = Args::parse();

    // A missing file on the command line is the one fatal startup error
    if let Some(path) = &args.path
        && !path.exists()
    {
        log::error!("{}", PlayerError::FileNotFound(path.clone()));
        std::process::exit(1);
    }

    let app = Application::new();

    // Finder "Open With" and drops on the dock icon
    app.on_open_urls(|urls| {
        for url in urls {
            match path_from_url(&url) {
                Some(path) => push_pending_file(path),
                None => log::warn!("Ignoring open request for {}", url),
            }
        }
    });

    app.run(move |cx: &mut App| {
        cx.set_global(PlayerSettings::default());

        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.on_action(|_: &ShowLogs, _cx| {
            if let Err(e) = logging::open_log_directory() {
                log::warn!("{}", e);
            }
        });

        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);
        cx.set_menus(build_menus());

        if PlayerOverlay::open(cx, args.path).is_none() {
            cx.quit();
            return;
        }

        // Single-window app: closing the overlay quits
        cx.on_window_closed(|cx| {
            cx.quit();
        })
        .detach();

        cx.activate(true);
    });
}
