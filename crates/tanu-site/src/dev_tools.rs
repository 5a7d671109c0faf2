//! Live Reload
//!
//! Debug builds watch the templates and public assets and push a `reload`
//! server-sent event to every open page after an edit.

use std::{
    convert::Infallible,
    path::{Path, PathBuf},
    pin::Pin,
    sync::mpsc::{Receiver, RecvTimeoutError},
    time::Duration,
};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, KeepAliveStream, Sse},
};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use tracing::{debug, error, info, warn};

use crate::{BUILD_VERSION, state::AppState};

/// Editor saves arrive as bursts; one reload per burst.
const SETTLE: Duration = Duration::from_millis(150);

type ReloadStream = Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>;

fn reload_event() -> Event {
    Event::default().event("reload").data(BUILD_VERSION)
}

/// SSE endpoint for live reload. Without a reloader the stream ends at once.
pub async fn livereload_handler(State(state): State<AppState>) -> Sse<KeepAliveStream<ReloadStream>> {
    let stream: ReloadStream = match state.reloader() {
        // A lagged receiver still missed a change, so it reloads too.
        Some(reloader) => Box::pin(
            BroadcastStream::new(reloader.subscribe()).map(|_| Ok(reload_event())),
        ),
        None => Box::pin(tokio_stream::empty()),
    };
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Whether a filesystem event should reload open pages.
///
/// Reads, editor scratch files and the release stylesheet written by the
/// build script are ignored.
fn triggers_reload(event: &notify::Event) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    event.paths.iter().any(|path| !is_scratch(path))
}

fn is_scratch(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return true;
    };
    name.starts_with(".#")
        || name.ends_with('~')
        || name.ends_with(".swp")
        || name.ends_with(".tmp")
        || name.ends_with(".min.css")
}

/// Watch `dirs` on a background thread and ping the reloader after each
/// settled burst of relevant changes.
pub fn spawn_file_watcher(state: AppState, dirs: Vec<PathBuf>) {
    std::thread::spawn(move || {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut watcher = match RecommendedWatcher::new(tx, notify::Config::default()) {
            Ok(watcher) => watcher,
            Err(e) => {
                error!("live reload disabled, watcher failed to start: {e}");
                return;
            }
        };

        for dir in dirs.iter().filter(|dir| dir.exists()) {
            match watcher.watch(dir, RecursiveMode::Recursive) {
                Ok(()) => info!(dir = %dir.display(), "watching for changes"),
                Err(e) => warn!(dir = %dir.display(), "cannot watch: {e}"),
            }
        }

        while wait_for_burst(&rx) {
            let pages = state
                .reloader()
                .map_or(0, |reloader| reloader.send(()).unwrap_or(0));
            debug!(pages, "reload sent");
        }
    });
}

/// Block until a relevant change, then drain events until the tree has been
/// quiet for [`SETTLE`]. Returns `false` once the watcher is gone.
fn wait_for_burst(rx: &Receiver<notify::Result<notify::Event>>) -> bool {
    loop {
        match rx.recv() {
            Ok(Ok(event)) if triggers_reload(&event) => break,
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!("watch error: {e}"),
            Err(_) => return false,
        }
    }
    loop {
        match rx.recv_timeout(SETTLE) {
            Ok(_) => {}
            Err(RecvTimeoutError::Timeout) => return true,
            Err(RecvTimeoutError::Disconnected) => return false,
        }
    }
}
