//! Video Modal
//!
//! Turns a catalog entry's hosting URL into an autoplaying embed URL and
//! tracks whether the player overlay is showing.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::Catalog;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

static SHORT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"youtu\.be/([a-zA-Z0-9_-]+)").expect("valid short-link pattern")
});

static WATCH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([a-zA-Z0-9_-]+)").expect("valid watch pattern"));

/// Derive a playable embed URL from a hosting URL.
///
/// `youtu.be/<id>` and `youtube.com/watch?v=<id>` become
/// `https://www.youtube.com/embed/<id>`; anything else is kept as is.
/// `?autoplay=1` is always appended.
pub fn embed_url(source: &str) -> String {
    let pattern = if source.contains("youtu.be/") {
        Some(&*SHORT_LINK)
    } else if source.contains("youtube.com/watch") {
        Some(&*WATCH_PARAM)
    } else {
        None
    };

    let embedded = pattern
        .and_then(|re| re.captures(source))
        .map(|caps| format!("{EMBED_BASE}{}", &caps[1]));

    format!("{}?autoplay=1", embedded.as_deref().unwrap_or(source))
}

/// Where a click that may close the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The dimmed area around the player.
    Backdrop,
    /// Anywhere inside the player surface other than the close control.
    Player,
    /// The explicit close button.
    CloseControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Playing {
    video_id: u32,
    embed_url: String,
}

/// Player overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoModal {
    playing: Option<Playing>,
}

impl VideoModal {
    /// Show the film with the given id. Unknown ids leave the modal untouched.
    pub fn open(&mut self, video_id: u32, catalog: &Catalog) -> bool {
        let Some(video) = catalog.find(video_id) else {
            tracing::debug!(video_id, "no such video, ignoring");
            return false;
        };

        self.playing = Some(Playing {
            video_id,
            embed_url: embed_url(&video.video_url),
        });
        true
    }

    /// Hide the modal and clear the player, unless the click came from inside
    /// the player surface. Returns whether the click was honored.
    pub fn close(&mut self, origin: ClickOrigin) -> bool {
        if origin == ClickOrigin::Player {
            return false;
        }
        self.playing = None;
        true
    }

    pub fn is_active(&self) -> bool {
        self.playing.is_some()
    }

    pub fn video_id(&self) -> Option<u32> {
        self.playing.as_ref().map(|p| p.video_id)
    }

    /// The player source; empty while hidden.
    pub fn embed_url(&self) -> &str {
        self.playing.as_ref().map_or("", |p| p.embed_url.as_str())
    }
}
