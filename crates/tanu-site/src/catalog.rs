//! Portfolio Catalog
//!
//! The fixed list of films shown on the portfolio page.

/// One portfolio film.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEntry {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub thumbnail: String,
    /// Where the film is hosted; turned into an embed URL by the modal.
    pub video_url: String,
    pub category: String,
    pub duration: String,
    pub tags: Vec<String>,
    /// Gradient classes used for the card overlay and badges.
    pub gradient: String,
}

impl VideoEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        thumbnail: impl Into<String>,
        video_url: impl Into<String>,
        category: impl Into<String>,
        duration: impl Into<String>,
        tags: &[&str],
        gradient: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            thumbnail: thumbnail.into(),
            video_url: video_url.into(),
            category: category.into(),
            duration: duration.into(),
            tags: tags.iter().map(ToString::to_string).collect(),
            gradient: gradient.into(),
        }
    }
}

/// Read-only collection of films, in display order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    videos: Vec<VideoEntry>,
}

impl Catalog {
    pub fn new(videos: Vec<VideoEntry>) -> Self {
        Self { videos }
    }

    /// The studio's published films.
    pub fn builtin() -> Self {
        Self::new(vec![
            VideoEntry::new(
                1,
                "Romantic Wedding Film",
                "Rahul & Priya",
                "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&q=80",
                "https://youtu.be/J-JcxmSP3fM",
                "Wedding",
                "4:32",
                &["4K", "Cinematic", "Drone"],
                "from-rose-500 to-pink-600",
            ),
            VideoEntry::new(
                2,
                "Grand Celebration",
                "Amit & Neha",
                "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800&q=80",
                "https://youtu.be/3I-PINTueA0",
                "Wedding",
                "5:18",
                &["4K", "Traditional", "Multi-Cam"],
                "from-amber-500 to-orange-600",
            ),
            VideoEntry::new(
                3,
                "Dreamy Pre-Wedding",
                "Vikram & Ananya",
                "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=800&q=80",
                "https://youtu.be/XnrLSoAOXxY",
                "Pre-Wedding",
                "3:45",
                &["4K", "Romantic", "Outdoor"],
                "from-purple-500 to-indigo-600",
            ),
        ])
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    pub fn find(&self, id: u32) -> Option<&VideoEntry> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
