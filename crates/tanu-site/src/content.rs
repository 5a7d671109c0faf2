//! Static Content
//!
//! Copy and contact details shown across the pages.

use crate::animation::Delay;

pub const STUDIO_NAME: &str = "Tanu Videography Studio";
pub const STUDIO_TAGLINE: &str = "Cinematic Wedding & Event Films";
pub const FOUNDER: &str = "Abhay Pratap Singh";

pub const PHONE_DISPLAY: &str = "+91 7704866570";
pub const PHONE_HREF: &str = "tel:+917704866570";
pub const EMAIL: &str = "contact@tanuvideography.studio";
pub const EMAIL_HREF: &str = "mailto:contact@tanuvideography.studio";
pub const WHATSAPP_URL: &str = "https://wa.me/917704866570";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/TANU_VIDEOGRAPHY_STUDIO";

/// A colored tag pill on a feature card.
pub struct Tag {
    pub text: &'static str,
    pub color: &'static str,
}

/// A service offered on the home page.
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: Vec<Tag>,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub delay: Delay,
}

pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

/// A one-tap contact shortcut.
pub struct QuickContact {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub gradient: &'static str,
}

/// A large contact card on the contact page.
pub struct ContactCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    pub href: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub external: bool,
    pub delay: Option<Delay>,
}

pub fn feature_cards() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            icon: "💍",
            title: "Wedding Cinematography",
            description: "Your love story deserves to be told beautifully. Cinematic wedding \
                          films that capture every precious moment and emotion.",
            tags: vec![
                Tag { text: "Cinematic", color: "tag-rose" },
                Tag { text: "4K Quality", color: "tag-pink" },
                Tag { text: "Romantic", color: "tag-purple" },
            ],
            gradient_from: "from-rose-600",
            gradient_to: "to-pink-600",
            delay: Delay::from_millis(400),
        },
        FeatureCard {
            icon: "🎉",
            title: "Event Coverage",
            description: "From corporate events to celebrations, we capture every important \
                          moment with professional expertise and creativity.",
            tags: vec![
                Tag { text: "Professional", color: "tag-amber" },
                Tag { text: "Multi-Cam", color: "tag-yellow" },
                Tag { text: "Live Edit", color: "tag-orange" },
            ],
            gradient_from: "from-amber-600",
            gradient_to: "to-yellow-600",
            delay: Delay::from_millis(500),
        },
        FeatureCard {
            icon: "🎬",
            title: "Post-Production Magic",
            description: "Professional color grading, sound design, and editing to create \
                          stunning films that you'll treasure forever.",
            tags: vec![
                Tag { text: "Color Grade", color: "tag-purple" },
                Tag { text: "Audio Mix", color: "tag-blue" },
                Tag { text: "Fast Delivery", color: "tag-indigo" },
            ],
            gradient_from: "from-purple-600",
            gradient_to: "to-blue-600",
            delay: Delay::from_millis(600),
        },
    ]
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard { value: "100+", label: "Weddings Shot", gradient: "stat-gradient-rose" },
        StatCard { value: "300+", label: "Happy Clients", gradient: "stat-gradient-amber" },
        StatCard { value: "5 Years", label: "Experience", gradient: "stat-gradient-purple" },
        StatCard { value: "4K , Log", label: "Cinema Quality", gradient: "stat-gradient-green" },
    ]
}

pub fn quick_contacts() -> Vec<QuickContact> {
    vec![
        QuickContact {
            icon: "📱",
            label: "Call / WhatsApp",
            value: PHONE_DISPLAY,
            href: PHONE_HREF,
            gradient: "gradient-green",
        },
        QuickContact {
            icon: "📧",
            label: "Email Us",
            value: "Contact@tanuvideography.studio",
            href: EMAIL_HREF,
            gradient: "gradient-blue",
        },
        QuickContact {
            icon: "💬",
            label: "WhatsApp Chat",
            value: "Chat Now",
            href: WHATSAPP_URL,
            gradient: "gradient-emerald",
        },
    ]
}

pub fn contact_cards() -> Vec<ContactCard> {
    vec![
        ContactCard {
            icon: "📱",
            title: "Call Me",
            value: PHONE_DISPLAY,
            note: "Available 24/7",
            href: PHONE_HREF,
            accent: "green",
            background: "gradient-green",
            external: false,
            delay: None,
        },
        ContactCard {
            icon: "📧",
            title: "Email Me",
            value: EMAIL,
            note: "Quick response",
            href: EMAIL_HREF,
            accent: "blue",
            background: "gradient-blue",
            external: false,
            delay: Some(Delay::from_millis(100)),
        },
        ContactCard {
            icon: "💬",
            title: "WhatsApp",
            value: PHONE_DISPLAY,
            note: "Instant chat",
            href: WHATSAPP_URL,
            accent: "emerald",
            background: "gradient-green",
            external: true,
            delay: Some(Delay::from_millis(200)),
        },
    ]
}
