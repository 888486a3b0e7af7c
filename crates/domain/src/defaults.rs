/// Sites redirected on a fresh install.
pub const DEFAULT_BLOCKED_SITES: [&str; 7] = [
    "facebook.com",
    "instagram.com",
    "x.com",
    "twitter.com",
    "tiktok.com",
    "reddit.com",
    "youtube.com",
];

/// Destinations seeded on a fresh install.
pub const DEFAULT_DESTINATIONS: [&str; 4] = [
    "https://www.google.com/",
    "https://www.duckduckgo.com/",
    "https://www.bing.com/",
    "https://www.ecosia.org/",
];

pub fn default_blocked_sites() -> Vec<String> {
    DEFAULT_BLOCKED_SITES.iter().map(|s| s.to_string()).collect()
}

pub fn default_destinations() -> Vec<String> {
    DEFAULT_DESTINATIONS.iter().map(|s| s.to_string()).collect()
}
