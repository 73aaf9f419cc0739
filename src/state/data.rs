/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the generation layer and the UI layer.

use chrono::{DateTime, Utc};

/// Prefix of an inline PNG reference built from the endpoint's base64 payload
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Fixed prompt suggestions backing the "Inspire" action
pub const SAMPLE_PROMPTS: [&str; 5] = [
    "A single white flower in a glass vase, studio lighting",
    "Foggy mountain landscape at dawn, minimalist composition",
    "Abstract geometric architecture, concrete and glass",
    "Portrait of a woman with freckles, soft natural light, black and white",
    "A calm ocean horizon, pastel colors, oil painting style",
];

/// Visual style applied to a generation request.
/// Exactly one style is selected at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Realistic,
    Anime,
    Digital,
    ThreeD,
    Painting,
}

impl Style {
    /// All styles, in picker order. The first is the default.
    pub const ALL: [Style; 5] = [
        Style::Realistic,
        Style::Anime,
        Style::Digital,
        Style::ThreeD,
        Style::Painting,
    ];

    /// Display label, also appended to the composed prompt
    pub fn label(self) -> &'static str {
        match self {
            Style::Realistic => "Realistic",
            Style::Anime => "Anime",
            Style::Digital => "Digital",
            Style::ThreeD => "3D",
            Style::Painting => "Painting",
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Realistic
    }
}

/// Output aspect ratio of a generation request.
/// Exactly one ratio is selected at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
}

impl AspectRatio {
    /// All ratios, in picker order. The first is the default.
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Landscape,
    ];

    /// Wire code sent to the endpoint, doubling as the picker label
    pub fn api_code(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
        }
    }

    /// Target pixel width
    pub fn width(self) -> u32 {
        match self {
            AspectRatio::Square | AspectRatio::Portrait => 1024,
            AspectRatio::Landscape => 1536,
        }
    }

    /// Target pixel height
    pub fn height(self) -> u32 {
        match self {
            AspectRatio::Square | AspectRatio::Landscape => 1024,
            AspectRatio::Portrait => 1536,
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

/// Where a generated image's pixels come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline PNG returned by the primary endpoint, as a data URL
    DataUrl(String),
    /// Deterministic placeholder synthesized from a seed at the given size
    Placeholder { seed: u32, width: u32, height: u32 },
}

impl ImageSource {
    /// Wrap a base64-encoded PNG payload from the endpoint into a data URL
    pub fn from_png_base64(encoded: &str) -> Self {
        ImageSource::DataUrl(format!("{DATA_URL_PREFIX}{encoded}"))
    }

    /// Canonical reference string for this source
    pub fn reference(&self) -> String {
        match self {
            ImageSource::DataUrl(url) => url.clone(),
            ImageSource::Placeholder {
                seed,
                width,
                height,
            } => format!("placeholder://{seed}/{width}x{height}"),
        }
    }
}

/// A single completed generation in the session gallery
///
/// Entries are immutable once created and are never deleted,
/// only accumulated newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// Unique, monotonically increasing id within the session
    pub id: u64,
    /// Image pixels or the recipe to produce them
    pub source: ImageSource,
    /// The prompt as the user typed it (not the composed variant)
    pub prompt: String,
    /// Label of the style selected when the request was made
    pub style: String,
    /// Completion time, used for the newest-first ordering
    pub created_at: DateTime<Utc>,
}

impl GeneratedImage {
    /// The entry every fresh session starts with
    pub fn seed_entry() -> Self {
        GeneratedImage {
            id: 1,
            source: ImageSource::Placeholder {
                seed: 9157,
                width: 1024,
                height: 1024,
            },
            prompt: "A solitary chair in an empty room, dramatic lighting".to_string(),
            style: Style::Realistic.label().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Immutable copy of the inputs to one generation cycle, taken at the
/// moment the request is issued so later selection changes cannot leak in
#[derive(Debug, Clone)]
pub struct GenerationSnapshot {
    pub prompt: String,
    pub style: Style,
    pub ratio: AspectRatio,
}

/// Result of one generation cycle, primary or fallback
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub prompt: String,
    pub style: Style,
    pub source: ImageSource,
}
