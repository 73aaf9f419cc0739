use rand::seq::SliceRandom;
use rand::Rng;
use chrono::Utc;

use super::data::{
    AspectRatio, GeneratedImage, GenerationOutcome, GenerationSnapshot, Style, SAMPLE_PROMPTS,
};

/// In-memory session state for the studio.
///
/// This is a pure state machine: it performs no I/O and owns every
/// invariant of the data model. The generation cycle runs
/// begin_generation → (complete_generation | fail_generation); the
/// in-progress flag returned by `is_generating` is the mutual exclusion
/// for cycles — `begin_generation` refuses to start a second one.
pub struct Session {
    /// Prompt text as currently typed
    prompt: String,
    /// Selected style (exclusive)
    style: Style,
    /// Selected aspect ratio (exclusive)
    ratio: AspectRatio,
    /// True from begin_generation until the cycle settles
    generating: bool,
    /// All completed generations, newest first; never shrinks
    gallery: Vec<GeneratedImage>,
    /// Id of the entry shown in the result view, if any
    current: Option<u64>,
    /// User-visible message from a failed cycle
    error: Option<String>,
    /// Whether the gallery overlay panel is open
    gallery_open: bool,
    /// Next id to hand out
    next_id: u64,
}

impl Session {
    /// Create a fresh session holding only the seed gallery entry
    pub fn new() -> Self {
        let seed = GeneratedImage::seed_entry();
        let next_id = seed.id + 1;
        Session {
            prompt: String::new(),
            style: Style::default(),
            ratio: AspectRatio::default(),
            generating: false,
            gallery: vec![seed],
            current: None,
            error: None,
            gallery_open: false,
            next_id,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// All entries, newest first
    pub fn gallery(&self) -> &[GeneratedImage] {
        &self.gallery
    }

    pub fn gallery_open(&self) -> bool {
        self.gallery_open
    }

    /// The entry shown in the result view, if one is selected
    pub fn current(&self) -> Option<&GeneratedImage> {
        let id = self.current?;
        self.gallery.iter().find(|img| img.id == id)
    }

    /// Replace the prompt text. No validation; emptiness is
    /// checked when a generation is requested.
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Replace the prompt with a random pick from the fixed sample list
    pub fn inspire<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(pick) = SAMPLE_PROMPTS.choose(rng) {
            self.prompt = pick.to_string();
        }
    }

    pub fn select_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn select_ratio(&mut self, ratio: AspectRatio) {
        self.ratio = ratio;
    }

    /// Start a generation cycle.
    ///
    /// Returns a snapshot of the inputs frozen at this moment, or `None`
    /// when the trimmed prompt is empty or a cycle is already in flight —
    /// in both cases nothing changes.
    pub fn begin_generation(&mut self) -> Option<GenerationSnapshot> {
        if self.generating || self.prompt.trim().is_empty() {
            return None;
        }
        self.generating = true;
        self.error = None;
        self.current = None;
        Some(GenerationSnapshot {
            prompt: self.prompt.clone(),
            style: self.style,
            ratio: self.ratio,
        })
    }

    /// Settle the in-flight cycle with a result: a new entry is prepended
    /// to the gallery and becomes the current result
    pub fn complete_generation(&mut self, outcome: GenerationOutcome) -> &GeneratedImage {
        let entry = GeneratedImage {
            id: self.next_id,
            source: outcome.source,
            prompt: outcome.prompt,
            style: outcome.style.label().to_string(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.current = Some(entry.id);
        self.gallery.insert(0, entry);
        self.generating = false;
        self.error = None;
        &self.gallery[0]
    }

    /// Settle the in-flight cycle with a user-visible error and no new entry
    pub fn fail_generation(&mut self, message: String) {
        self.generating = false;
        self.error = Some(message);
    }

    /// Show the given gallery entry in the result view and close the
    /// overlay. Returns false (and changes nothing) for an unknown id.
    pub fn view_image(&mut self, id: u64) -> bool {
        if !self.gallery.iter().any(|img| img.id == id) {
            return false;
        }
        self.current = Some(id);
        self.gallery_open = false;
        true
    }

    /// Leave the result view and return to the editor
    pub fn close_result(&mut self) {
        self.current = None;
    }

    pub fn toggle_gallery(&mut self) {
        self.gallery_open = !self.gallery_open;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ImageSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn outcome_for(snapshot: &GenerationSnapshot, source: ImageSource) -> GenerationOutcome {
        GenerationOutcome {
            prompt: snapshot.prompt.clone(),
            style: snapshot.style,
            source,
        }
    }

    #[test]
    fn test_new_session_holds_seed_entry() {
        let session = Session::new();
        assert_eq!(session.gallery().len(), 1);
        assert_eq!(session.gallery()[0].id, 1);
        assert!(session.current().is_none());
        assert!(!session.is_generating());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_generate_on_empty_prompt_is_a_noop() {
        let mut session = Session::new();
        assert!(session.begin_generation().is_none());
        session.set_prompt("   \t ".to_string());
        assert!(session.begin_generation().is_none());

        assert!(!session.is_generating());
        assert!(session.error().is_none());
        assert_eq!(session.gallery().len(), 1);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut session = Session::new();
        session.select_style(Style::Anime);
        session.select_style(Style::Painting);
        assert_eq!(session.style(), Style::Painting);

        session.select_ratio(AspectRatio::Portrait);
        session.select_ratio(AspectRatio::Landscape);
        assert_eq!(session.ratio(), AspectRatio::Landscape);
    }

    #[test]
    fn test_begin_generation_freezes_inputs() {
        let mut session = Session::new();
        session.set_prompt("A red door in a blue wall".to_string());
        session.select_style(Style::Anime);
        session.select_ratio(AspectRatio::Landscape);

        let snapshot = session.begin_generation().expect("prompt is non-empty");
        assert!(session.is_generating());

        // Selection changes while the cycle is in flight must not leak in.
        session.select_style(Style::Digital);
        session.select_ratio(AspectRatio::Square);

        assert_eq!(snapshot.prompt, "A red door in a blue wall");
        assert_eq!(snapshot.style, Style::Anime);
        assert_eq!(snapshot.ratio, AspectRatio::Landscape);

        let entry =
            session.complete_generation(outcome_for(&snapshot, ImageSource::from_png_base64("Zm9v")));
        assert_eq!(entry.style, "Anime");
        assert_eq!(entry.prompt, "A red door in a blue wall");
        assert_eq!(entry.source.reference(), "data:image/png;base64,Zm9v");
    }

    #[test]
    fn test_no_reentrant_generation() {
        let mut session = Session::new();
        session.set_prompt("first".to_string());
        let snapshot = session.begin_generation().unwrap();

        session.set_prompt("second".to_string());
        assert!(session.begin_generation().is_none());

        session.complete_generation(outcome_for(
            &snapshot,
            ImageSource::from_png_base64("AAAA"),
        ));
        assert!(!session.is_generating());
        assert!(session.begin_generation().is_some());
    }

    #[test]
    fn test_gallery_is_newest_first() {
        let mut session = Session::new();
        for prompt in ["one", "two", "three"] {
            session.set_prompt(prompt.to_string());
            let snapshot = session.begin_generation().unwrap();
            session.complete_generation(outcome_for(
                &snapshot,
                ImageSource::from_png_base64("AAAA"),
            ));
        }

        let prompts: Vec<&str> = session
            .gallery()
            .iter()
            .map(|img| img.prompt.as_str())
            .collect();
        assert_eq!(
            prompts,
            ["three", "two", "one", "A solitary chair in an empty room, dramatic lighting"]
        );

        // Ids stay unique and monotonically decreasing front-to-back.
        let ids: Vec<u64> = session.gallery().iter().map(|img| img.id).collect();
        assert_eq!(ids, [4, 3, 2, 1]);

        // Completion times never increase front-to-back.
        let times: Vec<_> = session.gallery().iter().map(|img| img.created_at).collect();
        assert!(times.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_cycle_yields_entry_or_error_never_both() {
        let mut session = Session::new();
        session.set_prompt("a prompt".to_string());
        let snapshot = session.begin_generation().unwrap();
        session.complete_generation(outcome_for(
            &snapshot,
            ImageSource::from_png_base64("AAAA"),
        ));
        assert_eq!(session.gallery().len(), 2);
        assert!(session.error().is_none());
        assert!(!session.is_generating());

        session.set_prompt("another".to_string());
        session.begin_generation().unwrap();
        session.fail_generation("Error generating image.".to_string());
        assert_eq!(session.gallery().len(), 2);
        assert_eq!(session.error(), Some("Error generating image."));
        assert!(!session.is_generating());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_completion_sets_current_result() {
        let mut session = Session::new();
        session.set_prompt("a prompt".to_string());
        let snapshot = session.begin_generation().unwrap();
        let id = session
            .complete_generation(outcome_for(&snapshot, ImageSource::from_png_base64("AAAA")))
            .id;

        let current = session.current().expect("result should be current");
        assert_eq!(current.id, id);
    }

    #[test]
    fn test_view_image_and_close() {
        let mut session = Session::new();
        session.toggle_gallery();
        assert!(session.gallery_open());

        assert!(session.view_image(1));
        assert_eq!(session.current().map(|img| img.id), Some(1));
        assert!(!session.gallery_open(), "viewing closes the overlay");

        assert!(!session.view_image(999));
        assert_eq!(session.current().map(|img| img.id), Some(1));

        session.close_result();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_inspire_draws_from_sample_set() {
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            session.inspire(&mut rng);
            assert!(!session.prompt().is_empty());
            assert!(SAMPLE_PROMPTS.contains(&session.prompt()));
        }
    }

    #[test]
    fn test_fallback_outcome_matches_snapshot_ratio() {
        let mut session = Session::new();
        session.set_prompt("A red door in a blue wall".to_string());
        session.select_ratio(AspectRatio::Portrait);
        let snapshot = session.begin_generation().unwrap();

        let source = ImageSource::Placeholder {
            seed: 123,
            width: snapshot.ratio.width(),
            height: snapshot.ratio.height(),
        };
        let entry = session.complete_generation(outcome_for(&snapshot, source));

        assert!(matches!(
            entry.source,
            ImageSource::Placeholder {
                width: 1024,
                height: 1536,
                ..
            }
        ));
        assert!(session.error().is_none());
    }
}
