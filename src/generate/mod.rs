/// Image generation module
///
/// This module runs one generation cycle end to end:
/// - Composing the request prompt and calling the primary endpoint (client.rs)
/// - Synthesizing a deterministic placeholder when the primary fails
///   (placeholder.rs)

pub mod client;
pub mod placeholder;

use std::time::Duration;

use rand::Rng;

use crate::state::data::{GenerationOutcome, GenerationSnapshot, ImageSource, Style};
use client::ImagenClient;

/// Simulated latency before the fallback result is produced
const FALLBACK_DELAY: Duration = Duration::from_secs(2);

/// Placeholder seeds are drawn from [0, 100_000)
const SEED_SPACE: u32 = 100_000;

/// Append the style and quality suffix to the user's prompt
pub fn compose_prompt(prompt: &str, style: Style) -> String {
    format!("{}, {} style, high quality, minimalist", prompt, style.label())
}

/// Run one generation cycle for the given snapshot.
///
/// The primary endpoint is tried exactly once; any failure there is
/// logged and silently recovered by the placeholder fallback after a
/// fixed delay. The fallback cannot fail, so the `Err` arm only exists
/// for failures escaping both paths and surfaces as a generic message.
pub async fn run(
    client: ImagenClient,
    snapshot: GenerationSnapshot,
) -> Result<GenerationOutcome, String> {
    let composed = compose_prompt(&snapshot.prompt, snapshot.style);
    let source = match client.generate(&composed, snapshot.ratio).await {
        Ok(payload) => ImageSource::from_png_base64(&payload),
        Err(err) => {
            log::warn!("primary generation failed ({err}); switching to placeholder");
            tokio::time::sleep(FALLBACK_DELAY).await;
            ImageSource::Placeholder {
                seed: rand::thread_rng().gen_range(0..SEED_SPACE),
                width: snapshot.ratio.width(),
                height: snapshot.ratio.height(),
            }
        }
    };
    Ok(GenerationOutcome {
        prompt: snapshot.prompt,
        style: snapshot.style,
        source,
    })
}
