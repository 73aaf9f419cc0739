use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Render the placeholder image for a seed at the given size.
///
/// The same seed and size always produce the same pixels within one
/// build of the application. Rendering cannot fail: this is the path of
/// last resort when the primary endpoint is unavailable.
pub fn render(seed: u32, width: u32, height: u32) -> RgbaImage {
    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    let top = random_tone(&mut rng);
    let bottom = random_tone(&mut rng);

    let span = height.max(1) as f32;
    RgbaImage::from_fn(width, height, |x, y| {
        let t = y as f32 / span;
        let grain = grain(seed, x, y);
        Rgba([
            mix(top[0], bottom[0], t).wrapping_add(grain),
            mix(top[1], bottom[1], t).wrapping_add(grain),
            mix(top[2], bottom[2], t).wrapping_add(grain),
            255,
        ])
    })
}

/// A muted color, kept away from pure black and white
fn random_tone(rng: &mut StdRng) -> [u8; 3] {
    [
        rng.gen_range(40..=215),
        rng.gen_range(40..=215),
        rng.gen_range(40..=215),
    ]
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}

/// Low-amplitude deterministic noise so large flat areas read as texture
fn grain(seed: u32, x: u32, y: u32) -> u8 {
    let mut h = seed ^ x.wrapping_mul(0x9e37_79b9) ^ y.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    (h % 5) as u8
}
