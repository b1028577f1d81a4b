use crate::state::{InitialImage, OptionsState};
use invoke_protocol::{seed_weights_to_string, ImageMetadata, Presence};

// Import rule: a field is copied only when the record carries a meaningful
// value (non-empty string or prompt list, non-zero number). Booleans are
// copied whenever present. threshold/perlin are the exception: a missing key
// resets to 0, while an explicit null or 0 leaves the current value alone.

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

fn non_zero_u32(v: Option<u32>) -> Option<u32> {
    v.filter(|v| *v != 0)
}

fn non_zero_f32(v: Option<f32>) -> Option<f32> {
    v.filter(|v| *v != 0.0)
}

fn zero_if_absent(target: &mut f32, source: Presence<f32>) {
    match source {
        Presence::Absent => *target = 0.0,
        Presence::Value(v) if v != 0.0 => *target = v,
        Presence::Value(_) | Presence::Null => {}
    }
}

pub(crate) fn apply_text_to_image(state: &mut OptionsState, image: &ImageMetadata) {
    match image.variations.as_deref() {
        Some(variations) if !variations.is_empty() => {
            state.seed_weights = seed_weights_to_string(variations);
            state.should_generate_variations = true;
        }
        _ => state.should_generate_variations = false,
    }

    if let Some(seed) = image.seed.filter(|s| *s != 0) {
        state.seed = seed;
        state.should_randomize_seed = false;
    }

    // An empty term list counts as no prompt.
    if let Some(prompt) = image.prompt.as_ref().filter(|p| !p.is_empty()) {
        state.prompt = prompt.to_prompt_string();
    }
    if let Some(sampler) = non_empty(&image.sampler) {
        state.sampler = sampler.to_string();
    }
    if let Some(steps) = non_zero_u32(image.steps) {
        state.steps = steps;
    }
    if let Some(cfg_scale) = non_zero_f32(image.cfg_scale) {
        state.cfg_scale = cfg_scale;
    }
    zero_if_absent(&mut state.threshold, image.threshold);
    zero_if_absent(&mut state.perlin, image.perlin);
    if let Some(seamless) = image.seamless {
        state.seamless = seamless;
    }
    if let Some(hires_fix) = image.hires_fix {
        state.hires_fix = hires_fix;
    }
    if let Some(width) = non_zero_u32(image.width) {
        state.width = width;
    }
    if let Some(height) = non_zero_u32(image.height) {
        state.height = height;
    }

    tracing::trace!(
        seed = state.seed,
        variations = state.should_generate_variations,
        "merged text-to-image parameters"
    );
}

pub(crate) fn apply_image_to_image(state: &mut OptionsState, image: &ImageMetadata) {
    if !image.is_image_to_image() {
        tracing::trace!(kind = ?image.kind, "not an image-to-image record; img2img fields kept");
        return;
    }

    if let Some(path) = non_empty(&image.init_image_path) {
        state.initial_image = Some(InitialImage::Path(path.to_string()));
    }
    if let Some(path) = non_empty(&image.mask_image_path) {
        state.mask_path = path.to_string();
    }
    if let Some(strength) = non_zero_f32(image.strength) {
        state.img2img_strength = strength;
    }
    if let Some(fit) = image.fit {
        state.should_fit_to_width_height = fit;
    }
}
