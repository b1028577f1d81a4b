use invoke_protocol::ImageRef;
use serde::{Deserialize, Serialize};

pub const FACETOOL_TYPES: &[FacetoolType] = &[FacetoolType::Gfpgan, FacetoolType::Codeformer];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacetoolType {
    #[default]
    Gfpgan,
    Codeformer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum UpscalingLevel {
    X2,
    #[default]
    X4,
}

impl UpscalingLevel {
    pub fn factor(self) -> u8 {
        match self {
            UpscalingLevel::X2 => 2,
            UpscalingLevel::X4 => 4,
        }
    }
}

impl From<UpscalingLevel> for u8 {
    fn from(level: UpscalingLevel) -> u8 {
        level.factor()
    }
}

impl TryFrom<u8> for UpscalingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(UpscalingLevel::X2),
            4 => Ok(UpscalingLevel::X4),
            other => Err(format!("unsupported upscaling level: {other} (expected 2 or 4)")),
        }
    }
}

/// Source image for image-to-image runs: a gallery image or a bare path/URL.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InitialImage {
    Image(ImageRef),
    Path(String),
}

impl InitialImage {
    pub fn url(&self) -> &str {
        match self {
            InitialImage::Image(image) => &image.url,
            InitialImage::Path(path) => path,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionsState {
    pub prompt: String,
    pub iterations: u32,
    pub steps: u32,
    pub cfg_scale: f32,
    pub height: u32,
    pub width: u32,
    pub sampler: String,
    pub threshold: f32,
    pub perlin: f32,
    pub seed: i64,
    pub img2img_strength: f32,
    pub facetool_type: FacetoolType,
    pub facetool_strength: f32,
    pub codeformer_fidelity: f32,
    pub upscaling_level: UpscalingLevel,
    pub upscaling_strength: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_image: Option<InitialImage>,
    pub mask_path: String,
    pub seamless: bool,
    pub hires_fix: bool,
    pub should_fit_to_width_height: bool,
    pub should_generate_variations: bool,
    pub variation_amount: f32,
    pub seed_weights: String,
    #[serde(rename = "shouldRunESRGAN")]
    pub should_run_esrgan: bool,
    pub should_run_facetool: bool,
    pub should_randomize_seed: bool,
    pub show_advanced_options: bool,
    pub active_tab: i32,
    pub should_show_image_details: bool,
    pub show_dual_display: bool,
    pub should_show_options_panel: bool,
    pub should_pin_options_panel: bool,
    pub options_panel_scroll_position: u32,
    pub should_hold_options_panel_open: bool,
    pub should_loopback: bool,
}

impl OptionsState {
    /// Seed value meaning "let the backend pick one".
    pub const UNSET_SEED: i64 = -1;
}

impl Default for OptionsState {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            iterations: 1,
            steps: 50,
            cfg_scale: 7.5,
            height: 512,
            width: 512,
            sampler: "k_lms".to_string(),
            threshold: 0.0,
            perlin: 0.0,
            seed: 0,
            img2img_strength: 0.75,
            facetool_type: FacetoolType::Gfpgan,
            facetool_strength: 0.8,
            codeformer_fidelity: 0.75,
            upscaling_level: UpscalingLevel::X4,
            upscaling_strength: 0.75,
            initial_image: None,
            mask_path: String::new(),
            seamless: false,
            hires_fix: false,
            should_fit_to_width_height: true,
            should_generate_variations: false,
            variation_amount: 0.1,
            seed_weights: String::new(),
            should_run_esrgan: false,
            should_run_facetool: false,
            should_randomize_seed: true,
            show_advanced_options: true,
            active_tab: 0,
            should_show_image_details: false,
            show_dual_display: true,
            should_show_options_panel: true,
            should_pin_options_panel: true,
            options_panel_scroll_position: 0,
            should_hold_options_panel_open: false,
            should_loopback: false,
        }
    }
}
