mod presence;
mod prompt;
mod seed_weights;

use serde::{Deserialize, Serialize};

pub use presence::Presence;
pub use prompt::prompt_to_string;
pub use seed_weights::{seed_weights_to_string, string_to_seed_weights, validate_seed_weights};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationType {
    #[serde(rename = "txt2img", alias = "text-to-image")]
    TextToImage,
    #[serde(rename = "img2img", alias = "image-to-image")]
    ImageToImage,
    #[serde(rename = "inpainting")]
    Inpainting,
    #[serde(rename = "outpainting")]
    Outpainting,
    #[serde(rename = "gfpgan")]
    Gfpgan,
    #[serde(rename = "esrgan")]
    Esrgan,
    #[serde(rename = "codeformer")]
    Codeformer,
    #[serde(rename = "embiggen")]
    Embiggen,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromptItem {
    #[serde(rename = "prompt")]
    pub text: String,
    pub weight: f64,
}

/// Either a flat prompt string or an ordered list of weighted terms.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PromptInput {
    Text(String),
    Structured(Vec<PromptItem>),
}

impl PromptInput {
    pub fn is_empty(&self) -> bool {
        match self {
            PromptInput::Text(s) => s.is_empty(),
            PromptInput::Structured(items) => items.is_empty(),
        }
    }

    pub fn to_prompt_string(&self) -> String {
        match self {
            PromptInput::Text(s) => s.clone(),
            PromptInput::Structured(items) => prompt_to_string(items),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeedWeightPair {
    pub seed: i64,
    pub weight: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageCategory {
    Result,
    User,
}

/// A gallery image as the backend reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub uuid: String,
    pub url: String,
    pub mtime: f64,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ImageCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ImageMetadata {
    #[serde(rename = "type")]
    pub kind: Option<GenerationType>,
    pub sampler: Option<String>,
    pub prompt: Option<PromptInput>,
    pub seed: Option<i64>,
    pub variations: Option<Vec<SeedWeightPair>>,
    pub steps: Option<u32>,
    pub cfg_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub threshold: Presence<f32>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub perlin: Presence<f32>,
    pub seamless: Option<bool>,
    pub hires_fix: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub strength: Option<f32>,
    pub fit: Option<bool>,
    pub init_image_path: Option<String>,
    pub mask_image_path: Option<String>,
}

impl ImageMetadata {
    pub fn is_image_to_image(&self) -> bool {
        matches!(self.kind, Some(GenerationType::ImageToImage))
    }
}

/// Generation parameters recovered from a previously generated image.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub model: Option<String>,
    pub model_id: Option<String>,
    pub model_hash: Option<String>,
    pub app_id: Option<String>,
    pub app_version: Option<String>,
    #[serde(default)]
    pub image: ImageMetadata,
}
