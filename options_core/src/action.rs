use crate::state::{FacetoolType, InitialImage, UpscalingLevel};
use invoke_protocol::{Metadata, PromptInput};
use serde::{Deserialize, Serialize};

/// A single-field update, keyed by the state field it replaces.
///
/// Wire form: `{"key": "cfgScale", "value": 9.0}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum Parameter {
    Prompt(String),
    Iterations(u32),
    Steps(u32),
    CfgScale(f32),
    Height(u32),
    Width(u32),
    Sampler(String),
    Threshold(f32),
    Perlin(f32),
    /// Also clears `shouldRandomizeSeed`.
    Seed(i64),
    Img2imgStrength(f32),
    FacetoolType(FacetoolType),
    FacetoolStrength(f32),
    CodeformerFidelity(f32),
    UpscalingLevel(UpscalingLevel),
    UpscalingStrength(f32),
    InitialImage(InitialImage),
    MaskPath(String),
    Seamless(bool),
    HiresFix(bool),
    ShouldFitToWidthHeight(bool),
    ShouldGenerateVariations(bool),
    VariationAmount(f32),
    SeedWeights(String),
    #[serde(rename = "shouldRunESRGAN")]
    ShouldRunEsrgan(bool),
    ShouldRunFacetool(bool),
    ShouldRandomizeSeed(bool),
    ShowAdvancedOptions(bool),
    ActiveTab(i32),
    ShouldShowImageDetails(bool),
    ShowDualDisplay(bool),
    ShouldShowOptionsPanel(bool),
    ShouldPinOptionsPanel(bool),
    OptionsPanelScrollPosition(u32),
    ShouldHoldOptionsPanelOpen(bool),
    ShouldLoopback(bool),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TabSelector {
    Index(i32),
    Name(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum OptionsAction {
    SetPrompt(PromptInput),
    SetIterations(u32),
    SetSteps(u32),
    SetCfgScale(f32),
    SetThreshold(f32),
    SetPerlin(f32),
    SetHeight(u32),
    SetWidth(u32),
    SetSampler(String),
    SetSeed(i64),
    ResetSeed,
    SetImg2imgStrength(f32),
    SetFacetoolStrength(f32),
    SetFacetoolType(FacetoolType),
    SetCodeformerFidelity(f32),
    SetUpscalingLevel(UpscalingLevel),
    SetUpscalingStrength(f32),
    SetMaskPath(String),
    SetSeamless(bool),
    SetHiresFix(bool),
    SetShouldFitToWidthHeight(bool),
    SetParameter(Parameter),
    SetShouldGenerateVariations(bool),
    SetVariationAmount(f32),
    SetSeedWeights(String),
    SetAllTextToImageParameters(Metadata),
    SetAllImageToImageParameters(Metadata),
    SetAllParameters(Metadata),
    ResetOptionsState,
    SetShouldRunFacetool(bool),
    #[serde(rename = "setShouldRunESRGAN")]
    SetShouldRunEsrgan(bool),
    SetShouldRandomizeSeed(bool),
    SetShowAdvancedOptions(bool),
    SetActiveTab(TabSelector),
    SetShouldShowImageDetails(bool),
    SetShowDualDisplay(bool),
    SetInitialImage(InitialImage),
    ClearInitialImage,
    SetShouldPinOptionsPanel(bool),
    SetShouldShowOptionsPanel(bool),
    SetOptionsPanelScrollPosition(u32),
    SetShouldHoldOptionsPanelOpen(bool),
    SetShouldLoopback(bool),
}

impl OptionsAction {
    pub fn name(&self) -> &'static str {
        match self {
            OptionsAction::SetPrompt(_) => "setPrompt",
            OptionsAction::SetIterations(_) => "setIterations",
            OptionsAction::SetSteps(_) => "setSteps",
            OptionsAction::SetCfgScale(_) => "setCfgScale",
            OptionsAction::SetThreshold(_) => "setThreshold",
            OptionsAction::SetPerlin(_) => "setPerlin",
            OptionsAction::SetHeight(_) => "setHeight",
            OptionsAction::SetWidth(_) => "setWidth",
            OptionsAction::SetSampler(_) => "setSampler",
            OptionsAction::SetSeed(_) => "setSeed",
            OptionsAction::ResetSeed => "resetSeed",
            OptionsAction::SetImg2imgStrength(_) => "setImg2imgStrength",
            OptionsAction::SetFacetoolStrength(_) => "setFacetoolStrength",
            OptionsAction::SetFacetoolType(_) => "setFacetoolType",
            OptionsAction::SetCodeformerFidelity(_) => "setCodeformerFidelity",
            OptionsAction::SetUpscalingLevel(_) => "setUpscalingLevel",
            OptionsAction::SetUpscalingStrength(_) => "setUpscalingStrength",
            OptionsAction::SetMaskPath(_) => "setMaskPath",
            OptionsAction::SetSeamless(_) => "setSeamless",
            OptionsAction::SetHiresFix(_) => "setHiresFix",
            OptionsAction::SetShouldFitToWidthHeight(_) => "setShouldFitToWidthHeight",
            OptionsAction::SetParameter(_) => "setParameter",
            OptionsAction::SetShouldGenerateVariations(_) => "setShouldGenerateVariations",
            OptionsAction::SetVariationAmount(_) => "setVariationAmount",
            OptionsAction::SetSeedWeights(_) => "setSeedWeights",
            OptionsAction::SetAllTextToImageParameters(_) => "setAllTextToImageParameters",
            OptionsAction::SetAllImageToImageParameters(_) => "setAllImageToImageParameters",
            OptionsAction::SetAllParameters(_) => "setAllParameters",
            OptionsAction::ResetOptionsState => "resetOptionsState",
            OptionsAction::SetShouldRunFacetool(_) => "setShouldRunFacetool",
            OptionsAction::SetShouldRunEsrgan(_) => "setShouldRunESRGAN",
            OptionsAction::SetShouldRandomizeSeed(_) => "setShouldRandomizeSeed",
            OptionsAction::SetShowAdvancedOptions(_) => "setShowAdvancedOptions",
            OptionsAction::SetActiveTab(_) => "setActiveTab",
            OptionsAction::SetShouldShowImageDetails(_) => "setShouldShowImageDetails",
            OptionsAction::SetShowDualDisplay(_) => "setShowDualDisplay",
            OptionsAction::SetInitialImage(_) => "setInitialImage",
            OptionsAction::ClearInitialImage => "clearInitialImage",
            OptionsAction::SetShouldPinOptionsPanel(_) => "setShouldPinOptionsPanel",
            OptionsAction::SetShouldShowOptionsPanel(_) => "setShouldShowOptionsPanel",
            OptionsAction::SetOptionsPanelScrollPosition(_) => "setOptionsPanelScrollPosition",
            OptionsAction::SetShouldHoldOptionsPanelOpen(_) => "setShouldHoldOptionsPanelOpen",
            OptionsAction::SetShouldLoopback(_) => "setShouldLoopback",
        }
    }
}
