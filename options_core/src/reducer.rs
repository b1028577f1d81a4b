use crate::action::{OptionsAction, Parameter, TabSelector};
use crate::merge;
use crate::state::OptionsState;
use crate::tabs::tab_index;

/// Computes the state that follows `state` once `action` is applied.
pub fn reduce(state: &OptionsState, action: OptionsAction) -> OptionsState {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}

fn apply(state: &mut OptionsState, action: OptionsAction) {
    match action {
        OptionsAction::SetPrompt(prompt) => state.prompt = prompt.to_prompt_string(),
        OptionsAction::SetIterations(v) => state.set_parameter(Parameter::Iterations(v)),
        OptionsAction::SetSteps(v) => state.set_parameter(Parameter::Steps(v)),
        OptionsAction::SetCfgScale(v) => state.set_parameter(Parameter::CfgScale(v)),
        OptionsAction::SetThreshold(v) => state.set_parameter(Parameter::Threshold(v)),
        OptionsAction::SetPerlin(v) => state.set_parameter(Parameter::Perlin(v)),
        OptionsAction::SetHeight(v) => state.set_parameter(Parameter::Height(v)),
        OptionsAction::SetWidth(v) => state.set_parameter(Parameter::Width(v)),
        OptionsAction::SetSampler(v) => state.set_parameter(Parameter::Sampler(v)),
        OptionsAction::SetSeed(v) => state.set_parameter(Parameter::Seed(v)),
        OptionsAction::ResetSeed => state.seed = OptionsState::UNSET_SEED,
        OptionsAction::SetImg2imgStrength(v) => state.set_parameter(Parameter::Img2imgStrength(v)),
        OptionsAction::SetFacetoolStrength(v) => {
            state.set_parameter(Parameter::FacetoolStrength(v))
        }
        OptionsAction::SetFacetoolType(v) => state.set_parameter(Parameter::FacetoolType(v)),
        OptionsAction::SetCodeformerFidelity(v) => {
            state.set_parameter(Parameter::CodeformerFidelity(v))
        }
        OptionsAction::SetUpscalingLevel(v) => state.set_parameter(Parameter::UpscalingLevel(v)),
        OptionsAction::SetUpscalingStrength(v) => {
            state.set_parameter(Parameter::UpscalingStrength(v))
        }
        OptionsAction::SetMaskPath(v) => state.set_parameter(Parameter::MaskPath(v)),
        OptionsAction::SetSeamless(v) => state.set_parameter(Parameter::Seamless(v)),
        OptionsAction::SetHiresFix(v) => state.set_parameter(Parameter::HiresFix(v)),
        OptionsAction::SetShouldFitToWidthHeight(v) => {
            state.set_parameter(Parameter::ShouldFitToWidthHeight(v))
        }
        OptionsAction::SetParameter(p) => state.set_parameter(p),
        OptionsAction::SetShouldGenerateVariations(v) => {
            state.set_parameter(Parameter::ShouldGenerateVariations(v))
        }
        OptionsAction::SetVariationAmount(v) => state.set_parameter(Parameter::VariationAmount(v)),
        OptionsAction::SetSeedWeights(v) => state.set_parameter(Parameter::SeedWeights(v)),
        OptionsAction::SetAllTextToImageParameters(meta) => {
            merge::apply_text_to_image(state, &meta.image)
        }
        OptionsAction::SetAllImageToImageParameters(meta) => {
            merge::apply_image_to_image(state, &meta.image)
        }
        OptionsAction::SetAllParameters(meta) => {
            merge::apply_image_to_image(state, &meta.image);
            merge::apply_text_to_image(state, &meta.image);
        }
        OptionsAction::ResetOptionsState => *state = OptionsState::default(),
        OptionsAction::SetShouldRunFacetool(v) => {
            state.set_parameter(Parameter::ShouldRunFacetool(v))
        }
        OptionsAction::SetShouldRunEsrgan(v) => state.set_parameter(Parameter::ShouldRunEsrgan(v)),
        OptionsAction::SetShouldRandomizeSeed(v) => {
            state.set_parameter(Parameter::ShouldRandomizeSeed(v))
        }
        OptionsAction::SetShowAdvancedOptions(v) => {
            state.set_parameter(Parameter::ShowAdvancedOptions(v))
        }
        OptionsAction::SetActiveTab(selector) => state.active_tab = resolve_tab(selector),
        OptionsAction::SetShouldShowImageDetails(v) => {
            state.set_parameter(Parameter::ShouldShowImageDetails(v))
        }
        OptionsAction::SetShowDualDisplay(v) => state.set_parameter(Parameter::ShowDualDisplay(v)),
        OptionsAction::SetInitialImage(image) => state.set_parameter(Parameter::InitialImage(image)),
        OptionsAction::ClearInitialImage => state.initial_image = None,
        OptionsAction::SetShouldPinOptionsPanel(v) => {
            state.set_parameter(Parameter::ShouldPinOptionsPanel(v))
        }
        OptionsAction::SetShouldShowOptionsPanel(v) => {
            state.set_parameter(Parameter::ShouldShowOptionsPanel(v))
        }
        OptionsAction::SetOptionsPanelScrollPosition(v) => {
            state.set_parameter(Parameter::OptionsPanelScrollPosition(v))
        }
        OptionsAction::SetShouldHoldOptionsPanelOpen(v) => {
            state.set_parameter(Parameter::ShouldHoldOptionsPanelOpen(v))
        }
        OptionsAction::SetShouldLoopback(v) => state.set_parameter(Parameter::ShouldLoopback(v)),
    }
}

fn resolve_tab(selector: TabSelector) -> i32 {
    match selector {
        TabSelector::Index(index) => index,
        TabSelector::Name(name) => {
            let index = tab_index(&name);
            if index < 0 {
                tracing::warn!(tab = %name, "unknown tab name; activeTab set to -1");
            }
            index
        }
    }
}

impl OptionsState {
    /// Replaces the field named by `param`. Assigning a seed always turns off
    /// seed randomization, whichever action carried it.
    pub fn set_parameter(&mut self, param: Parameter) {
        match param {
            Parameter::Prompt(v) => self.prompt = v,
            Parameter::Iterations(v) => self.iterations = v,
            Parameter::Steps(v) => self.steps = v,
            Parameter::CfgScale(v) => self.cfg_scale = v,
            Parameter::Height(v) => self.height = v,
            Parameter::Width(v) => self.width = v,
            Parameter::Sampler(v) => self.sampler = v,
            Parameter::Threshold(v) => self.threshold = v,
            Parameter::Perlin(v) => self.perlin = v,
            Parameter::Seed(v) => {
                self.seed = v;
                self.should_randomize_seed = false;
            }
            Parameter::Img2imgStrength(v) => self.img2img_strength = v,
            Parameter::FacetoolType(v) => self.facetool_type = v,
            Parameter::FacetoolStrength(v) => self.facetool_strength = v,
            Parameter::CodeformerFidelity(v) => self.codeformer_fidelity = v,
            Parameter::UpscalingLevel(v) => self.upscaling_level = v,
            Parameter::UpscalingStrength(v) => self.upscaling_strength = v,
            Parameter::InitialImage(v) => self.initial_image = Some(v),
            Parameter::MaskPath(v) => self.mask_path = v,
            Parameter::Seamless(v) => self.seamless = v,
            Parameter::HiresFix(v) => self.hires_fix = v,
            Parameter::ShouldFitToWidthHeight(v) => self.should_fit_to_width_height = v,
            Parameter::ShouldGenerateVariations(v) => self.should_generate_variations = v,
            Parameter::VariationAmount(v) => self.variation_amount = v,
            Parameter::SeedWeights(v) => self.seed_weights = v,
            Parameter::ShouldRunEsrgan(v) => self.should_run_esrgan = v,
            Parameter::ShouldRunFacetool(v) => self.should_run_facetool = v,
            Parameter::ShouldRandomizeSeed(v) => self.should_randomize_seed = v,
            Parameter::ShowAdvancedOptions(v) => self.show_advanced_options = v,
            Parameter::ActiveTab(v) => self.active_tab = v,
            Parameter::ShouldShowImageDetails(v) => self.should_show_image_details = v,
            Parameter::ShowDualDisplay(v) => self.show_dual_display = v,
            Parameter::ShouldShowOptionsPanel(v) => self.should_show_options_panel = v,
            Parameter::ShouldPinOptionsPanel(v) => self.should_pin_options_panel = v,
            Parameter::OptionsPanelScrollPosition(v) => self.options_panel_scroll_position = v,
            Parameter::ShouldHoldOptionsPanelOpen(v) => self.should_hold_options_panel_open = v,
            Parameter::ShouldLoopback(v) => self.should_loopback = v,
        }
    }
}
