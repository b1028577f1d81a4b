use options_core::protocol::Metadata;
use options_core::{reduce, InitialImage, OptionsAction, OptionsState};

fn metadata(raw: &str) -> Metadata {
    serde_json::from_str(raw).expect("valid metadata json")
}

fn prior() -> OptionsState {
    let mut state = OptionsState::default();
    state.prompt = "an old prompt".into();
    state.sampler = "ddim".into();
    state.seed = 31337;
    state.should_randomize_seed = true;
    state.threshold = 3.0;
    state.perlin = 0.7;
    state.should_generate_variations = true;
    state.seed_weights = "5:0.5".into();
    state.img2img_strength = 0.3;
    state.should_fit_to_width_height = false;
    state.mask_path = "old-mask.png".into();
    state
}

#[test]
fn image_to_image_import_touches_only_img2img_fields() {
    let before = prior();
    let meta = metadata(
        r#"{"image":{"type":"image-to-image","strength":0.5,"init_image_path":"a.png","fit":true}}"#,
    );

    let next = reduce(&before, OptionsAction::SetAllImageToImageParameters(meta));

    let mut expected = before.clone();
    expected.img2img_strength = 0.5;
    expected.initial_image = Some(InitialImage::Path("a.png".into()));
    expected.should_fit_to_width_height = true;
    assert_eq!(next, expected);
}

#[test]
fn image_to_image_import_ignores_other_modes() {
    let before = prior();
    for kind in ["txt2img", "inpainting", "esrgan"] {
        let raw = format!(
            r#"{{"image":{{"type":"{kind}","strength":0.9,"init_image_path":"b.png","mask_image_path":"m.png","fit":true}}}}"#
        );
        let next = reduce(&before, OptionsAction::SetAllImageToImageParameters(metadata(&raw)));
        assert_eq!(next, before, "{kind}");
    }

    let untyped = metadata(r#"{"image":{"strength":0.9,"init_image_path":"b.png"}}"#);
    assert_eq!(
        reduce(&before, OptionsAction::SetAllImageToImageParameters(untyped)),
        before
    );
}

#[test]
fn variations_enable_variation_mode_with_canonical_weights() {
    let meta = metadata(
        r#"{"image":{"type":"text-to-image","variations":[{"seed":1,"weight":0.2},{"seed":2,"weight":0.3}]}}"#,
    );
    let mut before = OptionsState::default();
    before.should_generate_variations = false;

    let next = reduce(&before, OptionsAction::SetAllTextToImageParameters(meta));
    assert!(next.should_generate_variations);
    assert_eq!(next.seed_weights, "1:0.2,2:0.3");
}

#[test]
fn missing_variations_always_disable_variation_mode() {
    let before = prior();
    for raw in [
        r#"{"image":{"type":"txt2img"}}"#,
        r#"{"image":{"type":"txt2img","variations":[]}}"#,
    ] {
        let next = reduce(&before, OptionsAction::SetAllTextToImageParameters(metadata(raw)));
        assert!(!next.should_generate_variations);
        assert_eq!(next.seed_weights, before.seed_weights);
    }
}

#[test]
fn absent_threshold_and_perlin_reset_to_zero_but_other_fields_stay() {
    let before = prior();
    let next = reduce(
        &before,
        OptionsAction::SetAllTextToImageParameters(metadata(r#"{"image":{"type":"txt2img"}}"#)),
    );
    assert_eq!(next.threshold, 0.0);
    assert_eq!(next.perlin, 0.0);
    assert_eq!(next.prompt, before.prompt);
    assert_eq!(next.sampler, before.sampler);
    assert_eq!(next.seed, before.seed);
    assert!(next.should_randomize_seed);
}

#[test]
fn explicit_zero_threshold_keeps_prior_value() {
    let before = prior();
    let next = reduce(
        &before,
        OptionsAction::SetAllTextToImageParameters(metadata(
            r#"{"image":{"threshold":0,"perlin":0.25}}"#,
        )),
    );
    assert_eq!(next.threshold, before.threshold);
    assert_eq!(next.perlin, 0.25);
}

#[test]
fn text_to_image_import_copies_present_fields() {
    let before = prior();
    let meta = metadata(
        r#"{"image":{
            "type":"txt2img",
            "sampler":"k_euler",
            "prompt":[{"prompt":"a harbor","weight":1},{"prompt":"fog","weight":0.4}],
            "seed":42,
            "steps":25,
            "cfg_scale":9.5,
            "threshold":1.5,
            "seamless":true,
            "hires_fix":false,
            "width":640,
            "height":448,
            "strength":0.1,
            "init_image_path":"ignored.png"
        }}"#,
    );
    let next = reduce(&before, OptionsAction::SetAllTextToImageParameters(meta));

    assert_eq!(next.sampler, "k_euler");
    assert_eq!(next.prompt, "a harbor:1 fog:0.4");
    assert_eq!(next.seed, 42);
    assert!(!next.should_randomize_seed);
    assert_eq!(next.steps, 25);
    assert_eq!(next.cfg_scale, 9.5);
    assert_eq!(next.threshold, 1.5);
    assert_eq!(next.perlin, 0.0);
    assert!(next.seamless);
    assert!(!next.hires_fix);
    assert_eq!((next.width, next.height), (640, 448));

    // img2img fields belong to the other import.
    assert_eq!(next.img2img_strength, before.img2img_strength);
    assert_eq!(next.initial_image, before.initial_image);
}

#[test]
fn zero_seed_and_empty_strings_are_treated_as_absent() {
    let before = prior();
    let next = reduce(
        &before,
        OptionsAction::SetAllTextToImageParameters(metadata(
            r#"{"image":{"seed":0,"sampler":"","prompt":"","steps":0,"width":0}}"#,
        )),
    );
    assert_eq!(next.seed, before.seed);
    assert!(next.should_randomize_seed);
    assert_eq!(next.sampler, before.sampler);
    assert_eq!(next.prompt, before.prompt);
    assert_eq!(next.steps, before.steps);
    assert_eq!(next.width, before.width);
}

#[test]
fn set_all_parameters_runs_both_imports_in_one_step() {
    let before = prior();
    let meta = metadata(
        r#"{"image":{
            "type":"img2img",
            "prompt":"a bridge",
            "seed":8,
            "strength":0.6,
            "fit":false,
            "init_image_path":"init.png",
            "mask_image_path":"mask.png"
        }}"#,
    );
    let next = reduce(&before, OptionsAction::SetAllParameters(meta));

    assert_eq!(next.prompt, "a bridge");
    assert_eq!(next.seed, 8);
    assert!(!next.should_randomize_seed);
    assert_eq!(next.img2img_strength, 0.6);
    assert!(!next.should_fit_to_width_height);
    assert_eq!(next.initial_image, Some(InitialImage::Path("init.png".into())));
    assert_eq!(next.mask_path, "mask.png");
    assert!(!next.should_generate_variations);
    assert_eq!(next.threshold, 0.0);
}

#[test]
fn set_all_parameters_skips_img2img_fields_for_text_records() {
    let before = prior();
    let meta = metadata(r#"{"image":{"type":"txt2img","strength":0.9,"mask_image_path":"m.png"}}"#);
    let next = reduce(&before, OptionsAction::SetAllParameters(meta));
    assert_eq!(next.img2img_strength, before.img2img_strength);
    assert_eq!(next.mask_path, before.mask_path);
}

#[test]
fn null_threshold_and_perlin_keep_prior_values() {
    let before = prior();
    let next = reduce(
        &before,
        OptionsAction::SetAllTextToImageParameters(metadata(
            r#"{"image":{"threshold":null,"perlin":null}}"#,
        )),
    );
    assert_eq!(next.threshold, 3.0);
    assert_eq!(next.perlin, 0.7);
}

#[test]
fn empty_prompt_term_list_keeps_prior_prompt() {
    let before = prior();
    let next = reduce(
        &before,
        OptionsAction::SetAllTextToImageParameters(metadata(r#"{"image":{"prompt":[]}}"#)),
    );
    assert_eq!(next.prompt, "an old prompt");
}
