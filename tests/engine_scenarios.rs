//! End-to-end engine scenarios
//!
//! Pins the documented behavior of the rule fold: default pass-through,
//! tiered severities, prescription-inferred rules, the light-sensitivity
//! weight override, and the accepted myopia/hyperopia coexistence.

use zed_vision::engine::{self, CursorShape};
use zed_vision::profile::{BaselineSettings, ColorVision, Condition, Prescription, VisualConditions};

fn evaluate(
    conditions: &VisualConditions,
    color_vision: ColorVision,
    prescription: &Prescription,
    baseline: &BaselineSettings,
) -> engine::Recommendations {
    engine::evaluate(conditions, color_vision, prescription, baseline)
}

#[test]
fn default_inputs_produce_untouched_settings() {
    let rec = evaluate(
        &VisualConditions::default(),
        ColorVision::None,
        &Prescription::default(),
        &BaselineSettings::default(),
    );

    assert_eq!(rec.font_size, 14);
    assert_eq!(rec.line_height, 1.5);
    assert_eq!(rec.font_weight, 400);
    assert_eq!(rec.cursor_shape, CursorShape::Bar);
    assert_eq!(rec.letter_spacing, 0.0);
    assert!(rec.explanations.is_empty());
    assert!(rec.font_recommendations.is_empty());
    assert!(rec.theme_recommendations.is_empty());
}

#[test]
fn myopia_flag_without_prescription_gives_mild_tier() {
    let conditions = VisualConditions::from_conditions(&[Condition::Myopia]);
    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &Prescription::default(),
        &BaselineSettings::default(),
    );

    assert_eq!(rec.font_size, 16);
    assert_eq!(rec.cursor_shape, CursorShape::Block);
    assert_eq!(rec.explanations.len(), 2);
    assert!(rec.explanations[0].contains("Mild myopia"));
    assert!(rec.explanations[1].contains("Block cursor"));
}

#[test]
fn prescription_inferred_astigmatism_fires_without_flags() {
    let rx = Prescription {
        right_axis: "120".to_string(),
        left_axis: "0".to_string(),
        right_cylinder: "-0.75".to_string(),
        left_cylinder: "-0.50".to_string(),
        ..Prescription::default()
    };

    let rec = evaluate(
        &VisualConditions::default(),
        ColorVision::None,
        &rx,
        &BaselineSettings::default(),
    );

    // severity = (0.75 + 0.50) / 2 = 0.625, below both tier cutoffs
    assert_eq!(rec.letter_spacing, 0.3);
    assert_eq!(rec.line_height, 1.6);
    assert_eq!(rec.font_size, 16);
    assert_eq!(
        rec.font_recommendations,
        vec![
            "IBM Plex Mono - excellent character distinction",
            "JetBrains Mono - wider spacing, clear shapes",
            "Fira Code - good default spacing",
            "Input Mono - customizable width variants",
        ]
    );
}

#[test]
fn high_myopia_prescription_reaches_22px() {
    let rx = Prescription {
        right_sphere: "-6.50".to_string(),
        left_sphere: "-6.00".to_string(),
        ..Prescription::default()
    };

    let rec = evaluate(
        &VisualConditions::default(),
        ColorVision::None,
        &rx,
        &BaselineSettings::default(),
    );

    assert_eq!(rec.font_size, 22);
    assert!(rec.explanations[0].contains("High myopia (-6.25D)"));
}

#[test]
fn light_sensitivity_forces_weight_400_over_blur_bump() {
    let conditions = VisualConditions::from_conditions(&[
        Condition::BlurGhosting,
        Condition::LightSensitivity,
    ]);
    let baseline = BaselineSettings {
        font_weight: 600,
        ..Default::default()
    };

    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &Prescription::default(),
        &baseline,
    );

    assert_eq!(rec.font_weight, 400);
    assert_eq!(rec.cursor_shape, CursorShape::Block);
    // Blur skipped its weight explanation; light sensitivity added its own
    assert!(rec
        .explanations
        .iter()
        .all(|e| !e.contains("Medium font weight")));
    assert!(rec
        .explanations
        .iter()
        .any(|e| e.contains("Light sensitivity")));
}

#[test]
fn blur_without_light_sensitivity_raises_weight_to_500() {
    let conditions = VisualConditions::from_conditions(&[Condition::BlurGhosting]);
    let baseline = BaselineSettings {
        font_size: 18,
        ..Default::default()
    };

    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &Prescription::default(),
        &baseline,
    );

    assert_eq!(rec.font_size, 19); // baseline + 1
    assert_eq!(rec.font_weight, 500);
    assert_eq!(rec.cursor_shape, CursorShape::Block);
}

#[test]
fn eye_strain_raises_relative_to_baseline() {
    let conditions = VisualConditions::from_conditions(&[Condition::EyeStrain]);
    let baseline = BaselineSettings {
        font_size: 20,
        line_height: 1.4,
        ..Default::default()
    };

    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &Prescription::default(),
        &baseline,
    );

    assert_eq!(rec.font_size, 21);
    assert_eq!(rec.line_height, 1.6);
}

#[test]
fn visual_crowding_floors_spacing_and_height() {
    let conditions = VisualConditions::from_conditions(&[Condition::VisualCrowding]);
    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &Prescription::default(),
        &BaselineSettings::default(),
    );

    assert_eq!(rec.letter_spacing, 0.5);
    assert_eq!(rec.line_height, 1.7);
    // No myopia/blur, so the cursor stays a bar
    assert_eq!(rec.cursor_shape, CursorShape::Bar);
}

#[test]
fn crowding_never_lowers_astigmatism_spacing() {
    // High astigmatism sets 0.6px; crowding's 0.5px floor must not pull it down
    let conditions = VisualConditions::from_conditions(&[Condition::VisualCrowding]);
    let rx = Prescription {
        right_cylinder: "-2.25".to_string(),
        left_cylinder: "-2.00".to_string(),
        ..Prescription::default()
    };

    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &rx,
        &BaselineSettings::default(),
    );

    assert_eq!(rec.letter_spacing, 0.6);
    assert_eq!(rec.line_height, 1.8);
}

#[test]
fn color_vision_variants_emit_fixed_theme_lists() {
    let cases = [
        (ColorVision::Deuteranopia, 4, "Solarized Dark"),
        (ColorVision::Protanopia, 2, "Solarized Dark"),
        (ColorVision::Tritanopia, 2, "Monokai"),
        (ColorVision::Achromatopsia, 1, "High Contrast"),
    ];

    for (variant, count, first) in cases {
        let rec = evaluate(
            &VisualConditions::default(),
            variant,
            &Prescription::default(),
            &BaselineSettings::default(),
        );
        assert_eq!(rec.theme_recommendations.len(), count, "{:?}", variant);
        assert_eq!(rec.theme_recommendations[0].name, first, "{:?}", variant);
        assert_eq!(rec.explanations.len(), 1, "{:?}", variant);
    }
}

// Clinically contradictory, but accepted input: both flags set means both
// rules fire. The engine does not second-guess the user.
#[test]
fn myopia_and_hyperopia_can_both_fire() {
    let conditions =
        VisualConditions::from_conditions(&[Condition::Myopia, Condition::Hyperopia]);
    let rec = evaluate(
        &conditions,
        ColorVision::None,
        &Prescription::default(),
        &BaselineSettings::default(),
    );

    assert!(rec.explanations.iter().any(|e| e.contains("myopia")));
    assert!(rec.explanations.iter().any(|e| e.contains("hyperopia")));
    assert_eq!(rec.explanations.len(), 4);
    // Hyperopia's 17px floor wins over myopia's 16px
    assert_eq!(rec.font_size, 17);
    assert_eq!(rec.line_height, 1.6);
    assert_eq!(rec.cursor_shape, CursorShape::Block);
}

#[test]
fn evaluation_is_deterministic() {
    let conditions = VisualConditions::from_conditions(&[
        Condition::Astigmatism,
        Condition::EyeStrain,
        Condition::LightSensitivity,
    ]);
    let rx = Prescription {
        right_sphere: "-2.00".to_string(),
        left_sphere: "-1.50".to_string(),
        right_cylinder: "-1.25".to_string(),
        left_cylinder: "-0.75".to_string(),
        right_axis: "90".to_string(),
        left_axis: "85".to_string(),
    };
    let baseline = BaselineSettings {
        font_size: 15,
        line_height: 1.4,
        font_weight: 500,
    };

    let first = evaluate(&conditions, ColorVision::Deuteranopia, &rx, &baseline);
    let second = evaluate(&conditions, ColorVision::Deuteranopia, &rx, &baseline);
    assert_eq!(first, second);
}

#[test]
fn malformed_prescription_degrades_to_neutral() {
    let rx = Prescription {
        right_sphere: "minus four".to_string(),
        left_sphere: "".to_string(),
        right_cylinder: "n/a".to_string(),
        left_cylinder: "minus one".to_string(),
        right_axis: "ninety".to_string(),
        left_axis: " ".to_string(),
    };

    let rec = evaluate(
        &VisualConditions::default(),
        ColorVision::None,
        &rx,
        &BaselineSettings::default(),
    );

    // Neutral values carry no signal; nothing fires
    assert!(rec.explanations.is_empty());
    assert_eq!(rec.font_size, 14);
}
