//! The ordered rule set and its merge policy
//!
//! Each rule is a pure function over an [`EvalContext`] that folds its
//! effects into a shared [`Accumulator`]. Evaluation order is fixed: later
//! rules never undo an earlier numeric increase, with one documented
//! exception (the light-sensitivity font-weight reset), so the fold is
//! deterministic and order-sensitive only where it is meant to be.

use log::debug;

use crate::profile::{BaselineSettings, ColorVision, VisualConditions};

use super::catalog;
use super::{CursorShape, ThemeRecommendation};

/// How a rule's value for a numeric field combines with what earlier rules
/// already wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// Monotonic floor: the field only ever goes up (max-merge)
    Floor,
    /// Unconditional overwrite; used exactly once, by the light-sensitivity
    /// font-weight reset
    Overwrite,
}

impl Merge {
    /// Combine the current field value with an incoming one
    pub fn apply(self, current: f64, incoming: f64) -> f64 {
        match self {
            Self::Floor => current.max(incoming),
            Self::Overwrite => incoming,
        }
    }
}

/// Everything a rule may read: the raw flags plus prescription-derived values
/// computed once per evaluation
pub(crate) struct EvalContext<'a> {
    pub conditions: &'a VisualConditions,
    pub color_vision: ColorVision,
    pub baseline: &'a BaselineSettings,
    /// Mean of right/left sphere (negative = myopic, positive = hyperopic)
    pub avg_sphere: f64,
    /// Mean of absolute right/left cylinder
    pub avg_cylinder: f64,
    /// Either axis above 0 or either cylinder non-zero
    pub astigmatism_inferred: bool,
}

/// Shared mutable state the rules fold into
pub(crate) struct Accumulator {
    pub font_size: f64,
    pub line_height: f64,
    pub font_weight: u32,
    pub letter_spacing: f64,
    pub cursor_shape: Option<CursorShape>,
    pub explanations: Vec<String>,
    pub font_recommendations: Vec<String>,
    pub theme_recommendations: Vec<ThemeRecommendation>,
}

impl Accumulator {
    /// Seed from the baseline. Font size additionally gets the engine's own
    /// 14px global floor.
    pub fn from_baseline(baseline: &BaselineSettings) -> Self {
        Self {
            font_size: f64::from(baseline.font_size).max(14.0),
            line_height: baseline.line_height,
            font_weight: baseline.font_weight,
            letter_spacing: 0.0,
            cursor_shape: None,
            explanations: Vec::new(),
            font_recommendations: Vec::new(),
            theme_recommendations: Vec::new(),
        }
    }

    fn raise_font_size(&mut self, floor: f64) {
        self.font_size = Merge::Floor.apply(self.font_size, floor);
    }

    fn raise_line_height(&mut self, floor: f64) {
        self.line_height = Merge::Floor.apply(self.line_height, floor);
    }

    fn raise_letter_spacing(&mut self, floor: f64) {
        self.letter_spacing = Merge::Floor.apply(self.letter_spacing, floor);
    }

    fn merge_font_weight(&mut self, weight: u32, merge: Merge) {
        self.font_weight = merge.apply(f64::from(self.font_weight), f64::from(weight)) as u32;
    }

    fn explain(&mut self, text: String) {
        self.explanations.push(text);
    }
}

pub(crate) type Rule = fn(&EvalContext, &mut Accumulator);

/// The fixed rule list, in evaluation order
///
/// The light-sensitivity weight reset relies on running after the
/// weight-raising blur/ghosting rule; do not reorder.
pub(crate) const RULES: &[(&str, Rule)] = &[
    ("myopia", myopia),
    ("hyperopia", hyperopia),
    ("astigmatism", astigmatism),
    ("eye-strain", eye_strain),
    ("blur-ghosting", blur_ghosting),
    ("light-sensitivity", light_sensitivity),
    ("visual-crowding", visual_crowding),
    ("color-vision", color_vision),
];

/// Run every rule in order against a fresh accumulator
pub(crate) fn apply_all(ctx: &EvalContext) -> Accumulator {
    let mut acc = Accumulator::from_baseline(ctx.baseline);
    for (name, rule) in RULES {
        let before = acc.explanations.len();
        rule(ctx, &mut acc);
        if acc.explanations.len() > before {
            debug!("rule '{}' fired", name);
        }
    }
    acc
}

fn myopia(ctx: &EvalContext, acc: &mut Accumulator) {
    if !(ctx.conditions.myopia || ctx.avg_sphere < -0.5) {
        return;
    }
    let severity = ctx.avg_sphere.min(0.0).abs();

    if severity >= 6.0 {
        acc.raise_font_size(22.0);
        acc.explain(format!(
            "High myopia ({:.2}D): Font size increased to 22px to maintain comfortable reading distance without leaning forward",
            ctx.avg_sphere
        ));
    } else if severity >= 3.0 {
        acc.raise_font_size(19.0);
        acc.explain(format!(
            "Moderate-high myopia ({:.2}D): Font size increased to 19px",
            ctx.avg_sphere
        ));
    } else if severity >= 1.0 {
        acc.raise_font_size(17.0);
        acc.explain(format!(
            "Moderate myopia ({:.2}D): Font size set to 17px for comfortable viewing",
            ctx.avg_sphere
        ));
    } else {
        acc.raise_font_size(16.0);
        acc.explain("Mild myopia: Minimum font size of 16px recommended".to_string());
    }

    acc.cursor_shape = Some(CursorShape::Block);
    acc.explain("Block cursor enabled for easier tracking with myopia".to_string());
}

fn hyperopia(ctx: &EvalContext, acc: &mut Accumulator) {
    if !(ctx.conditions.hyperopia || ctx.avg_sphere > 0.5) {
        return;
    }
    let severity = ctx.avg_sphere.max(0.0);

    if severity >= 3.0 {
        acc.raise_font_size(20.0);
        acc.explain(format!(
            "High hyperopia (+{:.2}D): Font size increased to 20px to reduce accommodation strain during near work",
            ctx.avg_sphere
        ));
    } else if severity >= 1.5 {
        acc.raise_font_size(18.0);
        acc.explain(format!(
            "Moderate hyperopia (+{:.2}D): Font size set to 18px",
            ctx.avg_sphere
        ));
    } else {
        acc.raise_font_size(17.0);
        acc.explain("Mild hyperopia: Font size set to 17px for near-focus comfort".to_string());
    }

    acc.raise_line_height(1.6);
    acc.explain(
        "Line height increased to 1.6 for better near-focus comfort with hyperopia".to_string(),
    );
}

fn astigmatism(ctx: &EvalContext, acc: &mut Accumulator) {
    if !(ctx.conditions.astigmatism || ctx.astigmatism_inferred) {
        return;
    }
    // Flag or axis alone gives no magnitude; assume a default severity of 1
    let severity = if ctx.avg_cylinder > 0.0 {
        ctx.avg_cylinder
    } else {
        1.0
    };

    if severity >= 2.0 {
        acc.raise_letter_spacing(0.6);
        acc.raise_line_height(1.8);
        acc.explain(format!(
            "High astigmatism ({:.2}D cylinder): Letter spacing 0.6px and line height 1.8 to prevent character blur and ghosting",
            severity
        ));
    } else if severity >= 1.0 {
        acc.raise_letter_spacing(0.4);
        acc.raise_line_height(1.7);
        acc.explain(format!(
            "Moderate astigmatism ({:.2}D cylinder): Letter spacing 0.4px helps separate similar characters like c/e, r/n, 0/O",
            severity
        ));
    } else {
        acc.raise_letter_spacing(0.3);
        acc.raise_line_height(1.6);
        acc.explain("Astigmatism detected: Letter spacing 0.3px reduces character overlap".to_string());
    }

    acc.raise_font_size(16.0);

    for font in catalog::ASTIGMATISM_FONTS {
        acc.font_recommendations.push(font.to_string());
    }
}

fn eye_strain(ctx: &EvalContext, acc: &mut Accumulator) {
    if !ctx.conditions.eye_strain {
        return;
    }
    acc.raise_font_size(f64::from(ctx.baseline.font_size) + 1.0);
    acc.raise_line_height(1.6);
    acc.explain(
        "Eye strain: +1px font size and line height ≥1.6 for \"breathable\" code that reduces scanning effort"
            .to_string(),
    );
}

fn blur_ghosting(ctx: &EvalContext, acc: &mut Accumulator) {
    if !ctx.conditions.blur_ghosting {
        return;
    }
    acc.raise_font_size(f64::from(ctx.baseline.font_size) + 1.0);

    // Light sensitivity wins over the weight bump; see the next rule
    if !ctx.conditions.light_sensitivity {
        acc.merge_font_weight(500, Merge::Floor);
        acc.explain(
            "Blur/Ghosting: Medium font weight (500) improves edge definition and reduces perceived double images"
                .to_string(),
        );
    }

    acc.cursor_shape = Some(CursorShape::Block);
    acc.explain(
        "Block cursor for better visibility when experiencing blur or ghosting effects"
            .to_string(),
    );
}

fn light_sensitivity(ctx: &EvalContext, acc: &mut Accumulator) {
    if !ctx.conditions.light_sensitivity {
        return;
    }
    // The one non-monotonic write: heavier weights read as glare, so the
    // weight is forced back to 400 no matter what earlier rules raised it to.
    acc.merge_font_weight(400, Merge::Overwrite);
    acc.explain(
        "Light sensitivity: Font weight kept at 400 (normal) to reduce perceived glare from heavier text. Consider using a dark theme."
            .to_string(),
    );

    acc.theme_recommendations
        .extend(catalog::light_sensitivity_themes());
}

fn visual_crowding(ctx: &EvalContext, acc: &mut Accumulator) {
    if !ctx.conditions.visual_crowding {
        return;
    }
    acc.raise_letter_spacing(0.5);
    acc.raise_line_height(1.7);
    acc.explain(
        "Visual crowding: Letter spacing ≥0.5px and line height ≥1.7 creates breathing room when dense code feels overwhelming"
            .to_string(),
    );
}

fn color_vision(ctx: &EvalContext, acc: &mut Accumulator) {
    if let Some(explanation) = catalog::color_vision_explanation(ctx.color_vision) {
        acc.explain(explanation.to_string());
        acc.theme_recommendations
            .extend(catalog::color_vision_themes(ctx.color_vision));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(
        conditions: &'a VisualConditions,
        baseline: &'a BaselineSettings,
    ) -> EvalContext<'a> {
        EvalContext {
            conditions,
            color_vision: ColorVision::None,
            baseline,
            avg_sphere: 0.0,
            avg_cylinder: 0.0,
            astigmatism_inferred: false,
        }
    }

    #[test]
    fn test_merge_floor_never_lowers() {
        assert_eq!(Merge::Floor.apply(17.0, 16.0), 17.0);
        assert_eq!(Merge::Floor.apply(16.0, 17.0), 17.0);
        assert_eq!(Merge::Floor.apply(1.6, 1.6), 1.6);
    }

    #[test]
    fn test_merge_overwrite_always_takes_incoming() {
        assert_eq!(Merge::Overwrite.apply(500.0, 400.0), 400.0);
        assert_eq!(Merge::Overwrite.apply(300.0, 400.0), 400.0);
    }

    #[test]
    fn test_accumulator_seeds_14px_global_floor() {
        let small = BaselineSettings {
            font_size: 10,
            ..Default::default()
        };
        assert_eq!(Accumulator::from_baseline(&small).font_size, 14.0);

        let large = BaselineSettings {
            font_size: 18,
            ..Default::default()
        };
        assert_eq!(Accumulator::from_baseline(&large).font_size, 18.0);
    }

    #[test]
    fn test_myopia_tiers_by_severity() {
        let conditions = VisualConditions::default();
        let baseline = BaselineSettings::default();
        let cases = [(-6.5, 22.0), (-3.0, 19.0), (-1.25, 17.0), (-0.75, 16.0)];

        for (sphere, expected) in cases {
            let mut context = ctx(&conditions, &baseline);
            context.avg_sphere = sphere;
            let mut acc = Accumulator::from_baseline(&baseline);
            myopia(&context, &mut acc);
            assert_eq!(acc.font_size, expected, "sphere {}", sphere);
            assert_eq!(acc.cursor_shape, Some(CursorShape::Block));
            assert_eq!(acc.explanations.len(), 2);
        }
    }

    #[test]
    fn test_myopia_needs_flag_or_half_diopter() {
        let conditions = VisualConditions::default();
        let baseline = BaselineSettings::default();
        let mut context = ctx(&conditions, &baseline);
        context.avg_sphere = -0.5; // not strictly below -0.5

        let mut acc = Accumulator::from_baseline(&baseline);
        myopia(&context, &mut acc);
        assert!(acc.explanations.is_empty());
        assert_eq!(acc.cursor_shape, None);
    }

    #[test]
    fn test_hyperopia_tiers_and_line_height() {
        let conditions = VisualConditions::default();
        let baseline = BaselineSettings::default();
        let cases = [(3.25, 20.0), (1.5, 18.0), (0.75, 17.0)];

        for (sphere, expected) in cases {
            let mut context = ctx(&conditions, &baseline);
            context.avg_sphere = sphere;
            let mut acc = Accumulator::from_baseline(&baseline);
            hyperopia(&context, &mut acc);
            assert_eq!(acc.font_size, expected, "sphere {}", sphere);
            assert_eq!(acc.line_height, 1.6);
            assert_eq!(acc.explanations.len(), 2);
        }
    }

    #[test]
    fn test_astigmatism_defaults_severity_to_one_without_cylinder() {
        let conditions = VisualConditions {
            astigmatism: true,
            ..Default::default()
        };
        let baseline = BaselineSettings::default();
        let context = ctx(&conditions, &baseline);

        let mut acc = Accumulator::from_baseline(&baseline);
        astigmatism(&context, &mut acc);
        // severity 1 lands in the middle tier
        assert_eq!(acc.letter_spacing, 0.4);
        assert_eq!(acc.line_height, 1.7);
        assert_eq!(acc.font_recommendations.len(), 4);
    }

    #[test]
    fn test_astigmatism_tier_boundaries() {
        let conditions = VisualConditions::default();
        let baseline = BaselineSettings::default();
        let cases = [(2.0, 0.6, 1.8), (1.0, 0.4, 1.7), (0.625, 0.3, 1.6)];

        for (cylinder, spacing, height) in cases {
            let mut context = ctx(&conditions, &baseline);
            context.avg_cylinder = cylinder;
            context.astigmatism_inferred = true;
            let mut acc = Accumulator::from_baseline(&baseline);
            astigmatism(&context, &mut acc);
            assert_eq!(acc.letter_spacing, spacing, "cylinder {}", cylinder);
            assert_eq!(acc.line_height, height, "cylinder {}", cylinder);
        }
    }

    #[test]
    fn test_blur_ghosting_skips_weight_bump_under_light_sensitivity() {
        let baseline = BaselineSettings::default();

        let blur_only = VisualConditions {
            blur_ghosting: true,
            ..Default::default()
        };
        let mut acc = Accumulator::from_baseline(&baseline);
        blur_ghosting(&ctx(&blur_only, &baseline), &mut acc);
        assert_eq!(acc.font_weight, 500);
        assert_eq!(acc.explanations.len(), 2);

        let both = VisualConditions {
            blur_ghosting: true,
            light_sensitivity: true,
            ..Default::default()
        };
        let mut acc = Accumulator::from_baseline(&baseline);
        blur_ghosting(&ctx(&both, &baseline), &mut acc);
        assert_eq!(acc.font_weight, 400);
        assert_eq!(acc.explanations.len(), 1);
        assert_eq!(acc.cursor_shape, Some(CursorShape::Block));
    }

    #[test]
    fn test_light_sensitivity_overwrites_raised_weight() {
        let conditions = VisualConditions {
            light_sensitivity: true,
            ..Default::default()
        };
        let baseline = BaselineSettings {
            font_weight: 700,
            ..Default::default()
        };
        let context = ctx(&conditions, &baseline);

        let mut acc = Accumulator::from_baseline(&baseline);
        assert_eq!(acc.font_weight, 700);
        light_sensitivity(&context, &mut acc);
        assert_eq!(acc.font_weight, 400);
        assert_eq!(acc.theme_recommendations.len(), 2);
        assert_eq!(acc.theme_recommendations[0].zed_name, "Solarized Dark");
    }

    #[test]
    fn test_rules_are_in_documented_order() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "myopia",
                "hyperopia",
                "astigmatism",
                "eye-strain",
                "blur-ghosting",
                "light-sensitivity",
                "visual-crowding",
                "color-vision",
            ]
        );
    }
}
