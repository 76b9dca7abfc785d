use crate::surface::RuleSlot;

const SLANT_RATIO: f64 = 0.3;
const HALF_RATIO: f64 = 0.5;
const RESTING_BORDER_COLOR: &str = "inherit";

/// Triangle sizes for the slanted top and bottom edges of one hexagon width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeGeometry {
    pub slant_height: u32,
    pub half_width: u32,
}

impl EdgeGeometry {
    pub fn for_width(hexagon_width: u32) -> Self {
        let width = f64::from(hexagon_width);
        Self {
            slant_height: (width * SLANT_RATIO).ceil() as u32,
            half_width: (width * HALF_RATIO).ceil() as u32,
        }
    }

    /// Overlap of one pixel so the triangle meets the body without a seam.
    pub fn offset(&self) -> u32 {
        self.slant_height.saturating_sub(1)
    }
}

/// Full rule text for the four pseudo-element containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoElementDeclarationSet {
    pub before: String,
    pub after: String,
    pub before_hover: String,
    pub after_hover: String,
}

impl PseudoElementDeclarationSet {
    pub fn build(hexagon_width: u32, selector: &str, hover_color: &str) -> Self {
        let edge = EdgeGeometry::for_width(hexagon_width);
        let rule = |slot: RuleSlot| {
            let border_color = if slot.is_hover() {
                hover_color
            } else {
                RESTING_BORDER_COLOR
            };
            let declarations = match slot {
                RuleSlot::Before | RuleSlot::BeforeHover => {
                    before_declarations(edge, border_color)
                }
                RuleSlot::After | RuleSlot::AfterHover => after_declarations(edge, border_color),
            };
            format!(
                "{selector}{suffix} {{ {declarations} }}",
                suffix = slot.pseudo_suffix()
            )
        };

        Self {
            before: rule(RuleSlot::Before),
            after: rule(RuleSlot::After),
            before_hover: rule(RuleSlot::BeforeHover),
            after_hover: rule(RuleSlot::AfterHover),
        }
    }

    pub fn rule_for(&self, slot: RuleSlot) -> &str {
        match slot {
            RuleSlot::Before => &self.before,
            RuleSlot::After => &self.after,
            RuleSlot::BeforeHover => &self.before_hover,
            RuleSlot::AfterHover => &self.after_hover,
        }
    }
}

/// Top edge: a zero-size box whose bottom border forms the triangle.
pub fn before_declarations(edge: EdgeGeometry, border_color: &str) -> String {
    format!(
        "content: \"\"; \
         width: 0; \
         height: 0; \
         border-bottom: {slant}px solid; \
         border-color: {border_color}; \
         border-left: {half}px solid transparent; \
         border-right: {half}px solid transparent; \
         position: absolute; \
         top: -{offset}px; \
         right: 0;",
        slant = edge.slant_height,
        half = edge.half_width,
        offset = edge.offset(),
    )
}

/// Bottom edge, mirrored through `border-top`.
pub fn after_declarations(edge: EdgeGeometry, border_color: &str) -> String {
    format!(
        "content: \"\"; \
         width: 0; \
         height: 0; \
         position: absolute; \
         right: 0; \
         bottom: -{offset}px; \
         border-top: {slant}px solid; \
         border-color: {border_color}; \
         border-left: {half}px solid transparent; \
         border-right: {half}px solid transparent;",
        slant = edge.slant_height,
        half = edge.half_width,
        offset = edge.offset(),
    )
}
