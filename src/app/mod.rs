//! Applies computed hexagon styling to a [`HexagonSurface`].

use crate::config::HexagonConfig;
use crate::hover::{ElementColors, HoverEvent, HoverMachine, HoverState};
use crate::style::{initial_declarations, ResponsiveStyle};
use crate::surface::{HexagonSurface, RuleSlot, StyleProperty, StyleTarget, TextTarget};

/// What a pass managed to write. Skipped targets never abort the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub elements_styled: usize,
    pub elements_failed: usize,
    pub containers_written: usize,
    pub containers_missing: usize,
    pub containers_failed: usize,
}

impl ApplyReport {
    pub fn is_complete(&self) -> bool {
        self.elements_failed == 0 && self.containers_missing == 0 && self.containers_failed == 0
    }
}

pub struct HexagonLayout<S: HexagonSurface> {
    surface: S,
    config: HexagonConfig,
}

impl<S: HexagonSurface> HexagonLayout<S> {
    pub fn new(surface: S, config: HexagonConfig) -> Self {
        Self { surface, config }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &HexagonConfig {
        &self.config
    }

    /// One-time presentation setup for every hexagon.
    pub fn install(&self) -> ApplyReport {
        let declarations = initial_declarations(&self.config.colors);
        let mut report = ApplyReport::default();
        for element in self.surface.query_hexagons() {
            let applied = declarations
                .iter()
                .map(|(property, value)| write_style(&element, *property, value))
                .fold(true, |ok, written| ok & written);
            record_element(&mut report, applied);
        }
        tracing::debug!(
            styled = report.elements_styled,
            failed = report.elements_failed,
            "installed initial hexagon styling"
        );
        report
    }

    /// Recomputes the shared style for `viewport_width` and rewrites every target.
    pub fn resize(&self, viewport_width: u32) -> ApplyReport {
        let style = self.compute(viewport_width);
        self.apply(&style)
    }

    pub fn compute(&self, viewport_width: u32) -> ResponsiveStyle {
        ResponsiveStyle::compute(viewport_width, &self.config.selector(), &self.config.colors)
    }

    pub fn apply(&self, style: &ResponsiveStyle) -> ApplyReport {
        let mut report = ApplyReport::default();
        let sizing = style.sizing();

        for element in self.surface.query_hexagons() {
            let applied = sizing
                .iter()
                .map(|(property, value)| write_style(&element, *property, value))
                .fold(true, |ok, written| ok & written);
            record_element(&mut report, applied);
        }

        for slot in RuleSlot::ALL {
            let Some(container) = self.surface.style_container(slot) else {
                tracing::debug!(
                    ?slot,
                    id = self.config.containers.id_for(slot),
                    "style-rule container missing; skipping"
                );
                report.containers_missing += 1;
                continue;
            };
            match container.replace_text(style.pseudo.rule_for(slot)) {
                Ok(()) => report.containers_written += 1,
                Err(err) => {
                    tracing::warn!(?slot, %err, "failed to write style rule");
                    report.containers_failed += 1;
                }
            }
        }

        tracing::debug!(
            viewport_width = style.viewport_width,
            hexagon_width = style.params.width,
            hexagon_height = style.params.height,
            ?report,
            "applied responsive hexagon styling"
        );
        report
    }

    /// Advances `machine` and writes the matching colors onto `element`.
    pub fn handle_hover(
        &self,
        element: &S::Element,
        machine: &mut HoverMachine,
        event: HoverEvent,
    ) -> HoverState {
        let state = machine.transition(event);
        let colors = ElementColors::for_state(state, &self.config.colors);
        for (property, value) in colors.declarations() {
            write_style(element, property, value);
        }
        state
    }
}

fn write_style<T: StyleTarget>(element: &T, property: StyleProperty, value: &str) -> bool {
    match element.set_style(property, value) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "skipping inline style write");
            false
        }
    }
}

fn record_element(report: &mut ApplyReport, applied: bool) {
    if applied {
        report.elements_styled += 1;
    } else {
        report.elements_failed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorPair;
    use crate::surface::testing::FakeSurface;

    fn layout(surface: FakeSurface) -> HexagonLayout<FakeSurface> {
        HexagonLayout::new(surface, HexagonConfig::default())
    }

    #[test]
    fn resize_styles_every_hexagon_identically() {
        let layout = layout(FakeSurface::with_hexagons(3));

        let report = layout.resize(1015);

        assert!(report.is_complete());
        assert_eq!(report.elements_styled, 3);
        assert_eq!(report.containers_written, 4);
        for element in &layout.surface().hexagons {
            assert_eq!(element.style(StyleProperty::Width).as_deref(), Some("84px"));
            assert_eq!(element.style(StyleProperty::Height).as_deref(), Some("58px"));
            assert_eq!(
                element.style(StyleProperty::MarginTop).as_deref(),
                Some("2.875rem")
            );
            assert_eq!(
                element.style(StyleProperty::FontSize).as_deref(),
                Some("1.625rem")
            );
        }
    }

    #[test]
    fn resize_writes_all_four_rules() {
        let layout = layout(FakeSurface::with_hexagons(1));
        layout.resize(750);

        let surface = layout.surface();
        let before = surface.container_text(RuleSlot::Before).unwrap();
        assert!(before.starts_with(".hex::before { "));
        assert!(before.contains("border-bottom: 19px solid;"));
        assert!(before.contains("top: -18px;"));
        assert!(surface
            .container_text(RuleSlot::After)
            .unwrap()
            .starts_with(".hex::after { "));
        assert!(surface
            .container_text(RuleSlot::BeforeHover)
            .unwrap()
            .contains("border-color: orange;"));
        assert!(surface
            .container_text(RuleSlot::AfterHover)
            .unwrap()
            .starts_with(".hex:hover::after { "));
    }

    #[test]
    fn resize_replaces_rule_text_wholesale() {
        let layout = layout(FakeSurface::with_hexagons(1));
        layout.resize(1920);
        layout.resize(600);

        let container = &layout.surface().containers[&RuleSlot::Before];
        assert_eq!(container.writes(), 2);
        assert_eq!(
            container.text(),
            layout.compute(600).pseudo.before,
        );
    }

    #[test]
    fn repeated_resize_is_idempotent() {
        let layout = layout(FakeSurface::with_hexagons(2));
        layout.resize(1100);
        let first: Vec<_> = RuleSlot::ALL
            .iter()
            .map(|slot| layout.surface().container_text(*slot))
            .collect();
        let width = layout.surface().hexagons[0].style(StyleProperty::Width);

        layout.resize(1100);
        let second: Vec<_> = RuleSlot::ALL
            .iter()
            .map(|slot| layout.surface().container_text(*slot))
            .collect();

        assert_eq!(first, second);
        assert_eq!(
            layout.surface().hexagons[0].style(StyleProperty::Width),
            width
        );
    }

    #[test]
    fn missing_container_is_skipped_without_blocking_others() {
        let surface = FakeSurface::with_hexagons(2).without_container(RuleSlot::After);
        let layout = layout(surface);

        let report = layout.resize(1280);

        assert!(!report.is_complete());
        assert_eq!(report.containers_missing, 1);
        assert_eq!(report.containers_written, 3);
        assert_eq!(report.elements_styled, 2);
        assert!(layout
            .surface()
            .container_text(RuleSlot::AfterHover)
            .unwrap()
            .contains("border-top: 32px solid;"));
    }

    #[test]
    fn rejected_element_write_does_not_stop_the_pass() {
        let layout = layout(FakeSurface::with_hexagons(2));
        layout.surface().hexagons[0].reject(StyleProperty::Height);

        let report = layout.resize(1280);

        assert_eq!(report.elements_failed, 1);
        assert_eq!(report.elements_styled, 1);
        let first = &layout.surface().hexagons[0];
        assert_eq!(first.style(StyleProperty::Width).as_deref(), Some("104px"));
        assert_eq!(first.style(StyleProperty::FontSize).as_deref(), Some("2rem"));
        assert_eq!(first.style(StyleProperty::Height), None);
    }

    #[test]
    fn empty_surface_still_writes_rules() {
        let layout = layout(FakeSurface::with_hexagons(0));
        let report = layout.resize(800);
        assert_eq!(report.elements_styled, 0);
        assert_eq!(report.containers_written, 4);
    }

    #[test]
    fn install_applies_initial_presentation() {
        let layout = HexagonLayout::new(
            FakeSurface::with_hexagons(2),
            HexagonConfig::with_colors(ColorPair::new("red", "blue")),
        );

        let report = layout.install();

        assert_eq!(report.elements_styled, 2);
        for element in &layout.surface().hexagons {
            assert_eq!(
                element.style(StyleProperty::BackgroundColor).as_deref(),
                Some("red")
            );
            assert_eq!(
                element.style(StyleProperty::BorderColor).as_deref(),
                Some("red")
            );
            assert_eq!(element.style(StyleProperty::Color).as_deref(), Some("blue"));
            assert_eq!(
                element.style(StyleProperty::Display).as_deref(),
                Some("inline-block")
            );
            assert_eq!(
                element.style(StyleProperty::Position).as_deref(),
                Some("relative")
            );
        }
    }

    #[test]
    fn hover_enter_then_leave_restores_colors() {
        let layout = layout(FakeSurface::with_hexagons(1));
        layout.install();
        let element = layout.surface().hexagons[0].clone();
        let resting = (
            element.style(StyleProperty::Color),
            element.style(StyleProperty::BackgroundColor),
        );
        let mut machine = HoverMachine::new();

        let state = layout.handle_hover(&element, &mut machine, HoverEvent::PointerEnter);
        assert_eq!(state, HoverState::Hovered);
        assert_eq!(element.style(StyleProperty::Color).as_deref(), Some("green"));
        assert_eq!(
            element.style(StyleProperty::BackgroundColor).as_deref(),
            Some("orange")
        );

        layout.handle_hover(&element, &mut machine, HoverEvent::PointerLeave);
        assert_eq!(
            (
                element.style(StyleProperty::Color),
                element.style(StyleProperty::BackgroundColor),
            ),
            resting
        );
    }

    #[test]
    fn hover_on_one_element_leaves_others_resting() {
        let layout = layout(FakeSurface::with_hexagons(2));
        layout.install();
        let hexagons = layout.surface().hexagons.clone();
        let mut first = HoverMachine::new();

        layout.handle_hover(&hexagons[0], &mut first, HoverEvent::PointerEnter);

        assert_eq!(
            hexagons[1].style(StyleProperty::BackgroundColor).as_deref(),
            Some("green")
        );
        assert_eq!(
            hexagons[0].style(StyleProperty::BackgroundColor).as_deref(),
            Some("orange")
        );
    }
}
