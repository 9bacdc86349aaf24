//! Design System Component Tests
//!
//! Unit tests for design system enums, variants, and styling logic.

use crate::components::design_system::badge::BadgeVariant;
use crate::components::design_system::button::ButtonVariant;

// ========================================================================
// ButtonVariant Tests
// ========================================================================

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_equality() {
    assert_eq!(ButtonVariant::Primary, ButtonVariant::Primary);
    assert_eq!(ButtonVariant::Secondary, ButtonVariant::Secondary);
    assert_eq!(ButtonVariant::Ghost, ButtonVariant::Ghost);
    assert_eq!(ButtonVariant::Outline, ButtonVariant::Outline);

    assert_ne!(ButtonVariant::Primary, ButtonVariant::Secondary);
    assert_ne!(ButtonVariant::Ghost, ButtonVariant::Outline);
}

#[test]
fn test_button_variant_classes_non_empty() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Outline,
    ];

    for variant in variants {
        let class = variant.class();
        assert!(!class.is_empty(), "Variant {:?} should have class", variant);
    }
}

#[test]
fn test_button_variant_classes_unique() {
    let primary = ButtonVariant::Primary.class();
    let secondary = ButtonVariant::Secondary.class();
    let ghost = ButtonVariant::Ghost.class();
    let outline = ButtonVariant::Outline.class();

    assert_ne!(primary, secondary);
    assert_ne!(primary, ghost);
    assert_ne!(primary, outline);
    assert_ne!(secondary, ghost);
    assert_ne!(ghost, outline);
}

#[test]
fn test_button_variant_outline_has_border() {
    let class = ButtonVariant::Outline.class();
    assert!(class.contains("border"), "Outline variant should have border");
}

#[test]
fn test_button_variant_ghost_has_hover() {
    let class = ButtonVariant::Ghost.class();
    assert!(class.contains("hover:"), "Ghost variant should have hover styles");
}

// ========================================================================
// BadgeVariant Tests
// ========================================================================

#[test]
fn test_badge_variant_default() {
    assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
}

#[test]
fn test_badge_variant_equality() {
    assert_eq!(BadgeVariant::Default, BadgeVariant::Default);
    assert_eq!(BadgeVariant::Accent, BadgeVariant::Accent);
    assert_eq!(BadgeVariant::Frosted, BadgeVariant::Frosted);

    assert_ne!(BadgeVariant::Default, BadgeVariant::Accent);
    assert_ne!(BadgeVariant::Accent, BadgeVariant::Frosted);
}

#[test]
fn test_badge_variant_classes_unique() {
    let default = BadgeVariant::Default.class();
    let accent = BadgeVariant::Accent.class();
    let frosted = BadgeVariant::Frosted.class();

    assert_ne!(default, accent);
    assert_ne!(default, frosted);
    assert_ne!(accent, frosted);
}

#[test]
fn test_badge_variant_frosted_is_translucent() {
    let class = BadgeVariant::Frosted.class();
    assert!(class.contains("backdrop-blur"), "Frosted badge should blur its backdrop");
}
