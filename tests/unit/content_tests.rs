/*!
 * Tests for the built-in block markup
 */

use anyhow::Result;
use blockpress::{SCROLL_BLOCK_CONTENT, transform};
use crate::common;

/// Escaping the built-in content reproduces the original generator byte for byte
#[test]
fn test_transform_onContent_shouldMatchGoldenOutput() -> Result<()> {
    let expected = common::expected_output()?;
    assert_eq!(format!("{}\n", transform(SCROLL_BLOCK_CONTENT)), expected);
    Ok(())
}

#[test]
fn test_content_shouldBeMultiLineBlockMarkup() {
    assert!(SCROLL_BLOCK_CONTENT.starts_with("<!-- wp:paragraph -->\n<p>A trip to Portugal"));
    assert!(SCROLL_BLOCK_CONTENT.ends_with("<!-- /wp:paragraph -->"));
    assert_eq!(SCROLL_BLOCK_CONTENT.lines().count(), 65);
}

#[test]
fn test_content_shouldContainNoBackslashOrCarriageReturn() {
    assert!(!SCROLL_BLOCK_CONTENT.contains('\\'));
    assert!(!SCROLL_BLOCK_CONTENT.contains('\r'));
}

#[test]
fn test_content_shouldCarryScrollAnimationClasses() {
    for class in [
        "scroll-anim-block",
        "scroll-anim-scale-up",
        "scroll-anim-fade-in",
        "scroll-anim-slide-in-right",
        "scroll-anim-slide-in-up",
        "scroll-anim-slide-in-left",
    ] {
        assert!(SCROLL_BLOCK_CONTENT.contains(class), "missing class {}", class);
    }
}

#[test]
fn test_content_shouldHaveBalancedBlockDelimiters() {
    for block in ["paragraph", "image", "heading", "columns", "column"] {
        let opening = SCROLL_BLOCK_CONTENT.matches(&format!("<!-- wp:{} ", block)).count();
        let closing = SCROLL_BLOCK_CONTENT.matches(&format!("<!-- /wp:{} -->", block)).count();
        assert_eq!(opening, closing, "unbalanced {} blocks", block);
    }
}
