//! Target classification
//!
//! Rules are evaluated per target, first match wins:
//! 1. a replacement hint makes it `Deprecated` (description becomes the hint)
//! 2. a seeded wrapper name makes it `Wrapper`
//! 3. more than one dependency makes it `Build`
//! 4. being referenced by a `build-*` target makes it `Callback`
//! 5. anything else is a `Helper`

use std::collections::HashSet;

use super::model::{Category, Target};

/// Assign a category to every target
///
/// `referenced` is the set of names found in `build-*` dependency lists and
/// `wrappers` the names of targets pre-registered as wrappers.
pub fn classify(
    mut targets: Vec<Target>,
    referenced: &HashSet<String>,
    wrappers: &HashSet<String>,
) -> Vec<Target> {
    for target in &mut targets {
        let category = category_for(target, referenced, wrappers);
        if category == Category::Deprecated {
            if let Some(ref hint) = target.replacement_hint {
                target.description = hint.clone();
            }
        }
        target.category = Some(category);
    }
    targets
}

fn category_for(
    target: &Target,
    referenced: &HashSet<String>,
    wrappers: &HashSet<String>,
) -> Category {
    if target.replacement_hint.is_some() {
        Category::Deprecated
    } else if wrappers.contains(&target.name) {
        Category::Wrapper
    } else if target.dependencies.len() > 1 {
        Category::Build
    } else if referenced.contains(&target.name) {
        Category::Callback
    } else {
        Category::Helper
    }
}
