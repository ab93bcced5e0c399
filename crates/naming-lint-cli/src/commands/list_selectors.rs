//! List selectors command implementation.

use naming_lint_core::affix::UnderscorePolicy;
use naming_lint_core::{
    DeclarationKind, MessageId, MetaSelector, Modifier, PredefinedFormat, Preset, TypeModifier,
};

/// Runs the list-selectors command.
pub fn run() {
    println!("Selectors:\n");
    println!("{:<20} Modifiers", "Kind");
    println!("{}", "-".repeat(80));
    for kind in DeclarationKind::ALL {
        let modifiers: Vec<&str> = kind
            .allowed_modifiers()
            .iter()
            .copied()
            .map(Modifier::as_str)
            .collect();
        let typed = if kind.carries_type() { " (types)" } else { "" };
        println!("{:<20} {}{typed}", kind.as_str(), modifiers.join(", "));
    }

    println!("\nGroups:\n");
    for meta in MetaSelector::ALL {
        let kinds: Vec<&str> = meta.covers().iter().copied().map(DeclarationKind::as_str).collect();
        println!("  {:<14} {}", meta.as_str(), kinds.join(", "));
    }

    println!("\nModifiers: {}", join(Modifier::ALL.into_iter().map(Modifier::as_str)));
    println!("Types:     {}", join(TypeModifier::ALL.into_iter().map(TypeModifier::as_str)));
    println!("Formats:   {}", join(PredefinedFormat::ALL.into_iter().map(PredefinedFormat::as_str)));
    println!(
        "Underscores: {}",
        join(UnderscorePolicy::ALL.into_iter().map(UnderscorePolicy::as_str))
    );

    println!("\nMessages:\n");
    println!("{:<10} Message id", "Code");
    println!("{}", "-".repeat(40));
    for id in MessageId::ALL {
        println!("{:<10} {}", id.code(), id.as_str());
    }

    println!("\nPresets (used when no [[naming]] entry exists):");
    for preset in Preset::ALL {
        println!("  {}", preset.as_str());
    }
}

fn join<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(", ")
}
