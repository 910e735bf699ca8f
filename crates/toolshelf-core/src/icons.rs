//! Icon name resolution
//!
//! Tools and categories name their glyph symbolically ("Calculator",
//! "Palette"). Rendering is the UI's job; this module only decides whether a
//! name is one the UI ships and substitutes the fallback glyph otherwise.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::logging::SharedLogger;

/// Glyph used when a name is unknown or empty
pub const FALLBACK_ICON: &str = "Wrench";

static KNOWN_ICONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Activity", "ArrowLeftRight", "BarChart", "Binary", "Braces", "Calculator",
        "Calendar", "CaseSensitive", "Clock", "Code", "Coins", "Contrast", "Copy",
        "DollarSign", "Droplet", "FileCode", "FileText", "Fingerprint", "Flame",
        "Gauge", "Hash", "Heart", "Image", "ImageMinus", "KeyRound", "Landmark",
        "Layers", "Link", "ListOrdered", "Lock", "Palette", "Percent", "PiggyBank",
        "QrCode", "Ruler", "Scale", "Search", "Shuffle", "Sparkles", "SunMoon",
        "Tags", "Thermometer", "Timer", "Type", "Wand", "Weight", "Wrench",
    ]
    .into_iter()
    .collect()
});

/// Result of resolving an icon name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIcon {
    /// Glyph to render
    pub name: String,
    /// Whether the fallback replaced the requested name
    pub is_fallback: bool,
}

/// Whether the UI ships a glyph with this exact name
pub fn is_known_icon(name: &str) -> bool {
    KNOWN_ICONS.contains(name)
}

/// Resolve a glyph name without logging
pub fn resolve_icon_name(name: &str) -> ResolvedIcon {
    let name = name.trim();
    if is_known_icon(name) {
        ResolvedIcon {
            name: name.to_string(),
            is_fallback: false,
        }
    } else {
        ResolvedIcon {
            name: FALLBACK_ICON.to_string(),
            is_fallback: true,
        }
    }
}

/// Resolve a glyph name, warning when the fallback is used
pub fn resolve_icon(name: &str, logger: &SharedLogger) -> ResolvedIcon {
    let resolved = resolve_icon_name(name);
    if resolved.is_fallback {
        crate::log_warn!(logger, "Unknown icon '{}', using '{}'", name, FALLBACK_ICON);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::logging::MemoryLogger;

    #[test]
    fn test_known_icon_passes_through() {
        let icon = resolve_icon_name("Calculator");
        assert_eq!(icon.name, "Calculator");
        assert!(!icon.is_fallback);
    }

    #[test]
    fn test_unknown_icon_falls_back_with_warning() {
        let memory = Arc::new(MemoryLogger::new());
        let logger: SharedLogger = memory.clone();

        let icon = resolve_icon("Unicorn", &logger);
        assert_eq!(icon.name, FALLBACK_ICON);
        assert!(icon.is_fallback);
        assert_eq!(memory.warnings().len(), 1);
        assert!(memory.warnings()[0].contains("Unicorn"));
    }

    #[test]
    fn test_empty_icon_falls_back() {
        assert!(resolve_icon_name("").is_fallback);
        assert!(is_known_icon(FALLBACK_ICON));
    }
}
