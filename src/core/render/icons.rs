//! Icon lookup for specialization cards

/// Icon used when a specialization has no dedicated icon
pub const FALLBACK_ICON: &str = "fas fa-code";

const ICONS: &[(&str, &str)] = &[
    ("HTML", "fab fa-html5"),
    ("CSS", "fab fa-css3-alt"),
    ("JavaScript", "fab fa-js"),
    ("React", "fab fa-react"),
    ("Vue.js", "fab fa-vuejs"),
    ("Tools and Workflow", "fas fa-tools"),
];

/// Icon class for a specialization name (exact, case-sensitive match)
#[must_use]
pub fn icon_for(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(FALLBACK_ICON, |(_, icon)| icon)
}
