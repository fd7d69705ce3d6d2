use super::{profiles, LanguageTag, DEFAULT_LANGUAGE};
use serde::Serialize;

/// Generic identifier names scanned for in every language, ahead of the
/// language-specific list
pub const BASE_IDENTIFIERS: &[&str] = &[
    "data", "result", "value", "item", "temp", "count", "index", "response",
];

/// Everything a pass needs to know about one language family
#[derive(Debug, Clone, Serialize)]
pub struct LanguageProfile {
    pub tag: LanguageTag,
    /// Identifiers appended after [`BASE_IDENTIFIERS`] for this language
    pub identifiers: &'static [&'static str],
    /// Prefix for synthesized replacement names
    pub name_prefix: &'static str,
    /// Regex fragment placed on both sides of an identifier when substituting
    pub boundary: &'static str,
    /// Decoy blocks written in the language's own syntax
    pub junk_templates: &'static [&'static str],
    /// Integrity check block; every `{secret}` is replaced by the same value
    pub canary_template: &'static str,
    /// Single-line marker prepended by the mutation pass
    pub mutation_comment: &'static str,
    pub build_tool: &'static str,
    pub executable_extension: &'static str,
    pub toolchain_note: &'static str,
}

impl LanguageProfile {
    /// Base identifiers followed by this language's own list
    pub fn identifier_candidates(&self) -> Vec<&'static str> {
        BASE_IDENTIFIERS
            .iter()
            .chain(self.identifiers.iter())
            .copied()
            .collect()
    }

    /// Canary block with the secret substituted
    pub fn render_canary(&self, secret: &str) -> String {
        self.canary_template.replace("{secret}", secret)
    }
}

/// Lookup table from [`LanguageTag`] to [`LanguageProfile`]
///
/// Every lookup is total: tags without a registered profile resolve to the
/// JavaScript profile.
#[derive(Debug, Clone)]
pub struct PassRegistry {
    profiles: Vec<LanguageProfile>,
    fallback: LanguageProfile,
}

impl PassRegistry {
    /// Registry holding only the fallback profile
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            fallback: profiles::javascript(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for profile in profiles::all() {
            registry.register(profile);
        }
        registry
    }

    /// Add a profile, replacing any existing one for the same tag
    pub fn register(&mut self, profile: LanguageProfile) {
        if profile.tag == DEFAULT_LANGUAGE {
            self.fallback = profile.clone();
        }
        match self.profiles.iter_mut().find(|p| p.tag == profile.tag) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn profile(&self, tag: LanguageTag) -> &LanguageProfile {
        self.profiles
            .iter()
            .find(|p| p.tag == tag)
            .unwrap_or(&self.fallback)
    }

    pub fn identifier_candidates(&self, tag: LanguageTag) -> Vec<&'static str> {
        self.profile(tag).identifier_candidates()
    }

    pub fn name_prefix(&self, tag: LanguageTag) -> &'static str {
        self.profile(tag).name_prefix
    }

    pub fn boundary_pattern(&self, tag: LanguageTag) -> &'static str {
        self.profile(tag).boundary
    }

    pub fn junk_templates(&self, tag: LanguageTag) -> &'static [&'static str] {
        self.profile(tag).junk_templates
    }

    pub fn canary_template(&self, tag: LanguageTag) -> &'static str {
        self.profile(tag).canary_template
    }

    pub fn mutation_comment(&self, tag: LanguageTag) -> &'static str {
        self.profile(tag).mutation_comment
    }

    pub fn build_tool_label(&self, tag: LanguageTag) -> &'static str {
        self.profile(tag).build_tool
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> Vec<LanguageTag> {
        self.profiles.iter().map(|p| p.tag).collect()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.iter()
    }
}

impl Default for PassRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = PassRegistry::new();
        assert!(registry.tags().is_empty());
        assert_eq!(registry.profile(LanguageTag::Zig).tag, LanguageTag::JavaScript);
    }

    #[test]
    fn test_defaults_cover_every_tag() {
        let registry = PassRegistry::with_defaults();
        for tag in LanguageTag::all_variants() {
            assert_eq!(registry.profile(*tag).tag, *tag, "no profile for {}", tag);
        }
        assert_eq!(registry.tags().len(), LanguageTag::all_variants().len());
    }

    #[test]
    fn test_identifier_candidates_start_with_base_list() {
        let registry = PassRegistry::with_defaults();
        let candidates = registry.identifier_candidates(LanguageTag::Python);

        assert_eq!(&candidates[..BASE_IDENTIFIERS.len()], BASE_IDENTIFIERS);
        assert!(candidates.contains(&"self"));
        assert!(candidates.contains(&"kwargs"));
    }

    #[test]
    fn test_shared_prefix_and_boundary() {
        let registry = PassRegistry::with_defaults();
        for tag in LanguageTag::all_variants() {
            assert_eq!(registry.name_prefix(*tag), "_0x");
            assert_eq!(registry.boundary_pattern(*tag), r"(?-u:\b)");
        }
    }

    #[test]
    fn test_build_tool_labels() {
        let registry = PassRegistry::with_defaults();
        assert_eq!(registry.build_tool_label(LanguageTag::Python), "PyInstaller");
        assert_eq!(registry.build_tool_label(LanguageTag::Rust), "Cargo");
        assert_eq!(registry.build_tool_label(LanguageTag::React), "Electron");
        assert_eq!(registry.build_tool_label(LanguageTag::Zig), "Zig Build");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = PassRegistry::with_defaults();
        let mut custom = registry.profile(LanguageTag::Go).clone();
        custom.build_tool = "TinyGo";
        registry.register(custom);

        assert_eq!(registry.build_tool_label(LanguageTag::Go), "TinyGo");
        assert_eq!(registry.tags().len(), LanguageTag::all_variants().len());
    }

    #[test]
    fn test_register_default_language_updates_fallback() {
        let mut registry = PassRegistry::new();
        let mut custom = profiles::javascript();
        custom.build_tool = "Bun";
        registry.register(custom);

        assert_eq!(registry.build_tool_label(LanguageTag::Elm), "Bun");
    }

    #[test]
    fn test_every_profile_has_content() {
        let registry = PassRegistry::with_defaults();
        for profile in registry.profiles() {
            assert!(!profile.junk_templates.is_empty(), "{}", profile.tag);
            assert_eq!(profile.canary_template.matches("{secret}").count(), 2, "{}", profile.tag);
            assert!(!profile.mutation_comment.contains('\n'), "{}", profile.tag);
            assert!(profile.executable_extension.starts_with('.'), "{}", profile.tag);
        }
    }

    #[test]
    fn test_render_canary_uses_one_secret() {
        let registry = PassRegistry::with_defaults();
        let profile = registry.profile(LanguageTag::Python);
        let rendered = profile.render_canary("deadbeef");

        assert!(!rendered.contains("{secret}"));
        assert_eq!(rendered.matches("0xdeadbeef").count(), 2);
    }
}
