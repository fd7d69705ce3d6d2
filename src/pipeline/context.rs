//! Read-only state shared by every pass of one run

use crate::config::ObfuscationConfig;
use crate::languages::{LanguageProfile, LanguageTag, PassRegistry};

/// What a pass may consult while transforming text
///
/// The text itself is not part of the context: it is moved into each pass
/// and moved back out in the [`super::passes::PassOutcome`].
pub struct PassContext<'a> {
    pub language: LanguageTag,
    pub registry: &'a PassRegistry,
    pub options: &'a ObfuscationConfig,
}

impl<'a> PassContext<'a> {
    pub fn new(
        language: LanguageTag,
        registry: &'a PassRegistry,
        options: &'a ObfuscationConfig,
    ) -> Self {
        Self {
            language,
            registry,
            options,
        }
    }

    pub fn profile(&self) -> &'a LanguageProfile {
        self.registry.profile(self.language)
    }
}
