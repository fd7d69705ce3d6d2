//! Static per-language data, grouped by family

mod functional;
mod managed;
mod native;
mod scripting;
mod web;

use super::LanguageProfile;

const PREFIX: &str = "_0x";
/// ASCII word boundary; letters outside ASCII never join an identifier
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Shared canary for every JavaScript-hosted family
const JAVASCRIPT_CANARY: &str = r#"// Anti-tampering canary functions
function _integrityCheck() {
    const _secretValue = 0x{secret};
    if (_secretValue !== 0x{secret}) {
        throw new Error("TamperingDetected");
    }
    return true;
}

const _canaryActive = _integrityCheck();"#;

pub(super) fn javascript() -> LanguageProfile {
    web::javascript()
}

pub(super) fn all() -> Vec<LanguageProfile> {
    let mut profiles = web::profiles();
    profiles.extend(native::profiles());
    profiles.extend(managed::profiles());
    profiles.extend(scripting::profiles());
    profiles.extend(functional::profiles());
    profiles
}
