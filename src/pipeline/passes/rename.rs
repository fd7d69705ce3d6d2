use super::{ObfuscationPass, PassKind, PassOutcome};
use crate::pipeline::context::PassContext;
use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::{NoExpand, Regex};
use tracing::debug;

/// Replaces well-known identifier names with generated ones
pub struct RenamePass;

struct Assignment {
    replacement: String,
    pattern: Regex,
}

/// Single left-to-right scan over `text`
///
/// For each line, every candidate that occurs in the line as a substring and
/// has no replacement yet is assigned `prefix` plus a zero-padded hex
/// counter. Then every assignment made so far is applied to that line, in
/// discovery order, as a whole-word match bounded by `boundary`. Lines
/// already emitted are never revisited.
pub fn rename_identifiers(
    text: &str,
    candidates: &[&str],
    prefix: &str,
    boundary: &str,
) -> Result<String> {
    let mut assignments: Vec<(&str, Assignment)> = Vec::new();
    let mut counter: usize = 0;
    let mut lines = Vec::new();

    for line in text.split('\n') {
        for &candidate in candidates {
            if !line.contains(candidate) || assignments.iter().any(|(name, _)| *name == candidate) {
                continue;
            }
            let pattern = Regex::new(&format!(
                "{b}{name}{b}",
                b = boundary,
                name = regex::escape(candidate)
            ))
            .with_context(|| format!("invalid boundary pattern for identifier '{}'", candidate))?;
            let replacement = format!("{}{:04x}", prefix, counter);
            debug!(identifier = candidate, replacement = %replacement, "Assigned replacement");
            assignments.push((
                candidate,
                Assignment {
                    replacement,
                    pattern,
                },
            ));
            counter += 1;
        }

        let mut processed = line.to_string();
        for (_, assignment) in &assignments {
            processed = assignment
                .pattern
                .replace_all(&processed, NoExpand(&assignment.replacement))
                .into_owned();
        }
        lines.push(processed);
    }

    Ok(lines.join("\n"))
}

#[async_trait]
impl ObfuscationPass for RenamePass {
    fn kind(&self) -> PassKind {
        PassKind::RenameIdentifiers
    }

    async fn execute(&self, source: String, context: &PassContext<'_>) -> Result<PassOutcome> {
        let registry = context.registry;
        let candidates = registry.identifier_candidates(context.language);
        let text = rename_identifiers(
            &source,
            &candidates,
            registry.name_prefix(context.language),
            registry.boundary_pattern(context.language),
        )?;

        Ok(PassOutcome::Completed {
            text,
            message: format!("Renamed variables and functions for {}", context.language),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObfuscationConfig;
    use crate::languages::{LanguageTag, PassRegistry};

    const WORD: &str = r"(?-u:\b)";

    #[test]
    fn test_discovery_line_is_rewritten() {
        let out = rename_identifiers("data\ndata\n", &["data"], "_0x", WORD).unwrap();
        assert_eq!(out, "_0x0000\n_0x0000\n");
    }

    #[test]
    fn test_counter_follows_discovery_order() {
        let out = rename_identifiers(
            "let count = 0;\nlet data = count + value;",
            &["data", "value", "count"],
            "_0x",
            WORD,
        )
        .unwrap();
        assert_eq!(out, "let _0x0000 = 0;\nlet _0x0001 = _0x0000 + _0x0002;");
    }

    #[test]
    fn test_counter_is_hex() {
        let names: Vec<String> = (0..11).map(|i| format!("name{}", i)).collect();
        let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
        let text = names.join(" ");

        let out = rename_identifiers(&text, &candidates, "_0x", WORD).unwrap();
        assert!(out.ends_with("_0x000a"));
    }

    #[test]
    fn test_substring_registers_but_does_not_replace() {
        let out = rename_identifiers("metadata\ndata", &["data"], "_0x", WORD).unwrap();
        assert_eq!(out, "metadata\n_0x0000");
    }

    #[test]
    fn test_case_sensitive() {
        let out = rename_identifiers("Data data", &["data"], "_0x", WORD).unwrap();
        assert_eq!(out, "Data _0x0000");
    }

    #[test]
    fn test_non_ascii_letter_is_a_boundary() {
        let out = rename_identifiers("\u{f8}data = data", &["data"], "_0x", WORD).unwrap();
        assert_eq!(out, "\u{f8}_0x0000 = _0x0000");
    }

    #[tokio::test]
    async fn test_pass_boundary_ignores_non_ascii_letters() {
        let registry = PassRegistry::with_defaults();
        let options = ObfuscationConfig::default();
        let context = PassContext::new(LanguageTag::JavaScript, &registry, &options);

        let outcome = RenamePass
            .execute("const \u{e9}value = value;".to_string(), &context)
            .await
            .unwrap();
        match outcome {
            PassOutcome::Completed { text, .. } => {
                assert_eq!(text, "const \u{e9}_0x0000 = _0x0000;")
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_candidates_assigned_once() {
        let out = rename_identifiers("result", &["result", "result", "item"], "_0x", WORD).unwrap();
        assert_eq!(out, "_0x0000");
    }

    #[test]
    fn test_text_without_candidates_is_unchanged() {
        let source = "fn main() {\n    println!(\"hi\");\n}\n";
        let out = rename_identifiers(source, &["data", "value"], "_0x", WORD).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_invalid_boundary_is_an_error() {
        let err = rename_identifiers("data", &["data"], "_0x", "(").unwrap_err();
        assert!(err.to_string().contains("data"));
    }

    #[tokio::test]
    async fn test_pass_uses_language_candidates() {
        let registry = PassRegistry::with_defaults();
        let options = ObfuscationConfig::default();
        let context = PassContext::new(LanguageTag::Python, &registry, &options);

        let outcome = RenamePass
            .execute("def f(self):\n    return self.data\n".to_string(), &context)
            .await
            .unwrap();

        match outcome {
            PassOutcome::Completed { text, message } => {
                assert_eq!(text, "def f(_0x0000):\n    return _0x0000._0x0001\n");
                assert_eq!(message, "Renamed variables and functions for python");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
