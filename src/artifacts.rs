//! Output artifacts for a finished run
//!
//! Two files can be produced from the obfuscated text: the source artifact,
//! which is the text itself under `<base>_obfuscated<.ext>`, and a
//! placeholder executable under `<base>_obfuscated<executable extension>`
//! holding plain-text build metadata. Nothing is compiled.

use crate::config::ObfuscationConfig;
use crate::languages::{classify, LanguageTag, PassRegistry};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const GENERATOR: &str = "PolymorphShield";
const SUFFIX: &str = "_obfuscated";
const FINGERPRINT_LEN: usize = 12;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Source,
    Executable,
}

/// One file written by [`ArtifactSet::write_to`]
#[derive(Debug, Clone, Serialize)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// `name` without its last non-empty extension
fn base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, ext)) if !ext.is_empty() => base,
        _ => name,
    }
}

/// `foo.py` -> `foo_obfuscated.py`; files without an extension get `.txt`
pub fn source_artifact_name(file_name: &str) -> String {
    let extension = match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "txt",
    };
    format!("{}{}.{}", base_name(file_name), SUFFIX, extension)
}

/// `foo.py` -> `foo_obfuscated.exe`, using the language's executable extension
pub fn executable_artifact_name(file_name: &str, executable_extension: &str) -> String {
    format!("{}{}{}", base_name(file_name), SUFFIX, executable_extension)
}

/// First hex digits of the SHA-256 of a license key
pub fn license_fingerprint(license_key: &str) -> String {
    let digest = Sha256::digest(license_key.as_bytes());
    let mut fingerprint = hex::encode(digest);
    fingerprint.truncate(FINGERPRINT_LEN);
    fingerprint
}

/// Everything needed to describe the placeholder executable
#[derive(Debug, Clone, Serialize)]
pub struct ExecutableMetadata {
    pub original_file: String,
    pub language: LanguageTag,
    pub language_name: &'static str,
    pub build_tool: &'static str,
    pub executable_extension: &'static str,
    pub toolchain_note: &'static str,
    pub obfuscated_length: usize,
    pub hardware_binding: bool,
    pub license_fingerprint: Option<String>,
}

impl ExecutableMetadata {
    pub fn new(
        file_name: &str,
        language: LanguageTag,
        registry: &PassRegistry,
        obfuscated: &str,
        options: &ObfuscationConfig,
    ) -> Self {
        let profile = registry.profile(language);
        Self {
            original_file: file_name.to_string(),
            language,
            language_name: language.name(),
            build_tool: profile.build_tool,
            executable_extension: profile.executable_extension,
            toolchain_note: profile.toolchain_note,
            obfuscated_length: obfuscated.chars().count(),
            hardware_binding: options.hardware_binding,
            license_fingerprint: options
                .has_license_key()
                .then(|| license_fingerprint(&options.license_key)),
        }
    }

    /// Plain-text body of the placeholder executable
    pub fn render(&self) -> String {
        let binding = if self.hardware_binding {
            "enabled"
        } else {
            "disabled"
        };
        let license = self
            .license_fingerprint
            .as_deref()
            .map(|f| format!("sha256:{}", f))
            .unwrap_or_else(|| "none".to_string());

        format!(
            "# Compiled executable metadata\n\
             # Original file: {file}\n\
             # Language: {language}\n\
             # Build tool: {tool}\n\
             # Obfuscated code length: {length} characters\n\
             # Hardware binding: {binding}\n\
             # License: {license}\n\
             # Generated by: {generator}\n\
             \n\
             # This would be a compiled executable in production\n\
             # The actual compilation would be handled by {tool}\n\
             # {note}\n",
            file = self.original_file,
            language = self.language_name,
            tool = self.build_tool,
            length = self.obfuscated_length,
            binding = binding,
            license = license,
            generator = GENERATOR,
            note = self.toolchain_note,
        )
    }
}

/// The artifacts of one run, ready to be written
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub source_name: String,
    pub source: String,
    pub executable: Option<(String, ExecutableMetadata)>,
}

impl ArtifactSet {
    /// Build the set for `file_name`; the executable placeholder is included
    /// only when executable generation was enabled
    pub fn new(
        file_name: &str,
        language: LanguageTag,
        registry: &PassRegistry,
        obfuscated: String,
        options: &ObfuscationConfig,
    ) -> Self {
        let executable = options.executable_generation.then(|| {
            let metadata = ExecutableMetadata::new(file_name, language, registry, &obfuscated, options);
            let name = executable_artifact_name(file_name, metadata.executable_extension);
            (name, metadata)
        });

        Self {
            source_name: source_artifact_name(file_name),
            source: obfuscated,
            executable,
        }
    }

    /// Same as [`ArtifactSet::new`] with the language taken from `file_name`
    pub fn classified(
        file_name: &str,
        registry: &PassRegistry,
        obfuscated: String,
        options: &ObfuscationConfig,
    ) -> Self {
        Self::new(file_name, classify(file_name), registry, obfuscated, options)
    }

    /// Write every artifact into `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> Result<Vec<WrittenArtifact>, ArtifactError> {
        std::fs::create_dir_all(dir).map_err(|source| ArtifactError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = vec![write_file(dir, &self.source_name, &self.source, ArtifactKind::Source)?];
        if let Some((name, metadata)) = &self.executable {
            written.push(write_file(dir, name, &metadata.render(), ArtifactKind::Executable)?);
        }
        Ok(written)
    }
}

fn write_file(
    dir: &Path,
    name: &str,
    content: &str,
    kind: ArtifactKind,
) -> Result<WrittenArtifact, ArtifactError> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(|source| ArtifactError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "Wrote artifact");
    Ok(WrittenArtifact {
        kind,
        path,
        bytes: content.len(),
    })
}
