//! Language tags, file-name classification and the per-language pass registry
//!
//! Every pass that varies by language reads its data from a single
//! [`LanguageProfile`] looked up in the [`PassRegistry`]. Adding a language
//! means adding one tag below and one profile record.

#[macro_use]
mod tag_enum_macro;
mod profiles;
mod registry;

pub use registry::{LanguageProfile, PassRegistry, BASE_IDENTIFIERS};

define_tag_enum! {
    /// Source language families recognised by the classifier
    LanguageTag {
        JavaScript => "javascript" : "JavaScript" ["js"],
        TypeScript => "typescript" : "TypeScript" ["ts"],
        React => "react" : "React" ["jsx", "tsx"],
        Vue => "vue" : "Vue.js" ["vue"],
        Svelte => "svelte" : "Svelte" ["svelte"],
        Python => "python" : "Python" ["py"],
        Java => "java" : "Java" ["java"],
        C => "c" : "C" ["c"],
        Cpp => "cpp" : "C++" ["cpp", "cc", "cxx"],
        CSharp => "csharp" : "C#" ["cs"],
        Go => "go" : "Go" ["go"],
        Rust => "rust" : "Rust" ["rs"],
        Php => "php" : "PHP" ["php"],
        Ruby => "ruby" : "Ruby" ["rb"],
        Swift => "swift" : "Swift" ["swift"],
        Kotlin => "kotlin" : "Kotlin" ["kt"],
        Scala => "scala" : "Scala" ["scala"],
        Haskell => "haskell" : "Haskell" ["hs"],
        OCaml => "ocaml" : "OCaml" ["ml"],
        FSharp => "fsharp" : "F#" ["fs"],
        Clojure => "clojure" : "Clojure" ["clj"],
        Elm => "elm" : "Elm" ["elm"],
        Assembly => "assembly" : "Assembly" ["asm", "s"],
        Shell => "shell" : "Shell Script" ["sh", "bash"],
        PowerShell => "powershell" : "PowerShell" ["ps1"],
        Lua => "lua" : "Lua" ["lua"],
        Perl => "perl" : "Perl" ["perl", "pl"],
        Sql => "sql" : "SQL" ["sql"],
        R => "r" : "R" ["r"],
        Matlab => "matlab" : "MATLAB" ["m"],
        Dart => "dart" : "Dart" ["dart"],
        VisualBasic => "visualbasic" : "Visual Basic" ["vb"],
        Pascal => "pascal" : "Pascal" ["pas"],
        D => "d" : "D" ["d"],
        Nim => "nim" : "Nim" ["nim"],
        Zig => "zig" : "Zig" ["zig"],
    }
}

/// Tag used for empty, missing or unmapped extensions
pub const DEFAULT_LANGUAGE: LanguageTag = LanguageTag::JavaScript;

/// Classify a file name by the text after its last `.`
///
/// Total over all strings: anything without a recognised extension
/// classifies as [`DEFAULT_LANGUAGE`].
pub fn classify(file_name: &str) -> LanguageTag {
    file_extension(file_name)
        .and_then(LanguageTag::from_extension)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// The text after the last `.`, if non-empty
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        python = { "sample.py", LanguageTag::Python },
        upper_case = { "MAIN.RS", LanguageTag::Rust },
        jsx_is_react = { "App.jsx", LanguageTag::React },
        tsx_is_react = { "App.tsx", LanguageTag::React },
        plain_ts = { "index.ts", LanguageTag::TypeScript },
        cxx = { "engine.cxx", LanguageTag::Cpp },
        gas = { "boot.s", LanguageTag::Assembly },
        bash = { "install.bash", LanguageTag::Shell },
        last_dot_wins = { "archive.tar.go", LanguageTag::Go },
        dotfile = { ".lua", LanguageTag::Lua },
    )]
    fn test_classify_known(file_name: &str, expected: LanguageTag) {
        assert_eq!(classify(file_name), expected);
    }

    #[parameterized(
        unknown_extension = { "a.qq" },
        no_extension = { "a" },
        trailing_dot = { "a." },
        empty = { "" },
        dotted_directory = { "dir.v2/Makefile" },
    )]
    fn test_classify_defaults(file_name: &str) {
        assert_eq!(classify(file_name), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_every_extension_maps_to_one_tag() {
        let mut seen = std::collections::HashSet::new();
        for tag in LanguageTag::all_variants() {
            assert!(!tag.extensions().is_empty(), "{} has no extensions", tag);
            for ext in tag.extensions() {
                assert!(seen.insert(*ext), "extension {} registered twice", ext);
                assert_eq!(LanguageTag::from_extension(ext), Some(*tag));
            }
        }
    }

    #[test]
    fn test_from_id_roundtrip() {
        for tag in LanguageTag::all_variants() {
            assert_eq!(LanguageTag::from_id(tag.id()), Some(*tag));
        }
        assert_eq!(LanguageTag::from_id("PYTHON"), Some(LanguageTag::Python));
        assert_eq!(LanguageTag::from_id("cobol"), None);
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&LanguageTag::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");

        let tag: LanguageTag = serde_json::from_str("\"fsharp\"").unwrap();
        assert_eq!(tag, LanguageTag::FSharp);

        assert!(serde_json::from_str::<LanguageTag>("\"cobol\"").is_err());
    }

    #[test]
    fn test_display_is_id() {
        assert_eq!(LanguageTag::Cpp.to_string(), "cpp");
        assert_eq!(LanguageTag::Cpp.name(), "C++");
    }
}
