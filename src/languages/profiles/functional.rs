use super::{LanguageProfile, PREFIX, WORD_BOUNDARY};
use crate::languages::LanguageTag;

fn haskell() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Haskell,
        identifiers: &["list", "maybe", "either", "monad", "functor"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"_0xdead :: Int
_0xdead = sum (filter even [0 .. 99])"#,
            r#"_0xcafe :: Int -> Int
_0xcafe x = if x > 0 then x * 2 + 1 else 0"#,
        ],
        canary_template: r#"-- Anti-tampering canary
integrityCheck :: Bool
integrityCheck =
  let secretValue = 0x{secret} :: Integer
  in if secretValue /= 0x{secret} then error "TamperingDetected" else True"#,
        mutation_comment: "-- AI-optimized Haskell structure",
        build_tool: "Cabal/Stack",
        executable_extension: ".exe",
        toolchain_note: "Requires Glasgow Haskell Compiler",
    }
}

fn ocaml() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::OCaml,
        identifiers: &["list", "option", "variant", "record", "module"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"let _0xdead () =
  List.init 100 (fun i -> i) |> List.filter (fun i -> i mod 2 = 0) |> List.fold_left (+) 0"#,
        ],
        canary_template: r#"(* Anti-tampering canary *)
let integrity_check () =
  let secret_value = 0x{secret} in
  if secret_value <> 0x{secret} then failwith "TamperingDetected";
  true

let canary_active = integrity_check ()"#,
        mutation_comment: "(* AI-optimized OCaml structure *)",
        build_tool: "Dune",
        executable_extension: ".exe",
        toolchain_note: "Requires OCaml compiler",
    }
}

fn clojure() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Clojure,
        identifiers: &["vector", "map", "sequence", "atom", "ref"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"(defn _0xdead []
  (reduce + (filter even? (range 100))))"#,
            "(def _0xcafe (fn [x] (if (pos? x) (inc (* x 2)) 0)))",
        ],
        canary_template: r#";; Anti-tampering canary
(defn integrity-check []
  (let [secret-value 0x{secret}]
    (when (not= secret-value 0x{secret})
      (throw (Exception. "TamperingDetected")))
    true))

(def canary-active (integrity-check))"#,
        mutation_comment: ";; AI-optimized Clojure structure",
        build_tool: "Leiningen",
        executable_extension: ".jar",
        toolchain_note: "Requires Leiningen build tool",
    }
}

fn elm() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Elm,
        identifiers: &["list", "maybe", "result", "model", "message"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"x0xdead : Int
x0xdead =
    List.range 0 99 |> List.filter (\i -> modBy 2 i == 0) |> List.sum"#,
        ],
        canary_template: r#"-- Anti-tampering canary
integrityCheck : Bool
integrityCheck =
    let
        secretValue = 0x{secret}
    in
    secretValue == 0x{secret}"#,
        mutation_comment: "-- AI-optimized Elm structure",
        build_tool: "Elm Make",
        executable_extension: ".js",
        toolchain_note: "Compiles to JavaScript",
    }
}

pub(super) fn profiles() -> Vec<LanguageProfile> {
    vec![haskell(), ocaml(), clojure(), elm()]
}
