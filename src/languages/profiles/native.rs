use super::{LanguageProfile, PREFIX, WORD_BOUNDARY};
use crate::languages::LanguageTag;

fn c() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::C,
        identifiers: &["ptr", "buffer", "size", "length", "malloc"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"void _0xdummy() {
    int _0xarray[10];
    for(int i = 0; i < 10; i++) {
        _0xarray[i] = i * 2;
    }
}"#,
            r#"int _0xhelper(int _0xval) {
    return _0xval > 0 ? _0xval * 2 : 0;
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
static const int _secret_value = 0x{secret};

int _integrity_check() {
    if (_secret_value != 0x{secret}) {
        exit(1); // Tampering detected
    }
    return 1;
}

static const int _canary_active = _integrity_check();"#,
        mutation_comment: "// AI-optimized C structure",
        build_tool: "GCC/Clang",
        executable_extension: ".exe",
        toolchain_note: "Requires GCC or Clang compiler",
    }
}

fn cpp() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Cpp,
        identifiers: &["vector", "string", "iterator", "pointer", "reference"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"void _0xdummy() {
    std::vector<int> _0xvec = {1, 2, 3, 4, 5};
    std::sort(_0xvec.begin(), _0xvec.end());
}"#,
            r#"template<typename T>
T _0xgeneric(T _0xval) {
    return _0xval;
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
namespace _canary {
    const int _secret_value = 0x{secret};

    bool _integrity_check() {
        if (_secret_value != 0x{secret}) {
            throw std::runtime_error("TamperingDetected");
        }
        return true;
    }

    static const bool _canary_active = _integrity_check();
}"#,
        mutation_comment: "// AI-optimized C++ structure",
        build_tool: "CMake/Make",
        executable_extension: ".exe",
        toolchain_note: "Requires GCC or Clang compiler",
    }
}

fn rust() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Rust,
        identifiers: &["vec", "string", "option", "result", "iterator"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"fn _0xdummy() {
    let _0xvec: Vec<i32> = vec![1, 2, 3, 4, 5];
    let _0xsum: i32 = _0xvec.iter().sum();
}"#,
            r#"fn _0xhelper(_0xval: i32) -> i32 {
    if _0xval > 0 { _0xval * 2 } else { 0 }
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
const _SECRET_VALUE: u32 = 0x{secret};

fn _integrity_check() -> bool {
    if _SECRET_VALUE != 0x{secret} {
        panic!("TamperingDetected");
    }
    true
}

static _CANARY_ACTIVE: bool = _integrity_check();"#,
        mutation_comment: "// AI-optimized Rust structure",
        build_tool: "Cargo",
        executable_extension: ".exe",
        toolchain_note: "Requires Rust toolchain and Cargo",
    }
}

fn go() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Go,
        identifiers: &["slice", "channel", "goroutine", "interface", "struct"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"func _0xdummy() {
    _0xslice := []int{1, 2, 3, 4, 5}
    sort.Ints(_0xslice)
}"#,
            r#"func _0xhelper(_0xval int) int {
    if _0xval > 0 {
        return _0xval * 2
    }
    return 0
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
package main

const _secretValue = 0x{secret}

func _integrityCheck() bool {
    if _secretValue != 0x{secret} {
        panic("TamperingDetected")
    }
    return true
}

var _canaryActive = _integrityCheck()"#,
        mutation_comment: "// AI-optimized Go structure",
        build_tool: "Go Build",
        executable_extension: ".exe",
        toolchain_note: "Requires Go compiler for executable generation",
    }
}

fn zig() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Zig,
        identifiers: &["array", "slice", "struct", "union", "comptime"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"fn _0xdead() u32 {
    var _0xbeef: u32 = 0;
    var i: u32 = 0;
    while (i < 100) : (i += 2) _0xbeef += i;
    return _0xbeef;
}"#,
        ],
        canary_template: r#"// Anti-tampering canary
fn integrityCheck() bool {
    const secret_value: u32 = 0x{secret};
    if (secret_value != 0x{secret}) @panic("TamperingDetected");
    return true;
}"#,
        mutation_comment: "// AI-optimized Zig structure",
        build_tool: "Zig Build",
        executable_extension: ".exe",
        toolchain_note: "Requires Zig compiler",
    }
}

fn d() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::D,
        identifiers: &["array", "string", "struct", "class", "template"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"int _0xdead() {
    import std.algorithm : filter, sum;
    import std.range : iota;
    return iota(100).filter!(i => i % 2 == 0).sum;
}"#,
        ],
        canary_template: r#"// Anti-tampering canary
bool integrityCheck() {
    immutable uint secretValue = 0x{secret};
    if (secretValue != 0x{secret}) throw new Exception("TamperingDetected");
    return true;
}"#,
        mutation_comment: "// AI-optimized D structure",
        build_tool: "DMD/LDC",
        executable_extension: ".exe",
        toolchain_note: "Requires D compiler",
    }
}

fn nim() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Nim,
        identifiers: &["seq", "string", "object", "proc", "template"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"proc x0xdead(): int =
  for i in countup(0, 98, 2):
    result += i"#,
        ],
        canary_template: r#"# Anti-tampering canary
proc integrityCheck(): bool =
  const secretValue = 0x{secret}
  if secretValue != 0x{secret}:
    raise newException(Exception, "TamperingDetected")
  true

let canaryActive = integrityCheck()"#,
        mutation_comment: "# AI-optimized Nim structure",
        build_tool: "Nim Compiler",
        executable_extension: ".exe",
        toolchain_note: "Requires Nim compiler",
    }
}

fn assembly() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Assembly,
        identifiers: &["register", "memory", "stack", "heap", "instruction"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"_0xdead:
    xor eax, eax
    mov ecx, 50
_0xbeef:
    add eax, ecx
    loop _0xbeef
    ret"#,
        ],
        canary_template: r#"; Anti-tampering canary
_integrity_check:
    mov eax, 0x{secret}
    cmp eax, 0x{secret}
    jne _tampering_detected
    ret"#,
        mutation_comment: "; AI-optimized Assembly structure",
        build_tool: "NASM/GAS",
        executable_extension: ".exe",
        toolchain_note: "Requires assembler and linker",
    }
}

pub(super) fn profiles() -> Vec<LanguageProfile> {
    vec![c(), cpp(), rust(), go(), zig(), d(), nim(), assembly()]
}
