use super::{LanguageProfile, PREFIX, WORD_BOUNDARY};
use crate::languages::LanguageTag;

fn python() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Python,
        identifiers: &["self", "args", "kwargs", "obj", "instance", "cls"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"def _0xdead():
    _0xbeef = [i for i in range(100) if i % 2 == 0]
    return sum(_0xbeef)"#,
            r#"def _0xcafe():
    _0xbabe = {"a": 1, "b": 2, "c": 3}
    return len(_0xbabe.keys())"#,
            "_0xfeed = lambda x: x * 2 + 1 if x > 0 else 0",
        ],
        canary_template: r#"# Anti-tampering canary functions
def _integrity_check():
    _secret_value = 0x{secret}
    if _secret_value != 0x{secret}:
        raise Exception("TamperingDetected")
    return True

_canary_active = _integrity_check()"#,
        mutation_comment: "# AI-optimized Python structure",
        build_tool: "PyInstaller",
        executable_extension: ".exe",
        toolchain_note: "Requires PyInstaller for executable generation",
    }
}

fn php() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Php,
        identifiers: &["array", "object", "string", "session", "request"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"function _0xdummy() {
    $_0xarray = [1, 2, 3, 4, 5];
    return array_sum($_0xarray);
}"#,
            r#"class _0xDummyClass {
    private $_0xvalue = 42;
    public function _0xmethod() { return $this->_0xvalue; }
}"#,
        ],
        canary_template: r#"<?php
// Anti-tampering canary functions
function _integrityCheck() {
    $_secretValue = 0x{secret};
    if ($_secretValue !== 0x{secret}) {
        throw new Exception("TamperingDetected");
    }
    return true;
}

$_canaryActive = _integrityCheck();
?>"#,
        mutation_comment: "// AI-optimized PHP structure",
        build_tool: "PHP Phar",
        executable_extension: ".phar",
        toolchain_note: "Requires PHP for Phar archive creation",
    }
}

fn ruby() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Ruby,
        identifiers: &["array", "hash", "string", "symbol", "block"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"def _0xdummy
    _0xarray = [1, 2, 3, 4, 5]
    _0xarray.sum
end"#,
            r#"class _0xDummyClass
    def initialize
        @_0xvalue = 42
    end
end"#,
        ],
        canary_template: r#"# Anti-tampering canary functions
def _integrity_check
    _secret_value = 0x{secret}
    if _secret_value != 0x{secret}
        raise "TamperingDetected"
    end
    true
end

_canary_active = _integrity_check"#,
        mutation_comment: "# AI-optimized Ruby structure",
        build_tool: "Ruby Gem",
        executable_extension: ".exe",
        toolchain_note: "Requires Ruby and gem packaging tools",
    }
}

fn shell() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Shell,
        identifiers: &["variable", "argument", "parameter", "script", "command"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"_0xdummy() {
    local _0xsum=0
    for i in 1 2 3 4 5; do _0xsum=$((_0xsum + i)); done
    echo "$_0xsum" > /dev/null
}"#,
        ],
        canary_template: r##"# Anti-tampering canary functions
_secret_value=$((0x{secret}))
if [ "$_secret_value" -ne $((0x{secret})) ]; then
    echo "TamperingDetected" >&2
    exit 1
fi"##,
        mutation_comment: "# AI-optimized Shell structure",
        build_tool: "Shebang",
        executable_extension: ".sh",
        toolchain_note: "Executable shell script",
    }
}

fn powershell() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::PowerShell,
        identifiers: &["object", "cmdlet", "parameter", "pipeline", "script"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"function Get-0xDead {
    $_0xbeef = 0..99 | Where-Object { $_ % 2 -eq 0 }
    return ($_0xbeef | Measure-Object -Sum).Sum
}"#,
        ],
        canary_template: r##"# Anti-tampering canary functions
$_secretValue = 0x{secret}
if ($_secretValue -ne 0x{secret}) {
    throw "TamperingDetected"
}"##,
        mutation_comment: "# AI-optimized PowerShell structure",
        build_tool: "PowerShell",
        executable_extension: ".ps1",
        toolchain_note: "PowerShell script file",
    }
}

fn lua() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Lua,
        identifiers: &["table", "function", "string", "number", "userdata"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"local function _0xdummy()
    local _0xsum = 0
    for i = 1, 100 do
        if i % 2 == 0 then _0xsum = _0xsum + i end
    end
    return _0xsum
end"#,
        ],
        canary_template: r#"-- Anti-tampering canary functions
local _secret_value = 0x{secret}

local function _integrity_check()
    if _secret_value ~= 0x{secret} then
        error("TamperingDetected")
    end
    return true
end

local _canary_active = _integrity_check()"#,
        mutation_comment: "-- AI-optimized Lua structure",
        build_tool: "Lua Compiler",
        executable_extension: ".exe",
        toolchain_note: "Requires Lua compiler",
    }
}

fn perl() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Perl,
        identifiers: &["scalar", "array", "hash", "reference", "subroutine"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"sub _0xdead {
    my @_0xbeef = grep { $_ % 2 == 0 } 0 .. 99;
    my $_0xcafe = 0;
    $_0xcafe += $_ for @_0xbeef;
    return $_0xcafe;
}"#,
        ],
        canary_template: r##"# Anti-tampering canary functions
my $_secret_value = 0x{secret};
die "TamperingDetected" if $_secret_value != 0x{secret};"##,
        mutation_comment: "# AI-optimized Perl structure",
        build_tool: "PAR::Packer",
        executable_extension: ".exe",
        toolchain_note: "Requires PAR::Packer for executable",
    }
}

fn sql() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Sql,
        identifiers: &["table", "column", "row", "query", "result"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"CREATE TEMPORARY TABLE _0xdead AS
SELECT 1 AS _0xbeef UNION ALL SELECT 2;"#,
            "SELECT COUNT(*) AS _0xcafe FROM (SELECT 1 AS _0xbabe) AS _0xfeed;",
        ],
        canary_template: r#"-- Anti-tampering canary
SELECT CASE
    WHEN x'{secret}' = x'{secret}' THEN 1
    ELSE 1 / 0
END AS _canary_active;"#,
        mutation_comment: "-- AI-optimized SQL structure",
        build_tool: "Database Engine",
        executable_extension: ".sql",
        toolchain_note: "SQL script file",
    }
}

fn r() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::R,
        identifiers: &["vector", "matrix", "dataframe", "list", "factor"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"x0xdead <- function() {
  x0xbeef <- Filter(function(i) i %% 2 == 0, 1:100)
  sum(x0xbeef)
}"#,
            "x0xcafe <- function(x) if (x > 0) x * 2 + 1 else 0",
        ],
        canary_template: r#"# Anti-tampering canary
.integrity_check <- function() {
  .secret_value <- "{secret}"
  if (.secret_value != "{secret}") stop("TamperingDetected")
  TRUE
}
.canary_active <- .integrity_check()"#,
        mutation_comment: "# AI-optimized R structure",
        build_tool: "R Package",
        executable_extension: ".exe",
        toolchain_note: "Requires R and packaging tools",
    }
}

fn matlab() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Matlab,
        identifiers: &["matrix", "vector", "array", "function", "script"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"function _0xbeef = x0xdead()
    _0xbeef = sum(0:2:98);
end"#,
        ],
        canary_template: r#"% Anti-tampering canary
secretValue = hex2dec('{secret}');
if secretValue ~= hex2dec('{secret}')
    error('TamperingDetected');
end"#,
        mutation_comment: "% AI-optimized MATLAB structure",
        build_tool: "MATLAB Compiler",
        executable_extension: ".exe",
        toolchain_note: "Requires MATLAB Compiler Runtime",
    }
}

pub(super) fn profiles() -> Vec<LanguageProfile> {
    vec![
        python(),
        php(),
        ruby(),
        shell(),
        powershell(),
        lua(),
        perl(),
        sql(),
        r(),
        matlab(),
    ]
}
