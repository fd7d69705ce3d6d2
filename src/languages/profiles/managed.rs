use super::{LanguageProfile, PREFIX, WORD_BOUNDARY};
use crate::languages::LanguageTag;

fn java() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Java,
        identifiers: &["object", "string", "list", "map", "stream", "optional"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"public class _0xDummy {
    private int _0xvalue = 42;
    public int _0xmethod() { return _0xvalue; }
}"#,
            r#"public static void _0xhelper() {
    List<Integer> _0xlist = Arrays.asList(1, 2, 3);
    _0xlist.stream().forEach(System.out::println);
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
public class _IntegrityCheck {
    private static final int _SECRET_VALUE = 0x{secret};

    public static boolean _check() {
        if (_SECRET_VALUE != 0x{secret}) {
            throw new RuntimeException("TamperingDetected");
        }
        return true;
    }
}

private static final boolean _CANARY_ACTIVE = _IntegrityCheck._check();"#,
        mutation_comment: "// AI-optimized Java structure",
        build_tool: "Maven/Gradle",
        executable_extension: ".jar",
        toolchain_note: "Requires Maven/Gradle and JRE for compilation",
    }
}

fn csharp() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::CSharp,
        identifiers: &["object", "string", "list", "dictionary", "linq"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"public class _0xDummy {
    private int _0xvalue = 42;
    public int _0xMethod() => _0xvalue;
}"#,
            r#"public static void _0xHelper() {
    var _0xlist = new List<int> {1, 2, 3};
    _0xlist.ForEach(Console.WriteLine);
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
public static class _IntegrityCheck {
    private static readonly int _secretValue = 0x{secret};

    public static bool _Check() {
        if (_secretValue != 0x{secret}) {
            throw new Exception("TamperingDetected");
        }
        return true;
    }
}

private static readonly bool _canaryActive = _IntegrityCheck._Check();"#,
        mutation_comment: "// AI-optimized C# structure",
        build_tool: ".NET Core",
        executable_extension: ".exe",
        toolchain_note: "Requires .NET Core SDK for compilation",
    }
}

fn swift() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Swift,
        identifiers: &["array", "dictionary", "string", "optional", "closure"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"func _0xdummy() {
    let _0xarray = [1, 2, 3, 4, 5]
    let _0xsum = _0xarray.reduce(0, +)
}"#,
            r#"class _0xDummyClass {
    private var _0xvalue = 42
    func _0xmethod() -> Int { return _0xvalue }
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
private let _secretValue: UInt32 = 0x{secret}

func _integrityCheck() -> Bool {
    if _secretValue != 0x{secret} {
        fatalError("TamperingDetected")
    }
    return true
}

private let _canaryActive = _integrityCheck()"#,
        mutation_comment: "// AI-optimized Swift structure",
        build_tool: "Xcode",
        executable_extension: ".app",
        toolchain_note: "Requires Xcode or Swift compiler",
    }
}

fn kotlin() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Kotlin,
        identifiers: &["list", "map", "string", "nullable", "lambda"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"fun _0xdummy(): Int {
    val _0xlist = listOf(1, 2, 3, 4, 5)
    return _0xlist.filter { it % 2 == 0 }.sum()
}"#,
            "private val _0xfeed: (Int) -> Int = { x -> if (x > 0) x * 2 + 1 else 0 }",
        ],
        canary_template: r#"// Anti-tampering canary functions
private const val _SECRET_VALUE = 0x{secret}L

private fun _integrityCheck(): Boolean {
    if (_SECRET_VALUE != 0x{secret}L) {
        throw IllegalStateException("TamperingDetected")
    }
    return true
}

private val _canaryActive = _integrityCheck()"#,
        mutation_comment: "// AI-optimized Kotlin structure",
        build_tool: "Gradle",
        executable_extension: ".jar",
        toolchain_note: "Requires Kotlin compiler and Gradle",
    }
}

fn scala() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Scala,
        identifiers: &["list", "map", "option", "future", "stream"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            "def _0xdead(): Int = (0 until 100).filter(_ % 2 == 0).sum",
            "val _0xcafe: Int => Int = x => if (x > 0) x * 2 + 1 else 0",
        ],
        canary_template: r#"// Anti-tampering canary
object IntegrityCheck {
  private val secretValue = 0x{secret}L
  def check(): Boolean = {
    if (secretValue != 0x{secret}L) throw new RuntimeException("TamperingDetected")
    true
  }
}"#,
        mutation_comment: "// AI-optimized Scala structure",
        build_tool: "SBT",
        executable_extension: ".jar",
        toolchain_note: "Requires Scala compiler and SBT",
    }
}

fn fsharp() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::FSharp,
        identifiers: &["list", "option", "sequence", "async", "computation"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            "let _0xdead () = [0 .. 99] |> List.filter (fun i -> i % 2 = 0) |> List.sum",
        ],
        canary_template: r#"// Anti-tampering canary
let integrityCheck () =
    let secretValue = 0x{secret}u
    if secretValue <> 0x{secret}u then failwith "TamperingDetected"
    true"#,
        mutation_comment: "// AI-optimized F# structure",
        build_tool: ".NET Core",
        executable_extension: ".exe",
        toolchain_note: "Requires .NET Core SDK",
    }
}

fn dart() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Dart,
        identifiers: &["list", "map", "string", "future", "stream"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"int _0xdummy() {
  final _0xlist = [1, 2, 3, 4, 5];
  return _0xlist.where((i) => i.isEven).fold(0, (a, b) => a + b);
}"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
const int _secretValue = 0x{secret};

bool _integrityCheck() {
  if (_secretValue != 0x{secret}) {
    throw StateError('TamperingDetected');
  }
  return true;
}

final bool _canaryActive = _integrityCheck();"#,
        mutation_comment: "// AI-optimized Dart structure",
        build_tool: "Dart Compile",
        executable_extension: ".exe",
        toolchain_note: "Requires Dart SDK",
    }
}

fn visual_basic() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::VisualBasic,
        identifiers: &["object", "string", "array", "collection", "module"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"Private Function x0xdead() As Integer
    Dim x0xbeef As Integer = 0
    For i As Integer = 0 To 98 Step 2
        x0xbeef += i
    Next
    Return x0xbeef
End Function"#,
        ],
        canary_template: r#"' Anti-tampering canary
Private Function IntegrityCheck() As Boolean
    Const SecretValue As UInteger = &H{secret}UI
    If SecretValue <> &H{secret}UI Then Throw New Exception("TamperingDetected")
    Return True
End Function"#,
        mutation_comment: "' AI-optimized Visual Basic structure",
        build_tool: ".NET Framework",
        executable_extension: ".exe",
        toolchain_note: "Requires .NET Framework",
    }
}

fn pascal() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Pascal,
        identifiers: &["array", "record", "pointer", "string", "procedure"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"function x0xdead: Integer;
var i: Integer;
begin
  Result := 0;
  for i := 0 to 49 do
    Result := Result + i * 2;
end;"#,
        ],
        canary_template: r#"{ Anti-tampering canary }
function IntegrityCheck: Boolean;
const
  SecretValue = ${secret};
begin
  if SecretValue <> ${secret} then
    raise Exception.Create('TamperingDetected');
  Result := True;
end;"#,
        mutation_comment: "{ AI-optimized Pascal structure }",
        build_tool: "Free Pascal",
        executable_extension: ".exe",
        toolchain_note: "Requires Free Pascal compiler",
    }
}

pub(super) fn profiles() -> Vec<LanguageProfile> {
    vec![
        java(),
        csharp(),
        swift(),
        kotlin(),
        scala(),
        fsharp(),
        dart(),
        visual_basic(),
        pascal(),
    ]
}
