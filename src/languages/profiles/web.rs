use super::{LanguageProfile, JAVASCRIPT_CANARY, PREFIX, WORD_BOUNDARY};
use crate::languages::LanguageTag;

const ELECTRON_NOTE: &str = "Requires Electron for desktop app packaging";

pub(super) fn javascript() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::JavaScript,
        identifiers: &[
            "document", "window", "console", "element", "event", "callback", "promise",
        ],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"function _0xdead() {
    const _0xbeef = Array.from({length: 100}, (_, i) => i).filter(i => i % 2 === 0);
    return _0xbeef.reduce((a, b) => a + b, 0);
}"#,
            r#"const _0xcafe = () => {
    const _0xbabe = {a: 1, b: 2, c: 3};
    return Object.keys(_0xbabe).length;
};"#,
            "const _0xfeed = (x) => x > 0 ? x * 2 + 1 : 0;",
        ],
        canary_template: JAVASCRIPT_CANARY,
        mutation_comment: "// AI-optimized JavaScript structure",
        build_tool: "Node.js/pkg",
        executable_extension: ".exe",
        toolchain_note: "Requires Node.js and pkg for executable generation",
    }
}

fn typescript() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::TypeScript,
        identifiers: &["interface", "type", "generic", "module", "namespace"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"interface _0xInterface {
    _0xprop: number;
    _0xmethod(): string;
}"#,
            r#"function _0xgeneric<T>(_0xparam: T): T {
    return _0xparam;
}"#,
            r#"const _0xenum = {
    _0xvalue1: 1,
    _0xvalue2: 2
} as const;"#,
        ],
        canary_template: r#"// Anti-tampering canary functions
function _integrityCheck(): boolean {
    const _secretValue: number = 0x{secret};
    if (_secretValue !== 0x{secret}) {
        throw new Error("TamperingDetected");
    }
    return true;
}

const _canaryActive: boolean = _integrityCheck();"#,
        mutation_comment: "// AI-optimized TypeScript structure",
        build_tool: "Node.js/pkg",
        executable_extension: ".exe",
        toolchain_note: "Requires TypeScript compilation and pkg",
    }
}

fn react() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::React,
        identifiers: &["props", "state", "component", "hook", "context", "ref"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            r#"const _0xDummyComponent = () => {
    const [_0xstate, _0xsetState] = useState(0);
    return <div>{_0xstate}</div>;
};"#,
            r#"const _0xhook = () => {
    useEffect(() => {
        console.log('_0xeffect');
    }, []);
};"#,
        ],
        canary_template: JAVASCRIPT_CANARY,
        mutation_comment: "// AI-optimized React structure",
        build_tool: "Electron",
        executable_extension: ".exe",
        toolchain_note: ELECTRON_NOTE,
    }
}

fn vue() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Vue,
        identifiers: &["computed", "watch", "mounted", "props", "emit"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[r#"const _0xcomponent = {
    data() {
        return { _0xvalue: 42 };
    },
    computed: {
        _0xcomputed() { return this._0xvalue * 2; }
    }
};"#],
        canary_template: JAVASCRIPT_CANARY,
        mutation_comment: "// AI-optimized Vue structure",
        build_tool: "Electron",
        executable_extension: ".exe",
        toolchain_note: ELECTRON_NOTE,
    }
}

fn svelte() -> LanguageProfile {
    LanguageProfile {
        tag: LanguageTag::Svelte,
        identifiers: &["store", "reactive", "derived"],
        name_prefix: PREFIX,
        boundary: WORD_BOUNDARY,
        junk_templates: &[
            "let _0xvalue = 42;\n$: _0xcomputed = _0xvalue * 2;",
            r#"function _0xhandler() {
    _0xvalue += 1;
}"#,
        ],
        canary_template: JAVASCRIPT_CANARY,
        mutation_comment: "// AI-optimized Svelte structure",
        build_tool: "Electron",
        executable_extension: ".exe",
        toolchain_note: ELECTRON_NOTE,
    }
}

pub(super) fn profiles() -> Vec<LanguageProfile> {
    vec![javascript(), typescript(), react(), vue(), svelte()]
}
