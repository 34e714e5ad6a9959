//! Line-oriented source builder plus the per-profile module syntax.

use crate::domain::value_objects::SyntaxProfile;

const INDENT: &str = "    ";

/// Accumulates generated source with consistent indentation.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth. An empty line carries no indent.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line);
        }
        self
    }

    /// Write `open`, the indented body, then `close`.
    pub fn block(
        &mut self,
        open: impl AsRef<str>,
        close: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(open);
        self.indented(body);
        self.line(close)
    }

    /// Write `body` one level deeper without surrounding lines.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Module and declaration syntax for one [`SyntaxProfile`].
///
/// Typed output uses ES module `import`/`export` with annotations; untyped
/// output uses `require`/`module.exports` and drops every annotation.
#[derive(Debug, Clone, Copy)]
pub struct Syntax {
    profile: SyntaxProfile,
}

impl Syntax {
    pub fn new(profile: SyntaxProfile) -> Self {
        Self { profile }
    }

    pub fn is_typed(&self) -> bool {
        self.profile.is_typed()
    }

    pub fn import_default(&self, binding: &str, from: &str) -> String {
        if self.is_typed() {
            format!("import {binding} from '{from}';")
        } else {
            format!("const {binding} = require('{from}');")
        }
    }

    pub fn import_namespace(&self, binding: &str, from: &str) -> String {
        if self.is_typed() {
            format!("import * as {binding} from '{from}';")
        } else {
            format!("const {binding} = require('{from}');")
        }
    }

    pub fn import_named(&self, names: &[&str], from: &str) -> String {
        let names = names.join(", ");
        if self.is_typed() {
            format!("import {{ {names} }} from '{from}';")
        } else {
            format!("const {{ {names} }} = require('{from}');")
        }
    }

    /// Type-only import; untyped output has nothing to import.
    pub fn import_types(&self, names: &[&str], from: &str) -> Option<String> {
        self.is_typed().then(|| format!("import {{ {} }} from '{from}';", names.join(", ")))
    }

    pub fn export_names<S: AsRef<str>>(&self, names: &[S]) -> String {
        let names = names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
        if self.is_typed() {
            format!("export {{ {names} }};")
        } else {
            format!("module.exports = {{ {names} }};")
        }
    }

    pub fn export_default(&self, expr: &str) -> String {
        if self.is_typed() {
            format!("export default {expr};")
        } else {
            format!("module.exports = {expr};")
        }
    }

    /// `name: ty` when typed, bare `name` otherwise.
    pub fn annotate(&self, name: &str, ty: &str) -> String {
        if self.is_typed() {
            format!("{name}: {ty}")
        } else {
            name.to_string()
        }
    }

    /// Opening line of `const name = async (params)[: Promise<ret>] => {`.
    pub fn async_arrow(&self, name: &str, params: &[String], returns: Option<&str>) -> String {
        let params = params.join(", ");
        match returns {
            Some(ret) if self.is_typed() => {
                format!("const {name} = async ({params}): Promise<{ret}> => {{")
            }
            _ => format!("const {name} = async ({params}) => {{"),
        }
    }
}

/// Single-quoted string literal with quotes and backslashes escaped.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
