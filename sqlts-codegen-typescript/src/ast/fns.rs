//! TypeScript function builder.

use sqlts_codegen::{CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for exported TypeScript functions.
///
/// A function with parameters lists them on their own line, one level deep.
/// The body sits [`body_depth`](Fn::body_depth) levels deep:
///
/// ```text
/// export async function f(
///   a: number, b: string
/// ): Promise<void> {
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
    body_depth: usize,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            body_depth: 1,
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Indentation levels of the body relative to the signature (at least 1).
    pub fn body_depth(mut self, levels: usize) -> Self {
        self.body_depth = levels.max(1);
        self
    }

    /// Add an indented line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add an arbitrary fragment to the function body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn keywords(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        format!("export {}function {}(", async_kw, self.name)
    }

    /// The `)...{` part closing the parameter list.
    fn close_params(&self) -> String {
        match &self.return_type {
            Some(ret) => format!("): {} {{", ret),
            None => ") {".to_string(),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        let mut header = self.keywords();

        if self.params.is_empty() {
            header.push_str(&self.close_params());
        } else {
            let params = self
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.ty))
                .collect::<Vec<_>>()
                .join(", ");
            fragments.push(CodeFragment::line(header));
            fragments.push(CodeFragment::indent(vec![CodeFragment::line(params)]));
            header = self.close_params();
        }

        // The block adds the first level
        let body = (1..self.body_depth).fold(self.body.clone(), |body, _| {
            vec![CodeFragment::indent(body)]
        });
        fragments.push(CodeFragment::block(header, body, "}"));

        fragments
    }
}
