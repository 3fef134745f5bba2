use crate::decl::{FuncDecl, Stmt};
use crate::imports::ImportSet;
use crate::SourceEmitter;

/// Line-oriented text buffer with tab indentation
#[derive(Debug, Default)]
pub struct SourceWriter {
    buffer: String,
    indent_level: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
        self.buffer.push_str(text);
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn get_output(&self) -> &str {
        &self.buffer
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

#[derive(Debug)]
enum Item {
    Comment(String),
    Decl(String),
}

/// A Go source file under construction.
///
/// Declarations are rendered as they are appended; imports are collected as
/// generators reference external types and rendered once in `render`.
#[derive(Debug)]
pub struct GoFile {
    package: String,
    header: Option<String>,
    imports: ImportSet,
    items: Vec<Item>,
    declarations: usize,
}

impl GoFile {
    /// A file in package `package`, whose import path is `path`
    pub fn new(package: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            header: None,
            imports: ImportSet::new(path),
            items: Vec::new(),
            declarations: 0,
        }
    }

    /// Comment rendered above the package clause
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Whether no declaration has been appended
    pub fn is_empty(&self) -> bool {
        self.declarations == 0
    }

    pub fn declarations(&self) -> usize {
        self.declarations
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn render(&self) -> String {
        let mut w = SourceWriter::new();

        if let Some(header) = &self.header {
            for line in header.lines() {
                w.add_line(&format!("// {}", line));
            }
            w.add("\n");
        }

        w.add_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            w.add("\n");
            w.add_line("import (");
            w.indent();
            for (path, alias) in self.imports.iter() {
                w.add_line(&format!("{} \"{}\"", alias, path));
            }
            w.dedent();
            w.add_line(")");
        }

        let mut after_decl = true;
        for item in &self.items {
            match item {
                Item::Comment(text) => {
                    if after_decl {
                        w.add("\n");
                    }
                    w.add_line(&format!("// {}", text));
                    after_decl = false;
                }
                Item::Decl(text) => {
                    if after_decl {
                        w.add("\n");
                    }
                    w.add(text);
                    after_decl = true;
                }
            }
        }

        w.into_output()
    }

    fn render_decl(&mut self, decl: &FuncDecl) -> String {
        let mut signature = String::from("func ");

        if let Some(r) = &decl.receiver {
            let star = if r.pointer { "*" } else { "" };
            signature.push_str(&format!("({} {}{}) ", r.name, star, r.type_name));
        }

        let params: Vec<String> = decl
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, self.type_ref(&p.ty)))
            .collect();
        signature.push_str(&format!("{}({})", decl.name, params.join(", ")));

        if let Some(result) = &decl.result {
            signature.push(' ');
            signature.push_str(&self.type_ref(result));
        }

        let mut w = SourceWriter::new();
        write_block(&mut w, &signature, &decl.body);
        w.into_output()
    }
}

fn write_block(w: &mut SourceWriter, head: &str, body: &[Stmt]) {
    w.add_line(&format!("{} {{", head));
    w.indent();
    for stmt in body {
        match stmt {
            Stmt::Line(text) => w.add_line(text),
            Stmt::Block { head, body } => write_block(w, head, body),
        }
    }
    w.dedent();
    w.add_line("}");
}

impl SourceEmitter for GoFile {
    fn comment(&mut self, text: &str) {
        self.items.push(Item::Comment(text.to_string()));
    }

    fn qualify(&mut self, path: &str, name: &str) -> String {
        match self.imports.alias(path) {
            Some(alias) => format!("{}.{}", alias, name),
            None => name.to_string(),
        }
    }

    fn declare(&mut self, decl: FuncDecl) {
        let text = self.render_decl(&decl);
        self.items.push(Item::Decl(text));
        self.declarations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::TypeRef;
    use pretty_assertions::assert_eq;

    const CORE: &str = "k8s.io/api/core/v1";

    #[test]
    fn test_writer_indentation() {
        let mut w = SourceWriter::new();
        w.add_line("a {");
        w.indent();
        w.add_line("b");
        w.dedent();
        w.dedent();
        w.add_line("}");
        assert_eq!(w.get_output(), "a {\n\tb\n}\n");
    }

    #[test]
    fn test_empty_file() {
        let file = GoFile::new("v1alpha1", "example.org/storage/v1alpha1");
        assert!(file.is_empty());
        assert_eq!(file.render(), "package v1alpha1\n");
    }

    #[test]
    fn test_render_method_with_import() {
        let mut file = GoFile::new("v1alpha1", "example.org/storage/v1alpha1")
            .with_header("Code generated by test. DO NOT EDIT.");

        file.comment("GetClaimReference of this Bucket.");
        file.declare(
            FuncDecl::method("mg", "Bucket", "GetClaimReference")
                .returns(TypeRef::qualified(CORE, "ObjectReference").pointer())
                .stmt(Stmt::line("return mg.Spec.ClaimReference")),
        );
        file.comment("SetClaimReference of this Bucket.");
        file.declare(
            FuncDecl::method("mg", "Bucket", "SetClaimReference")
                .param("r", TypeRef::qualified(CORE, "ObjectReference").pointer())
                .stmt(Stmt::line("mg.Spec.ClaimReference = r")),
        );

        let expected = "\
// Code generated by test. DO NOT EDIT.

package v1alpha1

import (
\tv1 \"k8s.io/api/core/v1\"
)

// GetClaimReference of this Bucket.
func (mg *Bucket) GetClaimReference() *v1.ObjectReference {
\treturn mg.Spec.ClaimReference
}

// SetClaimReference of this Bucket.
func (mg *Bucket) SetClaimReference(r *v1.ObjectReference) {
\tmg.Spec.ClaimReference = r
}
";
        assert_eq!(file.render(), expected);
        assert_eq!(file.declarations(), 2);
    }

    #[test]
    fn test_render_nested_blocks() {
        let mut file = GoFile::new("v1", "example.org/v1");
        file.declare(
            FuncDecl::method("l", "ThingList", "Each")
                .param("f", TypeRef::named("func(Thing)"))
                .stmt(Stmt::block(
                    "for i := range l.Items",
                    vec![Stmt::block("if f != nil", vec![Stmt::line("f(l.Items[i])")])],
                )),
        );

        let expected = "\
package v1

func (l *ThingList) Each(f func(Thing)) {
\tfor i := range l.Items {
\t\tif f != nil {
\t\t\tf(l.Items[i])
\t\t}
\t}
}
";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_own_package_references_are_unqualified() {
        let mut file = GoFile::new("v1", "example.org/v1");
        let ty = file.type_ref(&TypeRef::qualified("example.org/v1", "Thing").slice());
        assert_eq!(ty, "[]Thing");
        assert!(file.imports().is_empty());
    }

    #[test]
    fn test_variadic_param() {
        let mut file = GoFile::new("v1", "");
        let ty = file.type_ref(&TypeRef::qualified("example.org/runtime", "Condition").variadic());
        assert_eq!(ty, "...runtime.Condition");
    }
}
