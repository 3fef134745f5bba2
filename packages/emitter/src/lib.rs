//! Sinks that accumulate generated method declarations into source text.

mod context;
mod decl;
mod imports;

pub use context::{GoFile, SourceWriter};
pub use decl::{FuncDecl, Param, ReceiverClause, Stmt, TypeRef};
pub use imports::{is_keyword, ImportSet};

/// Accumulates emitted declarations into an output artifact.
///
/// Generators only ever append to an emitter; nothing they write is read back.
pub trait SourceEmitter {
    /// Emit a top-level comment line
    fn comment(&mut self, text: &str);

    /// Reference `name` from the package at `path`, returning the expression
    /// that resolves to it from inside the output file
    fn qualify(&mut self, path: &str, name: &str) -> String;

    /// Append a method or function declaration
    fn declare(&mut self, decl: FuncDecl);

    /// Render a type reference, qualifying any external names it contains
    fn type_ref(&mut self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) => name.clone(),
            TypeRef::Qualified { path, name } => self.qualify(path, name),
            TypeRef::Pointer(inner) => format!("*{}", self.type_ref(inner)),
            TypeRef::Slice(inner) => format!("[]{}", self.type_ref(inner)),
            TypeRef::Variadic(inner) => format!("...{}", self.type_ref(inner)),
        }
    }
}
