use super::doc_comment;
use crate::registry::MethodGenerator;
use methodsynth_emitter::{FuncDecl, Param, SourceEmitter, Stmt, TypeRef};
use methodsynth_model::TypeDescriptor;

fn field_path(receiver: &str, path: &[String]) -> String {
    let mut expr = receiver.to_string();
    for field in path {
        expr.push('.');
        expr.push_str(field);
    }
    expr
}

/// Assigns its single parameter to a field: `r.<path> = <param>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setter {
    pub method: String,
    pub receiver: String,
    pub param: Param,
    pub path: Vec<String>,
}

impl Setter {
    pub fn new(
        method: impl Into<String>,
        receiver: impl Into<String>,
        param: Param,
        path: &[&str],
    ) -> Self {
        Self {
            method: method.into(),
            receiver: receiver.into(),
            param,
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MethodGenerator for Setter {
    fn name(&self) -> &str {
        &self.method
    }

    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor) {
        out.comment(&doc_comment(&self.method, &ty.name));
        out.declare(
            FuncDecl::method(&self.receiver, &ty.name, &self.method)
                .param(&self.param.name, self.param.ty.clone())
                .stmt(Stmt::line(format!(
                    "{} = {}",
                    field_path(&self.receiver, &self.path),
                    self.param.name
                ))),
        );
    }
}

/// Returns a field: `return r.<path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Getter {
    pub method: String,
    pub receiver: String,
    pub result: TypeRef,
    pub path: Vec<String>,
}

impl Getter {
    pub fn new(
        method: impl Into<String>,
        receiver: impl Into<String>,
        result: TypeRef,
        path: &[&str],
    ) -> Self {
        Self {
            method: method.into(),
            receiver: receiver.into(),
            result,
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MethodGenerator for Getter {
    fn name(&self) -> &str {
        &self.method
    }

    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor) {
        out.comment(&doc_comment(&self.method, &ty.name));
        out.declare(
            FuncDecl::method(&self.receiver, &ty.name, &self.method)
                .returns(self.result.clone())
                .stmt(Stmt::line(format!(
                    "return {}",
                    field_path(&self.receiver, &self.path)
                ))),
        );
    }
}

/// Forwards its parameters to the same-named method of a field:
/// `[return] r.<field>.<method>(args)`
///
/// Variadic parameters are passed through as `name...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegate {
    pub method: String,
    pub receiver: String,
    pub field: String,
    pub params: Vec<Param>,
    pub result: Option<TypeRef>,
}

impl Delegate {
    pub fn new(
        method: impl Into<String>,
        receiver: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            receiver: receiver.into(),
            field: field.into(),
            params: Vec::new(),
            result: None,
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.result = Some(ty);
        self
    }
}

impl MethodGenerator for Delegate {
    fn name(&self) -> &str {
        &self.method
    }

    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor) {
        let args: Vec<String> = self
            .params
            .iter()
            .map(|p| match p.ty {
                TypeRef::Variadic(_) => format!("{}...", p.name),
                _ => p.name.clone(),
            })
            .collect();

        let call = format!(
            "{}.{}.{}({})",
            self.receiver,
            self.field,
            self.method,
            args.join(", ")
        );

        let mut decl = FuncDecl::method(&self.receiver, &ty.name, &self.method);
        decl.params = self.params.clone();
        decl = match &self.result {
            Some(result) => decl
                .returns(result.clone())
                .stmt(Stmt::line(format!("return {}", call))),
            None => decl.stmt(Stmt::line(call)),
        };

        out.comment(&doc_comment(&self.method, &ty.name));
        out.declare(decl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodsynth_emitter::GoFile;
    use pretty_assertions::assert_eq;

    const PKG: &str = "example.org/runtime";

    fn render(generator: &dyn MethodGenerator) -> String {
        let mut file = GoFile::new("v1", "example.org/v1");
        generator.generate(&mut file, &TypeDescriptor::new("Thing"));
        file.render()
    }

    #[test]
    fn test_setter() {
        let setter = Setter::new(
            "SetOwner",
            "t",
            Param::new("o", TypeRef::named("string")),
            &["Spec", "Owner"],
        );

        let expected = "\
package v1

// SetOwner of this Thing.
func (t *Thing) SetOwner(o string) {
\tt.Spec.Owner = o
}
";
        assert_eq!(render(&setter), expected);
    }

    #[test]
    fn test_getter() {
        let getter = Getter::new(
            "GetOwner",
            "t",
            TypeRef::qualified(PKG, "Owner").pointer(),
            &["Spec", "Owner"],
        );

        let expected = "\
package v1

import (
\truntime \"example.org/runtime\"
)

// GetOwner of this Thing.
func (t *Thing) GetOwner() *runtime.Owner {
\treturn t.Spec.Owner
}
";
        assert_eq!(render(&getter), expected);
    }

    #[test]
    fn test_delegate_passes_variadic_through() {
        let delegate = Delegate::new("SetMarks", "t", "Status")
            .param("m", TypeRef::qualified(PKG, "Mark").variadic());
        let output = render(&delegate);
        assert!(output.contains("func (t *Thing) SetMarks(m ...runtime.Mark) {"));
        assert!(output.contains("\tt.Status.SetMarks(m...)\n"));
    }

    #[test]
    fn test_delegate_with_result() {
        let delegate = Delegate::new("GetMark", "t", "Status")
            .param("k", TypeRef::named("string"))
            .returns(TypeRef::qualified(PKG, "Mark"));
        let output = render(&delegate);
        assert!(output.contains("func (t *Thing) GetMark(k string) runtime.Mark {"));
        assert!(output.contains("\treturn t.Status.GetMark(k)\n"));
    }
}
