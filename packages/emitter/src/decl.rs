/// A reference to a type, possibly defined in another package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A type declared in the output file's own package
    Named(String),
    /// A type declared in the package at `path`
    Qualified { path: String, name: String },
    Pointer(Box<TypeRef>),
    Slice(Box<TypeRef>),
    /// The final parameter of a variadic function
    Variadic(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn qualified(path: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Qualified {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn pointer(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }

    pub fn slice(self) -> Self {
        TypeRef::Slice(Box::new(self))
    }

    pub fn variadic(self) -> Self {
        TypeRef::Variadic(Box::new(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// The `(r *T)` clause of a method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverClause {
    pub name: String,
    pub type_name: String,
    pub pointer: bool,
}

impl ReceiverClause {
    pub fn pointer(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            pointer: true,
        }
    }
}

/// A statement in a declaration body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A single line statement
    Line(String),
    /// `head {` followed by an indented body and a closing brace
    Block { head: String, body: Vec<Stmt> },
}

impl Stmt {
    pub fn line(text: impl Into<String>) -> Self {
        Stmt::Line(text.into())
    }

    pub fn block(head: impl Into<String>, body: Vec<Stmt>) -> Self {
        Stmt::Block {
            head: head.into(),
            body,
        }
    }
}

/// An abstract method declaration, rendered by a `SourceEmitter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub receiver: Option<ReceiverClause>,
    pub name: String,
    pub params: Vec<Param>,
    pub result: Option<TypeRef>,
    pub body: Vec<Stmt>,
}

impl FuncDecl {
    /// A method with a pointer receiver and no parameters, result, or body
    pub fn method(
        receiver: impl Into<String>,
        type_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            receiver: Some(ReceiverClause::pointer(receiver, type_name)),
            name: name.into(),
            params: Vec::new(),
            result: None,
            body: Vec::new(),
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

    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }
}
