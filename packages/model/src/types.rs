use serde::{Deserialize, Serialize};

/// How a method receives its receiver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Receiver {
    Value,
    #[default]
    Pointer,
}

/// A method already declared for a type, annotated with where it lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    pub name: String,

    /// Source file the method was declared in
    pub file: String,

    #[serde(default)]
    pub receiver: Receiver,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            receiver: Receiver::Pointer,
        }
    }

    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }
}

/// One field of a declared struct type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,

    /// Name of the field's type, without any package qualifier
    pub type_name: String,

    /// Whether the field is embedded (its name equals its type name)
    #[serde(default)]
    pub embedded: bool,

    /// Whether the field holds a slice of `type_name`
    #[serde(default)]
    pub slice: bool,

    #[serde(default)]
    pub pointer: bool,

    /// Nested fields of the field's struct type, when known
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            embedded: false,
            slice: false,
            pointer: false,
            fields: Vec::new(),
        }
    }

    /// An embedded field, named after its type
    pub fn embedded(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            embedded: true,
            ..Self::new(type_name.clone(), type_name)
        }
    }

    pub fn slice_of(mut self) -> Self {
        self.slice = true;
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether this field's struct type embeds a field of the named type
    pub fn embeds(&self, type_name: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.embedded && f.type_name == type_name)
    }
}

/// Read-only view of one declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Every method declared for the type, whatever its receiver
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The methods callable through a receiver of the given kind.
    ///
    /// A pointer's method set holds both value and pointer receiver methods,
    /// while a value's method set holds only value receiver methods. The set
    /// is derived from the declaration table on every call.
    pub fn method_set(&self, receiver: Receiver) -> impl Iterator<Item = &MethodDecl> {
        self.methods
            .iter()
            .filter(move |m| receiver == Receiver::Pointer || m.receiver == Receiver::Value)
    }

    /// All methods with the supplied name reachable through a pointer
    pub fn lookup<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDecl> + 'a {
        self.method_set(Receiver::Pointer).filter(move |m| m.name == name)
    }
}
