use crate::filter::Filter;
use methodsynth_emitter::SourceEmitter;
use methodsynth_model::TypeDescriptor;
use std::collections::HashMap;
use tracing::{debug, info};

/// Produces the declaration of one method for a type
pub trait MethodGenerator: Send + Sync {
    /// Name of the method this generator declares
    fn name(&self) -> &str;

    /// Append the method's declaration for `ty` to `out`
    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor);
}

/// A generator backed by a closure
pub struct FnGenerator<F> {
    name: String,
    f: F,
}

/// Wrap a closure as a named generator
pub fn generator<F>(name: impl Into<String>, f: F) -> FnGenerator<F>
where
    F: Fn(&mut dyn SourceEmitter, &TypeDescriptor) + Send + Sync,
{
    FnGenerator {
        name: name.into(),
        f,
    }
}

impl<F> MethodGenerator for FnGenerator<F>
where
    F: Fn(&mut dyn SourceEmitter, &TypeDescriptor) + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor) {
        (self.f)(out, ty)
    }
}

/// Method generators keyed by the name of the method they declare.
///
/// Storage order is irrelevant: `write` always visits names in ascending
/// order so output is reproducible.
#[derive(Default)]
pub struct MethodRegistry {
    methods: HashMap<String, Box<dyn MethodGenerator>>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any registered under the same name
    pub fn register(&mut self, generator: impl MethodGenerator + 'static) {
        self.methods
            .insert(generator.name().to_string(), Box::new(generator));
    }

    pub fn with(mut self, generator: impl MethodGenerator + 'static) -> Self {
        self.register(generator);
        self
    }

    /// Register every generator of `other`, which wins on name collisions
    pub fn extend(&mut self, other: MethodRegistry) {
        self.methods.extend(other.methods);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered method names, sorted ascending
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Write every registered method for `ty` to `out`, in name order.
    ///
    /// Methods for which `filter` returns true are skipped without invoking
    /// their generator. Returns the number of methods written.
    pub fn write(
        &self,
        out: &mut dyn SourceEmitter,
        ty: &TypeDescriptor,
        filter: &dyn Filter,
    ) -> usize {
        let mut written = 0;

        for name in self.names() {
            if filter.filter(ty, name) {
                debug!(type_name = %ty.name, method = %name, "Skipping method defined elsewhere");
                continue;
            }

            debug!(type_name = %ty.name, method = %name, "Generating method");
            self.methods[name].generate(out, ty);
            written += 1;
        }

        info!(
            type_name = %ty.name,
            written,
            skipped = self.methods.len() - written,
            "Wrote methods"
        );
        written
    }
}

impl std::fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.names())
            .finish()
    }
}
