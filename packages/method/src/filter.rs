use methodsynth_model::TypeDescriptor;

/// Decides whether a method should be skipped for a type.
///
/// Returns true when the method must not be generated.
pub trait Filter {
    fn filter(&self, ty: &TypeDescriptor, method: &str) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&TypeDescriptor, &str) -> bool,
{
    fn filter(&self, ty: &TypeDescriptor, method: &str) -> bool {
        self(ty, method)
    }
}

/// A filter that never skips a method
pub fn suppress_none(_: &TypeDescriptor, _: &str) -> bool {
    false
}

/// Skips methods that the type already has, declared outside the file being
/// generated.
///
/// A method declared in the target file itself is a previous generation of
/// the same output, so it does not suppress regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedOutside {
    filename: String,
}

impl DefinedOutside {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Filter for DefinedOutside {
    fn filter(&self, ty: &TypeDescriptor, method: &str) -> bool {
        ty.lookup(method).any(|m| m.file != self.filename)
    }
}
