use crate::value::Value;
use std::rc::Rc;

#[derive(Debug)]
struct Binding {
    name: String,
    value: Value,
    next: Option<Rc<Binding>>,
}

/// Immutable chain of `(name, value)` bindings, newest first.
///
/// Extending never touches the existing chain: the new environment points at
/// the old one as its tail, so closures that captured the old environment keep
/// seeing exactly what they captured.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    head: Option<Rc<Binding>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment { head: None }
    }

    /// A new environment with `name ↦ value` in front of `self`.
    pub fn extend(&self, name: &str, value: Value) -> Self {
        Environment {
            head: Some(Rc::new(Binding {
                name: name.to_string(),
                value,
                next: self.head.clone(),
            })),
        }
    }

    /// Nearest binding of `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Bound names, newest first. Shadowed names appear more than once.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    /// Do both environments start at the same binding node?
    pub fn same_chain(&self, other: &Environment) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Drop for Environment {
    // Unlink uniquely owned nodes one at a time so a long chain does not
    // recurse once per binding.
    fn drop(&mut self) {
        let mut next = self.head.take();

        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut binding) => next = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over `(name, value)` pairs, newest first.
pub struct Iter<'e> {
    node: Option<&'e Binding>,
}

impl<'e> Iterator for Iter<'e> {
    type Item = (&'e str, &'e Value);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.node?;

        self.node = binding.next.as_deref();

        Some((binding.name.as_str(), &binding.value))
    }
}
