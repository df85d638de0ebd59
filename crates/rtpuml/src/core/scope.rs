//! Output location tracking during traversal
//!
//! [`Scope`] owns the stack of name segments that make up the current
//! output location. [`Scope::enter`] pushes a segment and hands back a
//! [`ScopeGuard`]; the segment is popped when the guard goes out of scope,
//! so the stack is balanced on every exit path, `?` included.

use super::{DocumentSink, Result};
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Current output location plus the sink documents are written to
pub struct Scope<'s, S: DocumentSink + ?Sized> {
    sink: &'s mut S,
    segments: Vec<String>,
}

impl<'s, S: DocumentSink + ?Sized> Scope<'s, S> {
    /// Start at the sink's root location
    pub fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            segments: Vec::new(),
        }
    }

    /// Descend into `name`, creating the location if it does not exist
    ///
    /// The segment is only pushed if the location could be created.
    pub fn enter(&mut self, name: &str) -> Result<ScopeGuard<'_, 's, S>> {
        self.segments.push(name.to_string());
        if let Err(e) = self.sink.create_location(&self.segments) {
            self.segments.pop();
            return Err(e);
        }
        trace!(location = %self.segments.join("/"), "Entered scope");
        Ok(ScopeGuard { scope: self })
    }

    /// Write a finished document at the current location
    pub fn write(&mut self, file_name: &str, contents: &str) -> Result<()> {
        self.sink.write_document(&self.segments, file_name, contents)
    }

    pub fn location(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

/// Active [`Scope::enter`] segment; popped on drop
pub struct ScopeGuard<'a, 's, S: DocumentSink + ?Sized> {
    scope: &'a mut Scope<'s, S>,
}

impl<'s, S: DocumentSink + ?Sized> Deref for ScopeGuard<'_, 's, S> {
    type Target = Scope<'s, S>;

    fn deref(&self) -> &Self::Target {
        &*self.scope
    }
}

impl<'s, S: DocumentSink + ?Sized> DerefMut for ScopeGuard<'_, 's, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.scope
    }
}

impl<S: DocumentSink + ?Sized> Drop for ScopeGuard<'_, '_, S> {
    fn drop(&mut self) {
        self.scope.segments.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeneratorError, MemorySink};

    #[test]
    fn test_enter_and_leave() {
        let mut sink = MemorySink::new();
        let mut scope = Scope::new(&mut sink);
        {
            let mut outer = scope.enter("App").unwrap();
            assert_eq!(outer.location(), ["App"]);
            {
                let inner = outer.enter("Top").unwrap();
                assert_eq!(inner.location(), ["App", "Top"]);
                assert_eq!(inner.depth(), 2);
            }
            assert_eq!(outer.depth(), 1);
        }
        assert_eq!(scope.depth(), 0);
        assert_eq!(sink.locations(), vec!["App", "App/Top"]);
    }

    #[test]
    fn test_write_uses_current_location() {
        let mut sink = MemorySink::new();
        let mut scope = Scope::new(&mut sink);
        scope.write("root.puml", "r").unwrap();
        {
            let mut pkg = scope.enter("pkg").unwrap();
            pkg.write("inner.puml", "i").unwrap();
        }
        assert_eq!(sink.paths(), vec!["pkg/inner.puml", "root.puml"]);
    }

    fn fail_inside(scope: &mut Scope<'_, MemorySink>) -> Result<()> {
        let mut guard = scope.enter("a")?;
        let _nested = guard.enter("b")?;
        Err(GeneratorError::unbalanced_braces(1))
    }

    #[test]
    fn test_balanced_after_error() {
        let mut sink = MemorySink::new();
        let mut scope = Scope::new(&mut sink);
        assert!(fail_inside(&mut scope).is_err());
        assert_eq!(scope.depth(), 0);
    }

    struct RefusingSink;

    impl DocumentSink for RefusingSink {
        fn create_location(&mut self, location: &[String]) -> Result<()> {
            Err(GeneratorError::configuration(
                location.join("/"),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }

        fn write_document(&mut self, _: &[String], _: &str, _: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_enter_does_not_push() {
        let mut sink = RefusingSink;
        let mut scope = Scope::new(&mut sink);
        assert!(scope.enter("x").is_err());
        assert_eq!(scope.depth(), 0);
    }
}
