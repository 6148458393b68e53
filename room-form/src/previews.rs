//! Preview lifecycle for selected images.
//!
//! Browsers hand back transient object URLs for local files, and nothing
//! revokes them for us; the registry makes the register/release discipline
//! explicit so a handle exists exactly as long as its file is part of the
//! selection.

use payloads::ImageFile;

/// Platform seam for allocating and revoking renderable preview references.
/// The wasm implementation creates browser object URLs; tests record calls.
pub trait PreviewSource {
    fn create(&self, image: &ImageFile) -> String;
    fn revoke(&self, url: &str);
}

/// An opaque, revocable reference that renders one selected image.
/// Invalid once released; handles are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    id: u64,
    url: String,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Owns the live preview handles for the form's image sequence.
///
/// Handle `i` belongs to image `i`; every mutation of the image sequence
/// goes through [`crate::RoomForm`], which keeps the two aligned and
/// releases handles at removal. Dropping the registry releases everything,
/// which covers component teardown.
pub struct PreviewRegistry<S: PreviewSource> {
    source: S,
    next_id: u64,
    handles: Vec<PreviewHandle>,
}

impl<S: PreviewSource> PreviewRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            next_id: 0,
            handles: Vec::new(),
        }
    }

    /// Allocate a handle for a file. Registering the same file twice yields
    /// two independent handles, each needing its own release.
    pub fn register(&mut self, image: &ImageFile) -> &PreviewHandle {
        let handle = PreviewHandle {
            id: self.next_id,
            url: self.source.create(image),
        };
        self.next_id += 1;
        let index = self.handles.len();
        self.handles.push(handle);
        &self.handles[index]
    }

    /// Release the handle at the given position in the sequence. Rendering
    /// with a released handle's URL is undefined.
    pub fn release_at(&mut self, index: usize) {
        if index < self.handles.len() {
            let handle = self.handles.remove(index);
            self.source.revoke(&handle.url);
        }
    }

    /// Release every outstanding handle.
    pub fn release_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.source.revoke(&handle.url);
        }
    }

    /// Live handles, aligned with the form's image sequence.
    pub fn handles(&self) -> &[PreviewHandle] {
        &self.handles
    }
}

impl<S: PreviewSource> Drop for PreviewRegistry<S> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test source that hands out counted URLs and records revocations.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingSource {
        inner: Rc<RefCell<Record>>,
    }

    #[derive(Default)]
    struct Record {
        created: Vec<String>,
        revoked: Vec<String>,
    }

    impl RecordingSource {
        pub(crate) fn created(&self) -> usize {
            self.inner.borrow().created.len()
        }

        pub(crate) fn revoked(&self) -> usize {
            self.inner.borrow().revoked.len()
        }

        fn revoked_urls(&self) -> Vec<String> {
            self.inner.borrow().revoked.clone()
        }
    }

    impl PreviewSource for RecordingSource {
        fn create(&self, image: &ImageFile) -> String {
            let mut inner = self.inner.borrow_mut();
            let url =
                format!("preview:{}:{}", inner.created.len(), image.file_name);
            inner.created.push(url.clone());
            url
        }

        fn revoke(&self, url: &str) {
            self.inner.borrow_mut().revoked.push(url.to_string());
        }
    }

    fn image(name: &str) -> ImageFile {
        ImageFile {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn register_twice_yields_independent_handles() {
        let source = RecordingSource::default();
        let mut registry = PreviewRegistry::new(source.clone());

        let file = image("same.png");
        let first = registry.register(&file).clone();
        let second = registry.register(&file).clone();

        assert_ne!(first, second);
        assert_eq!(source.created(), 2);

        registry.release_at(0);
        registry.release_at(0);
        assert_eq!(source.revoked(), 2);
        assert_eq!(
            source.revoked_urls(),
            [first.url().to_string(), second.url().to_string()]
        );
    }

    #[test]
    fn release_at_out_of_bounds_is_a_no_op() {
        let source = RecordingSource::default();
        let mut registry = PreviewRegistry::new(source.clone());
        registry.register(&image("a.png"));

        registry.release_at(5);
        assert_eq!(source.revoked(), 0);
        assert_eq!(registry.handles().len(), 1);
    }

    #[test]
    fn drop_releases_all_outstanding_handles() {
        let source = RecordingSource::default();
        {
            let mut registry = PreviewRegistry::new(source.clone());
            registry.register(&image("a.png"));
            registry.register(&image("b.png"));
            registry.release_at(0);
            assert_eq!(source.revoked(), 1);
        }
        // No double-release of the already-released handle.
        assert_eq!(source.revoked(), 2);
    }
}
