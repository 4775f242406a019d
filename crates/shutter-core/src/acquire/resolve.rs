//! Locator resolution: from an opaque [`ImageReference`] to a readable path.

use crate::error::AcquireError;
use crate::types::{ImageReference, PendingCapture, ResolvedPath, SourceKind};

use super::index::MediaIndex;

/// Resolves acquisition handles to concrete byte-sources.
pub struct LocatorResolver<'a, I: MediaIndex> {
    index: &'a I,
}

impl<'a, I: MediaIndex> LocatorResolver<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Resolve a reference to the file path holding its bytes.
    ///
    /// Gallery references resolve through the media index by their own
    /// locator. Camera references ignore any locator the result carried and
    /// resolve through the pending capture instead: some camera
    /// implementations return an empty payload on success, so the payload is
    /// advisory at best.
    pub fn resolve(
        &self,
        reference: &ImageReference,
        pending: Option<&PendingCapture>,
    ) -> Result<ResolvedPath, AcquireError> {
        let locator = match reference.kind {
            SourceKind::Gallery => &reference.locator,
            SourceKind::Camera => {
                let pending = pending.ok_or(AcquireError::NoPendingCapture)?;
                &pending.locator
            }
        };

        match self.index.path_for(locator)? {
            Some(path) => Ok(ResolvedPath::new(path)),
            None => Err(AcquireError::NotFound {
                locator: locator.to_string(),
            }),
        }
    }
}
