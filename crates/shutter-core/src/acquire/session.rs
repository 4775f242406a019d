//! The acquisition session state machine.
//!
//! One session drives one user acquisition at a time:
//!
//! ```text
//! Idle -> ChoicePresented -> {CaptureLaunched | PickLaunched}
//!      -> Acquired(reference) | Cancelled  (back to Idle)
//! ```
//!
//! The capture branch records its destination locator as a pending capture
//! owned by the session before launching, and correlates the asynchronous
//! result by correlation code alone. Result payloads are advisory: on the
//! capture branch they are ignored entirely, because some camera
//! implementations return an empty payload on success.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::CaptureConfig;
use crate::error::AcquireError;
use crate::types::{
    CorrelationCode, ImageReference, Locator, PendingCapture, ResolvedPath, SourceKind,
};

use super::index::MediaIndex;
use super::resolve::LocatorResolver;

/// The two options an acquisition offers the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireChoice {
    /// Capture a new photo with the camera.
    Capture,
    /// Pick an existing photo.
    PickExisting,
}

/// Request handed to the platform when launching a camera capture.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    pub code: CorrelationCode,
    pub title: String,
    pub description: String,
    /// Locator the camera should write the new image into.
    pub destination: Locator,
}

/// Request handed to the platform when launching a content pick.
#[derive(Debug, Clone)]
pub struct PickRequest {
    pub code: CorrelationCode,
    /// Content filter, e.g. `image/*`.
    pub content_type: String,
}

/// The platform seam: launches the external capture and pick actions.
///
/// The session never waits on the launcher; results arrive later as
/// [`ActionResult`] values fed to [`AcquisitionSession::handle_result`].
pub trait ActionLauncher {
    fn launch_capture(&mut self, request: CaptureRequest) -> Result<(), AcquireError>;
    fn launch_pick(&mut self, request: PickRequest) -> Result<(), AcquireError>;
}

/// What an asynchronous acquisition result reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action succeeded; the payload locator may be absent even then.
    Ok(Option<Locator>),
    /// The user backed out of the action.
    Cancelled,
}

/// An asynchronous result echoed back from a launched action.
#[derive(Debug, Clone)]
pub struct ActionResult {
    pub code: CorrelationCode,
    pub outcome: ActionOutcome,
}

/// Terminal outcome of one acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Acquired(ImageReference),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    ChoicePresented,
    CaptureLaunched,
    PickLaunched,
}

impl SessionState {
    fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::ChoicePresented => "ChoicePresented",
            Self::CaptureLaunched => "CaptureLaunched",
            Self::PickLaunched => "PickLaunched",
        }
    }
}

/// Drives one user acquisition from choice to completion.
///
/// Not internally synchronized: one logical acquisition at a time per
/// session. The pending capture is session-owned state keyed by the capture
/// correlation code, and deliberately survives completion until the next
/// capture launch overwrites it.
pub struct AcquisitionSession<L: ActionLauncher, I: MediaIndex> {
    launcher: L,
    index: I,
    capture: CaptureConfig,
    state: SessionState,
    pending: Option<PendingCapture>,
}

impl<L: ActionLauncher, I: MediaIndex> AcquisitionSession<L, I> {
    pub fn new(launcher: L, index: I, capture: CaptureConfig) -> Self {
        Self {
            launcher,
            index,
            capture,
            state: SessionState::Idle,
            pending: None,
        }
    }

    /// Start an acquisition: present the two options to the user.
    pub fn begin(&mut self) -> Result<[AcquireChoice; 2], AcquireError> {
        self.expect_state(SessionState::Idle)?;
        self.state = SessionState::ChoicePresented;
        Ok([AcquireChoice::Capture, AcquireChoice::PickExisting])
    }

    /// Act on the user's choice, launching the matching platform action.
    pub fn choose(&mut self, choice: AcquireChoice) -> Result<(), AcquireError> {
        self.expect_state(SessionState::ChoicePresented)?;
        match choice {
            AcquireChoice::Capture => self.launch_capture(),
            AcquireChoice::PickExisting => self.launch_pick(),
        }
    }

    /// Feed an asynchronous action result into the session.
    ///
    /// Returns `Ok(None)` when the result's correlation code does not belong
    /// to the launched branch (the result is not ours). Dispatch is by code
    /// only; no payload tag is consulted.
    pub fn handle_result(
        &mut self,
        result: ActionResult,
    ) -> Result<Option<Completion>, AcquireError> {
        let branch = match (self.state, result.code) {
            (SessionState::CaptureLaunched, CorrelationCode::CAPTURE) => SourceKind::Camera,
            (SessionState::PickLaunched, CorrelationCode::PICK) => SourceKind::Gallery,
            _ => {
                tracing::debug!(
                    "Ignoring result with code {:?} in state {}",
                    result.code,
                    self.state.name()
                );
                return Ok(None);
            }
        };

        self.state = SessionState::Idle;

        let payload = match result.outcome {
            ActionOutcome::Cancelled => return Ok(Some(Completion::Cancelled)),
            ActionOutcome::Ok(payload) => payload,
        };

        let locator = match branch {
            // The capture payload is unreliable; the remembered destination
            // is authoritative. Pending is kept, not cleared.
            SourceKind::Camera => match &self.pending {
                Some(pending) => pending.locator.clone(),
                None => return Err(AcquireError::NoPendingCapture),
            },
            // The pick payload is authoritative; a successful pick with no
            // locator has nothing to acquire.
            SourceKind::Gallery => match payload {
                Some(locator) => locator,
                None => return Ok(Some(Completion::Cancelled)),
            },
        };

        Ok(Some(Completion::Acquired(ImageReference {
            kind: branch,
            locator,
        })))
    }

    /// Revert to `Idle` when the surrounding UI interaction is abandoned.
    pub fn abandon(&mut self) {
        self.state = SessionState::Idle;
    }

    /// The destination of the most recently launched capture, if any.
    pub fn pending_capture(&self) -> Option<&PendingCapture> {
        self.pending.as_ref()
    }

    /// Resolve a completed acquisition to a readable file path.
    pub fn resolve(&self, reference: &ImageReference) -> Result<ResolvedPath, AcquireError> {
        LocatorResolver::new(&self.index).resolve(reference, self.pending.as_ref())
    }

    fn launch_capture(&mut self) -> Result<(), AcquireError> {
        let destination_path = self.destination_path();
        let destination = self.index.create_entry(
            &self.capture.title,
            &self.capture.description,
            &destination_path,
        )?;

        // Remembered before the launch so an early result can resolve
        self.pending = Some(PendingCapture {
            code: CorrelationCode::CAPTURE,
            locator: destination.clone(),
        });

        self.launcher.launch_capture(CaptureRequest {
            code: CorrelationCode::CAPTURE,
            title: self.capture.title.clone(),
            description: self.capture.description.clone(),
            destination,
        })?;
        self.state = SessionState::CaptureLaunched;
        tracing::debug!("Capture launched, destination {:?}", destination_path);
        Ok(())
    }

    fn launch_pick(&mut self) -> Result<(), AcquireError> {
        self.launcher.launch_pick(PickRequest {
            code: CorrelationCode::PICK,
            content_type: "image/*".to_string(),
        })?;
        self.state = SessionState::PickLaunched;
        tracing::debug!("Pick launched");
        Ok(())
    }

    fn destination_path(&self) -> PathBuf {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.capture
            .resolved_dir()
            .join(format!("{}-{}.jpg", self.capture.file_prefix, millis))
    }

    fn expect_state(&self, expected: SessionState) -> Result<(), AcquireError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(AcquireError::InvalidState {
                expected: expected.name(),
                actual: self.state.name(),
            })
        }
    }
}
