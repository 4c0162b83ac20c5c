//! The input → generating → preview state machine.
//!
//! Every document passes through a generation call: there is no transition
//! from `Input` straight to `Preview`. The machine itself has no timeout —
//! a hung generation call leaves it in `Generating` until the call resolves
//! or fails (the CLI wraps the await in a deadline instead).
//!
//! Async generation results are routed by a monotonically increasing
//! sequence number issued at submit time. A result whose sequence does not
//! match the most recently issued request is stale and is discarded, so a
//! late-arriving response can never overwrite a document produced by a
//! later request.

use tracing::{debug, info, warn};

use onesheet_core::models::document::OnePagerDocument;
use onesheet_core::models::field::FieldPath;
use onesheet_core::models::request::GenerationRequest;

use crate::error::SessionError;
use crate::store::DocumentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Input,
    Generating,
    Preview,
}

#[derive(Debug, Default)]
pub struct Controller {
    state: ViewStateInner,
    store: Option<DocumentStore>,
    /// Last submitted request, preserved across failures so the user never
    /// has to retype input.
    last_request: Option<GenerationRequest>,
    last_error: Option<String>,
    next_seq: u64,
}

/// Internal state carries the in-flight sequence; the public view does not.
#[derive(Debug, Default)]
enum ViewStateInner {
    #[default]
    Input,
    Generating {
        seq: u64,
    },
    Preview,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        match self.state {
            ViewStateInner::Input => ViewState::Input,
            ViewStateInner::Generating { .. } => ViewState::Generating,
            ViewStateInner::Preview => ViewState::Preview,
        }
    }

    /// The canonical document, whenever one exists. After a failure or a
    /// restart it is retained in memory (and offered back as a starting
    /// point) even though the view shows the input screen.
    pub fn document(&self) -> Option<&OnePagerDocument> {
        self.store.as_ref().map(DocumentStore::document)
    }

    /// The request last submitted, surviving failed generations.
    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.last_request.as_ref()
    }

    /// Message from the most recent failed generation, cleared on submit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `Input --submit--> Generating`. Returns the sequence number issued
    /// for this request; the matching resolve call must carry it back.
    ///
    /// Refused when the input is empty (the disabled submit affordance),
    /// when a generation is already in flight, or from the preview.
    pub fn submit(&mut self, request: GenerationRequest) -> Result<u64, SessionError> {
        match self.state {
            ViewStateInner::Generating { .. } => return Err(SessionError::AlreadyGenerating),
            ViewStateInner::Preview => return Err(SessionError::NotInInput),
            ViewStateInner::Input => {}
        }

        if request.raw_input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.last_error = None;
        self.last_request = Some(request);
        self.state = ViewStateInner::Generating { seq };

        info!(seq, "generation submitted");
        Ok(seq)
    }

    /// `Generating --success--> Preview`. Installs the document and returns
    /// it, or `None` when `seq` is stale (result discarded, state unchanged).
    pub fn resolve_success(
        &mut self,
        seq: u64,
        document: OnePagerDocument,
    ) -> Option<&OnePagerDocument> {
        if !self.in_flight_matches(seq) {
            warn!(seq, "discarding stale generation success");
            return None;
        }

        info!(seq, "generation succeeded, entering preview");
        self.store = Some(DocumentStore::new(document));
        self.state = ViewStateInner::Preview;
        self.document()
    }

    /// `Generating --failure--> Input`. The error is surfaced, no document
    /// is set, and a prior document (if any) is preserved but not shown.
    /// Returns false when `seq` is stale.
    pub fn resolve_failure(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if !self.in_flight_matches(seq) {
            warn!(seq, "discarding stale generation failure");
            return false;
        }

        let message = message.into();
        info!(seq, error = %message, "generation failed, returning to input");
        self.last_error = Some(message);
        self.state = ViewStateInner::Input;
        true
    }

    /// `Preview --restart--> Input`. The document stays in memory.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        match self.state {
            ViewStateInner::Preview => {
                debug!("restarting to input, document retained");
                self.state = ViewStateInner::Input;
                Ok(())
            }
            _ => Err(SessionError::NotInPreview),
        }
    }

    /// `Preview --edit--> Preview`. Delegates to the store; no transition.
    pub fn edit(
        &mut self,
        field: FieldPath,
        value: &str,
    ) -> Result<&OnePagerDocument, SessionError> {
        if !matches!(self.state, ViewStateInner::Preview) {
            return Err(SessionError::NotInPreview);
        }
        // Preview is only entered by installing a store.
        let store = self.store.as_mut().ok_or(SessionError::NotInPreview)?;
        store.apply_edit(field, value)
    }

    fn in_flight_matches(&self, seq: u64) -> bool {
        matches!(self.state, ViewStateInner::Generating { seq: current } if current == seq)
    }
}
