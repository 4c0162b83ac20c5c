//! One in-memory editing session: controller + generator + customization.

use onesheet_core::models::customization::CustomizationSettings;
use onesheet_core::models::document::OnePagerDocument;
use onesheet_core::models::field::FieldPath;
use onesheet_core::models::request::{GenerationRequest, InputMode};
use onesheet_generate::{OnePagerGenerator, TextGenerationCapability};

use crate::controller::Controller;
use crate::error::SessionError;

/// Drives submit → await → resolve with the sequence discipline, so a
/// caller cannot mis-route a stale result. Lifetime is bounded to the
/// process; nothing is persisted.
#[derive(Debug)]
pub struct Session<C> {
    controller: Controller,
    generator: OnePagerGenerator<C>,
    customization: CustomizationSettings,
}

impl<C: TextGenerationCapability> Session<C> {
    pub fn new(capability: C) -> Self {
        Self::with_customization(capability, CustomizationSettings::default())
    }

    pub fn with_customization(capability: C, customization: CustomizationSettings) -> Self {
        Self {
            controller: Controller::new(),
            generator: OnePagerGenerator::new(capability),
            customization,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn customization(&self) -> &CustomizationSettings {
        &self.customization
    }

    pub fn customization_mut(&mut self) -> &mut CustomizationSettings {
        &mut self.customization
    }

    /// Run one full generation: tone is read from the customization, the
    /// request is submitted, and the resolved document is returned. On
    /// failure the controller is back in the input state with the raw
    /// input preserved.
    pub async fn run_generation(
        &mut self,
        raw_input: impl Into<String>,
        input_mode: InputMode,
    ) -> Result<&OnePagerDocument, SessionError> {
        let request = GenerationRequest::new(raw_input, input_mode, self.customization.tone);
        let seq = self.controller.submit(request.clone())?;

        match self.generator.generate(&request).await {
            Ok(document) => self
                .controller
                .resolve_success(seq, document)
                .ok_or(SessionError::StaleResult),
            Err(e) => {
                self.controller.resolve_failure(seq, e.to_string());
                Err(SessionError::Generation(e))
            }
        }
    }

    pub fn edit(
        &mut self,
        field: FieldPath,
        value: &str,
    ) -> Result<&OnePagerDocument, SessionError> {
        self.controller.edit(field, value)
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.controller.restart()
    }
}
