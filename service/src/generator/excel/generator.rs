use template_core::configuration::TemplateConfig;

use super::features::TemplateFeatures;

/// Template generator entry point.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    /// Enabled template features.
    features: TemplateFeatures,
    /// Conversion settings.
    pub(super) config: TemplateConfig,
}

impl TemplateGenerator {
    /// Create a new template generator with all features enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TemplateConfig::default())
    }

    /// Create generator with custom settings.
    ///
    /// `freeze_header` in the configuration decides whether
    /// [`TemplateFeatures::FREEZE_HEADER`] starts enabled.
    #[must_use]
    pub fn with_config(config: TemplateConfig) -> Self {
        let mut features = TemplateFeatures::ALL;
        features.set(TemplateFeatures::FREEZE_HEADER, config.freeze_header);
        Self { features, config }
    }

    /// Settings used for generation.
    #[must_use]
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Enabled features.
    #[must_use]
    pub fn features(&self) -> TemplateFeatures {
        self.features
    }

    /// Override the data-entry sheet name.
    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.sheet_name = name.into();
        self
    }

    /// Pin document metadata so repeated runs produce identical bytes.
    #[must_use]
    pub fn with_idempotent(mut self, enabled: bool) -> Self {
        self.config.idempotent = enabled;
        self
    }

    /// Configure header freezing.
    #[must_use]
    pub fn with_frozen_header(mut self, enabled: bool) -> Self {
        self.config.freeze_header = enabled;
        self.features.set(TemplateFeatures::FREEZE_HEADER, enabled);
        self
    }

    /// Configure header notes.
    #[must_use]
    pub fn with_header_notes(mut self, enabled: bool) -> Self {
        self.features.set(TemplateFeatures::HEADER_NOTES, enabled);
        self
    }

    /// Configure data validation.
    #[must_use]
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.features.set(TemplateFeatures::ADD_VALIDATION, enabled);
        self
    }

    /// Check if header freezing is enabled.
    #[must_use]
    pub fn freeze_header(&self) -> bool {
        self.features.contains(TemplateFeatures::FREEZE_HEADER)
    }

    /// Check if header notes are enabled.
    #[must_use]
    pub fn header_notes(&self) -> bool {
        self.features.contains(TemplateFeatures::HEADER_NOTES)
    }

    /// Check if data validation is enabled.
    #[must_use]
    pub fn add_validation(&self) -> bool {
        self.features.contains(TemplateFeatures::ADD_VALIDATION)
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}
