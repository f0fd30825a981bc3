use bitflags::bitflags;

bitflags! {
    /// Template generation features to enable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TemplateFeatures: u8 {
        /// Keep the header row visible while scrolling.
        const FREEZE_HEADER = 0b0001;
        /// Attach field descriptions to header cells as notes.
        const HEADER_NOTES = 0b0010;
        /// Attach data validation below each header.
        const ADD_VALIDATION = 0b0100;

        /// All features enabled (default).
        const ALL = Self::FREEZE_HEADER.bits()
                  | Self::HEADER_NOTES.bits()
                  | Self::ADD_VALIDATION.bits();

        /// No features (header names only).
        const NONE = 0b0000;
    }
}
