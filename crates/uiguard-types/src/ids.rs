//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_A11Y_UNLABELED_IMAGES: &str = "a11y.unlabeled_images";
pub const CHECK_A11Y_UNLABELED_CONTROLS: &str = "a11y.unlabeled_controls";
pub const CHECK_A11Y_NO_TEXT_CONTENT: &str = "a11y.no_text_content";
pub const CHECK_A11Y_INACCESSIBLE_GESTURES: &str = "a11y.inaccessible_gestures";
pub const CHECK_A11Y_COLOR_ONLY_INFORMATION: &str = "a11y.color_only_information";

// Codes: a11y.unlabeled_images
pub const CODE_IMAGE_MISSING_LABEL: &str = "image_missing_label";

// Codes: a11y.unlabeled_controls
pub const CODE_BUTTON_MISSING_ACCESSIBILITY: &str = "button_missing_accessibility";

// Codes: a11y.no_text_content
pub const CODE_VIEW_WITHOUT_TEXT: &str = "view_without_text";

// Codes: a11y.inaccessible_gestures
pub const CODE_GESTURE_MISSING_ACTION: &str = "gesture_missing_action";

// Codes: a11y.color_only_information
pub const CODE_COLOR_WITHOUT_INDICATOR: &str = "color_without_indicator";

// Shared reference for every accessibility finding.
pub const URL_APPLE_ACCESSIBILITY: &str = "https://developer.apple.com/accessibility/";
