// README generation: boundary validation, rule-based field inference, template rendering.
// The inference and rendering halves are pure; only handlers touch HTTP types.

pub mod handlers;
pub mod inference;
pub mod stack;
pub mod template;
pub mod validation;
