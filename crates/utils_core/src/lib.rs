//! Presentation utilities: substring counting, a guarded console and visibility toggling.
mod console;
mod text;
mod visibility;

pub use console::{log, Console, DiagnosticSink, LogFacadeSink, CONSOLE_TARGET};
pub use text::count_occurrences;
pub use visibility::{
    set_visibility, DisplayStyle, Element, ElementId, ElementRegistry, Visibility,
    VisibilityError,
};
