//! Best-effort text translation over a local phrase dictionary and the
//! LibreTranslate / MyMemory web services.

pub mod config;
pub mod translate;
