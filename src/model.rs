//! The closed set of models this library can address

/// A Gemini model selectable for generation
///
/// Every variant maps to a fixed wire path via [`Model::path`]; the match is
/// exhaustive, so adding a variant without a path entry fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Gemini 2.0 Flash
    Gemini20Flash,
    /// Gemini 2.0 Flash-Lite
    Gemini20FlashLite,
    /// Gemini 1.5 Pro (latest)
    Gemini15Pro,
    /// Gemini 1.5 Flash (latest)
    Gemini15Flash,
    /// Gemini 1.5 Flash-8B (latest)
    Gemini15Flash8B,
}

impl Model {
    /// The wire-format path segment the API uses to route a request, in the
    /// form `models/<name>`.
    pub fn path(self) -> &'static str {
        match self {
            Model::Gemini20Flash => "models/gemini-2.0-flash",
            Model::Gemini20FlashLite => "models/gemini-2.0-flash-lite",
            Model::Gemini15Pro => "models/gemini-1.5-pro-latest",
            Model::Gemini15Flash => "models/gemini-1.5-flash-latest",
            Model::Gemini15Flash8B => "models/gemini-1.5-flash-8b-latest",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.write_str(self.path())
    }
}
