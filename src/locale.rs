//! Section labels for the supported output languages.

use tracing::warn;

/// Labels the renderers print around extracted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub toc: &'static str,
    pub file: &'static str,
    pub module: &'static str,
    pub brief: &'static str,
    pub inputs: &'static str,
    pub outputs: &'static str,
    pub inouts: &'static str,
    pub parameters: &'static str,
    pub local_parameters: &'static str,
}

pub const EN: Labels = Labels {
    toc: "Table of Contents",
    file: "File",
    module: "Module",
    brief: "Brief",
    inputs: "Inputs",
    outputs: "Outputs",
    inouts: "Inouts",
    parameters: "Parameters",
    local_parameters: "Local Parameters",
};

pub const DE: Labels = Labels {
    toc: "Inhaltsverzeichnis",
    file: "Datei",
    module: "Modul",
    brief: "Kurzbeschreibung",
    inputs: "Eingänge",
    outputs: "Ausgänge",
    inouts: "Ein-/Ausgänge",
    parameters: "Parameter",
    local_parameters: "Lokale Parameter",
};

impl Labels {
    /// Labels for a language code. Unknown codes fall back to English.
    pub fn for_language(code: &str) -> Labels {
        match code.to_ascii_lowercase().as_str() {
            "en" => EN,
            "de" => DE,
            other => {
                warn!(language = other, "unsupported language, using en");
                EN
            }
        }
    }
}
