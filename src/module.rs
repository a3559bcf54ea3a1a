//! Module manifest
//!
//! Static metadata of the host module: which documentation classes belong
//! to it and where its documentation and icons live. Plain data, no
//! behavior.

use serde::Serialize;

/// Declarative description of a host module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleManifest {
    /// Documentation classes, in declaration order
    pub doc_classes: &'static [&'static str],
    /// Directory holding the class reference documentation
    pub doc_path: &'static str,
    /// Directory holding the editor icons
    pub icons_path: &'static str,
}

impl ModuleManifest {
    pub fn has_doc_class(&self, name: &str) -> bool {
        self.doc_classes.contains(&name)
    }
}

/// The N-dimensional geometry module.
pub const ND_MODULE: ModuleManifest = ModuleManifest {
    doc_classes: &[
        "ArrayWireMeshND",
        "BoxWireMeshND",
        "MaterialND",
        "MeshInstanceND",
        "MeshND",
        "NodeND",
        "OrthoplexWireMeshND",
        "RectND",
        "TransformND",
        "VectorND",
        "WireMaterialND",
        "WireMeshND",
    ],
    doc_path: "addons/nd/doc_classes",
    icons_path: "addons/nd/icons",
};
