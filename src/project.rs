//! Project descriptor: an opaque value forwarded to rules that want it,
//! never interpreted by the core itself. Models elm.json's two manifest
//! shapes (package vs. application).

use std::collections::HashMap;

use serde::Deserialize;

/// Opaque project descriptor; the core only forwards it to rule elm-json
/// visitors via `Project::elm_json`.
#[derive(Debug, Clone, Default)]
pub struct Project {
    elm_json: Option<ElmProject>,
}

impl Project {
    pub fn new(elm_json: Option<ElmProject>) -> Self {
        Self { elm_json }
    }

    pub fn elm_json(&self) -> Option<&ElmProject> {
        self.elm_json.as_ref()
    }
}

/// The parsed contents of elm.json: either a package manifest (exposing a
/// fixed module list) or an application manifest (no exposed-modules
/// concept, but a source-directories list).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElmProject {
    Package(PackageProject),
    Application(ApplicationProject),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageProject {
    pub name: String,
    pub version: String,
    #[serde(rename = "exposed-modules")]
    pub exposed_modules: ExposedModules,
}

/// elm.json lets `exposed-modules` be either a flat list or a list grouped
/// under category headings; both are accepted and flattened on read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExposedModules {
    Flat(Vec<String>),
    Grouped(HashMap<String, Vec<String>>),
}

impl ExposedModules {
    pub fn flattened(&self) -> Vec<String> {
        match self {
            ExposedModules::Flat(modules) => modules.clone(),
            ExposedModules::Grouped(groups) => {
                let mut modules: Vec<String> = groups.values().flatten().cloned().collect();
                modules.sort();
                modules
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicationProject {
    #[serde(rename = "source-directories")]
    pub source_directories: Vec<String>,
}

impl ElmProject {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
