use std::path::Path;

use cogrisk_evaluator::model_params::ModelParameters;
use serde::{Deserialize, Serialize};

use crate::util;

/// Parameter set as stored on disk.
///
/// `parameters` is validated while deserializing, so a loaded file is always usable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelFile {
    pub name: String,
    pub version: String,
    pub parameters: ModelParameters,
}

impl ModelFile {
    pub const SHIPPED_NAME: &'static str = "adhd-risk-logistic";
    pub const SHIPPED_VERSION: &'static str = "1.0.0";

    pub fn shipped() -> Self {
        Self {
            name: Self::SHIPPED_NAME.to_owned(),
            version: Self::SHIPPED_VERSION.to_owned(),
            parameters: ModelParameters::SHIPPED,
        }
    }

    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        util::read_json_file("model", path)
    }

    /// Loads `path` when given, otherwise the built-in parameter set.
    pub fn load_or_shipped(path: Option<&Path>) -> anyhow::Result<Self> {
        let model = match path {
            Some(path) => Self::open(path)?,
            None => Self::shipped(),
        };
        tracing::info!(name = %model.name, version = %model.version, "Loaded model");
        Ok(model)
    }

    pub fn info(&self) -> ModelInfo<'_> {
        ModelInfo {
            name: &self.name,
            version: &self.version,
        }
    }
}

/// Model identification echoed in every report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelInfo<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_model_survives_json() {
        let model = ModelFile::shipped();
        let json = serde_json::to_string(&model).unwrap();
        let parsed: ModelFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let mut json = serde_json::to_value(ModelFile::shipped()).unwrap();
        json["parameters"]["threshold"] = serde_json::json!(1.5);
        assert!(serde_json::from_value::<ModelFile>(json).is_err());
    }

    #[test]
    fn test_short_coefficient_array_is_rejected() {
        let mut json = serde_json::to_value(ModelFile::shipped()).unwrap();
        json["parameters"]["coefficients"] = serde_json::json!([0.1, 0.2]);
        assert!(serde_json::from_value::<ModelFile>(json).is_err());
    }
}
