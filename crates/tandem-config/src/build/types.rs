use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language level the bundler compiles down to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 5
    Es5,
    /// ECMAScript 2015 (ES6, default)
    #[default]
    #[serde(alias = "es6")]
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    Es2023,
    Es2024,
    /// Whatever the bundler considers the latest syntax
    EsNext,
}

impl EsTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es5 => "es5",
            Self::Es2015 => "es2015",
            Self::Es2016 => "es2016",
            Self::Es2017 => "es2017",
            Self::Es2018 => "es2018",
            Self::Es2019 => "es2019",
            Self::Es2020 => "es2020",
            Self::Es2021 => "es2021",
            Self::Es2022 => "es2022",
            Self::Es2023 => "es2023",
            Self::Es2024 => "es2024",
            Self::EsNext => "esnext",
        }
    }
}

impl fmt::Display for EsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the bundler should load files with a given extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    /// Inline as a base64 string
    Base64,
    /// Inline as a `Uint8Array`
    Binary,
    /// Copy next to the output and keep the import
    Copy,
    Css,
    /// Inline as a `data:` URL
    DataUrl,
    /// Replace with an empty module
    Empty,
    /// Copy next to the output and import its URL
    File,
    Js,
    Json,
    Jsx,
    /// Inline as an opaque string
    Text,
    Ts,
    Tsx,
}

impl Loader {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Binary => "binary",
            Self::Copy => "copy",
            Self::Css => "css",
            Self::DataUrl => "dataurl",
            Self::Empty => "empty",
            Self::File => "file",
            Self::Js => "js",
            Self::Json => "json",
            Self::Jsx => "jsx",
            Self::Text => "text",
            Self::Ts => "ts",
            Self::Tsx => "tsx",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn es6_is_an_alias_for_es2015() {
        let target: EsTarget = serde_json::from_str("\"es6\"").unwrap();
        assert_eq!(target, EsTarget::Es2015);
        assert_eq!(serde_json::to_string(&target).unwrap(), "\"es2015\"");
    }

    #[test]
    fn serde_names_match_as_str() {
        for target in [EsTarget::Es5, EsTarget::Es2022, EsTarget::EsNext] {
            let json = serde_json::to_string(&target).unwrap();
            assert_eq!(json, format!("\"{}\"", target.as_str()));
        }
        for loader in [Loader::DataUrl, Loader::Text, Loader::Tsx] {
            let json = serde_json::to_string(&loader).unwrap();
            assert_eq!(json, format!("\"{}\"", loader.as_str()));
        }
    }

    #[test]
    fn unknown_loader_is_rejected() {
        assert!(serde_json::from_str::<Loader>("\"markdown\"").is_err());
    }
}
