// Dweve PropTree - Ordered Property Trees and Text Encodings
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The closed set of text formats.

use proptree_core::{Tree, TreeError, TreeResult};
use proptree_json::ToJsonConfig;
use proptree_name_value::NameValueConfig;
use proptree_path_value::PathValueConfig;
use proptree_xml::ToXmlConfig;
use std::fmt;
use std::str::FromStr;

/// A text encoding of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    NameValue,
    PathValue,
    Json,
    Xml,
}

/// Settings for every format, so one value can drive any conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    pub name_value: NameValueConfig,
    pub path_value: PathValueConfig,
    pub json: ToJsonConfig,
    pub xml: ToXmlConfig,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::NameValue,
        Format::PathValue,
        Format::Json,
        Format::Xml,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Format::NameValue => "name-value",
            Format::PathValue => "path-value",
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// Parse `text` in this format.
    pub fn decode(self, text: &str, config: &ConvertConfig) -> TreeResult<Tree> {
        match self {
            Format::NameValue => proptree_name_value::from_name_value(text, &config.name_value),
            Format::PathValue => proptree_path_value::from_path_value(text, &config.path_value),
            Format::Json => proptree_json::from_json(text),
            Format::Xml => proptree_xml::from_xml(text),
        }
    }

    /// Write `tree` in this format.
    pub fn encode(self, tree: &Tree, config: &ConvertConfig) -> TreeResult<String> {
        match self {
            Format::NameValue => Ok(proptree_name_value::to_name_value(tree, &config.name_value)),
            Format::PathValue => Ok(proptree_path_value::to_path_value(tree, &config.path_value)),
            Format::Json => proptree_json::to_json(tree, &config.json),
            Format::Xml => proptree_xml::to_xml(tree, &config.xml),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                TreeError::malformed("expected one of name-value, path-value, json, xml", s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn test_every_format_round_trips_config_text() {
        let config = ConvertConfig::default();
        let tree = Format::NameValue
            .decode(r#"server={host="localhost",port="8080"},debug="true""#, &config)
            .unwrap();
        for format in [Format::NameValue, Format::PathValue, Format::Json] {
            let text = format.encode(&tree, &config).unwrap();
            assert_eq!(format.decode(&text, &config).unwrap(), tree, "{format}");
        }
    }

    #[test]
    fn test_xml_needs_single_root() {
        let config = ConvertConfig::default();
        let tree = Format::PathValue.decode("a=1,b=2", &config).unwrap();
        assert!(Format::Xml.encode(&tree, &config).is_err());
        let tree = Format::PathValue.decode("doc/a=1,doc/b=2", &config).unwrap();
        let xml = Format::Xml.encode(&tree, &config).unwrap();
        assert_eq!(Format::Xml.decode(&xml, &config).unwrap(), tree);
    }
}
