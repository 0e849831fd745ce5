//! Grammar-driven media type parsing.
//!
//! [`MediaTypeParser`] bundles a grammar (structure and parameter regexes)
//! with a case-folding policy. The free functions in this crate all go
//! through [`MediaTypeParser::shared`], which uses the shipped grammar and
//! lower-cases names.

use crate::content_type::ContentType;
use crate::error::{Error, OnError, Result};
use crate::grammar::{MEDIA_TYPE_MATCH_REGEX, MEDIA_TYPE_PARAM_REGEX};
use crate::media_type::MediaTypeParts;
use crate::value::MediaType;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Case-folding policy applied to names (never to parameter values).
pub type CaseConverter = fn(&str) -> String;

/// The default case converter.
pub fn lower_case(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// A case converter that leaves names exactly as written.
pub fn preserve_case(s: &str) -> String {
    s.to_string()
}

static SHARED: Lazy<MediaTypeParser> = Lazy::new(MediaTypeParser::default);

/// A media type grammar plus case-folding policy.
#[derive(Debug, Clone)]
pub struct MediaTypeParser {
    match_regex: Regex,
    param_regex: Regex,
    case_converter: CaseConverter,
}

impl Default for MediaTypeParser {
    fn default() -> Self {
        Self {
            match_regex: MEDIA_TYPE_MATCH_REGEX.clone(),
            param_regex: MEDIA_TYPE_PARAM_REGEX.clone(),
            case_converter: lower_case,
        }
    }
}

impl MediaTypeParser {
    /// Creates a parser from already-compiled regexes.
    pub fn new(match_regex: Regex, param_regex: Regex, case_converter: CaseConverter) -> Self {
        Self {
            match_regex,
            param_regex,
            case_converter,
        }
    }

    /// Compiles a parser from pattern text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrammar`] if either pattern fails to compile.
    pub fn from_patterns(match_pattern: &str, param_pattern: &str) -> Result<Self> {
        Ok(Self::new(
            Regex::new(match_pattern)?,
            Regex::new(param_pattern)?,
            lower_case,
        ))
    }

    /// The parser behind the crate's free functions.
    pub fn shared() -> &'static MediaTypeParser {
        &SHARED
    }

    /// Replaces the structure regex.
    pub fn with_match_regex(mut self, match_regex: Regex) -> Self {
        self.match_regex = match_regex;
        self
    }

    /// Replaces the parameter regex.
    pub fn with_param_regex(mut self, param_regex: Regex) -> Self {
        self.param_regex = param_regex;
        self
    }

    /// Replaces the case-folding policy.
    pub fn with_case_converter(mut self, case_converter: CaseConverter) -> Self {
        self.case_converter = case_converter;
        self
    }

    /// Reports whether the whole input matches the structure regex.
    pub fn is_media_type(&self, input: &str) -> bool {
        self.match_regex.is_match(input)
    }

    /// Breaks a media type down into its individual parts.
    ///
    /// `type`, `tree`, `subtype`, `suffix` and parameter names go through
    /// the case converter. Parameter values are copied verbatim. When a
    /// parameter name repeats, the last value wins and the name keeps the
    /// position of its first appearance.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAMediaType`] if the input does not match the grammar
    /// - [`Error::MediaTypeMatchRegexIsBroken`] if the grammar matched but
    ///   did not capture `type` and `subtype`
    pub fn parse_media_type(&self, input: &str, on_error: impl OnError) -> Result<MediaTypeParts> {
        let caps = match self.match_regex.captures(input) {
            Some(caps) => caps,
            None => return Err(on_error(Error::not_a_media_type(input))),
        };

        let (type_, subtype) = match (caps.name("type"), caps.name("subtype")) {
            (Some(type_), Some(subtype)) => (type_.as_str(), subtype.as_str()),
            _ => return Err(on_error(Error::regex_is_broken())),
        };

        let fold = self.case_converter;
        Ok(MediaTypeParts {
            type_: fold(type_),
            tree: caps.name("tree").map(|m| fold(m.as_str())),
            subtype: fold(subtype),
            suffix: caps.name("suffix").map(|m| fold(m.as_str())),
            parameters: self.parse_parameters(input),
        })
    }

    /// Extracts the parameter-free content type from a media type.
    ///
    /// The value is read straight from the `contentType` capture group and
    /// case-folded as a whole.
    ///
    /// # Errors
    ///
    /// Same as [`parse_media_type`](Self::parse_media_type), except that
    /// the broken-grammar check looks for the `contentType` group.
    pub fn parse_content_type(&self, input: &str, on_error: impl OnError) -> Result<ContentType> {
        let caps = match self.match_regex.captures(input) {
            Some(caps) => caps,
            None => return Err(on_error(Error::not_a_media_type(input))),
        };

        match caps.name("contentType") {
            Some(content_type) => Ok(ContentType::new((self.case_converter)(content_type.as_str()))),
            None => Err(on_error(Error::regex_is_broken())),
        }
    }

    /// Extracts the content type from an already-validated [`MediaType`].
    ///
    /// The media type is matched against this parser's grammar again rather
    /// than reassembled from its parsed parts, so a grammar whose content
    /// type and parameter boundaries have drifted apart is caught here.
    ///
    /// # Errors
    ///
    /// Same as [`parse_content_type`](Self::parse_content_type).
    pub fn content_type_from_media_type(
        &self,
        input: &MediaType,
        on_error: impl OnError,
    ) -> Result<ContentType> {
        self.parse_content_type(input.as_str(), on_error)
    }

    fn parse_parameters(&self, input: &str) -> Option<IndexMap<String, String>> {
        let mut parameters = IndexMap::new();

        for caps in self.param_regex.captures_iter(input) {
            let Some(name) = caps.name("parameterName") else {
                break;
            };
            let Some(value) = parameter_value(&caps) else {
                break;
            };

            parameters.insert((self.case_converter)(name.as_str()), value.to_string());
        }

        if parameters.is_empty() {
            None
        } else {
            Some(parameters)
        }
    }
}

fn parameter_value<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.name("parameterValueA")
        .or_else(|| caps.name("parameterValueB"))
        .map(|m| m.as_str())
}
