//! The L-System description and its line-oriented text format.
//!
//! ```text
//! # Quadratic Koch island
//! angle: 90
//! thickness: 2
//! F-F-F-F
//! F -> F-F+F+FF-F-F+F
//! ```
//!
//! Lines are `angle: <float>`, `thickness: <integer>`, a rule `<symbol> -> <replacement>`,
//! or a lone start (axiom) token. Tokens never contain whitespace and an empty replacement
//! erases its symbol. `#` comments run to the end of the line. Later lines override
//! earlier ones.

use crate::error::ConfigError;
use crate::rules::{RuleTable, Symbol};
use grammar::{LsParser, Rule};
use pest::Parser;
use pest::error::LineColLocation;
use pest::iterators::Pair;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "src/ls.pest"]
    pub struct LsParser;
}

fn default_angle() -> f64 {
    90.0
}

fn default_thickness() -> u32 {
    1
}

/// A complete L-System description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Generation 0 of the symbol sequence.
    pub axiom: String,

    /// Replacement sequence per symbol.
    #[serde(default)]
    pub rules: BTreeMap<Symbol, String>,

    /// Turn angle in degrees.
    #[serde(default = "default_angle")]
    pub angle: f64,

    /// Line thickness in pixels.
    #[serde(default = "default_thickness")]
    pub thickness: u32,
}

impl Configuration {
    pub fn new<I, S>(axiom: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, S)>,
        S: Into<String>,
    {
        Self {
            axiom: axiom.into(),
            rules: rules.into_iter().map(|(k, v)| (k, v.into())).collect(),
            angle: default_angle(),
            thickness: default_thickness(),
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn rule_table(&self) -> RuleTable {
        self.rules.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }

    /// Parses the text format described in the module docs.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let file = LsParser::parse(Rule::file, text)
            .map_err(syntax_error)?
            .next()
            .ok_or(ConfigError::MissingAxiom)?;

        let mut axiom = None;
        let mut angle = default_angle();
        let mut thickness = default_thickness();
        let mut rules = BTreeMap::new();

        for pair in file.into_inner() {
            let (line, _) = pair.line_col();
            match pair.as_rule() {
                Rule::angle => {
                    let value = inner_value(pair);
                    angle = value
                        .parse::<f64>()
                        .ok()
                        .filter(|a| a.is_finite())
                        .ok_or_else(|| ConfigError::InvalidAngle {
                            line,
                            value: value.to_string(),
                        })?;
                }
                Rule::thickness => {
                    let value = inner_value(pair);
                    thickness = value
                        .parse::<u32>()
                        .ok()
                        .filter(|t| *t > 0)
                        .ok_or_else(|| ConfigError::InvalidThickness {
                            line,
                            value: value.to_string(),
                        })?;
                }
                Rule::rule => {
                    let mut parts = pair.into_inner();
                    let lhs = parts.next().map_or("", |p| p.as_str());
                    let rhs = parts.next().map_or("", |p| p.as_str());
                    let mut chars = lhs.chars();
                    let symbol = match (chars.next(), chars.next()) {
                        (Some(c), None) => c,
                        _ => {
                            return Err(ConfigError::InvalidRule {
                                line,
                                lhs: lhs.to_string(),
                            });
                        }
                    };
                    rules.insert(symbol, rhs.to_string());
                }
                Rule::start => axiom = Some(pair.as_str().to_string()),
                _ => {}
            }
        }

        let axiom = axiom.ok_or(ConfigError::MissingAxiom)?;
        Ok(Self {
            axiom,
            rules,
            angle,
            thickness,
        })
    }
}

impl FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The `value` of an `angle:` or `thickness:` line, empty when it was left out.
fn inner_value<'i>(pair: Pair<'i, Rule>) -> &'i str {
    pair.into_inner().next().map_or("", |p| p.as_str())
}

fn syntax_error(error: pest::error::Error<Rule>) -> ConfigError {
    let line = match error.line_col {
        LineColLocation::Pos((line, _)) | LineColLocation::Span((line, _), _) => line,
    };
    ConfigError::Syntax {
        line,
        text: error.line().trim().to_string(),
    }
}
