//! The ordered normalization pipeline.
//!
//! `normalize` turns an arbitrary text fragment into exactly one
//! self-contained, root-wrapped markup block with only static attributes,
//! ready to be pasted into an external playground with zero extra context.
//! Every step is a total text rewrite; a pattern that fails to match is a
//! skipped rewrite, never an error.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::attrs::rewrite_dynamic_attributes;
use crate::classify::{SourceKind, classify_source};
use crate::diagnostics::NormalizeDiagnostics;
use crate::expr::strip_expressions;
use crate::fragment::{collapse_fragments, expand_self_closing};
use crate::scaffold::strip_definition_scaffolding;
use crate::wrapper::{is_single_root, placeholder, wrap_in_root};

fn default_root_tag() -> String {
    "section".to_string()
}

fn default_root_class() -> String {
    "min-h-[100px] p-6 bg-gradient-to-br from-blue-500/10 to-gray-50".to_string()
}

fn default_fragment_class() -> String {
    "space-y-4".to_string()
}

fn default_placeholder_text() -> String {
    "No markup provided for this entry.".to_string()
}

/// Options controlling the normalizer output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Tag name of the enforced root wrapper.
    #[serde(default = "default_root_tag")]
    pub root_tag: String,
    /// Class applied when a new root wrapper is added.
    #[serde(default = "default_root_class")]
    pub root_class: String,
    /// Class given to the container that replaces fragment shorthand.
    #[serde(default = "default_fragment_class")]
    pub fragment_class: String,
    /// Text of the explanatory comment inside the empty-input placeholder.
    #[serde(default = "default_placeholder_text")]
    pub placeholder_text: String,
}

impl NormalizeOptions {
    /// Ocean defaults: a padded `<section>` wrapper with the themed
    /// gradient background used across the catalog.
    pub fn ocean() -> Self {
        Self {
            root_tag: default_root_tag(),
            root_class: default_root_class(),
            fragment_class: default_fragment_class(),
            placeholder_text: default_placeholder_text(),
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::ocean()
    }
}

/// A single total text rewrite over the working fragment.
pub trait RewritePass {
    /// Apply the rewrite, returning the input unchanged when nothing matches.
    fn apply<'a>(&self, input: &'a str, diagnostics: &mut NormalizeDiagnostics) -> Cow<'a, str>;
}

impl<F> RewritePass for F
where
    F: for<'a> Fn(&'a str, &mut NormalizeDiagnostics) -> Cow<'a, str>,
{
    fn apply<'a>(&self, input: &'a str, diagnostics: &mut NormalizeDiagnostics) -> Cow<'a, str> {
        (self)(input, diagnostics)
    }
}

/// Ordered rewrite pipeline turning raw fragments into rooted static markup.
pub struct NormalizePipeline {
    options: NormalizeOptions,
    extra_passes: Vec<Box<dyn RewritePass>>,
}

impl NormalizePipeline {
    /// Create a pipeline with the given output options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            extra_passes: Vec::new(),
        }
    }

    /// The options this pipeline was built with.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Append a custom rewrite that runs after expression stripping and
    /// before root-wrapper enforcement.
    pub fn add_pass<P: RewritePass + 'static>(&mut self, pass: P) {
        self.extra_passes.push(Box::new(pass));
    }

    /// Run the full pipeline. Total: every input maps to some output.
    pub fn run(&self, input: &str) -> (String, NormalizeDiagnostics) {
        let mut diagnostics = NormalizeDiagnostics::new();

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return (placeholder(&self.options), diagnostics);
        }

        let mut current = match classify_source(trimmed) {
            SourceKind::ComponentFlavored => {
                strip_definition_scaffolding(trimmed, &mut diagnostics)
            }
            SourceKind::AlreadyMarkup => trimmed.to_string(),
        };
        current = rewrite_dynamic_attributes(&current);
        current = collapse_fragments(&current, &self.options.fragment_class);
        current = expand_self_closing(&current);
        current = strip_expressions(&current, &mut diagnostics);
        for pass in &self.extra_passes {
            current = pass.apply(&current, &mut diagnostics).into_owned();
        }

        let result = current.trim();
        let output = if result.is_empty() {
            placeholder(&self.options)
        } else if is_single_root(result, &self.options.root_tag) {
            result.to_string()
        } else {
            wrap_in_root(result, &self.options)
        };
        (output, diagnostics)
    }
}

/// Normalize a raw fragment with the Ocean defaults.
pub fn normalize(input: &str) -> String {
    normalize_with_diagnostics(input, &NormalizeOptions::ocean()).0
}

/// Normalize a raw fragment with explicit options, returning the collected
/// diagnostics alongside the output.
pub fn normalize_with_diagnostics(
    input: &str,
    options: &NormalizeOptions,
) -> (String, NormalizeDiagnostics) {
    NormalizePipeline::new(options.clone()).run(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_placeholder() {
        let out = normalize("");
        assert!(!out.is_empty());
        assert!(out.contains("<!--"));
        assert_eq!(normalize("   "), out);
    }

    #[test]
    fn class_name_rewrite() {
        let out = normalize("<div className=\"x\">y</div>");
        assert!(out.contains("class=\"x\""));
        assert!(!out.contains("className"));
    }

    #[test]
    fn fragment_collapse_wraps_text() {
        let out = normalize("<>hi</>");
        assert!(out.contains("<div class=\"space-y-4\">hi</div>"));
        assert!(out.starts_with("<section"));
    }

    #[test]
    fn self_closing_expansion() {
        let out = normalize("<div class=\"a\" />");
        assert!(out.contains("<div class=\"a\"></div>"));
        assert!(!out.contains("/>"));
    }

    #[test]
    fn already_wrapped_is_untouched() {
        let input = "<section class=\"x\">\n<div>hi</div>\n</section>";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn definition_is_unwrapped_and_wrapped() {
        let input = "export default function Hero() {\n  return (\n    <div className=\"mx-auto\">\n      <h1>Title</h1>\n    </div>\n  );\n}";
        let out = normalize(input);
        assert!(out.starts_with("<section"));
        assert!(out.contains("class=\"mx-auto\""));
        assert!(!out.contains("function"));
        assert!(!out.contains("return"));
    }

    #[test]
    fn definition_returning_section_keeps_own_root() {
        let input =
            "function Hero() {\n  return (\n    <section>\n      <h1>Hi</h1>\n    </section>\n  );\n}";
        let out = normalize(input);
        assert_eq!(out, "<section>\n      <h1>Hi</h1>\n    </section>");
    }

    fn recolor<'a>(input: &'a str, _diagnostics: &mut NormalizeDiagnostics) -> Cow<'a, str> {
        Cow::Owned(input.replace("#2563EB", "#0EA5E9"))
    }

    #[test]
    fn custom_pass_runs_before_wrapping() {
        let mut pipeline = NormalizePipeline::new(NormalizeOptions::ocean());
        pipeline.add_pass(recolor);
        let (out, _) = pipeline.run("<div class=\"bg-[#2563EB]\">x</div>");
        assert!(out.contains("#0EA5E9"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: NormalizeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, NormalizeOptions::ocean());
        let custom: NormalizeOptions =
            serde_json::from_str("{\"rootTag\":\"main\"}").unwrap();
        assert_eq!(custom.root_tag, "main");
        assert_eq!(custom.root_class, NormalizeOptions::ocean().root_class);
    }
}
