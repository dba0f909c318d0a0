//! Definition-scaffolding removal for component-flavored fragments.

use crate::diagnostics::{NormalizeDiagnostics, RewriteWarning};

/// Keywords that open a definition header worth stripping.
const DEFINITION_KEYWORDS: &[&str] = &["async", "const", "export", "function", "let", "var"];

/// Strip a leading definition header through its first return-expression
/// opening, plus the matching trailing close and body end.
///
/// Targets the single common shape `header -> return ( -> markup -> ) ->
/// end` (and the arrow form `=> (`). This is a prefix/suffix strip, not a
/// balanced parse; it makes no promise about multiple returns or deeply
/// nested definitions. Input that does not open with a definition keyword
/// passes through untouched.
pub fn strip_definition_scaffolding(input: &str, diagnostics: &mut NormalizeDiagnostics) -> String {
    let is_definition = DEFINITION_KEYWORDS.iter().any(|kw| input.starts_with(kw));
    if !is_definition {
        return input.to_string();
    }

    let opening = input
        .find("return (")
        .map(|at| (at, at + "return (".len()))
        .or_else(|| input.find("=> (").map(|at| (at, at + "=> (".len())));
    let Some((at, body_start)) = opening else {
        return input.to_string();
    };

    let body = &input[body_start..];
    match body.rfind(')') {
        Some(close)
            if body[close + 1..]
                .chars()
                .all(|c| c.is_whitespace() || c == '}' || c == ';') =>
        {
            body[..close].trim().to_string()
        }
        _ => {
            // No trailing close found; keep the body and flag the miss.
            diagnostics.push(RewriteWarning::UnbalancedScaffold { offset: at });
            body.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_function_definition() {
        let input = "export default function Hero() {\n  return (\n    <div className=\"x\">hi</div>\n  );\n}";
        let mut diagnostics = NormalizeDiagnostics::new();
        let result = strip_definition_scaffolding(input, &mut diagnostics);
        assert_eq!(result, "<div className=\"x\">hi</div>");
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn strips_arrow_definition() {
        let input = "const Hero = () => (<div>hi</div>);";
        let mut diagnostics = NormalizeDiagnostics::new();
        let result = strip_definition_scaffolding(input, &mut diagnostics);
        assert_eq!(result, "<div>hi</div>");
    }

    #[test]
    fn plain_markup_passes_through() {
        let input = "<div>hi</div>";
        let mut diagnostics = NormalizeDiagnostics::new();
        assert_eq!(strip_definition_scaffolding(input, &mut diagnostics), input);
    }

    #[test]
    fn definition_without_return_passes_through() {
        let input = "const x = 1;";
        let mut diagnostics = NormalizeDiagnostics::new();
        assert_eq!(strip_definition_scaffolding(input, &mut diagnostics), input);
    }

    #[test]
    fn unclosed_return_keeps_body_and_warns() {
        let input = "function Hero() {\n  return (\n    <div>hi</div>";
        let mut diagnostics = NormalizeDiagnostics::new();
        let result = strip_definition_scaffolding(input, &mut diagnostics);
        assert_eq!(result, "<div>hi</div>");
        assert_eq!(diagnostics.count(), 1);
    }
}
