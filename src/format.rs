//! Named-placeholder interpolation for translation templates.
//!
//! Templates use `{name}` placeholders filled from caller-supplied pairs.
//! `{{` and `}}` produce literal braces. Substituted values are inserted
//! verbatim and never re-scanned, so parameter values cannot inject
//! further placeholders.

use thiserror::Error;

/// Errors raised while interpolating a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The template references a placeholder the parameters do not supply.
    #[error("Missing parameter '{name}' for template '{template}'")]
    MissingParam {
        /// Placeholder name exactly as written in the template.
        name: String,
        /// The template being interpolated.
        template: String,
    },
    /// A `{` was opened but never closed.
    #[error("Unclosed '{{' in template '{template}'")]
    UnclosedBrace {
        /// The template being interpolated.
        template: String,
    },
    /// A `}` appeared without a matching `{`.
    #[error("Unmatched '}}' in template '{template}'")]
    UnmatchedBrace {
        /// The template being interpolated.
        template: String,
    },
}

/// Replace `{name}` placeholders in `template` with values from `params`.
///
/// Placeholder names are matched against the pairs verbatim, with no
/// trimming or case folding. When a name appears more than once in
/// `params`, the first pair wins. Unused pairs are ignored.
///
/// # Examples
/// - `interpolate("Hi {name}", &[("name", "Sam")])` → `"Hi Sam"`
/// - `interpolate("{{literal}}", &[])` → `"{literal}"`
///
/// # Errors
/// - [`FormatError::MissingParam`] if a placeholder has no matching pair
///   (an empty `{}` counts as the empty name).
/// - [`FormatError::UnclosedBrace`] / [`FormatError::UnmatchedBrace`] if
///   the braces in `template` are unbalanced.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> Result<String, FormatError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '}' => {
                return Err(FormatError::UnmatchedBrace { template: template.to_string() });
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    name.push(next);
                }
                if !closed {
                    return Err(FormatError::UnclosedBrace { template: template.to_string() });
                }

                let Some(&(_, value)) = params.iter().find(|&&(n, _)| n == name) else {
                    return Err(FormatError::MissingParam {
                        name,
                        template: template.to_string(),
                    });
                };
                result.push_str(value);
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
