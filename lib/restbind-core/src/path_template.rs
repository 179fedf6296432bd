//! Path templates and URL resolution.

use std::fmt;

use crate::arguments::render;
use crate::{Args, Error, ParameterBinding, Result};

/// A path template such as `/users/{id}/posts/{post_id}`.
///
/// Placeholders are `{name}` tokens; an unmatched `{` is kept literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl<'a> PathTemplate<'a> {
    /// Parse a template.
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some((before, opened)) = rest.split_once('{') {
            let Some((name, after)) = opened.split_once('}') else {
                break;
            };
            if !before.is_empty() {
                segments.push(Segment::Literal(before));
            }
            segments.push(Segment::Placeholder(name));
            rest = after;
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Self { source, segments }
    }

    /// The template as written.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.source
    }

    /// Placeholder names, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder with its bound argument.
    ///
    /// Each `{key}` is replaced by the rendered argument of the first path
    /// binding with that key. A placeholder without binding, or whose argument
    /// is missing or null, is a binding error. Bindings whose key appears in
    /// no placeholder are ignored.
    pub fn resolve(&self, bindings: &[ParameterBinding], args: &Args) -> Result<String> {
        let mut path = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(name) => {
                    let binding = bindings
                        .iter()
                        .find(|binding| binding.key == *name)
                        .ok_or_else(|| {
                            Error::binding(format!(
                                "no path binding for placeholder `{{{name}}}` in `{}`",
                                self.source
                            ))
                        })?;
                    let value = args
                        .get(binding.index)
                        .filter(|value| !value.is_null())
                        .ok_or_else(|| {
                            Error::binding(format!(
                                "missing argument {} for placeholder `{{{name}}}`",
                                binding.index
                            ))
                        })?;
                    path.push_str(&render(value));
                }
            }
        }

        Ok(path)
    }
}

impl fmt::Display for PathTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

/// Resolve the full URL of a call.
///
/// The resolved path is appended to the Url-bound argument when the method
/// declares one, to `base_url` otherwise.
pub fn resolve_url(
    base_url: &str,
    template: &str,
    url_binding: Option<&ParameterBinding>,
    path_bindings: &[ParameterBinding],
    args: &Args,
) -> Result<String> {
    let path = PathTemplate::parse(template).resolve(path_bindings, args)?;

    let base = match url_binding {
        Some(binding) => {
            let value = args
                .get(binding.index)
                .filter(|value| !value.is_null())
                .ok_or_else(|| {
                    Error::binding(format!("missing url argument {}", binding.index))
                })?;
            render(value)
        }
        None => base_url.to_string(),
    };

    Ok(base + &path)
}
