//! Relative URI templates such as `api/Values/{id}?name={name}`.

/// A piece of a URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriPart<'a> {
    /// Literal text, copied as-is.
    Literal(&'a str),
    /// A `{name}` variable. Route constraints (`{id:int}`) and defaults
    /// (`{id=1}`) are stripped from `name`.
    Variable { name: &'a str },
}

/// A parsed URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate<'a> {
    parts: Vec<UriPart<'a>>,
}

impl<'a> UriTemplate<'a> {
    /// Split a template into literal and variable parts.
    ///
    /// An unmatched `{` is kept as literal text.
    pub fn parse(template: &'a str) -> Self {
        let mut parts = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            if open > 0 {
                parts.push(UriPart::Literal(&rest[..open]));
            }
            let inner = &rest[open + 1..close];
            let name = inner
                .split([':', '='])
                .next()
                .unwrap_or(inner)
                .trim_end_matches('?');
            parts.push(UriPart::Variable { name });
            rest = &rest[close + 1..];
        }

        if !rest.is_empty() {
            parts.push(UriPart::Literal(rest));
        }

        Self { parts }
    }

    /// Get the template parts in order.
    pub fn parts(&self) -> &[UriPart<'a>] {
        &self.parts
    }

    /// Get the variable names in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parts.iter().filter_map(|part| match part {
            UriPart::Variable { name } => Some(*name),
            UriPart::Literal(_) => None,
        })
    }
}
