use std::fmt;
use std::str::FromStr;

use crate::MetaError;

/// One step of a [`QueryPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Descend into an object member.
    Field(String),
    /// Descend into an array element.
    Index(usize),
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Step::Field(name.to_string())
    }
}

impl From<String> for Step {
    fn from(name: String) -> Self {
        Step::Field(name)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(name) => write!(f, ".{name}"),
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Ordered list of steps walked from the document root.
///
/// Textual form accepts `assets.0.name`, `assets[0].name` and
/// `$.assets[0].name`. Purely numeric dotted segments and bracketed integers
/// are indices; `["name"]` forces a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryPath(Vec<Step>);

impl QueryPath {
    pub fn new(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(Step::Field(name.into()));
        self
    }

    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Step::Index(index));
        self
    }
}

impl<S: Into<Step>> FromIterator<S> for QueryPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.0 {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

fn segment(raw: &str) -> Step {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(index) = raw.parse() {
            return Step::Index(index);
        }
    }
    Step::Field(raw.to_string())
}

impl FromStr for QueryPath {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| MetaError::InvalidPath {
            path: s.to_string(),
            reason,
        };

        let mut rest = s.trim();
        rest = rest.strip_prefix('$').unwrap_or(rest);
        let mut steps = Vec::new();
        let mut first = true;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('[') {
                let close = after.find(']').ok_or_else(|| invalid("unclosed '['"))?;
                let inner = after[..close].trim();
                let step = if let Some(quoted) = inner
                    .strip_prefix('"')
                    .and_then(|q| q.strip_suffix('"'))
                    .or_else(|| inner.strip_prefix('\'').and_then(|q| q.strip_suffix('\'')))
                {
                    Step::Field(quoted.to_string())
                } else {
                    inner
                        .parse::<usize>()
                        .map(Step::Index)
                        .map_err(|_| invalid("bracket must hold an index or a quoted name"))?
                };
                steps.push(step);
                rest = &after[close + 1..];
            } else {
                let body = match rest.strip_prefix('.') {
                    Some(body) => body,
                    None if first => rest,
                    None => return Err(invalid("expected '.' or '['")),
                };
                let end = body.find(['.', '[']).unwrap_or(body.len());
                if end == 0 {
                    return Err(invalid("empty segment"));
                }
                if body[..end].contains(']') {
                    return Err(invalid("unexpected ']'"));
                }
                steps.push(segment(&body[..end]));
                rest = &body[end..];
            }
            first = false;
        }

        Ok(Self(steps))
    }
}
