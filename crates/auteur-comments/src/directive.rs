//! `@auteur` marker parsing.
//!
//! A comment opts into the documentation set by containing the marker:
//!
//! ```text
//! @auteur
//! @auteur("guides/setup")
//! @auteur("a", "b")
//! ```
//!
//! The marker must be followed by whitespace, the end of the text, or a
//! parenthesized list of double-quoted strings. Anything else (`@auteurs`,
//! `@auteur("unterminated`) is ordinary text and stays in the body.

/// Marker token opting a comment into the documentation set.
pub const MARKER: &str = "@auteur";

/// Result of scanning a comment body for the marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// Whether an accepted marker occurrence was found.
    pub present: bool,
    /// Arguments of the first accepted occurrence.
    pub arguments: Vec<String>,
    /// Body with every accepted occurrence removed and re-indented.
    ///
    /// Unchanged input when `present` is false.
    pub body: String,
}

/// Scan `text` for marker occurrences.
///
/// # Examples
///
/// ```
/// use auteur_comments::extract;
///
/// let directive = extract("@auteur(\"api\")\n  Client usage");
/// assert!(directive.present);
/// assert_eq!(directive.arguments, vec!["api"]);
/// assert_eq!(directive.body, "Client usage");
/// ```
pub fn extract(text: &str) -> Directive {
    let mut stripped = String::with_capacity(text.len());
    let mut arguments = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(found) = text[pos..].find(MARKER) {
        let start = pos + found;
        let after = start + MARKER.len();

        let Some((args, end)) = accept(text, after) else {
            pos = after;
            continue;
        };

        stripped.push_str(&text[copied..start]);
        arguments.get_or_insert(args);
        copied = skip_horizontal_space(text, end);
        pos = copied;
    }

    let Some(arguments) = arguments else {
        return Directive {
            present: false,
            arguments: Vec::new(),
            body: text.to_owned(),
        };
    };
    stripped.push_str(&text[copied..]);

    Directive {
        present: true,
        arguments,
        body: dedent(&stripped),
    }
}

/// Decide whether the marker ending at `after` is an accepted occurrence.
///
/// Returns the arguments and the offset just past the occurrence.
fn accept(text: &str, after: usize) -> Option<(Vec<String>, usize)> {
    match text[after..].chars().next() {
        None => Some((Vec::new(), after)),
        Some(c) if c.is_whitespace() => Some((Vec::new(), after)),
        Some('(') => {
            let parsed = parse_args(&text[after + 1..]);
            if parsed.is_none() {
                tracing::debug!(offset = after, "Ignoring malformed @auteur argument list");
            }
            parsed.map(|(args, consumed)| (args, after + 1 + consumed))
        }
        Some(_) => None,
    }
}

/// Parse `"a", "b")` following an opening parenthesis.
///
/// Returns the strings and the number of bytes consumed including the closing
/// parenthesis, or `None` when the list is malformed.
fn parse_args(input: &str) -> Option<(Vec<String>, usize)> {
    let mut args = Vec::new();
    let mut pos = skip_whitespace(input, 0);

    if input[pos..].starts_with(')') {
        return Some((args, pos + 1));
    }

    loop {
        let rest = input[pos..].strip_prefix('"')?;
        let len = rest.find(['"', '\n'])?;
        if !rest[len..].starts_with('"') {
            return None;
        }
        args.push(rest[..len].to_owned());
        pos = skip_whitespace(input, pos + 1 + len + 1);

        match input[pos..].chars().next()? {
            ')' => return Some((args, pos + 1)),
            ',' => pos = skip_whitespace(input, pos + 1),
            _ => return None,
        }
    }
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start().len())
}

fn skip_horizontal_space(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start_matches([' ', '\t']).len())
}

/// Remove common indentation and surrounding blank lines.
///
/// Whitespace-only lines become empty and do not count towards the common
/// indentation.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[indent..]
            }
        })
        .collect();

    lines.join("\n").trim_matches('\n').to_owned()
}
