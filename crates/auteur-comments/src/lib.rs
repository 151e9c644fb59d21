//! Documentation comments embedded in source files.
//!
//! Three stages turn source text into documentation fragments:
//!
//! - [`CommentStyles`] maps a file extension to its comment syntax
//! - [`locate`] finds block comments and line comment runs
//! - [`extract`] checks a comment for the `@auteur` marker and cleans its body
//!
//! [`directives`] chains them and keeps only marked comments.

pub mod directive;
pub mod locator;
pub mod style;

pub use directive::{Directive, MARKER, dedent, extract};
pub use locator::{CommentKind, Comments, RawComment, locate};
pub use style::{CommentStyle, CommentStyles, CommentSyntax};

/// Marked comments of `text`, in document order.
pub fn directives<'a>(
    text: &'a str,
    syntax: &'a CommentSyntax,
) -> impl Iterator<Item = Directive> + 'a {
    locate(text, syntax)
        .map(|comment| extract(&comment.text))
        .filter(|directive| directive.present)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_directives_skip_unmarked_comments() {
        let source = "\
// plain comment
fn a() {}

// @auteur(\"guide\")
// # Usage
//
// Call `a`.
fn b() {}

/* @auteur
 * Block docs
 */
";
        let syntax = CommentStyles::builtin().for_extension("rs");
        let found: Vec<Directive> = directives(source, syntax).collect();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].arguments, vec!["guide"]);
        assert_eq!(found[0].body, "# Usage\n\nCall `a`.");
        assert_eq!(found[1].arguments, Vec::<String>::new());
        assert_eq!(found[1].body, "Block docs");
    }

    #[test]
    fn test_directives_python_docstring() {
        let source = "def f():\n    \"\"\"\n    @auteur(\"py\")\n    Docstring docs\n    \"\"\"\n";
        let syntax = CommentStyles::builtin().for_extension("py");
        let found: Vec<Directive> = directives(source, syntax).collect();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].arguments, vec!["py"]);
        assert_eq!(found[0].body, "Docstring docs");
    }
}
