//! Per-language comment syntax.
//!
//! A [`CommentStyle`] is a static descriptor made of regex patterns. The
//! [`CommentStyles`] registry compiles every style once and maps file
//! extensions to the compiled [`CommentSyntax`].

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Comment delimiters of a language family, as regex patterns.
///
/// Empty `block_start`/`block_end` means the language has no block comments.
/// Empty `line_begin` means block comment lines are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Style name used in logs.
    pub name: &'static str,
    /// Pattern opening a block comment.
    pub block_start: &'static str,
    /// Pattern closing a block comment.
    pub block_end: &'static str,
    /// Line comment prefixes, scanned independently in this order.
    pub line_comment: &'static [&'static str],
    /// Decoration stripped from the start of each block comment line.
    pub line_begin: &'static str,
}

impl CommentStyle {
    /// Whether the style has block comments.
    pub fn has_block(&self) -> bool {
        !self.block_start.is_empty() && !self.block_end.is_empty()
    }
}

pub const C_STYLE: CommentStyle = CommentStyle {
    name: "c",
    block_start: r"/\*",
    block_end: r"\*/",
    line_comment: &["/{2,}"],
    line_begin: r"\*",
};

pub const PYTHON_STYLE: CommentStyle = CommentStyle {
    name: "python",
    block_start: r#"""""#,
    block_end: r#"""""#,
    line_comment: &["#+"],
    line_begin: "",
};

pub const RUBY_STYLE: CommentStyle = CommentStyle {
    name: "ruby",
    block_start: "=begin",
    block_end: "=end",
    line_comment: &["#+"],
    line_begin: "",
};

pub const PHP_STYLE: CommentStyle = CommentStyle {
    name: "php",
    block_start: r"/\*",
    block_end: r"\*/",
    line_comment: &["/{2,}"],
    line_begin: r"\*",
};

pub const HASH_STYLE: CommentStyle = CommentStyle {
    name: "hash",
    block_start: "",
    block_end: "",
    line_comment: &["#+"],
    line_begin: "",
};

pub const HTML_STYLE: CommentStyle = CommentStyle {
    name: "html",
    block_start: "<!--",
    block_end: "-->",
    line_comment: &[],
    line_begin: "",
};

pub const CSS_STYLE: CommentStyle = CommentStyle {
    name: "css",
    block_start: r"/\*",
    block_end: r"\*/",
    line_comment: &[],
    line_begin: "",
};

pub const SCSS_STYLE: CommentStyle = CommentStyle {
    name: "scss",
    block_start: r"/\*",
    block_end: r"\*/",
    line_comment: &["/{2,}"],
    line_begin: "",
};

pub const LUA_STYLE: CommentStyle = CommentStyle {
    name: "lua",
    block_start: r"--\[\[",
    block_end: r"\]\]",
    line_comment: &[],
    line_begin: "",
};

pub const HASKELL_STYLE: CommentStyle = CommentStyle {
    name: "haskell",
    block_start: r"\{-",
    block_end: r"-\}",
    line_comment: &["-{2,}"],
    line_begin: "",
};

pub const SQL_STYLE: CommentStyle = CommentStyle {
    name: "sql",
    block_start: r"/\*",
    block_end: r"\*/",
    line_comment: &["-{2,}"],
    line_begin: "",
};

pub const PERL_STYLE: CommentStyle = CommentStyle {
    name: "perl",
    block_start: "=pod",
    block_end: "=cut",
    line_comment: &["#+"],
    line_begin: "",
};

pub const MATLAB_STYLE: CommentStyle = CommentStyle {
    name: "matlab",
    block_start: r"%\{",
    block_end: r"%\}",
    line_comment: &["%+"],
    line_begin: "",
};

pub const VB_STYLE: CommentStyle = CommentStyle {
    name: "vb",
    block_start: "",
    block_end: "",
    line_comment: &["'"],
    line_begin: "",
};

/// Style used for extensions without a registered style.
pub const DEFAULT_STYLE: CommentStyle = CommentStyle {
    name: "default",
    block_start: r"/\*",
    block_end: r"\*/",
    line_comment: &["//"],
    line_begin: r"\*",
};

/// Built-in extension table.
pub const BUILTIN_STYLES: &[(&CommentStyle, &[&str])] = &[
    (
        &C_STYLE,
        &[
            "go", "js", "jsx", "ts", "tsx", "java", "c", "cpp", "cs", "kt", "swift", "scala", "rs",
        ],
    ),
    (&PYTHON_STYLE, &["py"]),
    (&RUBY_STYLE, &["rb"]),
    (&PHP_STYLE, &["php"]),
    (&HASH_STYLE, &["r", "yaml", "yml", "toml", "sh", "bash", "zsh"]),
    (&HTML_STYLE, &["html", "xml", "svg"]),
    (&CSS_STYLE, &["css"]),
    (&SCSS_STYLE, &["scss", "sass", "less"]),
    (&LUA_STYLE, &["lua"]),
    (&HASKELL_STYLE, &["hs"]),
    (&SQL_STYLE, &["sql"]),
    (&PERL_STYLE, &["pl"]),
    (&MATLAB_STYLE, &["m"]),
    (&VB_STYLE, &["vb"]),
];

static BUILTIN: LazyLock<CommentStyles> =
    LazyLock::new(|| CommentStyles::from_table(BUILTIN_STYLES, &DEFAULT_STYLE).unwrap());

/// A [`CommentStyle`] with its patterns compiled.
#[derive(Debug)]
pub struct CommentSyntax {
    name: &'static str,
    pub(crate) block: Option<Regex>,
    pub(crate) line_prefixes: Vec<Regex>,
    pub(crate) line_begin: Option<Regex>,
}

impl CommentSyntax {
    /// Compile a style.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern of the style is not a valid regex.
    /// Block delimiters are checked on their own first, so one cannot close a
    /// group opened by the other.
    pub fn compile(style: &CommentStyle) -> Result<Self, regex::Error> {
        let block = if style.has_block() {
            Regex::new(style.block_start)?;
            Regex::new(style.block_end)?;
            Some(Regex::new(&format!(
                "(?s)(?:{})(.*?)(?:{})",
                style.block_start, style.block_end
            ))?)
        } else {
            None
        };

        let line_prefixes = style
            .line_comment
            .iter()
            .map(|prefix| Regex::new(&format!("^[ \t]*(?:{prefix})")))
            .collect::<Result<Vec<_>, _>>()?;

        let line_begin = if style.line_begin.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("^[ \t]*(?:{})", style.line_begin))?)
        };

        Ok(Self {
            name: style.name,
            block,
            line_prefixes,
            line_begin,
        })
    }

    /// Name of the style this syntax was compiled from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the syntax has block comments.
    pub fn has_block(&self) -> bool {
        self.block.is_some()
    }

    /// Number of line comment prefixes.
    pub fn line_prefix_count(&self) -> usize {
        self.line_prefixes.len()
    }
}

/// Registry of compiled comment syntaxes keyed by file extension.
#[derive(Debug)]
pub struct CommentStyles {
    syntaxes: Vec<CommentSyntax>,
    by_extension: HashMap<String, usize>,
    fallback: CommentSyntax,
}

impl CommentStyles {
    /// The built-in registry, compiled on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Compile a registry from an extension table.
    ///
    /// Extensions are stored lowercase without a leading dot. When an
    /// extension appears twice, the later entry wins.
    ///
    /// # Errors
    ///
    /// Returns an error if any style contains an invalid regex.
    pub fn from_table(
        table: &[(&CommentStyle, &[&str])],
        fallback: &CommentStyle,
    ) -> Result<Self, regex::Error> {
        let mut syntaxes = Vec::with_capacity(table.len());
        let mut by_extension = HashMap::new();

        for (style, extensions) in table {
            let index = syntaxes.len();
            syntaxes.push(CommentSyntax::compile(style)?);
            for ext in *extensions {
                by_extension.insert(normalize_extension(ext), index);
            }
        }

        Ok(Self {
            syntaxes,
            by_extension,
            fallback: CommentSyntax::compile(fallback)?,
        })
    }

    /// Look up the syntax registered for an extension.
    ///
    /// Lookup is case-insensitive and accepts an optional leading dot.
    pub fn get(&self, extension: &str) -> Option<&CommentSyntax> {
        self.by_extension
            .get(&normalize_extension(extension))
            .map(|&index| &self.syntaxes[index])
    }

    /// Whether an extension has a registered syntax.
    pub fn supports(&self, extension: &str) -> bool {
        self.by_extension
            .contains_key(&normalize_extension(extension))
    }

    /// Syntax for an extension, falling back to the default C-like syntax.
    pub fn for_extension(&self, extension: &str) -> &CommentSyntax {
        self.get(extension).unwrap_or(&self.fallback)
    }

    /// The fallback syntax.
    pub fn default_syntax(&self) -> &CommentSyntax {
        &self.fallback
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_styles_compile() {
        for (style, _) in BUILTIN_STYLES {
            assert!(CommentSyntax::compile(style).is_ok(), "{}", style.name);
        }
        assert!(CommentSyntax::compile(&DEFAULT_STYLE).is_ok());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let styles = CommentStyles::builtin();
        assert_eq!(styles.get("RS").map(CommentSyntax::name), Some("c"));
        assert_eq!(styles.get("Py").map(CommentSyntax::name), Some("python"));
    }

    #[test]
    fn test_lookup_accepts_leading_dot() {
        let styles = CommentStyles::builtin();
        assert_eq!(styles.get(".lua").map(CommentSyntax::name), Some("lua"));
        assert!(styles.supports(".sql"));
    }

    #[test]
    fn test_unknown_extension() {
        let styles = CommentStyles::builtin();
        assert!(styles.get("txt").is_none());
        assert!(!styles.supports("txt"));
        assert_eq!(styles.for_extension("txt").name(), "default");
    }

    #[test]
    fn test_style_shapes() {
        let styles = CommentStyles::builtin();

        let hash = styles.for_extension("sh");
        assert!(!hash.has_block());
        assert_eq!(hash.line_prefix_count(), 1);

        let html = styles.for_extension("html");
        assert!(html.has_block());
        assert_eq!(html.line_prefix_count(), 0);
    }

    #[test]
    fn test_custom_table_later_entry_wins() {
        let table: &[(&CommentStyle, &[&str])] =
            &[(&C_STYLE, &["txt"]), (&HASH_STYLE, &[".TXT"])];
        let styles = CommentStyles::from_table(table, &DEFAULT_STYLE).unwrap();
        assert_eq!(styles.for_extension("txt").name(), "hash");
    }

    #[test]
    fn test_unbalanced_block_delimiters_are_rejected() {
        let broken = CommentStyle {
            name: "broken",
            block_start: "(",
            block_end: ")",
            line_comment: &[],
            line_begin: "",
        };
        assert!(CommentSyntax::compile(&broken).is_err());
    }

    #[test]
    fn test_invalid_line_prefix_is_rejected() {
        let broken = CommentStyle {
            name: "broken",
            block_start: "",
            block_end: "",
            line_comment: &["["],
            line_begin: "",
        };
        assert!(CommentSyntax::compile(&broken).is_err());
    }

    #[test]
    fn test_invalid_style_fails_registry() {
        let broken = CommentStyle {
            name: "broken",
            block_start: "[",
            block_end: "]",
            line_comment: &[],
            line_begin: "",
        };
        let table: &[(&CommentStyle, &[&str])] = &[(&broken, &["x"])];
        assert!(CommentStyles::from_table(table, &DEFAULT_STYLE).is_err());
    }

    #[test]
    fn test_default_syntax_is_fallback() {
        let styles = CommentStyles::builtin();
        assert_eq!(styles.default_syntax().name(), "default");
        assert_eq!(styles.default_syntax().line_prefix_count(), 1);
        assert!(std::ptr::eq(styles.for_extension("txt"), styles.default_syntax()));
    }
}
