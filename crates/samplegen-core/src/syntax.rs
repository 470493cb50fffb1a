//! Syntax surface checks for generated samples.
//!
//! Pure text-scanning validation for the failure classes substitution can
//! realistically introduce: leftover placeholder markers, unterminated
//! string literals, and unbalanced brackets. The scanner understands each
//! language's string and comment forms but does not parse grammar, so it
//! accepts some invalid programs; output that fails here is certainly
//! broken.

use crate::key::Language;

/// Returns the first placeholder marker remaining in the text, if any.
///
/// `<%` covers the `<%=` and `<%#` forms as well. Markers are rejected
/// wherever they appear, including inside string literals, since a
/// finished sample must carry none.
///
/// # Examples
///
/// ```
/// use samplegen_core::syntax::find_marker;
///
/// assert_eq!(find_marker("model = \"<%= deploymentName %>\""), Some("<%"));
/// assert_eq!(find_marker("model = \"gpt-4\""), None);
/// ```
pub fn find_marker(source: &str) -> Option<&'static str> {
    if source.contains("<%") {
        return Some("<%");
    }
    if source.contains("%>") {
        return Some("%>");
    }
    None
}

/// Checks a rendered sample for surface-level syntax validity.
///
/// Verifies, in order: no placeholder markers remain, every string
/// literal terminates, block comments terminate, and `()[]{}` brackets
/// balance and nest correctly outside strings and comments.
///
/// # Errors
///
/// Returns a human-readable description naming the first problem found
/// and its line number.
///
/// # Examples
///
/// ```
/// use samplegen_core::{Language, syntax::check_source};
///
/// assert!(check_source(Language::Python, "print(\"hello\")").is_ok());
/// assert!(check_source(Language::Python, "print(\"hello\"").is_err());
/// ```
pub fn check_source(language: Language, source: &str) -> Result<(), String> {
    if let Some(marker) = find_marker(source) {
        return Err(format!("placeholder marker '{marker}' remains in output"));
    }
    SourceScanner::new(language, source).scan()
}

/// Character-level scanner tracking strings, comments, and bracket depth.
struct SourceScanner {
    language: Language,
    chars: Vec<char>,
    i: usize,
    line: usize,
}

impl SourceScanner {
    fn new(language: Language, source: &str) -> Self {
        Self {
            language,
            chars: source.chars().collect(),
            i: 0,
            line: 1,
        }
    }

    fn scan(mut self) -> Result<(), String> {
        let mut stack: Vec<(char, usize)> = Vec::new();

        while let Some(c) = self.peek() {
            if self.at_line_comment() {
                self.skip_line_comment();
                continue;
            }
            if self.at_block_comment() {
                self.skip_block_comment()?;
                continue;
            }
            if self.at_triple_quote() {
                self.skip_triple_quote()?;
                continue;
            }
            if let Some(style) = self.string_style_at(c) {
                self.skip_string(style)?;
                continue;
            }

            match c {
                '(' | '[' | '{' => stack.push((c, self.line)),
                ')' | ']' | '}' => {
                    let Some((open, _)) = stack.pop() else {
                        return Err(format!("unmatched '{c}' on line {}", self.line));
                    };
                    let expected = closing_for(open);
                    if c != expected {
                        return Err(format!(
                            "mismatched '{c}' on line {}: expected '{expected}'",
                            self.line
                        ));
                    }
                }
                _ => {}
            }
            self.bump();
        }

        if let Some((open, line)) = stack.pop() {
            return Err(format!("unclosed '{open}' opened on line {line}"));
        }
        Ok(())
    }

    // ── cursor ──────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    /// Advances one character, tracking line numbers.
    fn bump(&mut self) {
        if self.peek() == Some('\n') {
            self.line += 1;
        }
        self.i += 1;
    }

    fn starts_with(&self, pat: &str) -> bool {
        pat.chars()
            .enumerate()
            .all(|(offset, p)| self.chars.get(self.i + offset) == Some(&p))
    }

    // ── comments ────────────────────────────────────────────────────────

    fn at_line_comment(&self) -> bool {
        match self.language {
            Language::Python => self.starts_with("#"),
            _ => self.starts_with("//"),
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn at_block_comment(&self) -> bool {
        self.language != Language::Python && self.starts_with("/*")
    }

    fn skip_block_comment(&mut self) -> Result<(), String> {
        let start_line = self.line;
        self.bump();
        self.bump();
        while self.peek().is_some() {
            if self.starts_with("*/") {
                self.bump();
                self.bump();
                return Ok(());
            }
            self.bump();
        }
        Err(format!(
            "unterminated block comment starting on line {start_line}"
        ))
    }

    // ── strings ─────────────────────────────────────────────────────────

    fn at_triple_quote(&self) -> bool {
        match self.language {
            Language::Python => self.starts_with("\"\"\"") || self.starts_with("'''"),
            // Java text blocks
            Language::Java => self.starts_with("\"\"\""),
            _ => false,
        }
    }

    fn skip_triple_quote(&mut self) -> Result<(), String> {
        let start_line = self.line;
        let quote = self.peek().unwrap_or('"');
        let delim: String = std::iter::repeat_n(quote, 3).collect();
        self.bump();
        self.bump();
        self.bump();
        while self.peek().is_some() {
            if self.starts_with(&delim) {
                self.bump();
                self.bump();
                self.bump();
                return Ok(());
            }
            if self.peek() == Some('\\') {
                self.bump();
            }
            self.bump();
        }
        Err(format!(
            "unterminated string literal starting on line {start_line}"
        ))
    }

    /// Returns how a string starting at the current character behaves, or
    /// `None` if the character does not open a string in this language.
    fn string_style_at(&self, c: char) -> Option<StringStyle> {
        match (self.language, c) {
            // Go raw strings take no escapes at all
            (Language::Go, '`') => Some(StringStyle::Raw),
            // JS template literals; interpolation is treated as opaque text
            (Language::JavaScript, '`') => Some(StringStyle::Escaped),
            // C# verbatim strings escape quotes by doubling
            (Language::CSharp, '"') if self.verbatim_prefix() => Some(StringStyle::Doubling),
            (_, '"') | (_, '\'') => Some(StringStyle::Escaped),
            _ => None,
        }
    }

    /// Looks back over contiguous `$`/`@` prefix characters before a `"`
    /// to detect C# verbatim strings (`@"..."`, `$@"..."`, `@$"..."`).
    fn verbatim_prefix(&self) -> bool {
        let mut back = self.i;
        while back > 0 {
            match self.chars[back - 1] {
                '@' => return true,
                '$' => back -= 1,
                _ => return false,
            }
        }
        false
    }

    fn skip_string(&mut self, style: StringStyle) -> Result<(), String> {
        let start_line = self.line;
        let quote = self.peek().unwrap_or('"');
        self.bump();
        while let Some(c) = self.peek() {
            if c == quote {
                if style == StringStyle::Doubling && self.chars.get(self.i + 1) == Some(&quote) {
                    self.bump();
                    self.bump();
                    continue;
                }
                self.bump();
                return Ok(());
            }
            if c == '\\' && style == StringStyle::Escaped {
                self.bump();
            }
            self.bump();
        }
        Err(format!(
            "unterminated string literal starting on line {start_line}"
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringStyle {
    /// Backslash escapes the next character.
    Escaped,
    /// No escapes; the string runs to the next delimiter.
    Raw,
    /// The delimiter is escaped by doubling it.
    Doubling,
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── marker residue ──────────────────────────────────────────────────

    #[test]
    fn test_should_flag_remaining_markers() {
        assert!(find_marker("x = <%= endpoint %>").is_some());
        assert!(find_marker("tail %> only").is_some());
        assert!(find_marker("x = 1 % 2 > 0").is_none());
    }

    #[test]
    fn test_should_reject_markers_even_inside_strings() {
        let err = check_source(Language::Python, "x = \"<%= apiKey %>\"").unwrap_err();
        assert!(err.contains("placeholder marker"), "unexpected: {err}");
    }

    // ── python ──────────────────────────────────────────────────────────

    #[test]
    fn test_should_accept_valid_python_with_f_string() {
        let src = "client = OpenAI(\n    base_url=f\"https://api.example.com/openai/v1\",\n    api_key=\"sk\",\n)\n";
        assert!(check_source(Language::Python, src).is_ok());
    }

    #[test]
    fn test_should_accept_python_triple_quoted_string_with_brackets() {
        let src = "doc = \"\"\"unbalanced ( [ { inside\"\"\"\nprint(doc)\n";
        assert!(check_source(Language::Python, src).is_ok());
    }

    #[test]
    fn test_should_ignore_brackets_in_python_comments() {
        let src = "# opening ( only in comment\nx = []\n";
        assert!(check_source(Language::Python, src).is_ok());
    }

    #[test]
    fn test_should_reject_unterminated_python_string() {
        let err = check_source(Language::Python, "x = 1\ny = \"open\n").unwrap_err();
        assert!(err.contains("unterminated string"), "unexpected: {err}");
        assert!(err.contains("line 2"), "unexpected: {err}");
    }

    // ── brackets ────────────────────────────────────────────────────────

    #[test]
    fn test_should_reject_unclosed_bracket() {
        let err = check_source(Language::Python, "x = [1, 2\n").unwrap_err();
        assert!(err.contains("unclosed '['"), "unexpected: {err}");
    }

    #[test]
    fn test_should_reject_unmatched_closing_bracket() {
        let err = check_source(Language::Go, "func main() {}}\n").unwrap_err();
        assert!(err.contains("unmatched '}'"), "unexpected: {err}");
    }

    #[test]
    fn test_should_reject_mismatched_bracket_kinds() {
        let err = check_source(Language::JavaScript, "const a = [1, 2);\n").unwrap_err();
        assert!(err.contains("mismatched ')'"), "unexpected: {err}");
        assert!(err.contains("expected ']'"), "unexpected: {err}");
    }

    #[test]
    fn test_should_ignore_brackets_inside_strings() {
        let src = "s := \"closing ) bracket\"\nt := []string{s}\n";
        assert!(check_source(Language::Go, src).is_ok());
    }

    // ── comments ────────────────────────────────────────────────────────

    #[test]
    fn test_should_ignore_brackets_in_line_and_block_comments() {
        let src = "// stray ( here\n/* and ] there\nspanning lines */\nint x = (1);\n";
        assert!(check_source(Language::Java, src).is_ok());
    }

    #[test]
    fn test_should_reject_unterminated_block_comment() {
        let err = check_source(Language::CSharp, "/* never closed\nint x;\n").unwrap_err();
        assert!(err.contains("unterminated block comment"), "unexpected: {err}");
    }

    // ── language string forms ───────────────────────────────────────────

    #[test]
    fn test_should_accept_go_raw_string_with_backslashes() {
        let src = "path := `C:\\temp\\`\nfmt.Println(path)\n";
        assert!(check_source(Language::Go, src).is_ok());
    }

    #[test]
    fn test_should_accept_js_template_literal() {
        let src = "const url = `https://${host}/openai/v1`;\nconsole.log(url);\n";
        assert!(check_source(Language::JavaScript, src).is_ok());
    }

    #[test]
    fn test_should_accept_csharp_verbatim_string_with_doubled_quotes() {
        let src = "string s = @\"she said \"\"hi\"\" loudly\";\nConsole.WriteLine(s);\n";
        assert!(check_source(Language::CSharp, src).is_ok());
    }

    #[test]
    fn test_should_accept_csharp_interpolated_string() {
        let src = "Console.WriteLine($\"Model={completion.Model}\");\n";
        assert!(check_source(Language::CSharp, src).is_ok());
    }

    #[test]
    fn test_should_accept_apostrophes_inside_double_quoted_strings() {
        let src = "String q = \"What's the best way to train a parrot?\";\n";
        assert!(check_source(Language::Java, src).is_ok());
    }

    #[test]
    fn test_should_accept_char_literals_with_escapes() {
        let src = "char c = '\\'';\nchar d = 'a';\n";
        assert!(check_source(Language::Java, src).is_ok());
    }

    #[test]
    fn test_should_accept_empty_source() {
        assert!(check_source(Language::Python, "").is_ok());
    }
}
