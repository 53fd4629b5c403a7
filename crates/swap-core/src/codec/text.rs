use super::{Codec, CodecError};

pub const QUOTE: char = '\'';

/// Strips one pair of surrounding single or double quotes.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

pub fn quote(text: &str) -> String {
    format!("{QUOTE}{text}{QUOTE}")
}

/// Text values are written between single quotes, so they cannot carry one.
/// Surrounding whitespace would not survive a re-read of a bare value.
pub fn check_text(text: &str) -> Result<(), CodecError> {
    if text.contains(QUOTE) || text.contains('\n') || text.contains('\r') {
        Err(CodecError::new("text without quotes or line breaks"))
    } else if text.trim() != text {
        Err(CodecError::new("text without leading or trailing spaces"))
    } else {
        Ok(())
    }
}

/// One item of a comma separated name list.
pub fn check_name(item: &str) -> Result<(), CodecError> {
    if item.is_empty() || item.contains(',') || item.trim() != item {
        return Err(CodecError::new("a comma separated list of names"));
    }
    check_text(item)
}

/// Drops an inline `!` comment that is not inside a quoted string.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut open: Option<char> = None;
    for (index, character) in line.char_indices() {
        match (open, character) {
            (None, '\'' | '"') => open = Some(character),
            (Some(quote), current) if quote == current => open = None,
            (None, '!') => return &line[..index],
            _ => {}
        }
    }
    line
}

/// Splits on whitespace runs, or on `delimiter` when given, keeping quoted
/// strings whole. Quotes stay on the returned tokens.
pub fn split_tokens(line: &str, delimiter: Option<char>) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open: Option<char> = None;
    let mut has_token = false;

    for character in line.chars() {
        if let Some(quote) = open {
            current.push(character);
            if character == quote {
                open = None;
            }
            continue;
        }

        let is_separator = match delimiter {
            Some(delimiter) => character == delimiter,
            None => character.is_whitespace(),
        };
        if is_separator {
            if has_token || delimiter.is_some() {
                tokens.push(current.trim().to_string());
            }
            current.clear();
            has_token = false;
            continue;
        }

        if matches!(character, '\'' | '"') {
            open = Some(character);
        }
        if !character.is_whitespace() {
            has_token = true;
        }
        current.push(character);
    }

    if has_token || (delimiter.is_some() && !tokens.is_empty()) {
        tokens.push(current.trim().to_string());
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedTextCodec;

impl Codec for QuotedTextCodec {
    type Item = String;

    fn parse(&self, raw: &str) -> Result<String, CodecError> {
        let text = unquote(raw);
        check_text(text)?;
        Ok(text.to_string())
    }

    fn render(&self, value: &String) -> String {
        quote(value)
    }
}

/// Comma separated names inside one pair of quotes: `'rain,etref'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextListCodec;

impl Codec for TextListCodec {
    type Item = Vec<String>;

    fn parse(&self, raw: &str) -> Result<Vec<String>, CodecError> {
        let inner = unquote(raw);
        if inner.trim().is_empty() {
            return Ok(Vec::new());
        }
        inner
            .split(',')
            .map(|item| {
                let item = item.trim();
                check_name(item)?;
                Ok(item.to_string())
            })
            .collect()
    }

    fn render(&self, value: &Vec<String>) -> String {
        quote(&value.join(","))
    }
}

/// Space separated values decoded by an inner codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceListCodec<C> {
    pub item: C,
}

impl<C: Codec> Codec for SpaceListCodec<C> {
    type Item = Vec<C::Item>;

    fn parse(&self, raw: &str) -> Result<Self::Item, CodecError> {
        unquote(raw)
            .split_whitespace()
            .map(|token| self.item.parse(token))
            .collect()
    }

    fn render(&self, value: &Self::Item) -> String {
        value
            .iter()
            .map(|item| self.item.render(item))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::numeric::FixedDecimalCodec;

    #[test]
    fn inline_comments_respect_quotes() {
        assert_eq!(strip_inline_comment("TSTART = 2002-01-01 ! start"), "TSTART = 2002-01-01 ");
        assert_eq!(strip_inline_comment("PROJECT = 'wow!' ! note"), "PROJECT = 'wow!' ");
        assert_eq!(strip_inline_comment("no comment"), "no comment");
    }

    #[test]
    fn tokens_keep_quoted_text_together() {
        assert_eq!(
            split_tokens("  2002-05-01  2002-10-15 'maize crop'  1 ", None),
            vec!["2002-05-01", "2002-10-15", "'maize crop'", "1"]
        );
        assert_eq!(
            split_tokens("'283',1,1,1980, 2540.0", Some(',')),
            vec!["'283'", "1", "1", "1980", "2540.0"]
        );
        assert_eq!(split_tokens("a,,b", Some(',')), vec!["a", "", "b"]);
        assert!(split_tokens("   ", None).is_empty());
    }

    #[test]
    fn quoted_text_rejects_embedded_quotes() {
        assert_eq!(QuotedTextCodec.parse("'hupsel'").expect("quoted"), "hupsel");
        assert_eq!(QuotedTextCodec.parse("hupsel").expect("bare"), "hupsel");
        assert!(QuotedTextCodec.parse("'it's'").is_err());
        assert!(QuotedTextCodec.parse("' padded'").is_err());
        assert_eq!(QuotedTextCodec.render(&"result".to_string()), "'result'");
    }

    #[test]
    fn lists_split_and_join() {
        let names = TextListCodec.parse("'rain, etref,drainage'").expect("text list");
        assert_eq!(names, vec!["rain", "etref", "drainage"]);
        assert_eq!(TextListCodec.render(&names), "'rain,etref,drainage'");
        assert!(TextListCodec.parse("'a,,b'").is_err());

        let decimals = SpaceListCodec {
            item: FixedDecimalCodec { places: 2 },
        };
        let parsed = decimals.parse(" 1.0   2.5d0\t3 ").expect("decimal list");
        assert_eq!(parsed, vec![1.0, 2.5, 3.0]);
        assert_eq!(decimals.render(&parsed), "1.00 2.50 3.00");
    }
}
