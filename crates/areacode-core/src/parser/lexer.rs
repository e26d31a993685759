use crate::error::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Plus,
    Digits(&'a str),
    Open,
    Close,
    Separator,
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ResolveError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(idx, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    end = idx + 1;
                    chars.next();
                }
                Token::Digits(&input[start..end])
            }
            '+' => Token::Plus,
            '(' => Token::Open,
            ')' => Token::Close,
            '-' | '.' => Token::Separator,
            c if c.is_whitespace() => Token::Separator,
            _ => return Err(ResolveError::NotFound),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Token};
    use crate::error::ResolveError;

    #[test]
    fn tokenize_groups_digit_runs() {
        let tokens = tokenize("+1 (212) 123-4567").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Plus,
                Token::Digits("1"),
                Token::Separator,
                Token::Open,
                Token::Digits("212"),
                Token::Close,
                Token::Separator,
                Token::Digits("123"),
                Token::Separator,
                Token::Digits("4567"),
            ]
        );
    }

    #[test]
    fn tokenize_rejects_unknown_characters() {
        assert_eq!(tokenize("212-123-4567 x89"), Err(ResolveError::NotFound));
        assert_eq!(tokenize("212/123/4567"), Err(ResolveError::NotFound));
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
