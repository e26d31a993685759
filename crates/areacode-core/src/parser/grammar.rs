use crate::domain::AreaCode;
use crate::error::ResolveError;
use crate::parser::lexer::{tokenize, Token};
use crate::parser::{ParsedNumber, Prefix};

const NATIONAL_LEN: usize = 10;
const AREA_END: usize = 3;
const EXCHANGE_END: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Group<'a> {
    digits: &'a str,
    parenthesized: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct Grouped<'a> {
    plus: bool,
    groups: Vec<Group<'a>>,
}

#[derive(Debug, PartialEq, Eq)]
struct Layout {
    plus: bool,
    trunk: Option<char>,
    national: String,
}

/// Extracts area code, exchange and subscriber number from `raw`.
///
/// Accepts an optional `+`, `1`, `+1` or `0` prefix followed by ten digits
/// split as area code, exchange and subscriber number by hyphens, periods,
/// spaces or a parenthesized area code (or no separators at all).
pub fn parse_phone_number(raw: &str) -> Result<ParsedNumber, ResolveError> {
    let tokens = tokenize(raw.trim())?;
    let grouped = group(&tokens)?;
    let layout = lay_out(&grouped)?;
    let prefix = check_trunk(&layout)?;

    let national = layout.national;
    Ok(ParsedNumber {
        prefix,
        area_code: AreaCode::from_trusted(&national[..AREA_END]),
        exchange: national[AREA_END..EXCHANGE_END].to_string(),
        subscriber: national[EXCHANGE_END..].to_string(),
    })
}

fn group<'a>(tokens: &[Token<'a>]) -> Result<Grouped<'a>, ResolveError> {
    let (plus, rest) = match tokens.split_first() {
        Some((Token::Plus, rest)) => (true, rest),
        _ => (false, tokens),
    };

    let mut groups = Vec::new();
    let mut open: Option<Option<&'a str>> = None;

    for token in rest {
        match (*token, open) {
            (Token::Plus, _) => return Err(ResolveError::NotFound),
            (Token::Separator, None) => {}
            (Token::Digits(digits), None) => groups.push(Group {
                digits,
                parenthesized: false,
            }),
            (Token::Open, None) => open = Some(None),
            (Token::Close, None) => return Err(ResolveError::NotFound),
            (Token::Digits(digits), Some(None)) => open = Some(Some(digits)),
            (Token::Close, Some(Some(digits))) => {
                groups.push(Group {
                    digits,
                    parenthesized: true,
                });
                open = None;
            }
            // nested, empty or separated parentheses
            (Token::Separator | Token::Open | Token::Close | Token::Digits(_), Some(_)) => {
                return Err(ResolveError::NotFound)
            }
        }
    }

    if open.is_some() {
        return Err(ResolveError::NotFound);
    }

    Ok(Grouped { plus, groups })
}

fn lay_out(grouped: &Grouped<'_>) -> Result<Layout, ResolveError> {
    let total: usize = grouped.groups.iter().map(|g| g.digits.len()).sum();
    let trunk_len = match total {
        NATIONAL_LEN => 0,
        n if n == NATIONAL_LEN + 1 => 1,
        _ => return Err(ResolveError::NotFound),
    };

    let mut start = 0;
    for group in &grouped.groups {
        let end = start + group.digits.len();
        if group.parenthesized && (start != trunk_len || end != trunk_len + AREA_END) {
            return Err(ResolveError::NotFound);
        }
        if end < total && end > trunk_len {
            let body_end = end - trunk_len;
            if body_end != AREA_END && body_end != EXCHANGE_END {
                return Err(ResolveError::NotFound);
            }
        }
        start = end;
    }

    let digits: String = grouped.groups.iter().map(|g| g.digits).collect();
    let (trunk, national) = digits.split_at(trunk_len);
    Ok(Layout {
        plus: grouped.plus,
        trunk: trunk.chars().next(),
        national: national.to_string(),
    })
}

fn check_trunk(layout: &Layout) -> Result<Prefix, ResolveError> {
    match (layout.trunk, layout.plus) {
        (None, false) => Ok(Prefix::None),
        (None, true) => Ok(Prefix::Plus),
        (Some('1'), false) => Ok(Prefix::One),
        (Some('1'), true) => Ok(Prefix::PlusOne),
        (Some('0'), _) => Err(ResolveError::InvalidNumber),
        (Some(_), _) => Err(ResolveError::NotFound),
    }
}
