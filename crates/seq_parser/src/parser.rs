use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, digit1, multispace0},
    combinator::{map, map_res, recognize},
    error::{Error, ErrorKind},
    multi::{many0, many0_count},
    sequence::{delimited, pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use seq_ast::Expression;
use seq_catalog::Library;

use crate::error::ParseError;

// Grammar:
//   expression := term (('+' | '-') term)*
//   term       := factor ('*' factor)*
//   factor     := INTEGER | IDENT | '(' expression ')' | '-' factor

/// Deepest allowed stack of parentheses and unary minus signs.
pub const MAX_NESTING: usize = 32;

// Intermediate AST for parsing. Sums and products are flat so that long
// chains of operators do not deepen the tree.
#[derive(Debug, Clone, PartialEq)]
enum ParseNode {
    Number(BigInt),
    Generator(String),
    /// Terms with their sign; `true` marks a subtracted term
    Sum(Vec<(bool, ParseNode)>),
    Product(Vec<ParseNode>),
    Neg(Box<ParseNode>),
}

impl ParseNode {
    /// Compile into an expression, resolving generator names in the library.
    fn lower(self) -> Result<Expression, ParseError> {
        match self {
            ParseNode::Number(n) => Ok(Expression::constant(BigRational::from_integer(n))),
            ParseNode::Generator(name) => Library::global()
                .resolve(&name)
                .map(Expression::atom)
                .map_err(|_| ParseError::UnknownGenerator(name)),
            ParseNode::Sum(terms) => {
                let mut acc = Expression::zero();
                for (subtract, node) in terms {
                    let value = node.lower()?;
                    acc = if subtract {
                        acc.sub_expr(value)
                    } else {
                        acc.add_expr(value)
                    };
                }
                Ok(acc)
            }
            ParseNode::Product(factors) => {
                let mut factors = factors.into_iter();
                let mut acc = match factors.next() {
                    Some(first) => first.lower()?,
                    None => return Ok(Expression::constant(BigRational::from_integer(BigInt::from(1)))),
                };
                for node in factors {
                    let rhs = node.lower()?;
                    acc = acc.multiply_factors(&rhs);
                }
                Ok(acc)
            }
            ParseNode::Neg(e) => Ok(e.lower()?.negate()),
        }
    }
}

fn too_deep(input: &str) -> nom::Err<Error<&str>> {
    nom::Err::Failure(Error::new(input, ErrorKind::TooLarge))
}

// Parser for non-negative integer literals (arbitrary length)
fn parse_integer(input: &str) -> IResult<&str, ParseNode> {
    map_res(digit1, |digits: &str| {
        digits.parse::<BigInt>().map(ParseNode::Number)
    })(input)
}

// Identifiers start with letter or underscore, then allow letters, digits, underscores
// Examples: p, fib01, m_exp, power_of_2
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn parse_generator(input: &str) -> IResult<&str, ParseNode> {
    map(parse_identifier, |name: &str| {
        ParseNode::Generator(name.to_string())
    })(input)
}

fn parse_parens(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    if input.starts_with('(') && depth >= MAX_NESTING {
        return Err(too_deep(input));
    }
    delimited(
        tag("("),
        |i| parse_expr(i, depth + 1),
        preceded(multispace0, tag(")")),
    )(input)
}

fn parse_negation(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    if input.starts_with('-') && depth >= MAX_NESTING {
        return Err(too_deep(input));
    }
    map(preceded(tag("-"), |i| parse_factor(i, depth + 1)), |e| {
        ParseNode::Neg(Box::new(e))
    })(input)
}

fn parse_factor(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    preceded(
        multispace0,
        alt((
            parse_integer,
            parse_generator,
            |i| parse_parens(i, depth),
            |i| parse_negation(i, depth),
        )),
    )(input)
}

fn parse_term(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    let (input, first) = parse_factor(input, depth)?;
    let (input, rest) = many0(preceded(
        preceded(multispace0, tag("*")),
        |i| parse_factor(i, depth),
    ))(input)?;
    if rest.is_empty() {
        return Ok((input, first));
    }
    let mut factors = Vec::with_capacity(rest.len() + 1);
    factors.push(first);
    factors.extend(rest);
    Ok((input, ParseNode::Product(factors)))
}

fn parse_expr(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    let (input, first) = parse_term(input, depth)?;
    let (input, rest) = many0(pair(
        preceded(multispace0, alt((tag("+"), tag("-")))),
        |i| parse_term(i, depth),
    ))(input)?;
    if rest.is_empty() {
        return Ok((input, first));
    }
    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push((false, first));
    terms.extend(rest.into_iter().map(|(op, node)| (op == "-", node)));
    Ok((input, ParseNode::Sum(terms)))
}

// ============================================================================
// Diagnostics
// ============================================================================

/// First token of `rest`: an identifier, an integer, or a single character.
fn next_token(rest: &str) -> &str {
    if let Ok((_, ident)) = parse_identifier(rest) {
        return ident;
    }
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        return &rest[..digits];
    }
    rest.chars().next().map_or("", |c| &rest[..c.len_utf8()])
}

fn syntax_error(source: &str, rest: &str) -> ParseError {
    let rest = rest.trim_start();
    let position = source.len() - rest.len();
    let message = match rest.chars().next() {
        None => "missing operand at end of input".to_string(),
        Some(op @ ('+' | '-' | '*')) if rest[1..].trim().is_empty() => {
            format!("missing operand after '{}'", op)
        }
        Some(_) => format!("unexpected token '{}'", next_token(rest)),
    };
    ParseError::Syntax { position, message }
}

/// Reject unbalanced parentheses before running the grammar, so the error
/// points at the offending parenthesis.
fn check_parens(source: &str) -> Result<(), ParseError> {
    let mut open: Vec<usize> = Vec::new();
    for (idx, c) in source.char_indices() {
        match c {
            '(' => open.push(idx),
            ')' => {
                if open.pop().is_none() {
                    return Err(ParseError::Syntax {
                        position: idx,
                        message: "unbalanced ')'".to_string(),
                    });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(idx) => Err(ParseError::Syntax {
            position: idx,
            message: "unclosed '('".to_string(),
        }),
        None => Ok(()),
    }
}

/// Parse `input` and resolve its identifiers in the built-in library.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    check_parens(input)?;

    let (remaining, node) = match parse_expr(input, 0) {
        Ok(parsed) => parsed,
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::TooLarge => {
            return Err(ParseError::Syntax {
                position: input.len() - e.input.len(),
                message: "nesting too deep".to_string(),
            });
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(syntax_error(input, e.input));
        }
        Err(nom::Err::Incomplete(_)) => return Err(syntax_error(input, "")),
    };

    if !remaining.trim().is_empty() {
        return Err(syntax_error(input, remaining));
    }

    node.lower()
}
