//! Reading problems from text.
//!
//! A problem contains one constraint per line. Empty lines and lines starting with `#` are
//! skipped. A constraint is a disjunction of literals separated by `|`, where a literal is a
//! proposition name optionally preceded by `!`:
//!
//! ```text
//! # it rains or the sprinkler is on
//! rain | sprinkler
//! !rain | wet
//! [1,1] red | green | blue
//! ```
//!
//! By default a constraint is an ordinary clause, i.e. at least one of its literals must be true.
//! A leading `[min,max]` instead requires between `min` and `max` (inclusive) of the literals to
//! be true.

use log::debug;

use crate::basic_types::FormatError;
use crate::basic_types::ProblemFormatError;
use crate::engine::ConstraintId;
use crate::engine::Literal;
use crate::engine::Problem;
use crate::engine::ProblemBuilder;

/// Parses a complete problem, see the [module documentation](self) for the format.
pub fn parse_problem(text: &str) -> Result<Problem, ProblemFormatError> {
    let mut builder = ProblemBuilder::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let _ = parse_constraint(line, &mut builder).map_err(|source| ProblemFormatError {
            line_number: index + 1,
            source,
        })?;
    }

    let problem = builder.build();
    debug!(
        "Parsed {} constraints over {} propositions",
        problem.num_constraints(),
        problem.num_propositions()
    );
    Ok(problem)
}

/// Parses a single constraint expression and adds it to `builder`. Propositions are only
/// created once the whole expression is known to be well-formed.
///
/// Positions in the returned errors are byte offsets into `expression`.
pub fn parse_constraint(
    expression: &str,
    builder: &mut ProblemBuilder,
) -> Result<ConstraintId, FormatError> {
    let (range, body, body_offset) = split_range(expression)?;
    let parsed_literals = parse_literals(body, body_offset)?;

    let literals: Vec<Literal> = parsed_literals
        .into_iter()
        .map(|(name, is_positive)| Literal::new(builder.propositional_variable(name), is_positive))
        .collect();
    let (min_true_literals, max_true_literals) = range.unwrap_or((1, literals.len() as u32));

    Ok(builder.add_cardinality_constraint(literals, min_true_literals, max_true_literals)?)
}

type Range = (u32, u32);

/// Splits off the optional `[min,max]` prefix. Returns the range, the rest of the expression and
/// the offset at which the rest starts.
fn split_range(expression: &str) -> Result<(Option<Range>, &str, usize), FormatError> {
    let leading_whitespace = expression.len() - expression.trim_start().len();
    let Some(after_bracket) = expression[leading_whitespace..].strip_prefix('[') else {
        return Ok((None, expression, 0));
    };

    let Some(end) = after_bracket.find(']') else {
        return Err(FormatError::MalformedRange {
            range: expression.trim().to_owned(),
        });
    };

    let inside = &after_bracket[..end];
    let range = parse_range(inside).ok_or_else(|| FormatError::MalformedRange {
        range: format!("[{inside}]"),
    })?;

    let body_offset = leading_whitespace + end + 2;
    Ok((Some(range), &expression[body_offset..], body_offset))
}

fn parse_range(inside: &str) -> Option<Range> {
    let (min, max) = inside.split_once(',')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

fn parse_literals(body: &str, body_offset: usize) -> Result<Vec<(&str, bool)>, FormatError> {
    if body.trim().is_empty() {
        return Err(FormatError::EmptyExpression);
    }

    let mut literals = Vec::new();
    let mut segment_start = body_offset;
    for segment in body.split('|') {
        literals.push(parse_literal(segment, segment_start)?);
        segment_start += segment.len() + 1;
    }

    Ok(literals)
}

fn parse_literal(segment: &str, segment_start: usize) -> Result<(&str, bool), FormatError> {
    let literal = segment.trim();
    if literal.is_empty() {
        return Err(FormatError::MissingLiteral {
            position: segment_start,
        });
    }

    let position = segment_start + segment.len() - segment.trim_start().len();
    let mut name = literal;
    let mut is_positive = true;
    while let Some(negated) = name.strip_prefix('!') {
        is_positive = !is_positive;
        name = negated.trim_start();
    }

    if name.is_empty() {
        return Err(FormatError::DanglingNegation { position });
    }
    if !is_valid_name(name) {
        return Err(FormatError::InvalidName {
            name: name.to_owned(),
        });
    }

    Ok((name, is_positive))
}

fn is_valid_name(name: &str) -> bool {
    !name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '!' | '|' | '[' | ']' | '#'))
}
