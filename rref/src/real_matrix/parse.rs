use itertools::Itertools;

use crate::error::{Result, RrefError};

use super::matrix::RealMatrix;

// one row per line, entries split on whitespace or commas, '#' comments out
// the rest of a line and blank lines are skipped
pub fn parse_matrix(input: &str) -> Result<RealMatrix> {
    let rows = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, strip_comment(line)))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_number, line)| parse_entries(line_number, line))
        .collect::<Result<Vec<_>>>()?;
    RealMatrix::from_rows(rows)
}

pub fn parse_vector(input: &str) -> Result<Vec<f64>> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_entries(idx + 1, strip_comment(line)))
        .flatten_ok()
        .collect()
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("")
}

fn parse_entries(line_number: usize, line: &str) -> Result<Vec<f64>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| RrefError::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_rows_with_mixed_separators_and_comments() {
        let input = "# coefficients\n2, 1\n\n1 3  # second equation\n";
        let m = parse_matrix(input).unwrap();
        assert_eq!(
            m,
            RealMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap()
        );
    }

    #[test]
    fn report_the_offending_token() {
        let err = parse_matrix("1 2\n3 x\n").unwrap_err();
        assert_eq!(
            err,
            RrefError::Parse {
                line: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn ragged_input_is_rejected() {
        assert!(matches!(
            parse_matrix("1 2\n3\n"),
            Err(RrefError::RaggedRows { row: 1, .. })
        ));
    }

    #[test]
    fn parse_vector_across_lines() {
        assert_eq!(parse_vector("3, 5\n-1.5e0").unwrap(), vec![3.0, 5.0, -1.5]);
    }
}
