use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num,
    path::Path,
};

use log::{info, warn};
use thiserror::Error;

use crate::{instance::*, solver::Instance};

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("missing header")]
    MissingHeader,
    #[error("invalid literal {token:?} on line {line}")]
    InvalidLiteral { line: usize, token: String },
    #[error("invalid header count")]
    InvalidCount(#[from] num::ParseIntError),
    #[error("io error")]
    IO(#[from] io::Error),
}

type Result<T> = std::result::Result<T, DimacsError>;

pub fn parse<P: AsRef<Path>>(filename: P) -> Result<Instance> {
    let file = File::open(filename.as_ref())?;
    parse_reader(BufReader::new(file))
}

pub fn parse_str(problem: &str) -> Result<Instance> {
    parse_reader(problem.as_bytes())
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Instance> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(ix, line)| line.map(|l| (ix + 1, l)))
        // Comments may appear anywhere, blank lines carry nothing
        .filter(|l| match l {
            Ok((_, line)) => {
                let trimmed = line.trim_start();
                !trimmed.is_empty() && !trimmed.starts_with('c')
            }
            // Keep errors! We need to terminate ASAP
            _ => true,
        });

    let header = match lines.next() {
        Some(line) => {
            let (_, line) = line?;
            DimacsHeader::parse(&line)?
        }
        None => return Err(DimacsError::MissingHeader),
    };

    let mut cnf: Vec<Clause> = vec![];
    let mut current_clause: Vec<Literal> = vec![];
    let mut max_var = 0;

    'body: for line in lines {
        let (line_no, line) = line?;
        for word in line.split_ascii_whitespace() {
            if word == "%" {
                // SATLIB trailer, the rest of the file is not part of the formula
                break 'body;
            }
            let invalid = || DimacsError::InvalidLiteral {
                line: line_no,
                token: word.to_string(),
            };
            let value = word.parse::<i64>().map_err(|_| invalid())?;
            if value == i64::MIN {
                return Err(invalid());
            }
            match Literal::from_dimacs(value) {
                None => {
                    cnf.push(Clause::from_literals(std::mem::take(&mut current_clause)));
                }
                Some(literal) => {
                    max_var = max_var.max(literal.var().index());
                    current_clause.push(literal);
                }
            }
        }
    }

    if !current_clause.is_empty() {
        warn!("last clause is missing its terminating 0");
        cnf.push(Clause::from_literals(current_clause));
    }
    if max_var > header.var_count {
        warn!(
            "header declares {} variables but x{} is used",
            header.var_count, max_var
        );
    }
    if cnf.len() as u64 != header.clause_count {
        warn!(
            "header declares {} clauses but {} were read",
            header.clause_count,
            cnf.len()
        );
    }
    info!(
        "parsed {} clauses over {} variables",
        cnf.len(),
        header.var_count.max(max_var)
    );

    Ok(Instance::new(cnf, header.var_count.max(max_var)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DimacsHeader {
    var_count: u64,
    clause_count: u64,
}

impl DimacsHeader {
    fn parse(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_ascii_whitespace().collect();
        match words.as_slice() {
            ["p", "cnf", var_count, clause_count] => Ok(Self {
                var_count: var_count.parse::<u64>()?,
                clause_count: clause_count.parse::<u64>()?,
            }),
            _ => Err(DimacsError::MalformedHeader(line.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dimacs_clauses(instance: &Instance) -> Vec<Vec<i64>> {
        instance
            .clauses()
            .iter()
            .map(|cl| cl.literals().iter().map(|l| l.to_dimacs()).collect())
            .collect()
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            DimacsHeader::parse("p cnf 3 2").unwrap(),
            DimacsHeader {
                var_count: 3,
                clause_count: 2
            }
        );
        assert!(matches!(
            DimacsHeader::parse("p dnf 3 2"),
            Err(DimacsError::MalformedHeader(_))
        ));
        assert!(matches!(
            DimacsHeader::parse("p cnf x 2"),
            Err(DimacsError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_parse_simple() {
        let instance = parse_str("c a comment\nc another\np cnf 3 2\n1 -3 0\n2 3 -1 0\n").unwrap();
        assert_eq!(instance.variable_count(), 3);
        assert_eq!(dimacs_clauses(&instance), vec![vec![1, -3], vec![-1, 2, 3]]);
    }

    #[test]
    fn test_parse_clauses_spanning_lines() {
        let instance = parse_str("p cnf 4 3\n1 2\n 3 0 -4 0\n\nc mid-body comment\n4 -1 0\n").unwrap();
        assert_eq!(
            dimacs_clauses(&instance),
            vec![vec![1, 2, 3], vec![-4], vec![-1, 4]]
        );
    }

    #[test]
    fn test_parse_satlib_trailer() {
        let instance = parse_str("p cnf 2 1\n1 2 0\n%\n0\n").unwrap();
        assert_eq!(dimacs_clauses(&instance), vec![vec![1, 2]]);
    }

    #[test]
    fn test_parse_empty_clause_and_missing_terminator() {
        let instance = parse_str("p cnf 2 2\n0\n1 2").unwrap();
        assert_eq!(dimacs_clauses(&instance), vec![vec![], vec![1, 2]]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_str("c only\n"), Err(DimacsError::MissingHeader)));
        assert!(matches!(
            parse_str("1 2 0\n"),
            Err(DimacsError::MalformedHeader(_))
        ));
        match parse_str("p cnf 2 1\n1 0\n2 x 0\n") {
            Err(DimacsError::InvalidLiteral { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other.map(|i| i.clauses().len())),
        }
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "p cnf 2 2\n1 2 0\n-1 0").unwrap();
        let instance = parse(file.path()).unwrap();
        assert_eq!(dimacs_clauses(&instance), vec![vec![1, 2], vec![-1]]);
    }
}
