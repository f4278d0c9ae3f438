//! Input provider: turns a workload text file into the quantum and the
//! canonical batch. The format is a single integer quantum followed by
//! whitespace-separated quadruples of `id arrival burst priority`.

use std::path::Path;

use thiserror::Error;

use crate::core::process::{Batch, Ticks};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("workload is empty: quantum not found")]
    MissingQuantum,
    #[error("unparsable integer {token:?} at token {index}")]
    BadToken { token: String, index: usize },
    #[error("trailing descriptor has {got} of 4 fields")]
    TruncatedDescriptor { got: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn parse_workload(text: &str) -> Result<(Ticks, Batch), InputError> {
    let mut values = Vec::new();
    for (index, token) in text.split_whitespace().enumerate() {
        let value = token.parse::<u64>().map_err(|_| InputError::BadToken {
            token: token.to_owned(),
            index,
        })?;
        values.push(value);
    }

    let Some((&quantum, descriptors)) = values.split_first() else {
        return Err(InputError::MissingQuantum);
    };

    let mut chunks = descriptors.chunks_exact(4);
    let mut batch = Batch::new();
    for chunk in &mut chunks {
        batch.create(chunk[0], chunk[1], chunk[2], chunk[3]);
    }
    let leftover = chunks.remainder();
    if !leftover.is_empty() {
        return Err(InputError::TruncatedDescriptor {
            got: leftover.len(),
        });
    }

    Ok((quantum, batch))
}

pub fn load_workload(path: &Path) -> Result<(Ticks, Batch), InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_workload(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quantum_then_descriptors() {
        let (quantum, batch) = parse_workload("2\n1 0 5 1\n2 1 3 2\n").unwrap();
        assert_eq!(quantum, 2);
        assert_eq!(batch.len(), 2);
        let p = batch.find(2).unwrap();
        assert_eq!((p.arrival, p.burst, p.priority), (1, 3, 2));
    }

    #[test]
    fn empty_input_is_missing_quantum() {
        assert!(matches!(
            parse_workload("  \n"),
            Err(InputError::MissingQuantum)
        ));
    }

    #[test]
    fn non_numeric_token_is_rejected_with_position() {
        match parse_workload("2 1 0 five 1") {
            Err(InputError::BadToken { token, index }) => {
                assert_eq!(token, "five");
                assert_eq!(index, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn truncated_trailing_descriptor_is_rejected() {
        assert!(matches!(
            parse_workload("2 1 0 5"),
            Err(InputError::TruncatedDescriptor { got: 3 })
        ));
    }

    #[test]
    fn quantum_alone_yields_empty_batch() {
        let (quantum, batch) = parse_workload("4").unwrap();
        assert_eq!(quantum, 4);
        assert!(batch.is_empty());
    }
}
