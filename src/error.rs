use thiserror::Error;

/// Failures raised by graph construction and traversal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid graph size {0}: the vertex count must be positive")]
    InvalidSize(i64),

    #[error("graph with {0} vertices is too large to allocate")]
    TooLarge(usize),

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: i64, vertex_count: usize },
}

impl GraphError {
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        GraphError::OutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraphError::InvalidSize(0).to_string(),
            "invalid graph size 0: the vertex count must be positive"
        );
        assert_eq!(
            GraphError::TooLarge(9).to_string(),
            "graph with 9 vertices is too large to allocate"
        );
        assert_eq!(
            GraphError::out_of_range(7, 5).to_string(),
            "vertex 7 is out of range for a graph with 5 vertices"
        );
    }
}
