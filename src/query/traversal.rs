//! Owned traversal plans
//!
//! A [`Traversal`] records a start name and a list of steps without holding
//! a borrow of any graph, so it can be built up across several commands and
//! evaluated later with [`Traversal::run`]. Predicate filters are closures and
//! have no planned form; apply them to the returned [`Query`].

use super::Query;
use crate::graph::{EdgeType, Graph, VertexId};
use std::fmt;

/// One planned query stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    In(EdgeType),
    Out(EdgeType),
    Both(EdgeType),
    Take(usize),
    Unique,
    Except(VertexId),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::In(rel) => write!(f, "in({})", rel),
            Step::Out(rel) => write!(f, "out({})", rel),
            Step::Both(rel) => write!(f, "both({})", rel),
            Step::Take(n) => write!(f, "take({})", n),
            Step::Unique => write!(f, "unique()"),
            Step::Except(id) => write!(f, "except({})", id),
        }
    }
}

/// A replayable query: `V(start)` followed by `steps`, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    start: String,
    steps: Vec<Step>,
}

impl Traversal {
    /// Plan a traversal starting from vertices named `name`
    pub fn v(name: impl Into<String>) -> Self {
        Traversal {
            start: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn out(self, rel: impl Into<EdgeType>) -> Self {
        self.then(Step::Out(rel.into()))
    }

    pub fn in_(self, rel: impl Into<EdgeType>) -> Self {
        self.then(Step::In(rel.into()))
    }

    pub fn both(self, rel: impl Into<EdgeType>) -> Self {
        self.then(Step::Both(rel.into()))
    }

    pub fn take(self, n: usize) -> Self {
        self.then(Step::Take(n))
    }

    pub fn unique(self) -> Self {
        self.then(Step::Unique)
    }

    pub fn except(self, id: impl Into<VertexId>) -> Self {
        self.then(Step::Except(id.into()))
    }

    /// Append a step (builder form)
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a step in place
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Name the traversal starts from
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Evaluate the plan against `graph`
    pub fn run<'g>(&self, graph: &'g Graph) -> Query<'g> {
        self.steps
            .iter()
            .fold(graph.v(&self.start), |query, step| query.apply(step))
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({})", self.start)?;
        for step in &self.steps {
            write!(f, ".{}", step)?;
        }
        Ok(())
    }
}
