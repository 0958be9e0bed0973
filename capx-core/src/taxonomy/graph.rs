use std::collections::{BTreeSet, HashMap};

use petgraph::{
    algo::has_path_connecting,
    stable_graph::{NodeIndex, StableDiGraph},
    visit::EdgeRef,
    Direction,
};
use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown skill: {0}")]
    UnknownSkill(Id),
    #[error("A skill cannot be a subtype of itself")]
    Cycle,
}

/// Directed "is a subtype of" graph of skills.
///
/// Edges point from a skill to its supertypes, so the
/// incoming edges of a node are its subtypes.
///
/// The graph may cover only a part of the taxonomy. Checking a
/// new set of supertypes for cycles requires no more than the
/// supertypes and their ancestors.
#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    graph: StableDiGraph<Id, ()>,
    indices: HashMap<Id, NodeIndex>,
}

impl SkillGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from persisted skills.
    ///
    /// Edges to unknown skills are ignored.
    pub fn from_skills<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> Self {
        let skills: Vec<_> = skills.into_iter().collect();
        let mut graph = Self::new();
        for skill in &skills {
            graph.node(&skill.id);
        }
        for skill in skills {
            for supertype in &skill.supertypes {
                let Some(to) = graph.index(supertype) else {
                    log::warn!(
                        "Skill {} refers to the unknown supertype {}",
                        skill.id,
                        supertype
                    );
                    continue;
                };
                let from = graph.node(&skill.id);
                graph.graph.update_edge(from, to, ());
            }
        }
        graph
    }

    pub fn contains(&self, skill: &Id) -> bool {
        self.indices.contains_key(skill)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn supertypes(&self, skill: &Id) -> impl Iterator<Item = &Id> {
        self.neighbors(skill, Direction::Outgoing)
    }

    pub fn subtypes(&self, skill: &Id) -> impl Iterator<Item = &Id> {
        self.neighbors(skill, Direction::Incoming)
    }

    /// Inserts a new skill or replaces the supertypes of an existing one.
    ///
    /// The graph is left unchanged if the new edges are rejected.
    pub fn upsert(&mut self, skill: &Id, supertypes: &[Id]) -> Result<(), GraphError> {
        let supertypes: BTreeSet<_> = supertypes.iter().collect();
        let mut targets = Vec::with_capacity(supertypes.len());
        for supertype in supertypes {
            if supertype == skill {
                return Err(GraphError::Cycle);
            }
            let to = self
                .index(supertype)
                .ok_or_else(|| GraphError::UnknownSkill(supertype.clone()))?;
            // A new edge skill -> supertype closes a cycle
            // if skill is already reachable from supertype.
            if let Some(from) = self.index(skill) {
                if has_path_connecting(&self.graph, to, from, None) {
                    return Err(GraphError::Cycle);
                }
            }
            targets.push(to);
        }
        let from = self.node(skill);
        let previous: Vec<_> = self
            .graph
            .edges_directed(from, Direction::Outgoing)
            .map(|edge| edge.id())
            .collect();
        for edge in previous {
            self.graph.remove_edge(edge);
        }
        for to in targets {
            self.graph.update_edge(from, to, ());
        }
        Ok(())
    }

    fn index(&self, skill: &Id) -> Option<NodeIndex> {
        self.indices.get(skill).copied()
    }

    fn node(&mut self, skill: &Id) -> NodeIndex {
        if let Some(idx) = self.index(skill) {
            return idx;
        }
        let idx = self.graph.add_node(skill.clone());
        self.indices.insert(skill.clone(), idx);
        idx
    }

    // Sorted by id for a stable output.
    fn neighbors(&self, skill: &Id, direction: Direction) -> impl Iterator<Item = &Id> {
        let mut ids: Vec<_> = self
            .index(skill)
            .into_iter()
            .flat_map(|idx| self.graph.neighbors_directed(idx, direction))
            .map(|idx| &self.graph[idx])
            .collect();
        ids.sort();
        ids.into_iter()
    }
}
