use super::config::ReshapeConfig;
use super::error::GeometryError;
use crate::core::topology::nucleotide::is_bonded;
use crate::core::utils::geometry::{angle_difference, rotation_about_bond, torsion_angle};
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use nalgebra::Point3;
use std::collections::VecDeque;
use tracing::trace;

/// An atom as seen by the kinematic model.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicAtom {
    /// Human readable label used in error messages.
    pub label: String,
    pub element: String,
    pub position: Point3<f64>,
}

/// Undirected covalent connectivity of a set of atoms, detected from their positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactGraph {
    adjacency: Vec<Vec<usize>>,
}

impl ContactGraph {
    /// Finds every atom pair within the contact window and keeps those close enough to
    /// be covalently bonded.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The atoms, indexed by position in the slice.
    /// * `config` - Contact window and bond tolerance.
    pub fn build(atoms: &[KinematicAtom], config: &ReshapeConfig) -> Self {
        let mut graph = Self {
            adjacency: vec![Vec::new(); atoms.len()],
        };
        if atoms.is_empty() {
            return graph;
        }

        let points: Vec<[f64; 3]> = atoms
            .iter()
            .map(|a| [a.position.x, a.position.y, a.position.z])
            .collect();
        let kdtree: ImmutableKdTree<f64, 3> = ImmutableKdTree::new_from_slice(&points);
        let max_sq = config.max_contact_distance * config.max_contact_distance;

        for (i, query) in points.iter().enumerate() {
            for neighbor in kdtree.within_unsorted::<SquaredEuclidean>(query, max_sq) {
                let j = neighbor.item as usize;
                if j <= i {
                    continue;
                }
                let distance = neighbor.distance.sqrt();
                if distance < config.min_contact_distance {
                    continue;
                }
                if is_bonded(&atoms[i].element, &atoms[j].element, distance, config.bond_tolerance) {
                    graph.add_edge(i, j);
                }
            }
        }

        for neighbors in &mut graph.adjacency {
            neighbors.sort_unstable();
        }
        graph
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn neighbors(&self, atom: usize) -> &[usize] {
        self.adjacency.get(atom).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Adds an edge between `a` and `b` unless it exists already or `a == b`.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a != b && !self.has_edge(a, b) {
            self.adjacency[a].push(b);
            self.adjacency[b].push(a);
        }
    }

    /// Removes the edge between `a` and `b`, returning whether it existed.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        self.adjacency[a].retain(|&n| n != b);
        self.adjacency[b].retain(|&n| n != a);
        true
    }
}

/// Breadth-first spanning forest of a [`ContactGraph`].
///
/// The first tree is rooted at atom 0; atoms unreachable from it start further trees at
/// the lowest unvisited index.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicTree {
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    component: Vec<usize>,
}

impl KinematicTree {
    pub fn from_graph(graph: &ContactGraph) -> Self {
        let n = graph.len();
        let mut parent = vec![None; n];
        let mut children = vec![Vec::new(); n];
        let mut component = vec![usize::MAX; n];
        let mut queue = VecDeque::new();
        let mut next_component = 0;

        for root in 0..n {
            if component[root] != usize::MAX {
                continue;
            }
            component[root] = next_component;
            queue.push_back(root);
            while let Some(node) = queue.pop_front() {
                for &neighbor in graph.neighbors(node) {
                    if component[neighbor] == usize::MAX {
                        component[neighbor] = next_component;
                        parent[neighbor] = Some(node);
                        children[node].push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
            next_component += 1;
        }

        Self {
            parent,
            children,
            component,
        }
    }

    pub fn parent(&self, atom: usize) -> Option<usize> {
        self.parent.get(atom).copied().flatten()
    }

    /// Atoms that move when the tree is cut at bond `(b, c)` and the `c` side is rotated.
    ///
    /// # Return
    ///
    /// Returns `None` if `(b, c)` is not an edge of the tree.
    pub fn moving_side(&self, b: usize, c: usize) -> Option<Vec<usize>> {
        if self.parent(c) == Some(b) {
            return Some(self.subtree(c));
        }
        if self.parent(b) == Some(c) {
            let excluded = self.subtree(b);
            let mut mask = vec![false; self.parent.len()];
            for atom in excluded {
                mask[atom] = true;
            }
            let group = self.component[c];
            return Some(
                (0..self.parent.len())
                    .filter(|&atom| self.component[atom] == group && !mask[atom])
                    .collect(),
            );
        }
        None
    }

    fn subtree(&self, root: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children[node].iter().copied());
        }
        out
    }
}

/// Atom positions together with the tree used to rotate them about bonds.
#[derive(Debug, Clone)]
pub struct KinematicModel {
    atoms: Vec<KinematicAtom>,
    tree: KinematicTree,
}

impl KinematicModel {
    pub fn new(atoms: Vec<KinematicAtom>, graph: &ContactGraph) -> Self {
        Self {
            tree: KinematicTree::from_graph(graph),
            atoms,
        }
    }

    pub fn tree(&self) -> &KinematicTree {
        &self.tree
    }

    pub fn position(&self, atom: usize) -> Point3<f64> {
        self.atoms[atom].position
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.atoms.iter().map(|a| a.position)
    }

    pub fn transform_all(&mut self, f: impl Fn(&Point3<f64>) -> Point3<f64>) {
        for atom in &mut self.atoms {
            atom.position = f(&atom.position);
        }
    }

    pub fn torsion(&self, quad: [usize; 4]) -> Result<f64, GeometryError> {
        let [a, b, c, d] = quad.map(|i| self.atoms[i].position);
        torsion_angle(&a, &b, &c, &d).ok_or_else(|| GeometryError::UndefinedTorsion {
            atoms: self.describe(&quad),
        })
    }

    /// Rotates everything on the `c` side of bond `(b, c)` by `delta` degrees about the
    /// axis `b -> c`.
    ///
    /// # Return
    ///
    /// Returns `Ok(false)` without moving anything if `(b, c)` is not a tree edge.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateAxis`] if `b` and `c` coincide.
    pub fn rotate(&mut self, b: usize, c: usize, delta: f64) -> Result<bool, GeometryError> {
        let Some(side) = self.tree.moving_side(b, c) else {
            return Ok(false);
        };
        self.rotate_side(&side, b, c, delta)?;
        Ok(true)
    }

    /// Sets the torsion `quad` to `target` degrees by rotating about its central bond
    /// by the shortest signed difference.
    ///
    /// # Return
    ///
    /// Returns the applied rotation in degrees, or `None` if the torsion cannot be set
    /// because `d` does not move independently of `a` in the tree.
    pub fn set_torsion(&mut self, quad: [usize; 4], target: f64) -> Result<Option<f64>, GeometryError> {
        let [a, b, c, d] = quad;
        let Some(side) = self.tree.moving_side(b, c) else {
            return Ok(None);
        };
        if !side.contains(&d) || side.contains(&a) {
            return Ok(None);
        }

        let current = self.torsion(quad)?;
        let delta = angle_difference(target, current);
        trace!(atoms = %self.describe(&quad), current, target, delta, "Rotating bond");
        self.rotate_side(&side, b, c, delta)?;
        Ok(Some(delta))
    }

    fn rotate_side(&mut self, side: &[usize], b: usize, c: usize, delta: f64) -> Result<(), GeometryError> {
        let pivot = self.atoms[c].position;
        let rotation = rotation_about_bond(&self.atoms[b].position, &pivot, delta).ok_or_else(|| {
            GeometryError::DegenerateAxis {
                from: self.atoms[b].label.clone(),
                to: self.atoms[c].label.clone(),
            }
        })?;
        for &atom in side {
            let p = self.atoms[atom].position;
            self.atoms[atom].position = pivot + rotation * (p - pivot);
        }
        Ok(())
    }

    fn describe(&self, quad: &[usize; 4]) -> String {
        quad.iter()
            .map(|&i| self.atoms[i].label.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}
