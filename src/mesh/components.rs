// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use ahash::AHashSet;

use crate::{
    error::TopologyError,
    impl_polyhedron, impl_removal,
    mesh::handles::{FacetHandle, HalfedgeHandle, VertexHandle},
};

/// Elements reachable from one halfedge through `next` and `opposite`,
/// in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectedComponent {
    pub halfedges: Vec<HalfedgeHandle>,
    pub vertices: Vec<VertexHandle>,
    pub facets: Vec<FacetHandle>,
}

impl ConnectedComponent {
    /// Number of edges, which is half the number of halfedges.
    pub fn size_of_edges(&self) -> usize {
        self.halfedges.len() / 2
    }
}

impl_polyhedron! {
    /// Collects the connected component containing `h`.
    pub fn connected_component(&self, h: HalfedgeHandle) -> ConnectedComponent {
        let mut seen = vec![false; self.half_edges.len()];
        self.collect_component(h, &mut seen)
    }

    /// Partitions the halfedges into connected components, ordered by the
    /// smallest halfedge slot of each component. Isolated vertices belong to
    /// no component.
    pub fn connected_components(&self) -> Vec<ConnectedComponent> {
        let mut seen = vec![false; self.half_edges.len()];
        let mut components = Vec::new();
        for h in self.halfedges() {
            if !seen[h.0] {
                components.push(self.collect_component(h, &mut seen));
            }
        }
        components
    }

    fn collect_component(&self, start: HalfedgeHandle, seen: &mut [bool]) -> ConnectedComponent {
        let mut component = ConnectedComponent::default();
        let mut vertices = AHashSet::new();
        let mut facets = AHashSet::new();
        let mut stack = vec![start];
        seen[start.0] = true;
        while let Some(h) = stack.pop() {
            component.halfedges.push(h);
            let v = self.vertex(h);
            if vertices.insert(v) {
                component.vertices.push(v);
            }
            let f = self.facet(h);
            if !f.is_null() && facets.insert(f) {
                component.facets.push(f);
            }
            for n in [self.next(h), self.opposite(h)] {
                if !seen[n.0] {
                    seen[n.0] = true;
                    stack.push(n);
                }
            }
        }
        component
    }
}

impl_removal! {
    /// Erases every vertex, halfedge and facet reachable from `h`.
    pub fn erase_connected_component(&mut self, h: HalfedgeHandle) -> Result<(), TopologyError> {
        self.check_halfedge("erase_connected_component", h)?;
        let component = self.connected_component(h);
        self.erase_component(&component);
        Ok(())
    }

    /// Keeps the `k` components with the most facets and erases the others,
    /// then erases vertices that no halfedge points to. Components with equal
    /// facet counts keep their storage order.
    ///
    /// Returns the number of erased components. Isolated vertices are not
    /// counted.
    pub fn keep_largest_connected_components(&mut self, k: usize) -> usize {
        let mut components = self.connected_components();
        components.sort_by(|a, b| b.facets.len().cmp(&a.facets.len()));
        let dropped = components.len().saturating_sub(k);
        for component in components.iter().skip(k) {
            self.erase_component(component);
        }

        let mut used = vec![false; self.vertices.len()];
        for h in self.halfedges() {
            used[self.vertex(h).0] = true;
        }
        let isolated: Vec<VertexHandle> = self.vertices().filter(|v| !used[v.0]).collect();
        for &v in &isolated {
            self.erase_vertex_record(v);
        }
        tracing::debug!(
            "kept {} of {} components, erased {} isolated vertices",
            components.len() - dropped,
            components.len(),
            isolated.len()
        );
        dropped
    }

    fn erase_component(&mut self, component: &ConnectedComponent) {
        for &h in &component.halfedges {
            if h.0 % 2 == 0 {
                self.erase_edge_record(h);
            }
        }
        for &v in &component.vertices {
            self.erase_vertex_record(v);
        }
        for &f in &component.facets {
            self.erase_facet_record(f);
        }
    }
}
