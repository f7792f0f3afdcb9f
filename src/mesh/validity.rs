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

use crate::{
    error::ValidityError,
    impl_polyhedron,
    mesh::handles::{HalfedgeHandle, VertexHandle},
};

impl_polyhedron! {
    /// Re-derives the combinatorial invariants and reports the first
    /// violation. Never modifies the structure.
    ///
    /// Level 0 checks links, cycles, facets and vertices. Level 1 and above
    /// also require the border layout recorded by
    /// [`Self::normalize_border`] to be current.
    pub fn validate(&self, level: u32) -> Result<(), ValidityError> {
        self.check_counts()?;
        for h in self.halfedges() {
            self.check_links(h)?;
        }
        self.check_facet_cycles()?;
        self.check_vertex_cycles()?;
        if level >= 1 {
            self.check_normalized_border()?;
        }
        Ok(())
    }

    /// Boolean form of [`Self::validate`]. With `verbose` the outcome is
    /// reported through `tracing`.
    pub fn is_valid(&self, verbose: bool, level: u32) -> bool {
        match self.validate(level) {
            Ok(()) => {
                if verbose {
                    tracing::info!(
                        "valid polyhedron: {} vertices, {} halfedges, {} facets",
                        self.size_of_vertices(),
                        self.size_of_halfedges(),
                        self.size_of_facets()
                    );
                }
                true
            }
            Err(err) => {
                if verbose {
                    tracing::warn!("invalid polyhedron: {err}");
                }
                false
            }
        }
    }

    fn check_counts(&self) -> Result<(), ValidityError> {
        let vertices = self.vertices.iter().filter(|v| !v.removed).count();
        let halfedges = self.half_edges.iter().filter(|h| !h.removed).count();
        let facets = self.faces.iter().filter(|f| !f.removed).count();
        if vertices != self.live_vertices
            || halfedges != self.live_half_edges
            || facets != self.live_faces
        {
            return Err(ValidityError::CountMismatch);
        }
        Ok(())
    }

    fn check_links(&self, h: HalfedgeHandle) -> Result<(), ValidityError> {
        let he = &self.half_edges[h.0];
        let facet_ok = he.facet.is_null() || self.is_live_facet(he.facet);
        let prev_ok = !K::HALFEDGE_PREV || self.is_live_halfedge(he.prev);
        if !self.is_live_halfedge(he.next)
            || !self.is_live_halfedge(he.opposite)
            || !self.is_live_vertex(he.vertex)
            || !facet_ok
            || !prev_ok
        {
            return Err(ValidityError::DanglingLink(h));
        }
        if he.opposite == h || self.half_edges[he.opposite.0].opposite != h {
            return Err(ValidityError::OppositeMismatch(h));
        }
        if K::HALFEDGE_PREV && self.half_edges[he.next.0].prev != h {
            return Err(ValidityError::PrevMismatch(h));
        }
        if self.half_edges[he.next.0].facet != he.facet {
            return Err(ValidityError::MixedCycle(h));
        }
        // next(h) must start where h ends
        let after = self.half_edges[he.next.0].opposite;
        if !self.is_live_halfedge(after) || self.half_edges[after.0].vertex != he.vertex {
            return Err(ValidityError::VertexMismatch(h));
        }
        let other = self.half_edges[he.opposite.0].facet;
        if !he.facet.is_null() && he.facet == other {
            return Err(ValidityError::SameFacetOnBothSides(h));
        }
        if he.facet.is_null() && other.is_null() && self.live_faces > 0 {
            return Err(ValidityError::IsolatedEdge(h));
        }
        Ok(())
    }

    /// Every next-cycle closes, every facet owns exactly one cycle of at
    /// least three halfedges.
    fn check_facet_cycles(&self) -> Result<(), ValidityError> {
        let mut seen = vec![false; self.half_edges.len()];
        let mut cycles = vec![0usize; self.faces.len()];
        for h in self.halfedges() {
            if seen[h.0] {
                continue;
            }
            let mut degree = 0;
            let mut cur = h;
            loop {
                if seen[cur.0] || degree > self.live_half_edges {
                    return Err(ValidityError::OpenCycle(h));
                }
                seen[cur.0] = true;
                degree += 1;
                cur = self.half_edges[cur.0].next;
                if cur == h {
                    break;
                }
            }
            let f = self.half_edges[h.0].facet;
            if f.is_null() {
                continue;
            }
            if degree < 3 {
                return Err(ValidityError::FacetTooSmall { facet: f, degree });
            }
            cycles[f.0] += 1;
        }

        for f in self.facets() {
            if cycles[f.0] != 1 {
                return Err(ValidityError::FacetCycleCount(f));
            }
            if K::FACET_HALFEDGE {
                let h = self.faces[f.0].halfedge;
                if !self.is_live_halfedge(h) || self.half_edges[h.0].facet != f {
                    return Err(ValidityError::FacetBacklink(f));
                }
            }
        }
        Ok(())
    }

    /// Every vertex with edges owns exactly one vertex cycle.
    fn check_vertex_cycles(&self) -> Result<(), ValidityError> {
        let mut seen = vec![false; self.half_edges.len()];
        let mut cycles = vec![0usize; self.vertices.len()];
        for h in self.halfedges() {
            if seen[h.0] {
                continue;
            }
            let v = self.half_edges[h.0].vertex;
            let mut cur = h;
            let mut steps = 0;
            loop {
                if seen[cur.0] || steps > self.live_half_edges {
                    return Err(ValidityError::OpenCycle(h));
                }
                if self.half_edges[cur.0].vertex != v {
                    return Err(ValidityError::VertexMismatch(cur));
                }
                seen[cur.0] = true;
                steps += 1;
                cur = self.next_on_vertex(cur);
                if cur == h {
                    break;
                }
            }
            cycles[v.0] += 1;
        }

        for v in self.vertices() {
            match cycles[v.0] {
                0 => continue,
                1 => {}
                _ => return Err(ValidityError::VertexCycleCount(v)),
            }
            if K::VERTEX_HALFEDGE && !self.points_to(self.vertices[v.0].halfedge, v) {
                return Err(ValidityError::VertexBacklink(v));
            }
        }
        Ok(())
    }

    fn points_to(&self, h: HalfedgeHandle, v: VertexHandle) -> bool {
        self.is_live_halfedge(h) && self.half_edges[h.0].vertex == v
    }
}
