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
    impl_polyhedron,
    kernel::PolyhedronTraits,
    mesh::{
        basic_types::Polyhedron,
        handles::{FacetHandle, HalfedgeHandle, VertexHandle},
    },
};

/// Clockwise walk over the halfedges pointing to one vertex.
pub struct HalfedgesAroundVertex<'a, K: PolyhedronTraits> {
    poly: &'a Polyhedron<K>,
    start: HalfedgeHandle,
    current: HalfedgeHandle,
    done: bool,
}

impl<K: PolyhedronTraits> Iterator for HalfedgesAroundVertex<'_, K> {
    type Item = HalfedgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let h = self.current;
        self.current = self.poly.next_on_vertex(h);
        self.done = self.current == self.start;
        Some(h)
    }
}

/// Walk over the `next` cycle of a facet or a hole.
pub struct HalfedgesAroundFacet<'a, K: PolyhedronTraits> {
    poly: &'a Polyhedron<K>,
    start: HalfedgeHandle,
    current: HalfedgeHandle,
    done: bool,
}

impl<K: PolyhedronTraits> Iterator for HalfedgesAroundFacet<'_, K> {
    type Item = HalfedgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let h = self.current;
        self.current = self.poly.next(h);
        self.done = self.current == self.start;
        Some(h)
    }
}

impl_polyhedron! {
    #[inline]
    pub fn opposite(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        self.half_edges[h.0].opposite
    }

    #[inline]
    pub fn next(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        self.half_edges[h.0].next
    }

    /// Predecessor of `h` in its facet or hole cycle. O(1) when predecessors
    /// are stored, otherwise a walk along the cycle.
    pub fn prev(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        if K::HALFEDGE_PREV {
            return self.half_edges[h.0].prev;
        }
        let mut cur = h;
        loop {
            let n = self.half_edges[cur.0].next;
            if n == h {
                return cur;
            }
            cur = n;
        }
    }

    /// Next halfedge clockwise around `vertex(h)`.
    #[inline]
    pub fn next_on_vertex(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        self.opposite(self.next(h))
    }

    #[inline]
    pub fn prev_on_vertex(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        self.prev(self.opposite(h))
    }

    #[inline]
    pub fn is_border(&self, h: HalfedgeHandle) -> bool {
        self.half_edges[h.0].is_border()
    }

    #[inline]
    pub fn is_border_edge(&self, h: HalfedgeHandle) -> bool {
        self.is_border(h) || self.is_border(self.opposite(h))
    }

    /// Vertex `h` points to.
    #[inline]
    pub fn vertex(&self, h: HalfedgeHandle) -> VertexHandle {
        self.half_edges[h.0].vertex
    }

    /// Vertex `h` starts from.
    #[inline]
    pub fn source(&self, h: HalfedgeHandle) -> VertexHandle {
        self.vertex(self.opposite(h))
    }

    /// Incident facet, null for border halfedges.
    #[inline]
    pub fn facet(&self, h: HalfedgeHandle) -> FacetHandle {
        self.half_edges[h.0].facet
    }

    pub fn halfedges_around_vertex(&self, h: HalfedgeHandle) -> HalfedgesAroundVertex<'_, K> {
        HalfedgesAroundVertex { poly: self, start: h, current: h, done: false }
    }

    pub fn halfedges_around_facet(&self, h: HalfedgeHandle) -> HalfedgesAroundFacet<'_, K> {
        HalfedgesAroundFacet { poly: self, start: h, current: h, done: false }
    }

    /// Length of the vertex cycle through `h`.
    pub fn vertex_degree(&self, h: HalfedgeHandle) -> usize {
        self.halfedges_around_vertex(h).count()
    }

    /// Length of the facet or hole cycle through `h`.
    pub fn facet_degree(&self, h: HalfedgeHandle) -> usize {
        self.halfedges_around_facet(h).count()
    }

    /// Degree of `v`, 0 for isolated vertices and when vertices keep no
    /// backlink.
    pub fn vertex_degree_of(&self, v: VertexHandle) -> usize {
        let h = self.vertex_halfedge(v);
        if h.is_null() { 0 } else { self.vertex_degree(h) }
    }

    pub fn is_triangle(&self, h: HalfedgeHandle) -> bool {
        self.facet_degree(h) == 3
    }

    pub fn is_quad(&self, h: HalfedgeHandle) -> bool {
        self.facet_degree(h) == 4
    }

    /// True when no halfedge is border.
    pub fn is_closed(&self) -> bool {
        self.halfedges().all(|h| !self.is_border(h))
    }

    pub fn is_pure_bivalent(&self) -> bool {
        self.all_vertex_cycles(|d| d == 2)
    }

    pub fn is_pure_trivalent(&self) -> bool {
        self.all_vertex_cycles(|d| d == 3)
    }

    /// True when every facet is a triangle. Holes are not facets.
    pub fn is_pure_triangle(&self) -> bool {
        self.all_facet_cycles(|d| d == 3)
    }

    pub fn is_pure_quad(&self) -> bool {
        self.all_facet_cycles(|d| d == 4)
    }

    /// True when the connected component of `h` is a single triangle
    /// surrounded by one hole.
    pub fn is_triangle_component(&self, h: HalfedgeHandle) -> bool {
        let inner = if self.is_border(h) { self.opposite(h) } else { h };
        if self.is_border(inner) || self.facet_degree(inner) != 3 {
            return false;
        }
        self.halfedges_around_facet(inner).all(|x| {
            let o = self.opposite(x);
            self.is_border(o) && self.facet_degree(o) == 3
        })
    }

    /// True when the connected component of `h` is a closed tetrahedron.
    pub fn is_tetrahedron(&self, h: HalfedgeHandle) -> bool {
        let c = self.connected_component(h);
        c.halfedges.len() == 12
            && c.vertices.len() == 4
            && c.facets.len() == 4
            && c.halfedges.iter().all(|&x| {
                !self.is_border(x) && self.facet_degree(x) == 3 && self.vertex_degree(x) == 3
            })
    }

    fn all_vertex_cycles(&self, pred: impl Fn(usize) -> bool) -> bool {
        let mut seen = vec![false; self.half_edges.len()];
        for h in self.halfedges() {
            if seen[h.0] {
                continue;
            }
            let mut degree = 0;
            for x in self.halfedges_around_vertex(h) {
                seen[x.0] = true;
                degree += 1;
            }
            if !pred(degree) {
                return false;
            }
        }
        true
    }

    fn all_facet_cycles(&self, pred: impl Fn(usize) -> bool) -> bool {
        if K::FACET_HALFEDGE {
            self.facets().all(|f| pred(self.facet_degree(self.facet_halfedge(f))))
        } else {
            self.halfedges()
                .filter(|&h| !self.is_border(h))
                .all(|h| pred(self.facet_degree(h)))
        }
    }
}
