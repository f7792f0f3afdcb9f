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
    error::TopologyError,
    impl_polyhedron,
    mesh::{
        basic_types::BorderSnapshot,
        builder::SurfaceBuilder,
        face::Face,
        half_edge::HalfEdge,
        handles::{FacetHandle, HalfedgeHandle, VertexHandle},
        vertex::Vertex,
    },
};

fn reserve_total<T>(items: &mut Vec<T>, total: usize) {
    if items.capacity() < total {
        items.reserve(total - items.len());
    }
}

impl_polyhedron! {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty polyhedron with room for `v` vertices, `h` halfedges and `f` facets.
    pub fn with_capacity(v: usize, h: usize, f: usize) -> Self {
        let mut poly = Self::new();
        poly.reserve(v, h, f);
        poly
    }

    pub fn traits(&self) -> &K {
        &self.traits
    }

    /// Makes room for at least `v` vertices, `h` halfedges and `f` facets in
    /// total. Does nothing when the capacity already suffices.
    ///
    /// Elements are addressed by slot index, so growth never invalidates
    /// handles.
    pub fn reserve(&mut self, v: usize, h: usize, f: usize) {
        reserve_total(&mut self.vertices, v);
        reserve_total(&mut self.half_edges, h);
        reserve_total(&mut self.faces, f);
    }

    pub fn size_of_vertices(&self) -> usize {
        self.live_vertices
    }

    /// Number of halfedges, border halfedges included.
    pub fn size_of_halfedges(&self) -> usize {
        self.live_half_edges
    }

    pub fn size_of_facets(&self) -> usize {
        self.live_faces
    }

    pub fn capacity_of_vertices(&self) -> usize {
        self.vertices.capacity()
    }

    pub fn capacity_of_halfedges(&self) -> usize {
        self.half_edges.capacity()
    }

    pub fn capacity_of_facets(&self) -> usize {
        self.faces.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.live_vertices == 0 && self.live_half_edges == 0 && self.live_faces == 0
    }

    /// Removes every vertex, halfedge and facet. Capacity is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.half_edges.clear();
        self.faces.clear();
        self.free_vertices.clear();
        self.free_edges.clear();
        self.free_faces.clear();
        self.live_vertices = 0;
        self.live_half_edges = 0;
        self.live_faces = 0;
        self.border = BorderSnapshot::default();
    }

    #[inline]
    pub fn is_live_vertex(&self, v: VertexHandle) -> bool {
        v.0 < self.vertices.len() && !self.vertices[v.0].removed
    }

    #[inline]
    pub fn is_live_halfedge(&self, h: HalfedgeHandle) -> bool {
        h.0 < self.half_edges.len() && !self.half_edges[h.0].removed
    }

    #[inline]
    pub fn is_live_facet(&self, f: FacetHandle) -> bool {
        f.0 < self.faces.len() && !self.faces[f.0].removed
    }

    /// Live vertices in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.removed)
            .map(|(i, _)| VertexHandle::new(i))
    }

    /// Live halfedges in storage order.
    pub fn halfedges(&self) -> impl Iterator<Item = HalfedgeHandle> + '_ {
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.removed)
            .map(|(i, _)| HalfedgeHandle::new(i))
    }

    /// Live facets in storage order. Holes are not facets.
    pub fn facets(&self) -> impl Iterator<Item = FacetHandle> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.removed)
            .map(|(i, _)| FacetHandle::new(i))
    }

    /// One halfedge per edge, the one in the even slot of the pair.
    pub fn edges(&self) -> impl Iterator<Item = HalfedgeHandle> + '_ {
        self.halfedges().filter(|h| h.0 % 2 == 0)
    }

    pub fn points(&self) -> impl Iterator<Item = &K::Point> + '_ {
        self.vertices.iter().filter(|v| !v.removed).map(|v| &v.point)
    }

    pub fn planes(&self) -> impl Iterator<Item = &K::Plane> + '_ {
        self.faces.iter().filter(|f| !f.removed).map(|f| &f.plane)
    }

    /// # Panics
    /// If `v` is out of range.
    pub fn point(&self, v: VertexHandle) -> &K::Point {
        &self.vertices[v.0].point
    }

    pub fn point_mut(&mut self, v: VertexHandle) -> &mut K::Point {
        &mut self.vertices[v.0].point
    }

    pub fn plane(&self, f: FacetHandle) -> &K::Plane {
        &self.faces[f.0].plane
    }

    pub fn plane_mut(&mut self, f: FacetHandle) -> &mut K::Plane {
        &mut self.faces[f.0].plane
    }

    /// A halfedge pointing to `v`, or null for isolated vertices and for
    /// configurations without vertex backlinks.
    pub fn vertex_halfedge(&self, v: VertexHandle) -> HalfedgeHandle {
        self.vertices[v.0].halfedge
    }

    /// A halfedge of the cycle bounding `f`, or null for configurations
    /// without facet backlinks.
    pub fn facet_halfedge(&self, f: FacetHandle) -> HalfedgeHandle {
        self.faces[f.0].halfedge
    }

    /// Adds a tetrahedron with default points. See [`Self::make_tetrahedron_with`].
    pub fn make_tetrahedron(&mut self) -> HalfedgeHandle {
        self.make_tetrahedron_with(
            K::Point::default(),
            K::Point::default(),
            K::Point::default(),
            K::Point::default(),
        )
    }

    /// Adds a tetrahedron and returns the halfedge pointing to `p1` whose
    /// successors point to `p2` and `p3`. `p4` is the apex.
    pub fn make_tetrahedron_with(
        &mut self,
        p1: K::Point,
        p2: K::Point,
        p3: K::Point,
        p4: K::Point,
    ) -> HalfedgeHandle {
        self.reserve(
            self.vertices.len() + 4,
            self.half_edges.len() + 12,
            self.faces.len() + 4,
        );
        let mut builder = SurfaceBuilder::new(self);
        let v = [p1, p2, p3, p4].map(|p| builder.add_vertex(p));
        let h = builder.push_facet(&[v[0], v[1], v[2]]);
        builder.push_facet(&[v[1], v[0], v[3]]);
        builder.push_facet(&[v[2], v[1], v[3]]);
        builder.push_facet(&[v[0], v[2], v[3]]);
        let closed = builder.finish();
        debug_assert!(closed.is_ok(), "tetrahedron facets are consistently oriented");
        h
    }

    /// Adds a triangle with default points. See [`Self::make_triangle_with`].
    pub fn make_triangle(&mut self) -> HalfedgeHandle {
        self.make_triangle_with(K::Point::default(), K::Point::default(), K::Point::default())
    }

    /// Adds a triangle bounded by three border edges and returns its
    /// non-border halfedge pointing to `p1`.
    pub fn make_triangle_with(&mut self, p1: K::Point, p2: K::Point, p3: K::Point) -> HalfedgeHandle {
        self.reserve(
            self.vertices.len() + 3,
            self.half_edges.len() + 6,
            self.faces.len() + 1,
        );
        let mut builder = SurfaceBuilder::new(self);
        let v = [p1, p2, p3].map(|p| builder.add_vertex(p));
        let h = builder.push_facet(&v);
        let closed = builder.finish();
        debug_assert!(closed.is_ok(), "a lone triangle has a single border fan per vertex");
        h
    }

    // ----- raw storage, used by the operators and the modifier -----

    pub(crate) fn new_vertex(&mut self, point: K::Point) -> VertexHandle {
        self.live_vertices += 1;
        match self.free_vertices.pop() {
            Some(i) => {
                self.vertices[i] = Vertex::new(point);
                VertexHandle::new(i)
            }
            None => {
                self.vertices.push(Vertex::new(point));
                VertexHandle::new(self.vertices.len() - 1)
            }
        }
    }

    /// Allocates an edge and returns its even halfedge. Both halfedges are
    /// opposite to each other and otherwise unlinked.
    pub(crate) fn new_edge(&mut self) -> HalfedgeHandle {
        self.live_half_edges += 2;
        let base = match self.free_edges.pop() {
            Some(base) => base,
            None => {
                let base = self.half_edges.len();
                self.half_edges.push(HalfEdge::new(HalfedgeHandle::NULL));
                self.half_edges.push(HalfEdge::new(HalfedgeHandle::NULL));
                base
            }
        };
        let h = HalfedgeHandle::new(base);
        self.half_edges[base] = HalfEdge::new(h.pair());
        self.half_edges[base + 1] = HalfEdge::new(h);
        h
    }

    pub(crate) fn new_facet(&mut self, plane: K::Plane) -> FacetHandle {
        self.live_faces += 1;
        match self.free_faces.pop() {
            Some(i) => {
                self.faces[i] = Face::new(plane);
                FacetHandle::new(i)
            }
            None => {
                self.faces.push(Face::new(plane));
                FacetHandle::new(self.faces.len() - 1)
            }
        }
    }

    pub(crate) fn erase_vertex_record(&mut self, v: VertexHandle) {
        let vertex = &mut self.vertices[v.0];
        debug_assert!(!vertex.removed, "vertex {:?} erased twice", v);
        vertex.removed = true;
        vertex.halfedge = HalfedgeHandle::NULL;
        vertex.point = K::Point::default();
        self.free_vertices.push(v.0);
        self.live_vertices -= 1;
    }

    /// Erases both halfedges of the edge containing `h`.
    pub(crate) fn erase_edge_record(&mut self, h: HalfedgeHandle) {
        let base = h.edge_base();
        debug_assert!(!self.half_edges[base].removed, "edge {:?} erased twice", h);
        for slot in [base, base + 1] {
            let he = &mut self.half_edges[slot];
            he.removed = true;
            he.facet = FacetHandle::NULL;
            he.vertex = VertexHandle::NULL;
        }
        self.free_edges.push(base);
        self.live_half_edges -= 2;
    }

    pub(crate) fn erase_facet_record(&mut self, f: FacetHandle) {
        let face = &mut self.faces[f.0];
        debug_assert!(!face.removed, "facet {:?} erased twice", f);
        face.removed = true;
        face.halfedge = HalfedgeHandle::NULL;
        face.plane = K::Plane::default();
        self.free_faces.push(f.0);
        self.live_faces -= 1;
    }

    pub(crate) fn check_halfedge(&self, op: &'static str, h: HalfedgeHandle) -> Result<(), TopologyError> {
        if self.is_live_halfedge(h) {
            Ok(())
        } else {
            Err(TopologyError::InvalidHandle { op, handle: h })
        }
    }

    // ----- link primitives -----

    /// `next(h) = n`, and `prev(n) = h` when predecessors are stored.
    #[inline]
    pub(crate) fn link(&mut self, h: HalfedgeHandle, n: HalfedgeHandle) {
        self.half_edges[h.0].next = n;
        if K::HALFEDGE_PREV {
            self.half_edges[n.0].prev = h;
        }
    }

    #[inline]
    pub(crate) fn set_vertex(&mut self, h: HalfedgeHandle, v: VertexHandle) {
        self.half_edges[h.0].vertex = v;
    }

    #[inline]
    pub(crate) fn set_facet(&mut self, h: HalfedgeHandle, f: FacetHandle) {
        self.half_edges[h.0].facet = f;
    }

    /// Makes `h` the stored halfedge of the vertex it points to.
    #[inline]
    pub(crate) fn set_vertex_halfedge(&mut self, h: HalfedgeHandle) {
        if K::VERTEX_HALFEDGE {
            let v = self.half_edges[h.0].vertex;
            if !v.is_null() {
                self.vertices[v.0].halfedge = h;
            }
        }
    }

    /// Makes `h` the stored halfedge of its facet. No-op on border halfedges.
    #[inline]
    pub(crate) fn set_facet_halfedge(&mut self, h: HalfedgeHandle) {
        if K::FACET_HALFEDGE {
            let f = self.half_edges[h.0].facet;
            if !f.is_null() {
                self.faces[f.0].halfedge = h;
            }
        }
    }

    pub(crate) fn set_vertex_in_vertex_loop(&mut self, h: HalfedgeHandle, v: VertexHandle) {
        let mut cur = h;
        loop {
            self.set_vertex(cur, v);
            cur = self.next_on_vertex(cur);
            if cur == h {
                break;
            }
        }
    }

    pub(crate) fn set_facet_in_facet_loop(&mut self, h: HalfedgeHandle, f: FacetHandle) {
        let mut cur = h;
        loop {
            self.set_facet(cur, f);
            cur = self.half_edges[cur.0].next;
            if cur == h {
                break;
            }
        }
    }

    /// Inserts the tip of `h` into the vertex cycle `v` points into:
    /// `opposite(h)` becomes the successor of `v`, `h` takes over `next(v)`.
    pub(crate) fn insert_tip(&mut self, h: HalfedgeHandle, v: HalfedgeHandle) {
        let vn = self.next(v);
        let ho = self.opposite(h);
        self.link(h, vn);
        self.link(v, ho);
        let target = self.vertex(v);
        self.set_vertex(h, target);
    }

    /// Inserts `h` between `f` and `next(f)`, in the facet of `f`.
    pub(crate) fn insert_halfedge(&mut self, h: HalfedgeHandle, f: HalfedgeHandle) {
        let fn_ = self.next(f);
        self.link(h, fn_);
        self.link(f, h);
        let facet = self.facet(f);
        self.set_facet(h, facet);
    }

    /// Drops `next(h)` out of the vertex cycle of `vertex(h)`.
    pub(crate) fn remove_tip(&mut self, h: HalfedgeHandle) {
        let n = self.next(self.opposite(self.next(h)));
        self.link(h, n);
    }

    /// Drops `next(h)` out of the facet cycle of `h`.
    pub(crate) fn remove_halfedge(&mut self, h: HalfedgeHandle) {
        let n = self.next(self.next(h));
        self.link(h, n);
    }
}
