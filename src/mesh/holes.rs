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
use smallvec::SmallVec;

use crate::{
    error::TopologyError,
    impl_polyhedron, impl_removal,
    mesh::handles::{FacetHandle, HalfedgeHandle},
};

impl_polyhedron! {
    /// Turns the hole of the border halfedge `h` into a facet with a default
    /// plane. Returns `h`.
    pub fn fill_hole(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "fill_hole";
        self.check_halfedge(OP, h)?;
        if !self.is_border(h) {
            return Err(TopologyError::violation(OP, "h is not a border halfedge"));
        }
        if self.facet_degree(h) < 3 {
            return Err(TopologyError::violation(OP, "hole has fewer than three edges"));
        }
        let f = self.new_facet(K::Plane::default());
        self.set_facet_in_facet_loop(h, f);
        self.set_facet_halfedge(h);
        Ok(h)
    }

    /// Cuts off the part of the hole from `next(h)` to `g` with a new vertex,
    /// two new edges and a new facet incident to `g`. The new vertex gets a
    /// default point.
    ///
    /// Returns the new halfedge of the new facet that points to the new
    /// vertex.
    pub fn add_vertex_and_facet_to_border(
        &mut self,
        h: HalfedgeHandle,
        g: HalfedgeHandle,
    ) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "add_vertex_and_facet_to_border";
        self.check_border_pair(OP, h, g)?;

        let hn = self.next(h);
        let gn = self.next(g);
        let v = self.new_vertex(K::Point::default());
        let a = self.new_edge();
        let b = self.new_edge();
        let (ao, bo) = (self.opposite(a), self.opposite(b));

        self.link(g, a);
        self.link(a, b);
        self.link(b, hn);
        self.link(h, bo);
        self.link(bo, ao);
        self.link(ao, gn);
        self.set_vertex(a, v);
        self.set_vertex(bo, v);
        let (vh, vg) = (self.vertex(h), self.vertex(g));
        self.set_vertex(b, vh);
        self.set_vertex(ao, vg);

        let f = self.new_facet(K::Plane::default());
        self.set_facet_in_facet_loop(g, f);
        self.set_facet_halfedge(a);
        self.set_vertex_halfedge(a);
        Ok(a)
    }

    /// Cuts off the part of the hole from `next(h)` to `g` with a new edge
    /// from `vertex(g)` to `vertex(h)` and fills it with a new facet incident
    /// to `g`. Returns the new halfedge of the new facet.
    pub fn add_facet_to_border(
        &mut self,
        h: HalfedgeHandle,
        g: HalfedgeHandle,
    ) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "add_facet_to_border";
        self.check_border_pair(OP, h, g)?;
        if self.next(h) == g {
            return Err(TopologyError::violation(OP, "g follows h directly"));
        }
        if self.vertex(h) == self.vertex(g) {
            return Err(TopologyError::violation(OP, "h and g point to the same vertex"));
        }

        let hn = self.next(h);
        let gn = self.next(g);
        let e = self.new_edge();
        let eo = self.opposite(e);
        self.link(g, e);
        self.link(e, hn);
        self.link(h, eo);
        self.link(eo, gn);
        let (vh, vg) = (self.vertex(h), self.vertex(g));
        self.set_vertex(e, vh);
        self.set_vertex(eo, vg);

        let f = self.new_facet(K::Plane::default());
        self.set_facet_in_facet_loop(e, f);
        self.set_facet_halfedge(e);
        Ok(e)
    }

    fn check_border_pair(
        &self,
        op: &'static str,
        h: HalfedgeHandle,
        g: HalfedgeHandle,
    ) -> Result<(), TopologyError> {
        self.check_halfedge(op, h)?;
        self.check_halfedge(op, g)?;
        if !self.is_border(h) || !self.is_border(g) {
            return Err(TopologyError::violation(op, "h and g must be border halfedges"));
        }
        if h == g {
            return Err(TopologyError::violation(op, "h and g must differ"));
        }
        if !self.halfedges_around_facet(h).any(|x| x == g) {
            return Err(TopologyError::violation(op, "g is not on the hole of h"));
        }
        Ok(())
    }
}

impl_removal! {
    /// Removes the facet of `h` and turns its cycle into a hole. Returns `h`.
    ///
    /// Fails when an edge of the facet is already on the border; use
    /// [`Self::erase_facet`] there.
    pub fn make_hole(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "make_hole";
        self.check_halfedge(OP, h)?;
        if self.is_border(h) {
            return Err(TopologyError::violation(OP, "h is a border halfedge"));
        }
        if self.halfedges_around_facet(h).any(|x| self.is_border(self.opposite(x))) {
            return Err(TopologyError::violation(OP, "facet already touches the border"));
        }
        let f = self.facet(h);
        self.erase_facet_record(f);
        self.set_facet_in_facet_loop(h, FacetHandle::NULL);
        Ok(h)
    }

    /// Removes the facet of `h`. Edges that end up with a hole on both sides
    /// are removed as well, and so are vertices left without edges.
    pub fn erase_facet(&mut self, h: HalfedgeHandle) -> Result<(), TopologyError> {
        const OP: &str = "erase_facet";
        self.check_halfedge(OP, h)?;
        if self.is_border(h) {
            return Err(TopologyError::violation(OP, "h is a border halfedge"));
        }
        let ring: SmallVec<[HalfedgeHandle; 8]> = self.halfedges_around_facet(h).collect();
        let f = self.facet(h);
        self.erase_facet_record(f);
        self.set_facet_in_facet_loop(h, FacetHandle::NULL);

        let mut done = AHashSet::with_capacity(ring.len());
        for x in ring {
            if !done.insert(x.edge_base()) || !self.is_live_halfedge(x) {
                continue;
            }
            if self.is_border(self.opposite(x)) {
                self.remove_border_edge(x);
            }
        }
        Ok(())
    }

    /// Unlinks and erases an edge with holes on both sides. Endpoints left
    /// without edges are erased.
    pub(crate) fn remove_border_edge(&mut self, x: HalfedgeHandle) {
        let y = self.opposite(x);
        let (u, w) = (self.vertex(y), self.vertex(x));
        let (px, nx) = (self.prev(x), self.next(x));
        let (py, ny) = (self.prev(y), self.next(y));
        if u == w {
            // a loop edge: a side that is its own cycle just disappears
            match (nx == x, ny == y) {
                (true, true) => self.erase_vertex_record(u),
                (false, true) => {
                    self.link(px, nx);
                    self.set_vertex_halfedge(px);
                }
                (true, false) => {
                    self.link(py, ny);
                    self.set_vertex_halfedge(py);
                }
                (false, false) => {
                    self.link(px, ny);
                    self.link(py, nx);
                    self.set_vertex_halfedge(px);
                }
            }
            self.erase_edge_record(x);
            return;
        }
        if px == y {
            self.erase_vertex_record(u);
        } else {
            self.link(px, ny);
            self.set_vertex_halfedge(px);
        }
        if py == x {
            self.erase_vertex_record(w);
        } else {
            self.link(py, nx);
            self.set_vertex_halfedge(py);
        }
        self.erase_edge_record(x);
    }
}
