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
    /// Splits the facet of `h` and `g` by a new diagonal from `vertex(h)` to
    /// `vertex(g)`. The facet of `h` keeps the part containing `h`, a new
    /// facet with a copy of the plane takes the part containing `g`.
    ///
    /// Returns the diagonal, which is `next(h)` afterwards.
    pub fn split_facet(
        &mut self,
        h: HalfedgeHandle,
        g: HalfedgeHandle,
    ) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "split_facet";
        self.check_halfedge(OP, h)?;
        self.check_halfedge(OP, g)?;
        if h == g {
            return Err(TopologyError::violation(OP, "h and g must differ"));
        }
        if self.is_border(h) {
            return Err(TopologyError::violation(OP, "h is a border halfedge"));
        }
        if !self.halfedges_around_facet(h).any(|x| x == g) {
            return Err(TopologyError::violation(OP, "h and g are not in the same facet"));
        }
        if self.next(h) == g || self.next(g) == h {
            return Err(TopologyError::violation(OP, "h and g are adjacent"));
        }
        if self.vertex(h) == self.vertex(g) {
            return Err(TopologyError::violation(OP, "diagonal would be a loop"));
        }

        let f = self.facet(h);
        let fnew = self.new_facet(self.plane(f).clone());
        let hnew = self.new_edge();
        let hopp = self.opposite(hnew);
        self.insert_tip(hnew, g);
        self.insert_tip(hopp, h);
        self.set_facet(hnew, f);
        self.set_facet_in_facet_loop(hopp, fnew);
        self.set_facet_halfedge(hnew);
        self.set_facet_halfedge(hopp);
        Ok(hnew)
    }

    /// Splits the vertex of `h` and `g` in two, joined by a new edge. The
    /// halfedges from `next_on_vertex(h)` up to `g` move to the new vertex,
    /// which gets a copy of the point.
    ///
    /// Returns the new halfedge pointing to the old vertex. Its opposite is
    /// `next(h)` afterwards.
    pub fn split_vertex(
        &mut self,
        h: HalfedgeHandle,
        g: HalfedgeHandle,
    ) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "split_vertex";
        self.check_halfedge(OP, h)?;
        self.check_halfedge(OP, g)?;
        if h == g {
            return Err(TopologyError::violation(OP, "h and g must differ"));
        }
        if !self.halfedges_around_vertex(h).any(|x| x == g) {
            return Err(TopologyError::violation(OP, "h and g do not point to the same vertex"));
        }
        let (fh, fg) = (self.facet(h), self.facet(g));
        if fh == fg && (!fh.is_null() || self.size_of_facets() > 0) {
            return Err(TopologyError::violation(OP, "new edge would have one facet on both sides"));
        }

        let v = self.vertex(h);
        let vnew = self.new_vertex(self.point(v).clone());
        let hnew = self.new_edge();
        let hopp = self.opposite(hnew);
        self.insert_halfedge(hnew, g);
        self.insert_halfedge(hopp, h);
        self.set_vertex(hnew, v);
        self.set_vertex_in_vertex_loop(hopp, vnew);
        self.set_vertex_halfedge(hopp);
        self.set_vertex_halfedge(hnew);
        Ok(hnew)
    }

    /// Inserts a new vertex on the edge of `h`, with a copy of the point of
    /// its source. Returns the new halfedge `hnew` with `next(hnew) == h`.
    pub fn split_edge(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        self.check_halfedge("split_edge", h)?;
        let hnew = self.split_vertex(self.prev(h), self.opposite(h))?;
        Ok(self.opposite(hnew))
    }

    /// Rotates the edge of `h` inside the quadrilateral formed by its two
    /// triangles. `h` keeps its handle and facet and gets new endpoints.
    pub fn flip_edge(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "flip_edge";
        self.check_halfedge(OP, h)?;
        let g = self.opposite(h);
        if self.is_border(h) || self.is_border(g) {
            return Err(TopologyError::violation(OP, "edge is on the border"));
        }
        if !self.is_triangle(h) || !self.is_triangle(g) {
            return Err(TopologyError::violation(OP, "both incident facets must be triangles"));
        }
        let h1 = self.next(h);
        let h2 = self.next(h1);
        let g1 = self.next(g);
        let g2 = self.next(g1);
        let c = self.vertex(h1);
        let d = self.vertex(g1);
        if c == d {
            return Err(TopologyError::violation(OP, "flipped edge would be a loop"));
        }
        let fh = self.facet(h);
        let fg = self.facet(g);

        self.link(h, h2);
        self.link(h2, g1);
        self.link(g1, h);
        self.link(g, g2);
        self.link(g2, h1);
        self.link(h1, g);
        self.set_vertex(h, c);
        self.set_vertex(g, d);
        self.set_facet(g1, fh);
        self.set_facet(h1, fg);

        self.set_facet_halfedge(h);
        self.set_facet_halfedge(g);
        // the old endpoints may have stored h or g
        self.set_vertex_halfedge(h2);
        self.set_vertex_halfedge(g2);
        self.set_vertex_halfedge(h);
        self.set_vertex_halfedge(g);
        Ok(h)
    }

    /// Adds a vertex inside the facet of `h` and connects it to every vertex
    /// of the facet, so that an n-gon becomes n triangles. The new vertex
    /// gets a copy of the point of `vertex(h)`, the new facets copies of the
    /// plane.
    ///
    /// Returns `next(h)` afterwards, which points to the new vertex.
    pub fn create_center_vertex(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "create_center_vertex";
        self.check_halfedge(OP, h)?;
        if self.is_border(h) {
            return Err(TopologyError::violation(OP, "h is a border halfedge"));
        }

        let ring: SmallVec<[HalfedgeHandle; 8]> = self.halfedges_around_facet(h).collect();
        let n = ring.len();
        let f0 = self.facet(h);
        let center = self.new_vertex(self.point(self.vertex(h)).clone());

        // spokes[i] points from vertex(ring[i]) to the center
        let spokes: SmallVec<[HalfedgeHandle; 8]> = (0..n).map(|_| self.new_edge()).collect();
        let mut facets: SmallVec<[FacetHandle; 8]> = SmallVec::with_capacity(n);
        facets.push(f0);
        for _ in 1..n {
            facets.push(self.new_facet(self.plane(f0).clone()));
        }

        for i in 0..n {
            let spoke = spokes[i];
            let back = self.opposite(spokes[(i + n - 1) % n]);
            self.link(ring[i], spoke);
            self.link(spoke, back);
            self.link(back, ring[i]);

            self.set_vertex(spoke, center);
            let outer = self.vertex(ring[i]);
            self.set_vertex(self.opposite(spoke), outer);

            for x in [ring[i], spoke, back] {
                self.set_facet(x, facets[i]);
            }
            self.set_facet_halfedge(ring[i]);
        }
        self.set_vertex_halfedge(spokes[0]);
        Ok(spokes[0])
    }

    /// Reverses the orientation of every facet and hole cycle. Each halfedge
    /// keeps its facet and swaps its endpoints. Planes are left as they are.
    pub fn inside_out(&mut self) {
        let live: Vec<HalfedgeHandle> = self.halfedges().collect();
        let rewired: Vec<_> = live
            .iter()
            .map(|&h| {
                let p = self.prev(h);
                (h, p, self.next(h), self.vertex(p))
            })
            .collect();
        for (h, p, n, v) in rewired {
            let he = &mut self.half_edges[h.0];
            he.next = p;
            he.vertex = v;
            if K::HALFEDGE_PREV {
                he.prev = n;
            }
        }
        for h in live {
            self.set_vertex_halfedge(h);
        }
    }
}

impl_removal! {
    /// Removes the edge of `h`, merging the facet of `opposite(h)` into the
    /// facet of `h`. Inverse of [`Self::split_facet`].
    ///
    /// Returns the predecessor of `h` in the merged facet.
    pub fn join_facet(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "join_facet";
        self.check_halfedge(OP, h)?;
        let g = self.opposite(h);
        if self.vertex_degree(h) < 3 || self.vertex_degree(g) < 3 {
            return Err(TopologyError::violation(OP, "both endpoints need degree at least 3"));
        }
        if self.halfedges_around_facet(h).any(|x| x == g) {
            return Err(TopologyError::violation(OP, "both sides of the edge are the same cycle"));
        }
        // with a hole on either side this also catches edges that would be
        // left with a hole on both sides
        let touches = |a: HalfedgeHandle, b: HalfedgeHandle| {
            let other = self.facet(b);
            self.halfedges_around_facet(a)
                .any(|x| x != a && self.facet(self.opposite(x)) == other)
        };
        if touches(h, g) || touches(g, h) {
            return Err(TopologyError::violation(OP, "the two cycles share another edge"));
        }

        let hprev = self.prev(h);
        let gprev = self.prev(g);
        let f = self.facet(h);
        let gone = self.facet(g);
        self.remove_tip(hprev);
        self.remove_tip(gprev);
        if !gone.is_null() {
            self.erase_facet_record(gone);
        }
        self.set_facet_in_facet_loop(hprev, f);
        self.set_facet_halfedge(hprev);
        self.set_vertex_halfedge(hprev);
        self.set_vertex_halfedge(gprev);
        self.erase_edge_record(h);
        Ok(hprev)
    }

    /// Contracts the edge of `h`, merging the vertex of `opposite(h)` into
    /// the vertex of `h`. Inverse of [`Self::split_vertex`].
    ///
    /// Returns the predecessor of `opposite(h)` in its facet, which points to
    /// the merged vertex.
    pub fn join_vertex(&mut self, h: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "join_vertex";
        self.check_halfedge(OP, h)?;
        let g = self.opposite(h);
        if self.facet_degree(h) < 4 || self.facet_degree(g) < 4 {
            return Err(TopologyError::violation(OP, "both incident cycles need degree at least 4"));
        }
        let v = self.vertex(h);
        let w = self.vertex(g);
        if v == w {
            return Err(TopologyError::violation(OP, "edge is a loop"));
        }
        if self.halfedges_around_vertex(h).any(|x| x != h && self.source(x) == w) {
            return Err(TopologyError::violation(OP, "another edge joins the endpoints"));
        }

        let hprev = self.prev(g);
        let gprev = self.prev(h);
        self.remove_halfedge(hprev);
        self.remove_halfedge(gprev);
        self.set_vertex_in_vertex_loop(gprev, v);
        self.erase_vertex_record(w);
        self.set_vertex_halfedge(hprev);
        self.set_facet_halfedge(hprev);
        self.set_facet_halfedge(gprev);
        self.erase_edge_record(h);
        Ok(hprev)
    }

    /// Removes `vertex(g)` with all its edges and merges the surrounding
    /// facets into `facet(g)`. Inverse of [`Self::create_center_vertex`].
    ///
    /// Returns `prev(g)`.
    pub fn erase_center_vertex(&mut self, g: HalfedgeHandle) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "erase_center_vertex";
        self.check_halfedge(OP, g)?;

        let spokes: SmallVec<[HalfedgeHandle; 8]> = self.halfedges_around_vertex(g).collect();
        if spokes.len() < 2 {
            return Err(TopologyError::violation(OP, "vertex has fewer than two edges"));
        }
        let mut star = AHashSet::with_capacity(spokes.len());
        for &s in &spokes {
            if self.is_border(s) || self.is_border(self.opposite(s)) {
                return Err(TopologyError::violation(OP, "a facet around the vertex is a hole"));
            }
            if !star.insert(self.facet(s)) {
                return Err(TopologyError::violation(OP, "a facet touches the vertex twice"));
            }
        }
        let center = self.vertex(g);
        let mut outside = AHashSet::new();
        for &s in &spokes {
            for x in self.halfedges_around_facet(s) {
                if self.vertex(x) == center || self.source(x) == center {
                    continue;
                }
                let beyond = self.facet(self.opposite(x));
                if star.contains(&beyond) {
                    return Err(TopologyError::violation(OP, "merged facet would border itself"));
                }
                outside.insert(beyond);
            }
        }
        // a single facet on the other side would glue two facets back to back
        if outside.len() < 2 && !outside.contains(&FacetHandle::NULL) {
            return Err(TopologyError::violation(OP, "merged facet would collapse the volume"));
        }
        let merged: usize = spokes.iter().map(|&s| self.facet_degree(s) - 2).sum();
        if merged < 3 {
            return Err(TopologyError::violation(OP, "merged facet would have fewer than three edges"));
        }

        let keep = self.facet(g);
        let hret = self.prev(g);
        let preds: SmallVec<[HalfedgeHandle; 8]> = spokes.iter().map(|&s| self.prev(s)).collect();
        for (k, &s) in spokes.iter().enumerate().skip(1) {
            let sprev = preds[k];
            self.set_vertex_halfedge(sprev);
            self.remove_tip(sprev);
            let f = self.facet(s);
            if f != keep {
                self.erase_facet_record(f);
            }
            self.erase_edge_record(s);
        }
        self.set_vertex_halfedge(hret);
        self.remove_tip(hret);
        self.erase_vertex_record(center);
        self.set_facet_in_facet_loop(hret, keep);
        self.set_facet_halfedge(hret);
        self.erase_edge_record(g);
        Ok(hret)
    }
}
