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

use smallvec::SmallVec;

use crate::{
    error::TopologyError,
    impl_polyhedron, impl_removal,
    mesh::handles::HalfedgeHandle,
};

impl_polyhedron! {
    /// Cuts the surface along the closed path `h, i, j` and caps both cuts
    /// with a triangle. Three vertices and three edges are duplicated.
    ///
    /// `h`, `i` and `j` end up bounding the first new triangle. Returns the
    /// halfedge of the second new triangle that copies `opposite(h)`.
    pub fn split_loop(
        &mut self,
        h: HalfedgeHandle,
        i: HalfedgeHandle,
        j: HalfedgeHandle,
    ) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "split_loop";
        let path = [h, i, j];
        for x in path {
            self.check_halfedge(OP, x)?;
        }
        if h == i || i == j || j == h {
            return Err(TopologyError::violation(OP, "h, i and j must differ"));
        }
        if self.vertex(h) != self.source(i)
            || self.vertex(i) != self.source(j)
            || self.vertex(j) != self.source(h)
        {
            return Err(TopologyError::violation(OP, "h, i and j do not form a closed path"));
        }
        let (a, b, c) = (self.vertex(j), self.vertex(h), self.vertex(i));
        if a == b || b == c || c == a {
            return Err(TopologyError::violation(OP, "path visits a vertex twice"));
        }
        let mut six: SmallVec<[_; 6]> = SmallVec::new();
        for x in path {
            for y in [x, self.opposite(x)] {
                let f = self.facet(y);
                if f.is_null() {
                    return Err(TopologyError::violation(OP, "path touches the border"));
                }
                if six.contains(&f) {
                    return Err(TopologyError::violation(OP, "the six incident facets are not distinct"));
                }
                six.push(f);
            }
        }

        let around = path.map(|x| (self.prev(x), self.next(x), self.facet(x)));
        let copies = path.map(|x| {
            let point = self.point(self.vertex(x)).clone();
            self.new_vertex(point)
        });

        // the copies take over the old positions of h, i, j
        let mut fresh = [HalfedgeHandle::NULL; 3];
        for (k, &(p, n, f)) in around.iter().enumerate() {
            let xn = self.new_edge();
            self.link(p, xn);
            self.link(xn, n);
            self.set_facet(xn, f);
            self.set_facet_halfedge(xn);
            fresh[k] = xn;
        }

        let first = self.new_facet(self.plane(around[0].2).clone());
        let second = self.new_facet(self.plane(self.facet(self.opposite(h))).clone());
        self.link(h, i);
        self.link(i, j);
        self.link(j, h);
        for x in path {
            self.set_facet(x, first);
        }
        self.set_facet_halfedge(h);

        let [ho, io, jo] = fresh.map(|x| self.opposite(x));
        self.link(ho, jo);
        self.link(jo, io);
        self.link(io, ho);
        for x in [ho, jo, io] {
            self.set_facet(x, second);
        }
        self.set_facet_halfedge(ho);

        for k in 0..3 {
            self.set_vertex_in_vertex_loop(fresh[k], copies[k]);
            self.set_vertex_halfedge(fresh[k]);
            self.set_vertex_halfedge(path[k]);
        }
        Ok(ho)
    }
}

impl_removal! {
    /// Glues the cycle of `g` onto the cycle of `h` and removes both facets
    /// together with the edges and vertices of `g`'s cycle. Either cycle may
    /// be a hole. Inverse of [`Self::split_loop`].
    ///
    /// `vertex(h)` is identified with `source(g)` and the cycles are matched
    /// in opposite directions. Returns `h`.
    pub fn join_loop(
        &mut self,
        h: HalfedgeHandle,
        g: HalfedgeHandle,
    ) -> Result<HalfedgeHandle, TopologyError> {
        const OP: &str = "join_loop";
        self.check_halfedge(OP, h)?;
        self.check_halfedge(OP, g)?;
        let hs: SmallVec<[HalfedgeHandle; 8]> = self.halfedges_around_facet(h).collect();
        let cyc: SmallVec<[HalfedgeHandle; 8]> = self.halfedges_around_facet(g).collect();
        if hs.contains(&g) {
            return Err(TopologyError::violation(OP, "h and g are in the same cycle"));
        }
        if hs.len() != cyc.len() {
            return Err(TopologyError::violation(OP, "cycles have different degrees"));
        }
        for &x in &cyc {
            let o = self.opposite(x);
            if cyc.contains(&o) || hs.contains(&o) {
                return Err(TopologyError::violation(OP, "cycles share an edge"));
            }
        }
        for &x in &hs {
            if hs.contains(&self.opposite(x)) {
                return Err(TopologyError::violation(OP, "cycle of h runs along an edge twice"));
            }
        }
        for ring in [&hs, &cyc] {
            for (t, &x) in ring.iter().enumerate() {
                let v = self.vertex(x);
                if ring[..t].iter().any(|&y| self.vertex(y) == v) {
                    return Err(TopologyError::violation(OP, "a cycle visits a vertex twice"));
                }
            }
        }
        for &x in &hs {
            let v = self.vertex(x);
            if cyc.iter().any(|&y| self.vertex(y) == v) {
                return Err(TopologyError::violation(OP, "cycles share a vertex"));
            }
        }

        let k = hs.len();
        // gs[t] runs against hs[t]
        let gs: SmallVec<[HalfedgeHandle; 8]> = (0..k).map(|t| cyc[(k - t) % k]).collect();
        let os: SmallVec<[HalfedgeHandle; 8]> = gs.iter().map(|&x| self.opposite(x)).collect();
        for t in 0..k {
            // hs[t] takes the place of os[t] next to opposite(hs[t])
            if self.facet(self.opposite(hs[t])) == self.facet(os[t]) {
                return Err(TopologyError::violation(OP, "a glued edge would have one facet on both sides"));
            }
            let w = self.vertex(os[t]);
            if self.halfedges_around_vertex(hs[t]).any(|x| self.source(x) == w) {
                return Err(TopologyError::violation(OP, "glued vertices are already joined by an edge"));
            }
        }
        let around: SmallVec<[_; 8]> = os
            .iter()
            .map(|&o| (self.prev(o), self.next(o), self.facet(o), self.vertex(o)))
            .collect();
        let target = |x: HalfedgeHandle| os.iter().position(|&o| o == x).map_or(x, |s| hs[s]);

        let fh = self.facet(h);
        let fg = self.facet(g);
        for t in 0..k {
            self.set_vertex_in_vertex_loop(os[t], self.vertex(hs[t]));
        }
        for t in 0..k {
            let (p, n, f, _) = around[t];
            self.link(hs[t], target(n));
            if !os.contains(&p) {
                self.link(p, hs[t]);
            }
            self.set_facet(hs[t], f);
        }
        for t in 0..k {
            self.set_facet_halfedge(hs[t]);
            self.set_vertex_halfedge(hs[t]);
        }
        for f in [fh, fg] {
            if !f.is_null() {
                self.erase_facet_record(f);
            }
        }
        for t in 0..k {
            self.erase_edge_record(gs[t]);
            self.erase_vertex_record(around[t].3);
        }
        Ok(h)
    }
}
