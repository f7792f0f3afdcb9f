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
    mesh::{basic_types::BorderSnapshot, handles::HalfedgeHandle},
};

impl_polyhedron! {
    /// Reorders the halfedge storage so that all edges without border come
    /// first, followed by the border edges. Within a border edge the
    /// halfedge with a facet comes first. Erased slots are dropped.
    ///
    /// Afterwards [`Self::border_halfedges_begin`] and the border counts
    /// describe the layout. They are snapshots: any later change of the
    /// halfedges makes them stale until this is called again. Halfedge
    /// handles held across this call are invalidated.
    pub fn normalize_border(&mut self) {
        let mut interior = Vec::with_capacity(self.half_edges.len());
        let mut border = Vec::new();
        let mut border_halfedges = 0;
        for base in (0..self.half_edges.len()).step_by(2) {
            if self.half_edges[base].removed {
                continue;
            }
            let a = self.half_edges[base].is_border();
            let b = self.half_edges[base + 1].is_border();
            match (a, b) {
                (false, false) => interior.extend([base, base + 1]),
                (true, false) => border.extend([base + 1, base]),
                _ => border.extend([base, base + 1]),
            }
            border_halfedges += a as usize + b as usize;
        }

        let start = interior.len();
        let order: Vec<usize> = interior.into_iter().chain(border).collect();
        let mut slot_of = vec![HalfedgeHandle::NULL; self.half_edges.len()];
        for (new, &old) in order.iter().enumerate() {
            slot_of[old] = HalfedgeHandle::new(new);
        }
        let remap = |h: HalfedgeHandle| if h.is_null() { h } else { slot_of[h.0] };

        let mut relocated = Vec::with_capacity(self.half_edges.capacity());
        for &old in &order {
            let mut he = self.half_edges[old].clone();
            he.next = remap(he.next);
            he.prev = remap(he.prev);
            he.opposite = remap(he.opposite);
            relocated.push(he);
        }
        self.half_edges = relocated;
        self.free_edges.clear();

        for v in self.vertices.iter_mut().filter(|v| !v.removed) {
            v.halfedge = remap(v.halfedge);
        }
        for f in self.faces.iter_mut().filter(|f| !f.removed) {
            f.halfedge = remap(f.halfedge);
        }

        self.border = BorderSnapshot {
            start,
            halfedges: border_halfedges,
            edges: (order.len() - start) / 2,
        };
        tracing::debug!(
            "normalized border: {} halfedges, {} border halfedges on {} edges",
            order.len(),
            self.border.halfedges,
            self.border.edges
        );
    }

    /// Number of border halfedges as of the last [`Self::normalize_border`].
    pub fn size_of_border_halfedges(&self) -> usize {
        self.border.halfedges
    }

    /// Number of border edges as of the last [`Self::normalize_border`].
    pub fn size_of_border_edges(&self) -> usize {
        self.border.edges
    }

    /// First halfedge of the first border edge after the last
    /// [`Self::normalize_border`], or null if there was no border.
    pub fn border_halfedges_begin(&self) -> HalfedgeHandle {
        if self.border.start < self.half_edges.len() {
            HalfedgeHandle::new(self.border.start)
        } else {
            HalfedgeHandle::NULL
        }
    }

    /// Border halfedges in storage order, starting at
    /// [`Self::border_halfedges_begin`].
    pub fn border_halfedges(&self) -> impl Iterator<Item = HalfedgeHandle> + '_ {
        (self.border.start.min(self.half_edges.len())..self.half_edges.len())
            .map(HalfedgeHandle::new)
            .filter(|&h| self.is_live_halfedge(h) && self.is_border(h))
    }

    /// One halfedge per border edge, the one with a facet if there is one.
    pub fn border_edges(&self) -> impl Iterator<Item = HalfedgeHandle> + '_ {
        (self.border.start.min(self.half_edges.len())..self.half_edges.len())
            .step_by(2)
            .map(HalfedgeHandle::new)
            .filter(|&h| self.is_live_halfedge(h))
    }

    /// True when the storage still has the layout and counts recorded by the
    /// last [`Self::normalize_border`].
    pub fn normalized_border_is_valid(&self, verbose: bool) -> bool {
        match self.check_normalized_border() {
            Ok(()) => true,
            Err(err) => {
                if verbose {
                    tracing::warn!("{err}");
                }
                false
            }
        }
    }

    pub(crate) fn check_normalized_border(&self) -> Result<(), ValidityError> {
        let mut first_border = None;
        let mut halfedges = 0;
        let mut edges = 0;
        for base in (0..self.half_edges.len()).step_by(2) {
            if self.half_edges[base].removed {
                continue;
            }
            let a = self.half_edges[base].is_border();
            let b = self.half_edges[base + 1].is_border();
            if !a && !b {
                if first_border.is_some() {
                    return Err(ValidityError::BorderNotNormalized("interior edge after border edges"));
                }
                continue;
            }
            if a && !b {
                return Err(ValidityError::BorderNotNormalized("hole side stored before facet side"));
            }
            first_border.get_or_insert(base);
            halfedges += a as usize + b as usize;
            edges += 1;
        }
        if first_border.unwrap_or(self.half_edges.len()) != self.border.start {
            return Err(ValidityError::BorderNotNormalized("border start is stale"));
        }
        if halfedges != self.border.halfedges || edges != self.border.edges {
            return Err(ValidityError::BorderNotNormalized("border counts are stale"));
        }
        Ok(())
    }
}
