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

use std::ops::Deref;

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    error::BuildError,
    impl_polyhedron,
    kernel::PolyhedronTraits,
    mesh::{
        basic_types::Polyhedron,
        handles::{FacetHandle, HalfedgeHandle, VertexHandle},
    },
};

/// Exclusive low-level access to a polyhedron for the duration of one
/// [`Polyhedron::delegate`] call.
///
/// Nothing here checks invariants. The structure may be inconsistent while
/// the modifier is in use but has to be valid again when the callback
/// returns.
pub struct Modifier<'a, K: PolyhedronTraits> {
    hds: &'a mut Polyhedron<K>,
}

impl<K: PolyhedronTraits> Deref for Modifier<'_, K> {
    type Target = Polyhedron<K>;

    fn deref(&self) -> &Self::Target {
        &*self.hds
    }
}

impl<'a, K: PolyhedronTraits> Modifier<'a, K> {
    pub fn new_vertex(&mut self, point: K::Point) -> VertexHandle {
        self.hds.new_vertex(point)
    }

    /// Appends an edge and returns its first halfedge. The two halfedges are
    /// opposite to each other and have no other links yet.
    pub fn new_edge(&mut self) -> HalfedgeHandle {
        self.hds.new_edge()
    }

    pub fn new_facet(&mut self, plane: K::Plane) -> FacetHandle {
        self.hds.new_facet(plane)
    }

    /// Sets `next(h) = n`, and `prev(n) = h` when predecessors are stored.
    pub fn set_next(&mut self, h: HalfedgeHandle, n: HalfedgeHandle) {
        self.hds.link(h, n);
    }

    pub fn set_vertex(&mut self, h: HalfedgeHandle, v: VertexHandle) {
        self.hds.set_vertex(h, v);
    }

    /// Sets the facet of `h`. A null facet makes `h` a border halfedge.
    pub fn set_facet(&mut self, h: HalfedgeHandle, f: FacetHandle) {
        self.hds.set_facet(h, f);
    }

    /// Ignored when vertices keep no backlink.
    pub fn set_vertex_halfedge(&mut self, v: VertexHandle, h: HalfedgeHandle) {
        if K::VERTEX_HALFEDGE {
            self.hds.vertices[v.0].halfedge = h;
        }
    }

    /// Ignored when facets keep no backlink.
    pub fn set_facet_halfedge(&mut self, f: FacetHandle, h: HalfedgeHandle) {
        if K::FACET_HALFEDGE {
            self.hds.faces[f.0].halfedge = h;
        }
    }

    pub fn point_mut(&mut self, v: VertexHandle) -> &mut K::Point {
        self.hds.point_mut(v)
    }

    pub fn plane_mut(&mut self, f: FacetHandle) -> &mut K::Plane {
        self.hds.plane_mut(f)
    }

    /// Polygon-soup builder writing into the same polyhedron.
    pub fn surface_builder(&mut self) -> SurfaceBuilder<'_, K> {
        SurfaceBuilder::new(&mut *self.hds)
    }
}

impl_polyhedron! {
    /// Runs `f` with exclusive low-level access to the structure and returns
    /// its result. There is no rollback: the callback is responsible for
    /// leaving a valid polyhedron behind. Debug builds validate afterwards
    /// and log a warning when it did not.
    pub fn delegate<R>(&mut self, f: impl FnOnce(&mut Modifier<'_, K>) -> R) -> R {
        let result = f(&mut Modifier { hds: &mut *self });
        if cfg!(debug_assertions) {
            if let Err(err) = self.validate(0) {
                tracing::warn!("delegate left an invalid polyhedron: {err}");
            }
        }
        result
    }
}

/// Builds surfaces from indexed polygons.
///
/// Vertices are numbered in the order they are added. Facets list vertex
/// numbers counterclockwise and share an edge by listing its endpoints in
/// opposite order. Border cycles are linked by [`SurfaceBuilder::finish`].
pub struct SurfaceBuilder<'a, K: PolyhedronTraits> {
    hds: &'a mut Polyhedron<K>,
    vertices: Vec<VertexHandle>,
    edge_map: AHashMap<(usize, usize), HalfedgeHandle>,
    created: Vec<HalfedgeHandle>,
}

impl<'a, K: PolyhedronTraits> SurfaceBuilder<'a, K> {
    pub fn new(hds: &'a mut Polyhedron<K>) -> Self {
        Self {
            hds,
            vertices: Vec::new(),
            edge_map: AHashMap::new(),
            created: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, point: K::Point) -> usize {
        self.vertices.push(self.hds.new_vertex(point));
        self.vertices.len() - 1
    }

    pub fn vertex_handle(&self, index: usize) -> Option<VertexHandle> {
        self.vertices.get(index).copied()
    }

    /// Adds a facet with a default plane. Nothing is written when the facet
    /// is rejected.
    pub fn add_facet(&mut self, polygon: &[usize]) -> Result<FacetHandle, BuildError> {
        let n = polygon.len();
        if n < 3 {
            return Err(BuildError::FacetTooSmall { len: n });
        }
        for (i, &index) in polygon.iter().enumerate() {
            if index >= self.vertices.len() {
                return Err(BuildError::UnknownVertex { index });
            }
            if polygon[..i].contains(&index) {
                return Err(BuildError::RepeatedVertex { index });
            }
        }
        for i in 0..n {
            let (from, to) = (polygon[i], polygon[(i + 1) % n]);
            if let Some(&h) = self.edge_map.get(&(from, to)) {
                if !self.hds.is_border(h) {
                    return Err(BuildError::NonManifoldEdge { from, to });
                }
            }
        }
        let h = self.push_facet(polygon);
        Ok(self.hds.facet(h))
    }

    /// Adds a facet without checking it and returns its halfedge pointing to
    /// `polygon[0]`.
    pub(crate) fn push_facet(&mut self, polygon: &[usize]) -> HalfedgeHandle {
        let n = polygon.len();
        let f = self.hds.new_facet(K::Plane::default());
        let mut ring: SmallVec<[HalfedgeHandle; 8]> = SmallVec::with_capacity(n);
        for i in 0..n {
            let (from, to) = (polygon[i], polygon[(i + 1) % n]);
            let h = match self.edge_map.get(&(from, to)) {
                Some(&h) => h,
                None => {
                    let h = self.hds.new_edge();
                    let o = self.hds.opposite(h);
                    self.hds.set_vertex(h, self.vertices[to]);
                    self.hds.set_vertex(o, self.vertices[from]);
                    self.edge_map.insert((from, to), h);
                    self.edge_map.insert((to, from), o);
                    self.created.extend([h, o]);
                    h
                }
            };
            self.hds.set_facet(h, f);
            ring.push(h);
        }
        for i in 0..n {
            self.hds.link(ring[i], ring[(i + 1) % n]);
            self.hds.set_vertex_halfedge(ring[i]);
        }
        self.hds.set_facet_halfedge(ring[0]);
        ring[n - 1]
    }

    /// Links the border halfedges into hole cycles. Fails when the facets
    /// around a vertex do not form a single fan.
    pub fn finish(self) -> Result<(), BuildError> {
        let Self { hds, vertices, created, .. } = self;
        let border: Vec<HalfedgeHandle> = created
            .iter()
            .copied()
            .filter(|&h| hds.is_border(h))
            .collect();
        let indices: AHashMap<VertexHandle, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let index_of = |v: VertexHandle| indices.get(&v).copied().unwrap_or(usize::MAX);

        // find every successor first, then link, so walks see only facet cycles
        let mut next_of = Vec::with_capacity(border.len());
        for &b in &border {
            let mut t = hds.opposite(b);
            let mut steps = 0;
            let found = loop {
                let cand = hds.opposite(hds.prev(t));
                if hds.is_border(cand) {
                    break cand;
                }
                t = cand;
                steps += 1;
                if steps > created.len() {
                    return Err(BuildError::OpenBorderFan { index: index_of(hds.vertex(b)) });
                }
            };
            next_of.push(found);
        }
        for (&b, &n) in border.iter().zip(&next_of) {
            hds.link(b, n);
            hds.set_vertex_halfedge(b);
        }

        // a vertex whose halfedges split into several fans is pinched
        let mut incoming = vec![0usize; vertices.len()];
        for &h in &created {
            let i = index_of(hds.vertex(h));
            if i < incoming.len() {
                incoming[i] += 1;
            }
        }
        for (i, &v) in vertices.iter().enumerate() {
            let h = hds.vertex_halfedge(v);
            if incoming[i] > 0 && !h.is_null() && hds.vertex_degree(h) != incoming[i] {
                return Err(BuildError::OpenBorderFan { index: i });
            }
        }
        tracing::debug!(
            "built {} vertices, {} halfedges, {} border halfedges",
            vertices.len(),
            created.len(),
            border.len()
        );
        Ok(())
    }
}
