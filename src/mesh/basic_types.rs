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
    kernel::PolyhedronTraits,
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
};

/// Border statistics recorded by the last `normalize_border()` call.
///
/// Not kept up to date by other operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BorderSnapshot {
    pub start: usize, // slot of the first halfedge of the first border edge
    pub halfedges: usize,
    pub edges: usize,
}

/// Polyhedral surface stored as a halfedge data structure.
///
/// Vertices, halfedges and facets live in index arenas. Erased elements
/// leave tombstones whose slots are recycled by later insertions, so growing
/// the arenas never moves an existing element and handles stay valid until
/// their element is erased. The two halfedges of an edge always occupy the
/// slots `2k` and `2k + 1`.
#[derive(Debug, Clone, Default)]
pub struct Polyhedron<K: PolyhedronTraits> {
    pub(crate) vertices: Vec<Vertex<K::Point>>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face<K::Plane>>,

    pub(crate) free_vertices: Vec<usize>,
    pub(crate) free_edges: Vec<usize>,
    pub(crate) free_faces: Vec<usize>,

    pub(crate) live_vertices: usize,
    pub(crate) live_half_edges: usize,
    pub(crate) live_faces: usize,

    pub(crate) border: BorderSnapshot,
    pub(crate) traits: K,
}
