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

use std::{fmt::Debug, marker::PhantomData};

/// Compile-time configuration of a [`Polyhedron`](crate::Polyhedron).
///
/// `Point` and `Plane` are the geometric payloads stored in vertices and
/// facets. The structure only clones and hands them back; use `()` when a
/// payload is not wanted. The boolean flags select which optional adjacency
/// links are maintained. Disabled links are never written and never read,
/// and every query that would need them falls back to walking cycles.
pub trait PolyhedronTraits: Clone + Debug + Default {
    type Point: Clone + Default + Debug;
    type Plane: Clone + Default + Debug;

    /// Halfedges store their predecessor, making `prev` O(1).
    const HALFEDGE_PREV: bool = true;
    /// Vertices store one incident halfedge.
    const VERTEX_HALFEDGE: bool = true;
    /// Facets store one incident halfedge.
    const FACET_HALFEDGE: bool = true;
}

/// Marker for configurations that allow individual elements to be erased.
///
/// Operators that delete vertices, edges or facets (`join_*`, `erase_*`,
/// `make_hole`, `keep_largest_connected_components`) are only implemented for
/// polyhedra whose configuration carries this marker.
pub trait SupportsRemoval: PolyhedronTraits {}

/// Full-featured configuration: every link is stored and removal is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Items<P = (), Q = ()>(PhantomData<(P, Q)>);

impl<P, Q> PolyhedronTraits for Items<P, Q>
where
    P: Clone + Default + Debug,
    Q: Clone + Default + Debug,
{
    type Point = P;
    type Plane = Q;
}

impl<P, Q> SupportsRemoval for Items<P, Q>
where
    P: Clone + Default + Debug,
    Q: Clone + Default + Debug,
{
}

/// Singly linked halfedges: `prev` is recovered by walking `next`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardItems<P = (), Q = ()>(PhantomData<(P, Q)>);

impl<P, Q> PolyhedronTraits for ForwardItems<P, Q>
where
    P: Clone + Default + Debug,
    Q: Clone + Default + Debug,
{
    type Point = P;
    type Plane = Q;

    const HALFEDGE_PREV: bool = false;
}

impl<P, Q> SupportsRemoval for ForwardItems<P, Q>
where
    P: Clone + Default + Debug,
    Q: Clone + Default + Debug,
{
}

/// Construction-only configuration. Surfaces can grow and be rewired, but no
/// operator that erases elements is available.
///
/// ```
/// use polyhedra::{FixedItems, Polyhedron};
///
/// let mut poly: Polyhedron<FixedItems> = Polyhedron::new();
/// let h = poly.make_tetrahedron();
/// poly.split_edge(h).unwrap();
/// assert_eq!(poly.size_of_vertices(), 5);
/// ```
///
/// Removal does not compile:
///
/// ```compile_fail
/// use polyhedra::{FixedItems, Polyhedron};
///
/// let mut poly: Polyhedron<FixedItems> = Polyhedron::new();
/// let h = poly.make_tetrahedron();
/// poly.join_facet(h).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedItems<P = (), Q = ()>(PhantomData<(P, Q)>);

impl<P, Q> PolyhedronTraits for FixedItems<P, Q>
where
    P: Clone + Default + Debug,
    Q: Clone + Default + Debug,
{
    type Point = P;
    type Plane = Q;
}
