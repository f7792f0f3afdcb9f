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

//! Halfedge polyhedral surfaces.
//!
//! A [`Polyhedron`] stores vertices, halfedges and facets in index arenas and
//! exposes Euler operators that rewrite the combinatorial structure while
//! keeping it a valid oriented 2-manifold with boundary. Geometry is opaque:
//! points and plane equations are carried around but never looked at.

pub mod error;
pub mod kernel;
pub mod mesh;

pub use error::{BuildError, TopologyError, ValidityError};
pub use kernel::{FixedItems, ForwardItems, Items, PolyhedronTraits, SupportsRemoval};
pub use mesh::{
    basic_types::Polyhedron,
    builder::{Modifier, SurfaceBuilder},
    components::ConnectedComponent,
    handles::{FacetHandle, HalfedgeHandle, VertexHandle},
    topology::{HalfedgesAroundFacet, HalfedgesAroundVertex},
};
