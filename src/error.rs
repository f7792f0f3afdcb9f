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

use thiserror::Error;

use crate::mesh::handles::{FacetHandle, HalfedgeHandle, VertexHandle};

/// Rejection of an Euler operator or accessor call.
///
/// Operators check their preconditions before writing anything, so a call
/// that returns an error leaves the polyhedron exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("{op}: halfedge {handle:?} is null, erased or out of range")]
    InvalidHandle {
        op: &'static str,
        handle: HalfedgeHandle,
    },

    #[error("{op}: precondition violated: {reason}")]
    PreconditionViolation {
        op: &'static str,
        reason: &'static str,
    },
}

impl TopologyError {
    pub(crate) fn violation(op: &'static str, reason: &'static str) -> Self {
        TopologyError::PreconditionViolation { op, reason }
    }
}

/// Failure while assembling a surface from indexed polygons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("facet refers to unknown vertex index {index}")]
    UnknownVertex { index: usize },

    #[error("facet has {len} vertices, at least 3 are required")]
    FacetTooSmall { len: usize },

    #[error("vertex index {index} appears twice in the same facet")]
    RepeatedVertex { index: usize },

    #[error("directed edge ({from}, {to}) is already used by another facet")]
    NonManifoldEdge { from: usize, to: usize },

    #[error("border around vertex index {index} cannot be closed")]
    OpenBorderFan { index: usize },
}

/// First combinatorial inconsistency found by [`Polyhedron::validate`](crate::Polyhedron::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidityError {
    #[error("halfedge {0:?} links to a null or erased element")]
    DanglingLink(HalfedgeHandle),

    #[error("halfedge {0:?} is not the opposite of its opposite")]
    OppositeMismatch(HalfedgeHandle),

    #[error("halfedge {0:?} is not the stored predecessor of its successor")]
    PrevMismatch(HalfedgeHandle),

    #[error("halfedge {0:?} and its successor disagree on facet or hole")]
    MixedCycle(HalfedgeHandle),

    #[error("halfedge {0:?} does not start where its predecessor ends")]
    VertexMismatch(HalfedgeHandle),

    #[error("next-cycle through {0:?} does not close")]
    OpenCycle(HalfedgeHandle),

    #[error("facet {facet:?} has degree {degree}, at least 3 is required")]
    FacetTooSmall { facet: FacetHandle, degree: usize },

    #[error("facet {0:?} is bounded by more than one cycle or by none")]
    FacetCycleCount(FacetHandle),

    #[error("facet {0:?} stores a halfedge outside of its cycle")]
    FacetBacklink(FacetHandle),

    #[error("edge {0:?} has the same facet on both sides")]
    SameFacetOnBothSides(HalfedgeHandle),

    #[error("edge {0:?} is border on both sides but the surface has facets")]
    IsolatedEdge(HalfedgeHandle),

    #[error("vertex {0:?} stores a halfedge that does not point to it")]
    VertexBacklink(VertexHandle),

    #[error("vertex {0:?} has halfedges in more than one vertex cycle")]
    VertexCycleCount(VertexHandle),

    #[error("stored element counts disagree with the arenas")]
    CountMismatch,

    #[error("border is not normalized: {0}")]
    BorderNotNormalized(&'static str),
}
