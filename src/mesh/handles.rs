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

use std::fmt;

pub(crate) const NULL_INDEX: usize = usize::MAX;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// The null handle. Equal to `Self::default()`.
            pub const NULL: Self = Self(NULL_INDEX);

            #[inline]
            pub fn is_null(self) -> bool {
                self.0 == NULL_INDEX
            }

            /// Arena slot of the element.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }

            #[inline]
            pub(crate) fn new(index: usize) -> Self {
                Self(index)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NULL
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_null() {
                    write!(f, concat!($tag, "-"))
                } else {
                    write!(f, concat!($tag, "{}"), self.0)
                }
            }
        }
    };
}

define_handle!(
    /// Non-owning reference to a vertex.
    VertexHandle,
    "v"
);

define_handle!(
    /// Non-owning reference to a halfedge. Halfedges live in opposite pairs,
    /// so a handle also names its edge.
    HalfedgeHandle,
    "h"
);

define_handle!(
    /// Non-owning reference to a facet. A null facet handle on a halfedge
    /// marks it as a border halfedge.
    FacetHandle,
    "f"
);

impl HalfedgeHandle {
    /// Slot of the opposite halfedge. Edges are allocated as `2k, 2k+1`.
    #[inline]
    pub(crate) fn pair(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Slot of the first halfedge of this edge.
    #[inline]
    pub(crate) fn edge_base(self) -> usize {
        self.0 & !1
    }
}
