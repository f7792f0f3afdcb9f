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

pub mod basic_types;
pub mod builder;
pub mod components;
pub mod core;
pub mod euler;
pub mod face;
pub mod half_edge;
pub mod handles;
pub mod holes;
pub mod loops;
pub mod normalize;
pub mod topology;
pub mod validity;
pub mod vertex;

/// Opens an `impl` block valid for every configuration.
#[macro_export]
#[doc(hidden)]
macro_rules! impl_polyhedron {
    ($($items:item)*) => {
        impl<K: $crate::kernel::PolyhedronTraits> $crate::mesh::basic_types::Polyhedron<K> {
            $($items)*
        }
    };
}

/// Opens an `impl` block only available when the configuration allows
/// elements to be erased.
#[macro_export]
#[doc(hidden)]
macro_rules! impl_removal {
    ($($items:item)*) => {
        impl<K: $crate::kernel::SupportsRemoval> $crate::mesh::basic_types::Polyhedron<K> {
            $($items)*
        }
    };
}
