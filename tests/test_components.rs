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

use polyhedra::{HalfedgeHandle, Items, Polyhedron, TopologyError};

type Poly = Polyhedron<Items>;
type Labeled = Polyhedron<Items<u32>>;

#[test]
fn test_keep_largest_of_two_tetrahedra() {
    let mut poly = Poly::new();
    poly.make_tetrahedron();
    poly.make_tetrahedron();
    assert_eq!(poly.connected_components().len(), 2);

    assert_eq!(poly.keep_largest_connected_components(1), 1);
    assert_eq!(poly.size_of_vertices(), 4);
    assert_eq!(poly.size_of_halfedges(), 12);
    assert_eq!(poly.size_of_facets(), 4);
    let h = poly.halfedges().next().unwrap();
    assert!(poly.is_tetrahedron(h));
    assert!(poly.vertices().all(|v| poly.vertex_degree_of(v) == 3));
    assert!(poly.is_valid(false, 0));
}

#[test]
fn test_ranking_by_facets() {
    let mut poly = Labeled::new();
    poly.make_triangle_with(1, 2, 3);
    poly.make_tetrahedron_with(4, 5, 6, 7);
    poly.make_triangle_with(8, 9, 10);

    assert_eq!(poly.keep_largest_connected_components(1), 2);
    let mut points: Vec<u32> = poly.points().copied().collect();
    points.sort();
    assert_eq!(points, vec![4, 5, 6, 7]);
}

#[test]
fn test_ties_keep_storage_order() {
    let mut poly = Labeled::new();
    poly.make_triangle_with(1, 2, 3);
    poly.make_triangle_with(4, 5, 6);
    assert_eq!(poly.keep_largest_connected_components(1), 1);
    let mut points: Vec<u32> = poly.points().copied().collect();
    points.sort();
    assert_eq!(points, vec![1, 2, 3]);
}

#[test]
fn test_keep_more_than_present() {
    let mut poly = Poly::new();
    poly.make_tetrahedron();
    poly.make_triangle();
    assert_eq!(poly.keep_largest_connected_components(5), 0);
    assert_eq!(poly.size_of_facets(), 5);
}

#[test]
fn test_keep_zero_erases_everything() {
    let mut poly = Poly::new();
    poly.make_tetrahedron();
    poly.make_triangle();
    assert_eq!(poly.keep_largest_connected_components(0), 2);
    assert!(poly.is_empty());
}

#[test]
fn test_isolated_vertices_are_pruned_but_not_counted() {
    let mut poly = Poly::new();
    poly.make_tetrahedron();
    let lonely = poly.delegate(|m| m.new_vertex(()));
    assert_eq!(poly.size_of_vertices(), 5);
    assert!(poly.is_valid(false, 0));

    assert_eq!(poly.keep_largest_connected_components(1), 0);
    assert_eq!(poly.size_of_vertices(), 4);
    assert!(!poly.is_live_vertex(lonely));
}

#[test]
fn test_component_contents() {
    let mut poly = Poly::new();
    let t = poly.make_tetrahedron();
    let h = poly.make_triangle();
    let hole = poly.opposite(h);

    let tetra = poly.connected_component(t);
    assert_eq!(tetra.halfedges.len(), 12);
    assert_eq!(tetra.size_of_edges(), 6);
    assert_eq!(tetra.vertices.len(), 4);
    assert_eq!(tetra.facets.len(), 4);

    let tri = poly.connected_component(hole);
    assert_eq!(tri.halfedges.len(), 6);
    assert_eq!(tri.vertices.len(), 3);
    assert_eq!(tri.facets.len(), 1, "holes are not facets");
    assert_eq!(tri.halfedges[0], hole);
}

#[test]
fn test_erase_connected_component() {
    let mut poly = Poly::new();
    let t = poly.make_tetrahedron();
    let h = poly.make_triangle();
    poly.erase_connected_component(t).unwrap();
    assert_eq!(poly.size_of_vertices(), 3);
    assert_eq!(poly.size_of_halfedges(), 6);
    assert_eq!(poly.size_of_facets(), 1);
    assert!(poly.is_triangle_component(h));
    assert!(poly.is_valid(false, 0));

    poly.erase_connected_component(h).unwrap();
    assert!(poly.is_empty());
}

#[test]
fn test_erase_component_rejects_stale_handles() {
    let mut poly = Poly::new();
    let t = poly.make_tetrahedron();
    let h = poly.make_triangle();

    assert!(matches!(
        poly.erase_connected_component(HalfedgeHandle::NULL),
        Err(TopologyError::InvalidHandle { .. })
    ));
    poly.erase_connected_component(t).unwrap();
    assert!(matches!(
        poly.erase_connected_component(t),
        Err(TopologyError::InvalidHandle { .. })
    ));
    assert_eq!(poly.size_of_vertices(), 3);
    assert_eq!(poly.size_of_halfedges(), 6);
    assert_eq!(poly.size_of_facets(), 1);
    assert!(poly.is_triangle_component(h));
    assert!(poly.is_valid(false, 0));
}
