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

use polyhedra::{FixedItems, HalfedgeHandle, Items, Polyhedron, VertexHandle};

type Poly = Polyhedron<Items>;
type Labeled = Polyhedron<Items<u32>>;

#[test]
fn test_new_is_empty() {
    let poly = Poly::new();
    assert!(poly.is_empty());
    assert_eq!(poly.size_of_vertices(), 0);
    assert_eq!(poly.size_of_halfedges(), 0);
    assert_eq!(poly.size_of_facets(), 0);
    assert!(poly.is_valid(false, 0));
}

#[test]
fn test_null_handles() {
    assert!(HalfedgeHandle::default().is_null());
    assert_eq!(HalfedgeHandle::default(), HalfedgeHandle::NULL);
    assert!(VertexHandle::NULL.is_null());
    assert_eq!(format!("{:?}", HalfedgeHandle::NULL), "h-");
}

#[test]
fn test_make_tetrahedron_counts() {
    let mut poly = Poly::new();
    let h = poly.make_tetrahedron();
    assert_eq!(poly.size_of_vertices(), 4);
    assert_eq!(poly.size_of_halfedges(), 12);
    assert_eq!(poly.size_of_facets(), 4);
    assert!(poly.is_closed());
    assert!(poly.is_valid(false, 0));
    assert!(poly.is_tetrahedron(h));
    assert!(!poly.is_empty());
}

#[test]
fn test_make_triangle_counts() {
    let mut poly = Poly::new();
    let h = poly.make_triangle();
    assert_eq!(poly.size_of_vertices(), 3);
    assert_eq!(poly.size_of_halfedges(), 6);
    assert_eq!(poly.size_of_facets(), 1);
    assert!(!poly.is_closed());
    assert!(poly.is_valid(false, 0));
    assert!(!poly.is_border(h));
    assert!(poly.is_border(poly.opposite(h)));

    poly.normalize_border();
    assert_eq!(poly.size_of_border_edges(), 3);
    assert_eq!(poly.size_of_border_halfedges(), 3);
}

#[test]
fn test_constructor_point_order() {
    let mut poly = Labeled::new();
    let h = poly.make_tetrahedron_with(1, 2, 3, 4);
    assert_eq!(*poly.point(poly.vertex(h)), 1);
    assert_eq!(*poly.point(poly.vertex(poly.next(h))), 2);
    assert_eq!(*poly.point(poly.vertex(poly.next(poly.next(h)))), 3);
    assert_eq!(*poly.point(poly.source(h)), 3);

    let apex = poly.vertex(poly.next(poly.opposite(h)));
    assert_eq!(*poly.point(apex), 4, "opposite side of the base edge reaches the apex");

    let mut tri = Labeled::new();
    let t = tri.make_triangle_with(7, 8, 9);
    assert_eq!(*tri.point(tri.vertex(t)), 7);
    assert_eq!(*tri.point(tri.vertex(tri.next(t))), 8);
    assert_eq!(*tri.point(tri.vertex(tri.prev(t))), 9);
}

#[test]
fn test_reserve_keeps_handles() {
    let mut poly = Labeled::new();
    let h = poly.make_tetrahedron_with(10, 20, 30, 40);
    let v = poly.vertex(h);
    poly.reserve(1000, 4000, 2000);
    assert!(poly.capacity_of_vertices() >= 1000);
    assert!(poly.capacity_of_halfedges() >= 4000);
    assert!(poly.capacity_of_facets() >= 2000);
    assert!(poly.is_live_halfedge(h));
    assert_eq!(poly.vertex(h), v);
    assert_eq!(*poly.point(v), 10);

    let before = poly.capacity_of_halfedges();
    poly.reserve(1, 1, 1);
    assert_eq!(poly.capacity_of_halfedges(), before, "smaller request is a no-op");
}

#[test]
fn test_clear() {
    let mut poly = Poly::with_capacity(8, 24, 8);
    poly.make_tetrahedron();
    poly.make_triangle();
    poly.clear();
    assert!(poly.is_empty());
    assert_eq!(poly.halfedges().count(), 0);
    assert!(poly.capacity_of_halfedges() >= 24);
    assert!(poly.is_valid(false, 0));
}

#[test]
fn test_erased_slots_are_reused() {
    let mut poly = Poly::new();
    let h = poly.make_triangle();
    poly.erase_facet(h).unwrap();
    assert!(poly.is_empty());
    assert!(!poly.is_live_halfedge(h));

    poly.make_triangle();
    assert_eq!(poly.size_of_halfedges(), 6);
    assert!(poly.halfedges().all(|h| h.index() < 6));
    assert!(poly.vertices().all(|v| v.index() < 3));
    assert!(poly.is_valid(false, 0));
}

#[test]
fn test_iterators_and_payloads() {
    let mut poly: Polyhedron<Items<u32, i64>> = Polyhedron::new();
    poly.make_tetrahedron_with(1, 2, 3, 4);
    assert_eq!(poly.vertices().count(), 4);
    assert_eq!(poly.facets().count(), 4);
    assert_eq!(poly.edges().count(), 6);
    let mut points: Vec<u32> = poly.points().copied().collect();
    points.sort();
    assert_eq!(points, vec![1, 2, 3, 4]);

    let f = poly.facets().next().unwrap();
    *poly.plane_mut(f) = -5;
    assert_eq!(*poly.plane(f), -5);
    assert_eq!(poly.planes().filter(|&&q| q == -5).count(), 1);

    let v = poly.vertices().next().unwrap();
    *poly.point_mut(v) = 99;
    assert_eq!(*poly.point(v), 99);
    assert_eq!(poly.vertex(poly.vertex_halfedge(v)), v);
    assert_eq!(poly.facet(poly.facet_halfedge(f)), f);
}

#[test]
fn test_fixed_items_constructs() {
    let mut poly: Polyhedron<FixedItems> = Polyhedron::new();
    let h = poly.make_tetrahedron();
    let e = poly.split_edge(h).unwrap();
    assert_eq!(poly.next(e), h);
    assert_eq!(poly.size_of_vertices(), 5);
    assert!(poly.is_valid(false, 0));
}
