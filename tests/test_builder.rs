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

use polyhedra::{BuildError, ForwardItems, Items, Polyhedron, PolyhedronTraits, SurfaceBuilder};

fn bipyramid<K: PolyhedronTraits>(poly: &mut Polyhedron<K>) -> Result<(), BuildError> {
    let mut b = SurfaceBuilder::new(poly);
    for _ in 0..5 {
        b.add_vertex(K::Point::default());
    }
    for facet in [[0, 1, 3], [1, 2, 3], [2, 0, 3], [1, 0, 4], [2, 1, 4], [0, 2, 4]] {
        b.add_facet(&facet)?;
    }
    b.finish()
}

#[test]
fn test_closed_bipyramid() {
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    assert_eq!(bipyramid(&mut poly), Ok(()));
    assert_eq!(poly.size_of_vertices(), 5);
    assert_eq!(poly.size_of_halfedges(), 18);
    assert_eq!(poly.size_of_facets(), 6);
    assert!(poly.is_closed());
    assert!(poly.is_pure_triangle());
    assert!(poly.is_valid(false, 0));

    let mut degrees: Vec<usize> = poly.vertices().map(|v| poly.vertex_degree_of(v)).collect();
    degrees.sort();
    assert_eq!(degrees, vec![3, 3, 4, 4, 4]);
}

#[test]
fn test_large_quad_grid() {
    const N: usize = 60;
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    let mut b = SurfaceBuilder::new(&mut poly);
    for _ in 0..(N + 1) * (N + 1) {
        b.add_vertex(());
    }
    let at = |i: usize, j: usize| i * (N + 1) + j;
    for i in 0..N {
        for j in 0..N {
            b.add_facet(&[at(i, j), at(i, j + 1), at(i + 1, j + 1), at(i + 1, j)])
                .unwrap();
        }
    }
    b.finish().unwrap();

    assert_eq!(poly.size_of_vertices(), (N + 1) * (N + 1));
    assert_eq!(poly.size_of_facets(), N * N);
    assert_eq!(poly.size_of_halfedges(), 4 * N * (N + 1));
    assert!(poly.is_pure_quad());
    assert!(poly.is_valid(false, 0));
    let border: Vec<_> = poly.halfedges().filter(|&h| poly.is_border(h)).collect();
    assert_eq!(border.len(), 4 * N);
    assert_eq!(poly.facet_degree(border[0]), 4 * N);
}

#[test]
fn test_forward_items_bipyramid() {
    let mut poly: Polyhedron<ForwardItems> = Polyhedron::new();
    assert_eq!(bipyramid(&mut poly), Ok(()));
    assert!(poly.is_closed());
    assert!(poly.is_valid(false, 0));
    for h in poly.halfedges() {
        assert_eq!(poly.next(poly.prev(h)), h);
    }
}

#[test]
fn test_open_strip_gets_one_hole() {
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    let mut b = SurfaceBuilder::new(&mut poly);
    for _ in 0..4 {
        b.add_vertex(());
    }
    b.add_facet(&[0, 1, 2]).unwrap();
    b.add_facet(&[0, 2, 3]).unwrap();
    b.finish().unwrap();

    assert!(poly.is_valid(false, 0));
    let border: Vec<_> = poly.halfedges().filter(|&h| poly.is_border(h)).collect();
    assert_eq!(border.len(), 4);
    assert_eq!(poly.facet_degree(border[0]), 4);
    for &h in &border {
        assert!(poly.is_border(poly.next(h)));
    }
}

#[test]
fn test_rejected_facets_write_nothing() {
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    let mut b = SurfaceBuilder::new(&mut poly);
    for _ in 0..4 {
        b.add_vertex(());
    }
    b.add_facet(&[0, 1, 2]).unwrap();

    assert_eq!(b.add_facet(&[0, 1]), Err(BuildError::FacetTooSmall { len: 2 }));
    assert_eq!(b.add_facet(&[0, 1, 9]), Err(BuildError::UnknownVertex { index: 9 }));
    assert_eq!(b.add_facet(&[0, 3, 0]), Err(BuildError::RepeatedVertex { index: 0 }));
    assert_eq!(
        b.add_facet(&[3, 0, 1]),
        Err(BuildError::NonManifoldEdge { from: 0, to: 1 })
    );
    b.finish().unwrap();

    assert_eq!(poly.size_of_vertices(), 4);
    assert_eq!(poly.size_of_halfedges(), 6);
    assert_eq!(poly.size_of_facets(), 1);
}

#[test]
fn test_pinched_vertex_fails_to_close() {
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    let mut b = SurfaceBuilder::new(&mut poly);
    for _ in 0..5 {
        b.add_vertex(());
    }
    b.add_facet(&[0, 1, 2]).unwrap();
    b.add_facet(&[0, 3, 4]).unwrap();
    assert_eq!(b.finish(), Err(BuildError::OpenBorderFan { index: 0 }));
}

#[test]
fn test_points_are_kept() {
    let mut poly: Polyhedron<Items<[f64; 3]>> = Polyhedron::new();
    let corners = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let mut b = SurfaceBuilder::new(&mut poly);
    for p in corners {
        b.add_vertex(p);
    }
    let f = b.add_facet(&[0, 1, 2]).unwrap();
    assert!(!f.is_null());
    b.finish().unwrap();

    let stored: Vec<[f64; 3]> = poly.points().cloned().collect();
    assert_eq!(stored, corners.to_vec());
    let h = poly.facet_halfedge(f);
    let p = poly.point(poly.vertex(h));
    assert!(corners.contains(p));
}

#[test]
fn test_delegate_returns_value() {
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    poly.make_tetrahedron();
    let n = poly.delegate(|m| m.size_of_vertices());
    assert_eq!(n, 4);

    let built = poly.delegate(|m| {
        let mut b = m.surface_builder();
        for _ in 0..3 {
            b.add_vertex(());
        }
        b.add_facet(&[0, 1, 2]).map(|_| ())?;
        b.finish()
    });
    assert_eq!(built, Ok(()));
    assert_eq!(poly.size_of_vertices(), 7);
    assert_eq!(poly.size_of_facets(), 5);
    assert!(poly.is_valid(false, 0));
}

#[test]
fn test_raw_modifier_triangle() {
    let mut poly: Polyhedron<Items<u8, u8>> = Polyhedron::new();
    poly.delegate(|m| {
        let vs = [m.new_vertex(1), m.new_vertex(2), m.new_vertex(3)];
        let f = m.new_facet(7);
        let mut inner = Vec::new();
        let mut outer = Vec::new();
        for i in 0..3 {
            let h = m.new_edge();
            let o = m.opposite(h);
            m.set_vertex(h, vs[(i + 1) % 3]);
            m.set_vertex(o, vs[i]);
            m.set_facet(h, f);
            m.set_vertex_halfedge(vs[(i + 1) % 3], h);
            inner.push(h);
            outer.push(o);
        }
        for i in 0..3 {
            m.set_next(inner[i], inner[(i + 1) % 3]);
            m.set_next(outer[(i + 1) % 3], outer[i]);
        }
        m.set_facet_halfedge(f, inner[0]);
        *m.plane_mut(f) += 1;
    });

    assert!(poly.is_valid(false, 0));
    assert_eq!(poly.size_of_facets(), 1);
    let f = poly.facets().next().unwrap();
    assert_eq!(*poly.plane(f), 8);
    assert!(poly.is_triangle_component(poly.facet_halfedge(f)));
}
