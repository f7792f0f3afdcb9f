// tests/test_random_ops.rs
use polyhedra::{
    FacetHandle, ForwardItems, HalfedgeHandle, Items, Polyhedron, SupportsRemoval, TopologyError,
    VertexHandle,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const MAX_FACETS: usize = 80;

fn sizes<K: SupportsRemoval>(poly: &Polyhedron<K>) -> (usize, usize, usize) {
    (
        poly.size_of_vertices(),
        poly.size_of_halfedges(),
        poly.size_of_facets(),
    )
}

fn euler_characteristic<K: SupportsRemoval>(poly: &Polyhedron<K>) -> isize {
    let (v, h, f) = sizes(poly);
    v as isize - (h / 2) as isize + f as isize
}

type Link = (HalfedgeHandle, HalfedgeHandle, HalfedgeHandle, VertexHandle, FacetHandle);

fn links<K: SupportsRemoval>(poly: &Polyhedron<K>) -> Vec<Link> {
    poly.halfedges()
        .map(|h| (h, poly.opposite(h), poly.next(h), poly.vertex(h), poly.facet(h)))
        .collect()
}

/// Applies one randomly chosen operator to `h`. `None` when the operator
/// was not attempted.
fn random_op<K: SupportsRemoval>(
    poly: &mut Polyhedron<K>,
    rng: &mut StdRng,
    h: HalfedgeHandle,
) -> Option<Result<HalfedgeHandle, TopologyError>> {
    let grow = poly.size_of_facets() < MAX_FACETS;
    let result = match rng.random_range(0..8) {
        0 if grow => poly.split_edge(h),
        1 if grow => {
            let ring: Vec<_> = poly.halfedges_around_facet(h).collect();
            if ring.len() < 4 {
                return None;
            }
            let g = ring[rng.random_range(2..ring.len() - 1)];
            poly.split_facet(h, g)
        }
        2 if grow => {
            let ring: Vec<_> = poly.halfedges_around_vertex(h).collect();
            if ring.len() < 2 {
                return None;
            }
            let g = ring[rng.random_range(1..ring.len())];
            poly.split_vertex(h, g)
        }
        3 => poly.flip_edge(h),
        4 if grow => poly.create_center_vertex(h),
        5 => poly.join_facet(h),
        6 => poly.join_vertex(h),
        7 => poly.erase_center_vertex(h),
        _ => return None,
    };
    Some(result)
}

fn drive<K: SupportsRemoval>(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut poly: Polyhedron<K> = Polyhedron::new();
    poly.make_tetrahedron();
    let mut applied = 0;

    for step in 0..steps {
        let live: Vec<HalfedgeHandle> = poly.halfedges().collect();
        let h = live[rng.random_range(0..live.len())];
        let before = (sizes(&poly), links(&poly));
        let Some(result) = random_op(&mut poly, &mut rng, h) else {
            continue;
        };
        match result {
            Ok(r) => {
                applied += 1;
                assert!(poly.is_live_halfedge(r), "seed {seed} step {step}");
            }
            Err(_) => assert_eq!((sizes(&poly), links(&poly)), before, "seed {seed} step {step}"),
        }
        assert_eq!(poly.validate(0), Ok(()), "seed {seed} step {step}");
        assert!(poly.is_closed(), "seed {seed} step {step}");
        assert_eq!(euler_characteristic(&poly), 2, "seed {seed} step {step}");
    }
    assert!(applied > 0);
}

#[test]
fn test_random_operators_keep_sphere_valid() {
    for seed in [1, 7, 42] {
        drive::<Items>(seed, 400);
    }
}

#[test]
fn test_random_operators_without_stored_prev() {
    for seed in [3, 11] {
        drive::<ForwardItems>(seed, 400);
    }
}

/// Like [`random_op`], but mixes in the hole and loop operators. The
/// surface is not kept closed.
fn random_border_op<K: SupportsRemoval>(
    poly: &mut Polyhedron<K>,
    rng: &mut StdRng,
    h: HalfedgeHandle,
) -> Option<Result<(), TopologyError>> {
    let grow = poly.size_of_facets() < MAX_FACETS;
    let result = match rng.random_range(0..9) {
        0 => poly.make_hole(h).map(|_| ()),
        1 => poly.erase_facet(h),
        2 if grow => poly.fill_hole(h).map(|_| ()),
        3 | 4 if grow => {
            if !poly.is_border(h) {
                return None;
            }
            let ring: Vec<_> = poly.halfedges_around_facet(h).collect();
            let g = ring[rng.random_range(0..ring.len())];
            if rng.random_bool(0.5) {
                poly.add_facet_to_border(h, g).map(|_| ())
            } else {
                poly.add_vertex_and_facet_to_border(h, g).map(|_| ())
            }
        }
        5 if grow => {
            // i leaves vertex(h), j closes the path back to source(h)
            let outgoing: Vec<_> = poly
                .halfedges_around_vertex(h)
                .map(|x| poly.opposite(x))
                .collect();
            let i = outgoing[rng.random_range(0..outgoing.len())];
            let j = poly
                .halfedges_around_vertex(poly.opposite(h))
                .find(|&x| poly.source(x) == poly.vertex(i))?;
            poly.split_loop(h, i, j).map(|_| ())
        }
        6 => {
            let degree = poly.facet_degree(h);
            let same: Vec<_> = poly
                .halfedges()
                .filter(|&x| poly.facet_degree(x) == degree)
                .collect();
            let g = same[rng.random_range(0..same.len())];
            poly.join_loop(h, g).map(|_| ())
        }
        _ => random_op(poly, rng, h)?.map(|_| ()),
    };
    Some(result)
}

fn drive_border<K: SupportsRemoval>(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut poly: Polyhedron<K> = Polyhedron::new();
    poly.make_tetrahedron();
    let mut applied = 0;

    for step in 0..steps {
        if poly.size_of_halfedges() == 0 {
            poly.clear();
            poly.make_tetrahedron();
        }
        let live: Vec<HalfedgeHandle> = poly.halfedges().collect();
        let h = live[rng.random_range(0..live.len())];
        let before = (sizes(&poly), links(&poly));
        let Some(result) = random_border_op(&mut poly, &mut rng, h) else {
            continue;
        };
        match result {
            Ok(()) => {
                applied += 1;
                assert_eq!(poly.validate(0), Ok(()), "seed {seed} step {step}");
            }
            Err(_) => assert_eq!((sizes(&poly), links(&poly)), before, "seed {seed} step {step}"),
        }
    }
    assert!(applied > 0);
}

#[test]
fn test_random_border_and_loop_operators() {
    for seed in [5, 17, 23] {
        drive_border::<Items>(seed, 400);
    }
}

#[test]
fn test_random_border_operators_without_stored_prev() {
    for seed in [8, 31] {
        drive_border::<ForwardItems>(seed, 400);
    }
}

#[test]
fn test_random_operators_then_normalize() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut poly: Polyhedron<Items> = Polyhedron::new();
    poly.make_tetrahedron();
    for _ in 0..200 {
        let live: Vec<HalfedgeHandle> = poly.halfedges().collect();
        let h = live[rng.random_range(0..live.len())];
        let _ = random_op(&mut poly, &mut rng, h);
    }
    let h = poly.halfedges().next().unwrap();
    poly.make_hole(h).unwrap();
    poly.normalize_border();
    assert_eq!(poly.validate(1), Ok(()));
    let hole = poly.border_halfedges().next().unwrap();
    assert!(poly.is_border(hole));
    assert_eq!(poly.size_of_border_halfedges(), poly.facet_degree(hole));
    assert_eq!(poly.opposite(poly.border_halfedges_begin()), hole);
}
