use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::Rng;

use fieldgeo::entities::Field;
use fieldgeo::geometry::Geometry;
use fieldgeo::geometry::geo_enums::DrawType;
use fieldgeo::geometry::primitives::{GeoCircle, Point, Polygon};
use fieldgeo::lookup::{find_containing_field, find_nearest_field};
use fieldgeo::ndvi::build_gradient_grid;
use fieldgeo::selector::select_fields_in_polygon;

criterion_main!(benches);
criterion_group!(benches, lookup_bench, selector_bench, gradient_grid_bench);

const N_FIELDS: [usize; 3] = [100, 1_000, 10_000];
const N_QUERIES: usize = 1_000;
const ORIGIN: Point = Point(-4.2, 104.0);

/// Plantation-like layout: rows of slightly irregular quadrilaterals, every tenth field a circle
fn create_fields(n: usize, rng: &mut SmallRng) -> Vec<Field> {
    let per_row = (n as f64).sqrt().ceil() as usize;
    let size = 0.002;
    (0..n)
        .map(|i| {
            let lat = ORIGIN.lat() + (i / per_row) as f64 * size;
            let lng = ORIGIN.lng() + (i % per_row) as f64 * size;
            let id = i as i64;
            match i % 10 {
                9 => Field::new(
                    id,
                    None,
                    DrawType::Circle,
                    Geometry::Circle(GeoCircle::new(Point(lat + size / 2.0, lng + size / 2.0), 100.0)),
                ),
                _ => {
                    let mut jitter = || rng.random_range(0.0..size * 0.1);
                    let vertices = vec![
                        Point(lat + jitter(), lng + jitter()),
                        Point(lat + jitter(), lng + size - jitter()),
                        Point(lat + size - jitter(), lng + size - jitter()),
                        Point(lat + size - jitter(), lng + jitter()),
                    ];
                    Field::new(id, None, DrawType::Polygon, Geometry::Polygon(Polygon::new(vertices)))
                }
            }
        })
        .collect()
}

fn random_points(fields: &[Field], rng: &mut SmallRng) -> Vec<Point> {
    let extent = (fields.len() as f64).sqrt().ceil() * 0.002;
    (0..N_QUERIES)
        .map(|_| {
            Point(
                ORIGIN.lat() + rng.random_range(0.0..extent),
                ORIGIN.lng() + rng.random_range(0.0..extent),
            )
        })
        .collect_vec()
}

/// Containing and nearest field lookups, as done on every click and hover
fn lookup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for n in N_FIELDS {
        let mut rng = SmallRng::seed_from_u64(0);
        let fields = create_fields(n, &mut rng);
        let points = random_points(&fields, &mut rng);

        group.bench_function(BenchmarkId::new("containing", n), |b| {
            b.iter(|| {
                points
                    .iter()
                    .filter(|p| find_containing_field(p, &fields).is_some())
                    .count()
            })
        });
        group.bench_function(BenchmarkId::new("nearest", n), |b| {
            b.iter(|| {
                points
                    .iter()
                    .filter_map(|p| find_nearest_field(p, &fields))
                    .count()
            })
        });
    }
    group.finish();
}

/// Selection by a drawn polygon covering roughly a quarter of the fields
fn selector_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_in_polygon");
    for n in N_FIELDS {
        let mut rng = SmallRng::seed_from_u64(0);
        let fields = create_fields(n, &mut rng);
        let half = (n as f64).sqrt().ceil() * 0.001;
        let drawn = Polygon::new(vec![
            ORIGIN,
            Point(ORIGIN.lat(), ORIGIN.lng() + half),
            Point(ORIGIN.lat() + half, ORIGIN.lng() + half * 1.2),
            Point(ORIGIN.lat() + half * 0.8, ORIGIN.lng()),
        ]);

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| select_fields_in_polygon(&drawn, &fields).len())
        });
    }
    group.finish();
}

fn gradient_grid_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_grid");
    let mut rng = SmallRng::seed_from_u64(0);
    let polygon = GeoCircle::new(ORIGIN, 500.0).to_polygon(32);
    for grid_size in [5, 20, 50] {
        group.bench_function(BenchmarkId::from_parameter(grid_size), |b| {
            b.iter(|| build_gradient_grid(&polygon, 0.6, grid_size, &mut rng).len())
        });
    }
    group.finish();
}
