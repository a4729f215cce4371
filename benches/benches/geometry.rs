// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Line, Point};
use understory_geo::Extent;
use understory_geom::{
    IntersectMode, convex_hull, has_self_intersections, line_intersection, path_length,
    point_in_polygon, polygon_intersects_polygon, smallest_surrounding_rectangle,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_cloud(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0))
        .collect()
}

/// Closed, star‑shaped ring with `n` vertices around `center`.
fn gen_ring(n: usize, center: Point, radius: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    let mut ring: Vec<Point> = (0..n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            let r = radius * (0.6 + 0.4 * rng.next_f64());
            center + kurbo::Vec2::from_angle(a) * r
        })
        .collect();
    ring.push(ring[0]);
    ring
}

fn bench_line_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom/line_intersection");
    let pts = gen_cloud(2_048, 0x1A7E_5EC7_0000_0001);
    let lines: Vec<Line> = pts.chunks_exact(2).map(|p| Line::new(p[0], p[1])).collect();
    group.throughput(Throughput::Elements((lines.len() - 1) as u64));
    group.bench_function("pairwise_adjacent", |b| {
        b.iter(|| {
            let hits = lines
                .windows(2)
                .filter(|w| line_intersection(w[0], w[1]).is_some())
                .count();
            black_box(hits);
        });
    });
    group.finish();
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom/point_in_polygon");
    let probes = gen_cloud(1_024, 0x9E37_79B9_7F4A_7C15);
    for n in [8usize, 64, 512] {
        let ring = gen_ring(n, Point::new(500.0, 500.0), 400.0, 0xC0FF_EE00 + n as u64);
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("ring", n), &ring, |b, ring| {
            b.iter(|| {
                let inside = probes.iter().filter(|&&p| point_in_polygon(p, ring)).count();
                black_box(inside);
            });
        });
    }
    group.finish();
}

fn bench_polygon_intersects(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom/polygon_intersects_polygon");
    for n in [16usize, 128] {
        let a = gen_ring(n, Point::new(400.0, 500.0), 300.0, 0xA0 + n as u64);
        let b_ring = gen_ring(n, Point::new(600.0, 500.0), 300.0, 0xB0 + n as u64);
        for (label, mode) in [("lax", IntersectMode::Lax), ("strict", IntersectMode::Strict)] {
            group.bench_function(BenchmarkId::new(label, n), |b| {
                b.iter(|| black_box(polygon_intersects_polygon(&a, &b_ring, mode)));
            });
        }
    }
    group.finish();
}

fn bench_hull_and_surround(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom/hull");
    for n in [32usize, 256, 2_048] {
        let cloud = gen_cloud(n, 0x5EED_0000 + n as u64);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &cloud, |b, cloud| {
            b.iter(|| black_box(convex_hull(cloud)));
        });
        group.bench_with_input(
            BenchmarkId::new("smallest_surrounding_rectangle", n),
            &cloud,
            |b, cloud| {
                b.iter(|| black_box(smallest_surrounding_rectangle(cloud)));
            },
        );
    }
    group.finish();
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom/path");
    for n in [64usize, 512] {
        let ring = gen_ring(n, Point::new(500.0, 500.0), 400.0, 0xD00D + n as u64);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("path_length", n), &ring, |b, ring| {
            b.iter(|| black_box(path_length(ring)));
        });
        group.bench_with_input(BenchmarkId::new("has_self_intersections", n), &ring, |b, ring| {
            b.iter(|| black_box(has_self_intersections(ring)));
        });
        group.bench_with_input(BenchmarkId::new("extent_from_points", n), &ring, |b, ring| {
            b.iter(|| black_box(Extent::from_points(ring.iter().copied())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_line_intersection,
    bench_point_in_polygon,
    bench_polygon_intersects,
    bench_hull_and_surround,
    bench_paths,
);
criterion_main!(benches);
