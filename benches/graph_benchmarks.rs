use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphology::persistence::codec;
use graphology::{Edge, Graph, Traversal, Vertex};

/// A tree of `size` people: person i is the Father of 2i and 2i+1,
/// with a Sibling edge between each pair of brothers
fn family_tree(size: u64) -> Graph {
    let mut graph = Graph::new("bench");
    for i in 1..=size {
        graph
            .add_vertex(
                Vertex::new()
                    .with_label("Person")
                    .with_property("name", format!("Person{}", i))
                    .with_property("generation", (64 - i.leading_zeros()) as i64),
            )
            .unwrap();
    }
    for i in 1..=size {
        for child in [2 * i, 2 * i + 1] {
            if child <= size {
                graph.add_edge(Edge::new(i, child, "Father")).unwrap();
            }
        }
        if 2 * i + 1 <= size {
            graph.add_edge(Edge::new(2 * i, 2 * i + 1, "Sibling")).unwrap();
        }
    }
    graph
}

/// Benchmark vertex insertion throughput
fn bench_vertex_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = Graph::new("bench");
                for i in 0..size {
                    graph
                        .add_vertex(
                            Vertex::new()
                                .with_label("Person")
                                .with_property("name", format!("Person{}", i))
                                .with_property("age", (i % 100) as i64),
                        )
                        .unwrap();
                }
                criterion::black_box(graph.vertex_count());
            });
        });
    }
    group.finish();
}

/// Benchmark edge insertion, which validates endpoints and updates adjacency
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100u64, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(family_tree(size).edge_count()));
        });
    }
    group.finish();
}

/// Benchmark the named lookup that starts every query
fn bench_find_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_vertices");

    for size in [100u64, 1000, 10_000].iter() {
        let graph = family_tree(*size);
        let name = format!("Person{}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(graph.find_vertices(&name).len()));
        });
    }
    group.finish();
}

/// Benchmark multi-hop traversal latency
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let graph = family_tree(10_000);

    for hops in [1usize, 3, 6].iter() {
        let mut plan = Traversal::v("Person1");
        for _ in 0..*hops {
            plan = plan.out("Father");
        }

        group.bench_with_input(BenchmarkId::new("out_father", hops), hops, |b, _| {
            b.iter(|| criterion::black_box(plan.run(&graph).len()));
        });
    }

    let plan = Traversal::v("Person1")
        .out("Father")
        .out("Father")
        .both("Sibling")
        .in_("Father")
        .unique()
        .take(10);
    group.bench_function("mixed_unique", |b| {
        b.iter(|| criterion::black_box(plan.run(&graph).len()));
    });

    group.finish();
}

/// Benchmark encoding a graph to its file format
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [100u64, 1000, 10_000].iter() {
        let graph = family_tree(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut buf = Vec::new();
                codec::encode(&graph, &mut buf).unwrap();
                criterion::black_box(buf.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vertex_insertion,
    bench_edge_insertion,
    bench_find_vertices,
    bench_traversal,
    bench_encode,
);
criterion_main!(benches);
