use criterion::{black_box, criterion_group, criterion_main, Criterion};
use giraffe::graph::*;
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, undirected, directed);
criterion_main!(benches);

fn undirected(c: &mut Criterion) {
    cases::<Undirected>(c, "undirected");
}

fn directed(c: &mut Criterion) {
    cases::<Directed>(c, "directed");
}

fn cases<D>(c: &mut Criterion, prefix: &str)
where
    D: LinkPolicy,
{
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    let edges = random_edges(vertex_size, edge_size);

    c.bench_function(&(prefix.to_string() + "/add_vertices"), |b| {
        b.iter(|| Graph::<usize, D>::from_vertices(0..vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/add_vertices and add_edges"), |b| {
        b.iter(|| Graph::<usize, D>::from_parts(0..vertex_size, edges.iter().copied()))
    });

    let g = Graph::<usize, D>::from_parts(0..vertex_size, edges.iter().copied()).unwrap();
    let half = g.subgraph_on(0..vertex_size / 2);
    c.bench_function(&(prefix.to_string() + "/iter"), |b| b.iter(|| iter(&g)));
    c.bench_function(&(prefix.to_string() + "/iter_edges"), |b| {
        b.iter(|| iter_edges(&g))
    });
    c.bench_function(&(prefix.to_string() + "/has_vertex"), |b| {
        b.iter(|| has_vertex(&g, vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/has_edge"), |b| {
        b.iter(|| has_edge(&g, &edges))
    });
    c.bench_function(&(prefix.to_string() + "/union"), |b| {
        b.iter(|| black_box(&half | &g))
    });
    c.bench_function(&(prefix.to_string() + "/intersection"), |b| {
        b.iter(|| black_box(&g & &half))
    });
    c.bench_function(&(prefix.to_string() + "/is_subgraph_of"), |b| {
        b.iter(|| black_box(half <= g))
    });
    c.bench_function(&(prefix.to_string() + "/remove_edges"), |b| {
        b.iter_batched(
            || g.clone(),
            |mut g| g.remove_edges(g.edges()),
            criterion::BatchSize::LargeInput,
        )
    });
    c.bench_function(&(prefix.to_string() + "/remove_vertices"), |b| {
        b.iter_batched(
            || g.clone(),
            |mut g| g.remove_vertices(0..vertex_size),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn random_edges(vertex_size: usize, edge_size: usize) -> Vec<(usize, usize)> {
    let mut rng = rand::thread_rng();
    (0..edge_size)
        .map(|_| {
            let v0 = rng.gen::<usize>() % vertex_size;
            let v1 = (v0 + 1 + rng.gen::<usize>() % (vertex_size - 1)) % vertex_size;
            (v0, v1)
        })
        .collect()
}

fn has_vertex<D>(g: &Graph<usize, D>, vertex_size: usize)
where
    D: LinkPolicy,
{
    let v = rand::thread_rng().gen::<usize>() % (2 * vertex_size);
    black_box(g.has_vertex(&v));
}

fn has_edge<D>(g: &Graph<usize, D>, edges: &[(usize, usize)])
where
    D: LinkPolicy,
{
    let (u, v) = edges[rand::thread_rng().gen::<usize>() % edges.len()];
    black_box(g.has_edge(&v, &u));
}

fn iter<D>(g: &Graph<usize, D>)
where
    D: LinkPolicy,
{
    for x in g.iter() {
        black_box(x);
    }
}

fn iter_edges<D>(g: &Graph<usize, D>)
where
    D: LinkPolicy,
{
    for x in g.iter_edges() {
        black_box(x);
    }
}
