use cinematch::recommend::{self, EngineHandle};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_movie_descriptions(n: usize) -> Vec<(String, String)> {
    let genres = [
        "action",
        "comedy",
        "drama",
        "thriller",
        "horror",
        "romance",
        "scifi",
        "fantasy",
        "mystery",
        "adventure",
    ];
    let adjectives = [
        "epic",
        "thrilling",
        "emotional",
        "intense",
        "hilarious",
        "dark",
        "heartwarming",
        "suspenseful",
        "mysterious",
        "explosive",
    ];
    let nouns = [
        "story",
        "journey",
        "adventure",
        "tale",
        "saga",
        "quest",
        "mission",
        "odyssey",
        "expedition",
        "voyage",
    ];

    (0..n)
        .map(|i| {
            let genre = genres[i % genres.len()];
            let adj = adjectives[(i / 10) % adjectives.len()];
            let noun = nouns[(i / 100) % nouns.len()];
            let title = format!("Movie {}", i);
            let desc = format!("{} {} {} about heroes and villains", adj, genre, noun);
            (title, desc)
        })
        .collect()
}

fn build_engine(size: usize) -> EngineHandle {
    recommend::initialize(generate_movie_descriptions(size)).expect("catalog is not empty")
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_initialize");
    group.sample_size(20);

    for size in [100, 500, 2_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let items = generate_movie_descriptions(size);
            b.iter(|| recommend::initialize(black_box(items.clone())).expect("catalog is not empty"));
        });
    }

    group.finish();
}

fn bench_recommend_matched(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_matched");

    for size in [100, 500, 2_000].iter() {
        let engine = build_engine(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                engine
                    .recommend(black_box("movie 0"), black_box(10))
                    .expect("query is not blank")
            });
        });
    }

    group.finish();
}

fn bench_recommend_suggestions(c: &mut Criterion) {
    // Worst case: every title is scored for near-spelling
    let engine = build_engine(2_000);

    c.bench_function("recommend_suggest_2k", |b| {
        b.iter(|| {
            engine
                .recommend(black_box("Movei 1234"), black_box(10))
                .expect("query is not blank")
        });
    });
}

criterion_group!(
    benches,
    bench_initialize,
    bench_recommend_matched,
    bench_recommend_suggestions
);
criterion_main!(benches);
