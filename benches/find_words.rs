use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_finder::evaluator::{evaluate, CancelFlag};
use word_finder::{Dictionary, FinderConfig, LetterCount, WordFinder};

fn bench_find_words(c: &mut Criterion) {
    let dictionary = Dictionary::embedded(3);
    let letters = LetterCount::from_query("painters", 9).unwrap();

    c.bench_function("evaluate 1 worker", |b| {
        b.iter(|| evaluate(black_box(dictionary.words()), &letters, 1, &CancelFlag::new()))
    });

    c.bench_function("evaluate 4 workers", |b| {
        b.iter(|| evaluate(black_box(dictionary.words()), &letters, 4, &CancelFlag::new()))
    });

    let finder = WordFinder::with_dictionary(FinderConfig::default(), dictionary.clone());
    finder.find_words("painters").unwrap();
    c.bench_function("find_words cached", |b| {
        b.iter(|| finder.find_words(black_box("painters")))
    });
}

criterion_group!(benches, bench_find_words);
criterion_main!(benches);
