use criterion::{black_box, criterion_group, criterion_main, Criterion};

use compword::search::CompoundSearch;
use compword::trie::build_prefix_index;
use compword::WordSet;

/// Deterministic word list: short base words plus concatenations of them.
fn make_words(bases: usize, compounds: usize) -> WordSet {
    let base: Vec<String> = (0..bases)
        .map(|i| {
            let mut n = i * 7919 + 13;
            let len = 3 + i % 5;
            (0..len)
                .map(|_| {
                    let ch = (b'a' + (n % 26) as u8) as char;
                    n = n / 26 + i;
                    ch
                })
                .collect()
        })
        .collect();

    let mut words: WordSet = base.iter().cloned().collect();
    for i in 0..compounds {
        let parts = 2 + i % 4;
        let word: String = (0..parts)
            .map(|p| base[(i * 31 + p * 17) % base.len()].as_str())
            .collect();
        // Every other compound gets a trailing letter, so most of those fail to decompose.
        if i % 2 == 0 {
            words.insert(word + "q");
        } else {
            words.insert(word);
        }
    }
    words
}

fn bench_search(c: &mut Criterion) {
    let words = make_words(2_000, 20_000);

    c.bench_function("build_prefix_index", |b| {
        b.iter(|| build_prefix_index(black_box(&words)).unwrap())
    });

    let index = build_prefix_index(&words).unwrap();
    let search = CompoundSearch::new(&words, &index);
    c.bench_function("find_longest", |b| b.iter(|| black_box(search.find_longest())));

    c.bench_function("prefixes_of", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| index.prefixes_of(black_box(w)).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
