//! 中間辞書への単語の追加と検索のベンチマーク
//!
//! 共通の接頭辞を多く持つ単語集合を決定的に生成し、
//! 一括追加と全単語の検索にかかる時間を計測します。

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dicttoolkit::{utf8, IntermediateDict, IntermediateDictHeader, UnigramProperty, WordProperty};

const ALPHABET: &[char] = &['a', 'e', 'i', 'k', 'n', 'o', 's', 't', 'u', 'あ', 'か', 'ん'];

fn generate_words(num_words: usize) -> Vec<WordProperty> {
    let mut state = 0x2545_f491_u32;
    let mut words = Vec::with_capacity(num_words);
    for i in 0..num_words {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let len = 2 + (state % 10) as usize;
        let mut x = state;
        let word: String = (0..len)
            .map(|_| {
                let c = ALPHABET[(x % ALPHABET.len() as u32) as usize];
                x = x.rotate_right(3) ^ i as u32;
                c
            })
            .collect();
        words.push(WordProperty::new(
            utf8::code_points(&word),
            UnigramProperty::with_probability((state % 255) as i32),
            vec![],
        ));
    }
    words
}

fn build(words: &[WordProperty]) -> IntermediateDict {
    let mut dict = IntermediateDict::new(IntermediateDictHeader::default());
    for word in words {
        dict.add_word(word);
    }
    dict
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("IntermediateDict");
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for num_words in [1_000, 10_000, 100_000] {
        let words = generate_words(num_words);
        group.throughput(Throughput::Elements(num_words as u64));

        group.bench_with_input(BenchmarkId::new("add_word", num_words), &words, |b, words| {
            b.iter(|| build(black_box(words)));
        });

        let dict = build(&words);
        group.bench_with_input(
            BenchmarkId::new("get_word_property", num_words),
            &words,
            |b, words| {
                b.iter(|| {
                    words
                        .iter()
                        .filter(|w| dict.get_word_property(black_box(w.code_points())).is_some())
                        .count()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
