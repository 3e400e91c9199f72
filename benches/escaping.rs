use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pg_escape::{format, ident, literal, sql_value, Value};

fn benchmark_ident(c: &mut Criterion) {
    let bare = Value::from("customer_id");
    let quoted = Value::from("Customer \"Id\"");

    c.bench_function("ident_bare", |b| b.iter(|| ident(black_box(&bare))));
    c.bench_function("ident_quoted", |b| b.iter(|| ident(black_box(&quoted))));
}

fn benchmark_literal_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_string");

    for size in [10usize, 100, 999, 1000, 10_000].iter() {
        let value = Value::from("it's a \\ test ".repeat(size / 14 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| literal(black_box(&value)))
        });
    }
    group.finish();
}

fn benchmark_literal_nested(c: &mut Criterion) {
    let value = sql_value!([
        ["a", "b'c", null],
        [1, 2, 3],
        { "k": "v", "list": [true, false] }
    ]);

    c.bench_function("literal_nested_array", |b| {
        b.iter(|| literal(black_box(&value)))
    });
}

fn benchmark_format(c: &mut Criterion) {
    let args = [
        Value::from("users"),
        Value::from("name"),
        Value::from("O'Reilly"),
        Value::from(42),
    ];

    c.bench_function("format_statement", |b| {
        b.iter(|| {
            format(
                black_box("UPDATE %I SET %I = %L WHERE id = %s"),
                black_box(&args),
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_ident,
    benchmark_literal_by_length,
    benchmark_literal_nested,
    benchmark_format
);
criterion_main!(benches);
