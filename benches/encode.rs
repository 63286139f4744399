use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdf417_symbol::high_level::{encode_bytes, encode_text};
use pdf417_symbol::{Barcode, Settings};

const TEXT: &str = "PDF417 is a stacked linear barcode format used in transport, identification cards, and inventory management.";

fn bench_encode_text(c: &mut Criterion) {
    c.bench_function("encode_text_108_chars", |b| b.iter(|| encode_text(black_box(TEXT))));
}

fn bench_encode_bytes(c: &mut Criterion) {
    let bytes = vec![0x5Au8; 600];
    c.bench_function("encode_bytes_600", |b| b.iter(|| encode_bytes(black_box(&bytes))));
}

fn bench_barcode_text(c: &mut Criterion) {
    let settings = Settings::default();
    c.bench_function("barcode_text_108_chars", |b| {
        b.iter(|| Barcode::from_text(black_box(TEXT), black_box(&settings)))
    });
}

fn bench_barcode_bytes(c: &mut Criterion) {
    let settings = Settings::default().with_module_width(1);
    let bytes = vec![0xC3u8; 400];
    c.bench_function("barcode_bytes_400", |b| {
        b.iter(|| Barcode::from_bytes(black_box(&bytes), black_box(&settings)))
    });
}

criterion_group!(
    benches,
    bench_encode_text,
    bench_encode_bytes,
    bench_barcode_text,
    bench_barcode_bytes,
);
criterion_main!(benches);
